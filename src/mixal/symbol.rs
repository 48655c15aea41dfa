use std::fmt::{Display, Formatter};
use std::str::FromStr;

use string_cache::DefaultAtom;

use crate::errors::TranslateError;

/// Longest usual symbol name.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// The role a local symbol `dH`, `dF` or `dB` plays where it occurs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LocalSymbolKind {
  /// `dH`: defines the symbol at this line.
  Here,
  /// `dF`: refers to the next `dH`.
  Forward,
  /// `dB`: refers to the previous `dH`.
  Backward
}

impl LocalSymbolKind {
  pub fn suffix(&self) -> char {
    match self {
      LocalSymbolKind::Here     => 'H',
      LocalSymbolKind::Forward  => 'F',
      LocalSymbolKind::Backward => 'B',
    }
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
  Usual(DefaultAtom),
  Local { id: u8, kind: LocalSymbolKind }
}

impl Symbol {

  pub fn usual(name: &str) -> Symbol {
    Symbol::Usual(DefaultAtom::from(name))
  }

  /// A local symbol `dH`, `dF` or `dB`. `id` is the digit `d`, `0..=9`.
  pub fn local(id: u8, kind: LocalSymbolKind) -> Result<Symbol, TranslateError> {
    match id <= 9 {
      true  => Ok(Symbol::Local { id, kind }),
      false => Err(TranslateError::InvalidSymbolName(format!("{}{}", id, kind.suffix())))
    }
  }

  pub fn is_local(&self) -> bool {
    match self {
      Symbol::Local { .. } => true,
      Symbol::Usual(_)     => false
    }
  }

  pub fn local_id(&self) -> Option<u8> {
    match self {
      Symbol::Local { id, .. } => Some(*id),
      Symbol::Usual(_)         => None
    }
  }
}

fn is_symbol_char(c: char) -> bool {
  c.is_ascii_uppercase() || c.is_ascii_digit() || c == 'Δ' || c == 'Σ' || c == 'Π'
}

/**
  Parses MIXAL symbol text. A digit followed by `H`, `F` or `B` is a local symbol; anything else
  must be one to ten letters and digits with at least one letter.
*/
impl FromStr for Symbol {
  type Err = TranslateError;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    let invalid = || TranslateError::InvalidSymbolName(text.to_string());
    let chars: Vec<char> = text.chars().collect();

    if let [digit, suffix] = chars[..] {
      if let Some(id) = digit.to_digit(10) {
        let kind = match suffix {
          'H' => Some(LocalSymbolKind::Here),
          'F' => Some(LocalSymbolKind::Forward),
          'B' => Some(LocalSymbolKind::Backward),
          _   => None
        };
        if let Some(kind) = kind {
          return Symbol::local(id as u8, kind);
        }
      }
    }

    let valid =
      !chars.is_empty()
      && chars.len() <= MAX_SYMBOL_LENGTH
      && chars.iter().all(|c| is_symbol_char(*c))
      && chars.iter().any(|c| !c.is_ascii_digit());

    match valid {
      true  => Ok(Symbol::usual(text)),
      false => Err(invalid())
    }
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Symbol::Usual(name)      => write!(f, "{}", name),
      Symbol::Local { id, kind } => write!(f, "{}{}", id, kind.suffix())
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_local_symbols(){
    assert_eq!("2H".parse::<Symbol>().unwrap(), Symbol::local(2, LocalSymbolKind::Here).unwrap());
    assert_eq!("0F".parse::<Symbol>().unwrap(), Symbol::local(0, LocalSymbolKind::Forward).unwrap());
    assert_eq!("9B".parse::<Symbol>().unwrap(), Symbol::local(9, LocalSymbolKind::Backward).unwrap());
  }

  #[test]
  fn local_ids_are_single_digits(){
    assert_eq!(
      Symbol::local(12, LocalSymbolKind::Here),
      Err(TranslateError::InvalidSymbolName("12H".to_string()))
    );
    assert_eq!(Symbol::local(9, LocalSymbolKind::Here).unwrap().to_string(), "9H");
  }

  #[test]
  fn parse_usual_symbols(){
    assert_eq!("START".parse::<Symbol>().unwrap(), Symbol::usual("START"));
    // More than one digit makes it a usual symbol.
    assert_eq!("12H".parse::<Symbol>().unwrap(), Symbol::usual("12H"));
    assert_eq!("2X".parse::<Symbol>().unwrap(), Symbol::usual("2X"));
  }

  #[test]
  fn reject_invalid_names(){
    assert!("".parse::<Symbol>().is_err());
    assert!("123".parse::<Symbol>().is_err());
    assert!("lower".parse::<Symbol>().is_err());
    assert_eq!(
      "ELEVENCHARS".parse::<Symbol>(),
      Err(TranslateError::InvalidSymbolName("ELEVENCHARS".to_string()))
    );
  }

  #[test]
  fn display_round_trips(){
    for text in &["2H", "7B", "LOOP", "X1"] {
      assert_eq!(text.parse::<Symbol>().unwrap().to_string(), *text);
    }
  }
}
