//! Registers are words with progressively narrower value constraints. Rather than a type per
//! register kind with overridden setters, each constraint level is a newtype over `Word` whose
//! constructors validate the constraint.

use std::fmt::{Display, Formatter};

use crate::byte::Byte;
use crate::errors::WordError;
use crate::field::WordField;
use crate::word::{Sign, Word, WordValue};

pub const INDEX_REGISTERS_COUNT: usize = 6;
/// An index register uses bytes 4 and 5 only: `64^2 - 1`.
pub const MAX_INDEX_VALUE: i64 = 64 * 64 - 1;

/// Selects one of the registers a command operates on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RegisterId {
  A,
  X,
  /// Index registers `1..=6`.
  I(usize),
  J
}

impl Display for RegisterId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      RegisterId::A    => write!(f, "rA"),
      RegisterId::X    => write!(f, "rX"),
      RegisterId::I(i) => write!(f, "rI{}", i),
      RegisterId::J    => write!(f, "rJ"),
    }
  }
}

/// A sign and two bytes, stored as a word whose bytes 1 to 3 are always zero.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct IndexRegister(Word);

impl IndexRegister {

  pub fn new() -> IndexRegister {
    IndexRegister::default()
  }

  pub fn from_value(value: i64) -> Result<IndexRegister, WordError> {
    match value.abs() <= MAX_INDEX_VALUE {
      true  => Ok(IndexRegister(Word::from_value(value)?)),
      false => Err(WordError::IndexRegisterOverflow(value))
    }
  }

  /// Accepts a word only if its bytes 1 to 3 are zero. The sign is kept as is.
  pub fn from_word(word: Word) -> Result<IndexRegister, WordError> {
    match (1..=3).all(|i| word.byte(i) == Byte::MIN) {
      true  => Ok(IndexRegister(word)),
      false => Err(WordError::IndexRegisterOverflow(word.value() as i64))
    }
  }

  pub fn from_bytes(sign: Sign, b4: Byte, b5: Byte) -> IndexRegister {
    let mut word = Word::new();
    word.set_sign(sign);
    word.set_byte(4, b4);
    word.set_byte(5, b5);
    IndexRegister(word)
  }

  /// Writes into the register through a field the same way a store writes memory.
  pub fn set_field(&mut self, source: &Word, field: WordField) -> Result<(), WordError> {
    let mut word = self.0;
    word.set_field(source, field, true);
    *self = IndexRegister::from_word(word)?;
    Ok(())
  }

  pub fn value(&self) -> WordValue {
    self.0.value()
  }

  pub fn word(&self) -> &Word {
    &self.0
  }
}

impl Display for IndexRegister {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {} {}", self.0.sign(), self.0.byte(4), self.0.byte(5))
  }
}

/**
  The jump register. It holds addresses, so conceptually its sign is always `+`.

  The constraint is not enforced: constructors accept a negative sign exactly like
  `IndexRegister` does. Whether it should be enforced is an open question, and nothing in the
  engine writes a negative value into rJ.
*/
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct AddressRegister(IndexRegister);

impl AddressRegister {

  pub fn new() -> AddressRegister {
    AddressRegister::default()
  }

  pub fn from_value(value: i64) -> Result<AddressRegister, WordError> {
    Ok(AddressRegister(IndexRegister::from_value(value)?))
  }

  pub fn from_word(word: Word) -> Result<AddressRegister, WordError> {
    Ok(AddressRegister(IndexRegister::from_word(word)?))
  }

  pub fn value(&self) -> WordValue {
    self.0.value()
  }

  pub fn word(&self) -> &Word {
    self.0.word()
  }
}

impl Display for AddressRegister {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
