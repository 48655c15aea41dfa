use std::collections::hash_map::Entry;
use std::collections::HashMap;

use string_cache::DefaultAtom;

use crate::errors::TranslateError;
use crate::mixal::{LocalSymbolKind, Symbol};
use crate::word::{Word, WordValue};

/**
  Definitions of usual and local symbols.

  A usual symbol is defined once. A local symbol `d` may be defined any number of times by `dH`;
  every definition is kept, and a reference picks one relative to the address it is made from.
  The addresses of each local id are kept sorted in descending order so both lookups are binary
  searches.
*/
#[derive(Clone, Default, Debug)]
pub struct SymbolTable {
  symbols       : HashMap<DefaultAtom, Word>,
  local_symbols : HashMap<u8, Vec<WordValue>>,
}

impl SymbolTable {

  pub fn new() -> SymbolTable {
    SymbolTable::default()
  }

  pub fn define(&mut self, symbol: &Symbol, value: Word) -> Result<(), TranslateError> {
    match symbol {

      Symbol::Usual(name) => {
        match self.symbols.entry(name.clone()) {
          Entry::Occupied(_) => Err(TranslateError::DuplicateSymbol { symbol: symbol.clone(), value }),
          Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
          }
        }
      }

      Symbol::Local { id, kind: LocalSymbolKind::Here } => {
        let addresses = self.local_symbols.entry(*id).or_insert_with(Vec::new);
        addresses.push(value.value());
        addresses.sort_unstable_by(|a, b| b.cmp(a));
        Ok(())
      }

      Symbol::Local { .. } => Err(TranslateError::InvalidLocalSymbolDefinition(symbol.clone()))

    }
  }

  /**
    The value of `symbol` as seen from `near_address`. Usual symbols must be defined. Local
    references must be backward ones and resolve to the greatest definition not after
    `near_address`.
  */
  pub fn query(&self, symbol: &Symbol, near_address: WordValue) -> Result<Word, TranslateError> {
    match symbol {

      Symbol::Usual(name) => {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| TranslateError::UndefinedSymbol(symbol.clone()))
      }

      Symbol::Local { id, kind: LocalSymbolKind::Backward } => {
        let address = self.find_backward(*id, near_address)
                          .ok_or_else(|| TranslateError::InvalidLocalSymbolReference(symbol.clone()))?;
        Ok(Word::from_value(address as i64)?)
      }

      Symbol::Local { .. } => Err(TranslateError::InvalidLocalSymbolReference(symbol.clone()))

    }
  }

  /// Greatest definition of local `id` that is `<= near_address`.
  pub fn find_backward(&self, id: u8, near_address: WordValue) -> Option<WordValue> {
    let addresses = self.local_symbols.get(&id)?;
    let position = addresses.partition_point(|address| *address > near_address);
    addresses.get(position).cloned()
  }

  /// Smallest definition of local `id` that is `> after`.
  pub fn find_forward(&self, id: u8, after: WordValue) -> Option<WordValue> {
    let addresses = self.local_symbols.get(&id)?;
    match addresses.partition_point(|address| *address > after) {
      0        => None,
      position => Some(addresses[position - 1])
    }
  }

  pub fn is_defined(&self, symbol: &Symbol, near_address: WordValue) -> bool {
    match symbol {
      Symbol::Usual(name) => self.symbols.contains_key(name),
      Symbol::Local { id, kind: LocalSymbolKind::Backward } => {
        self.find_backward(*id, near_address).is_some()
      }
      Symbol::Local { .. } => false
    }
  }
}
