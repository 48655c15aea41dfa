//! Flat word memory of the computer.

use std::fmt::{Display, Formatter};

use crate::errors::RunError;
use crate::word::{Word, WordValue};

pub const MEMORY_SIZE: usize = 4000;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Memory {
  cells: Vec<Word>
}

impl Memory {

  pub fn new() -> Memory {
    Memory::with_size(MEMORY_SIZE)
  }

  pub fn with_size(size: usize) -> Memory {
    Memory { cells: vec![Word::new(); size] }
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Converts a signed address into an index, failing for anything outside memory.
  pub fn index_of(&self, address: WordValue) -> Result<usize, RunError> {
    match address >= 0 && (address as usize) < self.cells.len() {
      true  => Ok(address as usize),
      false => Err(RunError::InvalidAddress(address))
    }
  }

  pub fn get(&self, address: WordValue) -> Result<&Word, RunError> {
    let index = self.index_of(address)?;
    Ok(&self.cells[index])
  }

  pub fn set(&mut self, address: WordValue, word: Word) -> Result<(), RunError> {
    let index = self.index_of(address)?;
    self.cells[index] = word;
    Ok(())
  }

  /// `(address, word)` pairs of all cells that are not `+0`.
  pub fn non_zero_cells(&self) -> impl Iterator<Item = (usize, &Word)> {
    self.cells
        .iter()
        .enumerate()
        .filter(|(_, w)| **w != Word::new())
  }
}

impl Default for Memory {
  fn default() -> Self {
    Memory::new()
  }
}

impl Display for Memory {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for (address, word) in self.non_zero_cells() {
      writeln!(f, "{:04}: {}", address, word)?;
    }
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bounds_are_checked(){
    let mut memory = Memory::new();
    let word = Word::from_value(17).unwrap();

    memory.set(3999, word).unwrap();
    assert_eq!(memory.get(3999).unwrap(), &word);
    assert_eq!(memory.set(4000, word), Err(RunError::InvalidAddress(4000)));
    assert_eq!(memory.get(-1), Err(RunError::InvalidAddress(-1)));
    assert_eq!(memory.non_zero_cells().count(), 1);
  }
}
