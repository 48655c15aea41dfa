//! A `WordField` `(L:R)` is a contiguous range of byte positions of a word. Position 0 is
//! the sign, positions 1 to 5 are the magnitude bytes.

use std::fmt::{Display, Formatter};

use crate::byte::Byte;
use crate::errors::WordError;
use crate::word::BYTES_COUNT;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WordField {
  left  : usize,
  right : usize
}

impl WordField {

  pub fn new(left: usize, right: usize) -> Result<WordField, WordError> {
    match left <= right && right <= BYTES_COUNT {
      true  => Ok(WordField { left, right }),
      false => Err(WordError::InvalidField { left, right })
    }
  }

  /// The whole word, `(0:5)`.
  pub const fn max() -> WordField {
    WordField { left: 0, right: BYTES_COUNT }
  }

  /// The signed address part of a command, `(0:2)`.
  pub const fn address() -> WordField {
    WordField { left: 0, right: 2 }
  }

  /// Decodes the `8L + R` packing used in the field part of commands.
  pub fn from_byte(byte: Byte) -> Result<WordField, WordError> {
    let value = byte.value() as usize;
    WordField::new(value / 8, value % 8)
  }

  pub fn to_byte(&self) -> Byte {
    // 8 * 5 + 5 is the largest value and always fits.
    Byte::new((self.left * 8 + self.right) as i64).unwrap_or(Byte::MAX)
  }

  pub fn left(&self) -> usize {
    self.left
  }

  pub fn right(&self) -> usize {
    self.right
  }

  pub fn includes_sign(&self) -> bool {
    self.left == 0
  }

  /// The first magnitude byte position covered by the field.
  pub fn left_byte(&self) -> usize {
    std::cmp::max(self.left, 1)
  }

  /// Number of magnitude bytes covered, the sign position excluded.
  pub fn bytes_count(&self) -> usize {
    match self.right == 0 {
      true  => 0,
      false => self.right - self.left_byte() + 1
    }
  }
}

impl Default for WordField {
  fn default() -> Self {
    WordField::max()
  }
}

impl Display for WordField {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}:{})", self.left, self.right)
  }
}
