//! The MIX byte: six bits, values `0..=63`.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use crate::errors::WordError;

pub const BITS_COUNT: u32 = 6;
pub const VALUES_COUNT: i64 = 1 << BITS_COUNT;

#[derive(Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Byte(u8);

impl Byte {
  pub const MIN: Byte = Byte(0);
  pub const MAX: Byte = Byte((VALUES_COUNT - 1) as u8);

  /// Fails with `ByteOverflow` for anything outside `0..=63`.
  pub fn new(value: i64) -> Result<Byte, WordError> {
    match Byte::can_hold(value) {
      true  => Ok(Byte(value as u8)),
      false => Err(WordError::ByteOverflow(value))
    }
  }

  pub fn can_hold(value: i64) -> bool {
    value >= Byte::MIN.0 as i64 && value <= Byte::MAX.0 as i64
  }

  pub fn value(&self) -> u8 {
    self.0
  }
}

impl TryFrom<i64> for Byte {
  type Error = WordError;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    Byte::new(value)
  }
}

impl TryFrom<u8> for Byte {
  type Error = WordError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Byte::new(value as i64)
  }
}

impl From<Byte> for u8 {
  fn from(byte: Byte) -> u8 {
    byte.0
  }
}

impl Display for Byte {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:02}", self.0)
  }
}
