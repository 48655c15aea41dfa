/*!
  A MIX word is a sign and five bytes, read as a sign-magnitude integer whose magnitude is the
  five bytes taken as base-64 digits, most significant first. Byte positions are numbered the
  way the architecture numbers them: position 0 is the sign and positions 1 to 5 are the
  magnitude bytes.

  Zero has two representations. Converting the integer 0 into a word always gives `+0`, but the
  sign is an independent part of the word and can be set to `-` explicitly, for example by
  `ENNA 0` or by loading a field that carries a negative sign.
*/

use std::fmt::{Display, Formatter};
use std::ops::Neg;

use crate::byte::{Byte, VALUES_COUNT};
use crate::errors::WordError;
use crate::field::WordField;

/// The integer type word values are read into. Every word value fits.
pub type WordValue = i32;

pub const BYTES_COUNT: usize = 5;
/// `64^5 - 1`
pub const MAX_ABS_VALUE: i64 = VALUES_COUNT.pow(BYTES_COUNT as u32) - 1;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Sign {
  Positive,
  Negative
}

impl Sign {
  pub fn of(value: i64) -> Sign {
    match value < 0 {
      true  => Sign::Negative,
      false => Sign::Positive
    }
  }

  pub fn flipped(self) -> Sign {
    match self {
      Sign::Positive => Sign::Negative,
      Sign::Negative => Sign::Positive
    }
  }

  /// `+1` or `-1`
  pub fn factor(self) -> i64 {
    match self {
      Sign::Positive => 1,
      Sign::Negative => -1
    }
  }
}

impl Default for Sign {
  fn default() -> Self {
    Sign::Positive
  }
}

impl Display for Sign {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Sign::Positive => write!(f, "+"),
      Sign::Negative => write!(f, "-")
    }
  }
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Word {
  sign  : Sign,
  bytes : [Byte; BYTES_COUNT]
}

impl Word {

  // region Construction

  pub fn new() -> Word {
    Word::default()
  }

  pub fn from_bytes(sign: Sign, bytes: [Byte; BYTES_COUNT]) -> Word {
    Word { sign, bytes }
  }

  /// Fails with `TooBigWordValue` when `|value| > 64^5 - 1`.
  pub fn from_value(value: i64) -> Result<Word, WordError> {
    Word::from_magnitude(Sign::of(value), value.unsigned_abs())
  }

  pub fn from_magnitude(sign: Sign, magnitude: u64) -> Result<Word, WordError> {
    if magnitude > MAX_ABS_VALUE as u64 {
      return Err(WordError::TooBigWordValue(sign.factor() * magnitude as i64));
    }
    let mut word = Word { sign, bytes: [Byte::MIN; BYTES_COUNT] };
    word.write_magnitude(1, BYTES_COUNT, magnitude);
    Ok(word)
  }

  /// Like `from_magnitude`, but keeps only the low-order five bytes. Returns whether any
  /// part of the magnitude was lost.
  pub fn from_magnitude_truncated(sign: Sign, magnitude: u64) -> (Word, bool) {
    let modulus = MAX_ABS_VALUE as u64 + 1;
    let mut word = Word { sign, bytes: [Byte::MIN; BYTES_COUNT] };
    word.write_magnitude(1, BYTES_COUNT, magnitude % modulus);
    (word, magnitude >= modulus)
  }

  // endregion

  // region Accessors

  pub fn sign(&self) -> Sign {
    self.sign
  }

  pub fn set_sign(&mut self, sign: Sign) {
    self.sign = sign;
  }

  /// Byte at position `1..=5`. Position 0 is the sign, see `sign()`. Panics outside that range.
  pub fn byte(&self, index: usize) -> Byte {
    debug_assert!(index >= 1 && index <= BYTES_COUNT, "byte position {} outside 1..=5", index);
    self.bytes[index - 1]
  }

  /// Replaces the byte at position `1..=5`. Panics outside that range.
  pub fn set_byte(&mut self, index: usize, byte: Byte) {
    debug_assert!(index >= 1 && index <= BYTES_COUNT, "byte position {} outside 1..=5", index);
    self.bytes[index - 1] = byte;
  }

  pub fn bytes(&self) -> &[Byte; BYTES_COUNT] {
    &self.bytes
  }

  pub fn magnitude(&self) -> u64 {
    self.read_magnitude(1, BYTES_COUNT)
  }

  pub fn value(&self) -> WordValue {
    (self.sign.factor() * self.magnitude() as i64) as WordValue
  }

  pub fn is_zero(&self) -> bool {
    self.magnitude() == 0
  }

  // endregion

  // region Fields

  /**
    Extracts the bytes of `field` right-aligned into a fresh word. The sign of the result is
    this word's sign if the field includes position 0 and `+` otherwise.
  */
  pub fn field(&self, field: WordField) -> Word {
    let magnitude = match field.right() {
      0 => 0,
      right => self.read_magnitude(field.left_byte(), right)
    };
    let sign = match field.includes_sign() {
      true  => self.sign,
      false => Sign::Positive
    };
    // The magnitude of a field is never bigger than the magnitude of a whole word.
    let (word, _) = Word::from_magnitude_truncated(sign, magnitude);
    word
  }

  /**
    Writes the low-order bytes of `source` into the bytes of `field`. Bytes outside the field
    are left untouched. The sign is replaced by the sign of `source` only when the field
    includes position 0 and `overwrite_sign` is set.
  */
  pub fn set_field(&mut self, source: &Word, field: WordField, overwrite_sign: bool) {
    let count = field.bytes_count();
    for (i, index) in (field.left_byte()..=field.right()).enumerate() {
      if count == 0 {
        break;
      }
      self.set_byte(index, source.byte(BYTES_COUNT - count + 1 + i));
    }
    if field.includes_sign() && overwrite_sign {
      self.sign = source.sign;
    }
  }

  /**
    Writes an integer into `field`, failing with `TooBigWordValue` if its magnitude does not
    fit in the bytes the field covers.
  */
  pub fn set_value_in_field(&mut self, value: i64, field: WordField, overwrite_sign: bool)
    -> Result<(), WordError>
  {
    let limit = VALUES_COUNT.pow(field.bytes_count() as u32);
    if value.unsigned_abs() >= limit as u64 {
      return Err(WordError::TooBigWordValue(value));
    }
    let source = Word::from_value(value)?;
    self.set_field(&source, field, overwrite_sign);
    Ok(())
  }

  // endregion

  fn read_magnitude(&self, from: usize, to: usize) -> u64 {
    (from..=to).fold(0u64, |acc, index| {
      acc * VALUES_COUNT as u64 + self.byte(index).value() as u64
    })
  }

  fn write_magnitude(&mut self, from: usize, to: usize, mut magnitude: u64) {
    for index in (from..=to).rev() {
      let digit = (magnitude % VALUES_COUNT as u64) as i64;
      // `digit` is below 64 by construction.
      self.set_byte(index, Byte::new(digit).unwrap_or(Byte::MIN));
      magnitude /= VALUES_COUNT as u64;
    }
  }
}

impl Neg for Word {
  type Output = Word;

  fn neg(self) -> Word {
    Word { sign: self.sign.flipped(), bytes: self.bytes }
  }
}

impl Display for Word {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} {}",
      self.sign,
      self.bytes
          .iter()
          .map(|b| format!("{}", b))
          .collect::<Vec<String>>()
          .join(" ")
    )
  }
}
