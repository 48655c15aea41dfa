/*!
  Packing and unpacking of commands. `Command` is the decoded view of a word: every part of the
  word survives a round trip through `Command`, so `Command::from_word(w).to_word() == w` for
  any word, and `Command::new(..).to_word()` unpacks to the same four parts.
*/

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use super::OpCode;
use crate::byte::Byte;
use crate::errors::{RunError, WordError};
use crate::field::WordField;
use crate::word::{Sign, Word, WordValue};

/// The bytes holding the signed address.
const ADDRESS_FIELD: WordField = WordField::address();

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Command {
  opcode  : OpCode,
  address : WordValue,
  /// Sign of the address, kept separately so that `-0` survives.
  sign    : Sign,
  index   : Byte,
  field   : Byte
}

impl Command {

  /**
    Builds a command from its logical parts. The address must fit in two bytes, the index and
    field in one byte each, and for opcodes whose field is a word field the field byte must be
    a valid `(L:R)`.
  */
  pub fn new(opcode: OpCode, address: WordValue, index: u8, field: u8)
    -> Result<Command, WordError>
  {
    let mut word = Word::new();
    word.set_value_in_field(address as i64, ADDRESS_FIELD, true)?;
    let index = Byte::try_from(index)?;
    let field = Byte::try_from(field)?;
    if opcode.uses_word_field() {
      WordField::from_byte(field)?;
    }
    Ok(Command { opcode, address, sign: Sign::of(address as i64), index, field })
  }

  /// Like `new`, taking the field as a `WordField`.
  pub fn with_field(opcode: OpCode, address: WordValue, index: u8, field: WordField)
    -> Result<Command, WordError>
  {
    Command::new(opcode, address, index, field.to_byte().value())
  }

  pub fn from_word(word: &Word) -> Result<Command, RunError> {
    let opcode_byte = word.byte(5);
    let opcode = OpCode::try_from(opcode_byte.value()).map_err(|_| {
      RunError::InvalidCommand { opcode: opcode_byte.value(), field: word.byte(4).value() }
    })?;
    let address = word.field(ADDRESS_FIELD);

    Ok(Command {
      opcode,
      address : address.value(),
      sign    : address.sign(),
      index   : word.byte(3),
      field   : word.byte(4)
    })
  }

  pub fn to_word(&self) -> Word {
    let mut word = Word::new();
    // The address was range checked on construction.
    let (address, _) = Word::from_magnitude_truncated(self.sign, self.address.unsigned_abs() as u64);
    word.set_field(&address, ADDRESS_FIELD, true);
    word.set_byte(3, self.index);
    word.set_byte(4, self.field);
    word.set_byte(5, Byte::try_from(self.opcode.code()).unwrap_or(Byte::MIN));
    word
  }

  // region Accessors

  pub fn opcode(&self) -> OpCode {
    self.opcode
  }

  /// The opcode byte.
  pub fn id(&self) -> u8 {
    self.opcode.code()
  }

  pub fn address(&self) -> WordValue {
    self.address
  }

  pub fn address_sign(&self) -> Sign {
    self.sign
  }

  /// The index register selector, `0` for none.
  pub fn address_index(&self) -> u8 {
    self.index.value()
  }

  pub fn field(&self) -> u8 {
    self.field.value()
  }

  pub fn word_field(&self) -> Result<WordField, WordError> {
    WordField::from_byte(self.field)
  }

  // endregion
}

impl Display for Command {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let address = match (self.address, self.sign) {
      (0, Sign::Negative) => "-0".to_string(),
      (a, _)              => a.to_string()
    };
    write!(f, "{:<4} {},{}({})", self.opcode, address, self.index, self.field.value())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn pack_to_command_word(id: u8, address: i64, index: u8, field: WordField) -> Word {
    let mut word = Word::new();
    word.set_byte(5, Byte::try_from(id).unwrap());
    word.set_byte(4, field.to_byte());
    word.set_byte(3, Byte::try_from(index).unwrap());
    word.set_value_in_field(address, ADDRESS_FIELD, true).unwrap();
    word
  }

  #[test]
  fn word_constructor_unpacks(){
    let field = WordField::new(1, 3).unwrap();
    let word = pack_to_command_word(1, -200, 4, field);
    let command = Command::from_word(&word).unwrap();

    assert_eq!(command.opcode(), OpCode::Add);
    assert_eq!(command.address(), -200);
    assert_eq!(command.word_field().unwrap(), field);
    assert_eq!(command.address_index(), 4);
    assert_eq!(command.to_word(), word);
  }

  #[test]
  fn parts_constructor_packs(){
    let field = WordField::new(1, 3).unwrap();
    let word = pack_to_command_word(1, -200, 4, field);
    let command = Command::with_field(OpCode::Add, -200, 4, field).unwrap();

    assert_eq!(command.id(), 1);
    assert_eq!(command.to_word(), word);
  }

  #[test]
  fn rejects_out_of_range_parts(){
    assert_eq!(
      Command::new(OpCode::Jump, 4096, 0, 0),
      Err(WordError::TooBigWordValue(4096))
    );
    assert_eq!(Command::new(OpCode::Jump, 0, 64, 0), Err(WordError::ByteOverflow(64)));
    // LDA expects a word field; 8*3 + 1 is (3:1).
    assert!(Command::new(OpCode::Lda, 0, 0, 25).is_err());
    // JMP does not: field 9 is JLE.
    assert!(Command::new(OpCode::Jump, 0, 0, 9).is_ok());
  }

  #[test]
  fn negative_zero_address_survives(){
    let mut word = Command::new(OpCode::AddrA, 0, 0, 3).unwrap().to_word();
    word.set_sign(Sign::Negative);
    let command = Command::from_word(&word).unwrap();
    assert_eq!(command.address(), 0);
    assert_eq!(command.address_sign(), Sign::Negative);
    assert_eq!(command.to_word(), word);
  }

  proptest! {
    #[test]
    fn parts_round_trip(id in 0u8..64, address in -4095i32..=4095, index in 0u8..64, field in 0u8..64) {
      let opcode = OpCode::try_from(id).unwrap();
      match Command::new(opcode, address, index, field) {
        Ok(command) => {
          let unpacked = Command::from_word(&command.to_word()).unwrap();
          prop_assert_eq!(unpacked.id(), id);
          prop_assert_eq!(unpacked.address(), address);
          prop_assert_eq!(unpacked.address_index(), index);
          prop_assert_eq!(unpacked.field(), field);
        }
        Err(_) => prop_assert!(opcode.uses_word_field() && WordField::from_byte(Byte::try_from(field).unwrap()).is_err()),
      }
    }
  }
}
