/*!
  The MIX character set. Codes `0..=55` are characters; bytes `56..=63` have no character.
  Codes 10, 20 and 21 are the Greek capitals of the reference character set.
*/

use bimap::BiMap;

use crate::byte::Byte;

pub const CHARACTERS: &str = " ABCDEFGHIΔJKLMNOPQRΣΠSTUVWXYZ0123456789.,()+-*/=$<>@;:'";

/// Code of the character `'0'`. Digits follow consecutively.
pub const ZERO_CODE: u8 = 30;

lazy_static! {
  static ref CHAR_TABLE: BiMap<char, u8> =
    CHARACTERS
      .chars()
      .enumerate()
      .map(|(code, ch)| (ch, code as u8))
      .collect();
}

pub fn char_to_byte(ch: char) -> Option<Byte> {
  CHAR_TABLE
    .get_by_left(&ch)
    .and_then(|code| Byte::new(*code as i64).ok())
}

pub fn byte_to_char(byte: Byte) -> Option<char> {
  CHAR_TABLE.get_by_right(&byte.value()).cloned()
}

pub fn is_char_code(byte: Byte) -> bool {
  CHAR_TABLE.contains_right(&byte.value())
}
