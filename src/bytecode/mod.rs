/*!

  Machine code of the computer. A command occupies exactly one word:

    Byte:   0    1    2      3       4        5
          [ ± ][ Address ][ Index ][ Field ][ Opcode ]

  The address is a signed two-byte quantity that shares the word's sign. The index byte selects
  an index register (0 means no indexing), the field byte is either a packed word field `8L + R`
  or a variant selector for opcodes that do not address a field (shift kind, jump condition,
  device number, ...), and the opcode byte selects the command family.

  The layout is bit-exact with the reference architecture so translated programs can be loaded
  directly into memory.

  All 64 values of the opcode byte name a command family, so `OpCode` is a closed enumeration
  and every byte converts into one. Within a family the field byte chooses the variant; that
  second level of decoding happens in `Instruction::decode`, whose result is matched
  exhaustively by the computer.

*/

mod command;
mod instruction;

pub use command::Command;
pub use instruction::{
  AddressAction, ArithmeticOperation, Instruction, JumpCondition, RegisterCondition, ShiftKind
};

use strum_macros::Display as StrumDisplay;
use num_enum::{TryFromPrimitive, IntoPrimitive};

/**
  Opcodes of the computer, in byte order. The order is significant: the numeric value of each
  variant is its opcode byte, and families of per-register commands (`LDA`, `LD1`, ..., `LDX`)
  are contiguous so the register can be computed from the distance to the family's first member.
*/
#[derive(
  StrumDisplay, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,             Eq,            PartialEq, Debug, Hash
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum OpCode {
  Nop,                                              // 0
  Add, Sub, Mul, Div,                               // 1 - 4
  Special,                                          // 5:  NUM, CHAR, HLT
  Shift,                                            // 6:  SLA, SRA, SLAX, SRAX, SLC, SRC
  Move,                                             // 7
  Lda, Ld1, Ld2, Ld3, Ld4, Ld5, Ld6, Ldx,           // 8 - 15
  Ldan, Ld1n, Ld2n, Ld3n, Ld4n, Ld5n, Ld6n, Ldxn,   // 16 - 23
  Sta, St1, St2, St3, St4, St5, St6, Stx,           // 24 - 31
  Stj, Stz,                                         // 32, 33
  Jbus, Ioc, In, Out, Jred,                         // 34 - 38
  Jump,                                             // 39: JMP, JSJ, JOV, ...
  Ja, J1, J2, J3, J4, J5, J6, Jx,                   // 40 - 47: JAN, JAZ, ...
  AddrA, Addr1, Addr2, Addr3, Addr4, Addr5, Addr6, AddrX, // 48 - 55: INCA, DECA, ENTA, ENNA
  Cmpa, Cmp1, Cmp2, Cmp3, Cmp4, Cmp5, Cmp6, Cmpx,   // 56 - 63
}

impl OpCode {

  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// Whether the field byte of this family is a word field `(L:R)`.
  pub fn uses_word_field(&self) -> bool {
    match self.code() {
      1..=4   => true, // ADD, SUB, MUL, DIV
      8..=33  => true, // loads and stores
      56..=63 => true, // comparisons
      _       => false
    }
  }

  /// Position of this opcode within its eight-member per-register family.
  pub(crate) fn register_offset(&self) -> usize {
    (self.code() % 8) as usize
  }
}
