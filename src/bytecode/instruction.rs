//! Second-level decoding: a `Command` together with its field byte names exactly one
//! `Instruction` variant, or none at all.

use std::fmt::{Display, Formatter};

use super::{Command, OpCode};
use crate::device::DeviceId;
use crate::errors::RunError;
use crate::field::WordField;
use crate::registers::RegisterId;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithmeticOperation {
  Add,
  Subtract,
  Multiply,
  Divide
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ShiftKind {
  /// SLA
  LeftA,
  /// SRA
  RightA,
  /// SLAX
  LeftAX,
  /// SRAX
  RightAX,
  /// SLC
  LeftCircular,
  /// SRC
  RightCircular
}

/// Conditions of the opcode 39 family, in field order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum JumpCondition {
  /// JMP
  Always,
  /// JSJ, the one jump that leaves rJ alone.
  AlwaysSaveNothing,
  Overflow,
  NoOverflow,
  Less,
  Equal,
  Greater,
  GreaterOrEqual,
  NotEqual,
  LessOrEqual
}

/// Conditions of the register jumps `J*N`, `J*Z`, ..., in field order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RegisterCondition {
  Negative,
  Zero,
  Positive,
  NonNegative,
  NonZero,
  NonPositive
}

/// Variants of the opcode 48 to 55 families, in field order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AddressAction {
  Increase,
  Decrease,
  Enter,
  EnterNegative
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Instruction {
  Nop,
  Arithmetic { operation: ArithmeticOperation, field: WordField },
  Num,
  Char,
  Halt,
  Shift(ShiftKind),
  Move { count: u8 },
  Load { register: RegisterId, field: WordField, negative: bool },
  /// `register` is one of A, X, I(1..=6) and J.
  Store { register: RegisterId, field: WordField },
  StoreZero { field: WordField },
  JumpBusy(DeviceId),
  Control(DeviceId),
  In(DeviceId),
  Out(DeviceId),
  JumpReady(DeviceId),
  Jump(JumpCondition),
  RegisterJump { register: RegisterId, condition: RegisterCondition },
  AddressTransfer { register: RegisterId, action: AddressAction },
  Compare { register: RegisterId, field: WordField },
}

impl Instruction {

  /// Decodes `command`, failing with `InvalidCommand` for field bytes the family does not define.
  pub fn decode(command: &Command) -> Result<Instruction, RunError> {
    let opcode = command.opcode();
    let field = command.field();
    let invalid = || RunError::InvalidCommand { opcode: opcode.code(), field };
    let word_field = || command.word_field().map_err(|_| invalid());

    let instruction = match opcode {

      OpCode::Nop => Instruction::Nop,

      OpCode::Add => Instruction::Arithmetic {
        operation: ArithmeticOperation::Add, field: word_field()?
      },
      OpCode::Sub => Instruction::Arithmetic {
        operation: ArithmeticOperation::Subtract, field: word_field()?
      },
      OpCode::Mul => Instruction::Arithmetic {
        operation: ArithmeticOperation::Multiply, field: word_field()?
      },
      OpCode::Div => Instruction::Arithmetic {
        operation: ArithmeticOperation::Divide, field: word_field()?
      },

      OpCode::Special => match field {
        0 => Instruction::Num,
        1 => Instruction::Char,
        2 => Instruction::Halt,
        _ => return Err(invalid())
      },

      OpCode::Shift => match field {
        0 => Instruction::Shift(ShiftKind::LeftA),
        1 => Instruction::Shift(ShiftKind::RightA),
        2 => Instruction::Shift(ShiftKind::LeftAX),
        3 => Instruction::Shift(ShiftKind::RightAX),
        4 => Instruction::Shift(ShiftKind::LeftCircular),
        5 => Instruction::Shift(ShiftKind::RightCircular),
        _ => return Err(invalid())
      },

      OpCode::Move => Instruction::Move { count: field },

      | OpCode::Lda | OpCode::Ld1 | OpCode::Ld2 | OpCode::Ld3
      | OpCode::Ld4 | OpCode::Ld5 | OpCode::Ld6 | OpCode::Ldx => Instruction::Load {
        register: family_register(opcode), field: word_field()?, negative: false
      },

      | OpCode::Ldan | OpCode::Ld1n | OpCode::Ld2n | OpCode::Ld3n
      | OpCode::Ld4n | OpCode::Ld5n | OpCode::Ld6n | OpCode::Ldxn => Instruction::Load {
        register: family_register(opcode), field: word_field()?, negative: true
      },

      | OpCode::Sta | OpCode::St1 | OpCode::St2 | OpCode::St3
      | OpCode::St4 | OpCode::St5 | OpCode::St6 | OpCode::Stx => Instruction::Store {
        register: family_register(opcode), field: word_field()?
      },

      OpCode::Stj => Instruction::Store { register: RegisterId::J, field: word_field()? },
      OpCode::Stz => Instruction::StoreZero { field: word_field()? },

      OpCode::Jbus => Instruction::JumpBusy(field),
      OpCode::Ioc  => Instruction::Control(field),
      OpCode::In   => Instruction::In(field),
      OpCode::Out  => Instruction::Out(field),
      OpCode::Jred => Instruction::JumpReady(field),

      OpCode::Jump => Instruction::Jump(
        match field {
          0 => JumpCondition::Always,
          1 => JumpCondition::AlwaysSaveNothing,
          2 => JumpCondition::Overflow,
          3 => JumpCondition::NoOverflow,
          4 => JumpCondition::Less,
          5 => JumpCondition::Equal,
          6 => JumpCondition::Greater,
          7 => JumpCondition::GreaterOrEqual,
          8 => JumpCondition::NotEqual,
          9 => JumpCondition::LessOrEqual,
          _ => return Err(invalid())
        }
      ),

      | OpCode::Ja | OpCode::J1 | OpCode::J2 | OpCode::J3
      | OpCode::J4 | OpCode::J5 | OpCode::J6 | OpCode::Jx => Instruction::RegisterJump {
        register: family_register(opcode),
        condition: match field {
          0 => RegisterCondition::Negative,
          1 => RegisterCondition::Zero,
          2 => RegisterCondition::Positive,
          3 => RegisterCondition::NonNegative,
          4 => RegisterCondition::NonZero,
          5 => RegisterCondition::NonPositive,
          _ => return Err(invalid())
        }
      },

      | OpCode::AddrA | OpCode::Addr1 | OpCode::Addr2 | OpCode::Addr3
      | OpCode::Addr4 | OpCode::Addr5 | OpCode::Addr6 | OpCode::AddrX => Instruction::AddressTransfer {
        register: family_register(opcode),
        action: match field {
          0 => AddressAction::Increase,
          1 => AddressAction::Decrease,
          2 => AddressAction::Enter,
          3 => AddressAction::EnterNegative,
          _ => return Err(invalid())
        }
      },

      | OpCode::Cmpa | OpCode::Cmp1 | OpCode::Cmp2 | OpCode::Cmp3
      | OpCode::Cmp4 | OpCode::Cmp5 | OpCode::Cmp6 | OpCode::Cmpx => Instruction::Compare {
        register: family_register(opcode), field: word_field()?
      },
    };

    Ok(instruction)
  }
}

/// Members of a per-register family are ordered A, 1, ..., 6, X.
fn family_register(opcode: OpCode) -> RegisterId {
  match opcode.register_offset() {
    0 => RegisterId::A,
    7 => RegisterId::X,
    i => RegisterId::I(i)
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Instruction::Arithmetic { operation, field } => write!(f, "{:?}{}", operation, field),
      Instruction::Load { register, field, negative } => {
        write!(f, "Load{} {}{}", if *negative { "Negative" } else { "" }, register, field)
      }
      Instruction::Store { register, field }   => write!(f, "Store {}{}", register, field),
      Instruction::Compare { register, field } => write!(f, "Compare {}{}", register, field),
      other                                    => write!(f, "{:?}", other)
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn decode(opcode: OpCode, field: u8) -> Result<Instruction, RunError> {
    Instruction::decode(&Command::new(opcode, 0, 0, field).unwrap())
  }

  #[test]
  fn per_register_families(){
    assert_eq!(
      decode(OpCode::Ld3n, 5).unwrap(),
      Instruction::Load { register: RegisterId::I(3), field: WordField::max(), negative: true }
    );
    assert_eq!(
      decode(OpCode::Stx, 13).unwrap(),
      Instruction::Store { register: RegisterId::X, field: WordField::new(1, 5).unwrap() }
    );
    assert_eq!(
      decode(OpCode::AddrA, 3).unwrap(),
      Instruction::AddressTransfer { register: RegisterId::A, action: AddressAction::EnterNegative }
    );
    assert_eq!(
      decode(OpCode::J6, 4).unwrap(),
      Instruction::RegisterJump { register: RegisterId::I(6), condition: RegisterCondition::NonZero }
    );
  }

  #[test]
  fn field_selects_variant(){
    assert_eq!(decode(OpCode::Special, 2).unwrap(), Instruction::Halt);
    assert_eq!(decode(OpCode::Shift, 5).unwrap(), Instruction::Shift(ShiftKind::RightCircular));
    assert_eq!(decode(OpCode::Jump, 7).unwrap(), Instruction::Jump(JumpCondition::GreaterOrEqual));
    assert_eq!(decode(OpCode::Out, 18).unwrap(), Instruction::Out(18));
  }

  #[test]
  fn undefined_variants_are_rejected(){
    assert_eq!(
      decode(OpCode::Jump, 10),
      Err(RunError::InvalidCommand { opcode: 39, field: 10 })
    );
    assert_eq!(
      decode(OpCode::Special, 3),
      Err(RunError::InvalidCommand { opcode: 5, field: 3 })
    );
  }
}
