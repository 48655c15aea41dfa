//! MIXAL machine mnemonics and the command byte and default field each one assembles to.

use strum_macros::{Display as StrumDisplay, EnumString};

use crate::bytecode::OpCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OperationInfo {
  pub opcode        : OpCode,
  /// Field byte used when the instruction has none.
  pub default_field : u8,
  /// Index byte used when the instruction has none.
  pub default_index : u8,
}

macro_rules! define_operations {
  (
    $(
      $variant:ident => $opcode:ident, $field:expr
    );* $(;)?
  ) => {
    /// A machine mnemonic. Parses from and prints as the uppercase MIXAL name.
    #[derive(
      Copy, Clone, Eq, PartialEq, Hash, Debug, StrumDisplay, EnumString
    )]
    #[strum(serialize_all = "UPPERCASE")]
    pub enum Operation {
      $( $variant, )*
    }

    impl Operation {
      pub fn info(&self) -> OperationInfo {
        match self {
          $(
            Operation::$variant => OperationInfo {
              opcode        : OpCode::$opcode,
              default_field : $field,
              default_index : 0
            },
          )*
        }
      }
    }
  };
}

/// `(0:5)`, the usual default of memory referencing commands.
const WHOLE: u8 = 5;

define_operations! {
  Nop  => Nop, 0;
  Add  => Add, WHOLE;
  Sub  => Sub, WHOLE;
  Mul  => Mul, WHOLE;
  Div  => Div, WHOLE;

  Num  => Special, 0;
  Char => Special, 1;
  Hlt  => Special, 2;

  Sla  => Shift, 0;
  Sra  => Shift, 1;
  Slax => Shift, 2;
  Srax => Shift, 3;
  Slc  => Shift, 4;
  Src  => Shift, 5;

  Move => Move, 1;

  Lda  => Lda, WHOLE;
  Ld1  => Ld1, WHOLE;
  Ld2  => Ld2, WHOLE;
  Ld3  => Ld3, WHOLE;
  Ld4  => Ld4, WHOLE;
  Ld5  => Ld5, WHOLE;
  Ld6  => Ld6, WHOLE;
  Ldx  => Ldx, WHOLE;

  Ldan => Ldan, WHOLE;
  Ld1n => Ld1n, WHOLE;
  Ld2n => Ld2n, WHOLE;
  Ld3n => Ld3n, WHOLE;
  Ld4n => Ld4n, WHOLE;
  Ld5n => Ld5n, WHOLE;
  Ld6n => Ld6n, WHOLE;
  Ldxn => Ldxn, WHOLE;

  Sta  => Sta, WHOLE;
  St1  => St1, WHOLE;
  St2  => St2, WHOLE;
  St3  => St3, WHOLE;
  St4  => St4, WHOLE;
  St5  => St5, WHOLE;
  St6  => St6, WHOLE;
  Stx  => Stx, WHOLE;
  // (0:2)
  Stj  => Stj, 2;
  Stz  => Stz, WHOLE;

  Jbus => Jbus, 0;
  Ioc  => Ioc, 0;
  In   => In, 0;
  Out  => Out, 0;
  Jred => Jred, 0;

  Jmp  => Jump, 0;
  Jsj  => Jump, 1;
  Jov  => Jump, 2;
  Jnov => Jump, 3;
  Jl   => Jump, 4;
  Je   => Jump, 5;
  Jg   => Jump, 6;
  Jge  => Jump, 7;
  Jne  => Jump, 8;
  Jle  => Jump, 9;

  Jan  => Ja, 0;
  Jaz  => Ja, 1;
  Jap  => Ja, 2;
  Jann => Ja, 3;
  Janz => Ja, 4;
  Janp => Ja, 5;
  J1n  => J1, 0;
  J1z  => J1, 1;
  J1p  => J1, 2;
  J1nn => J1, 3;
  J1nz => J1, 4;
  J1np => J1, 5;
  J2n  => J2, 0;
  J2z  => J2, 1;
  J2p  => J2, 2;
  J2nn => J2, 3;
  J2nz => J2, 4;
  J2np => J2, 5;
  J3n  => J3, 0;
  J3z  => J3, 1;
  J3p  => J3, 2;
  J3nn => J3, 3;
  J3nz => J3, 4;
  J3np => J3, 5;
  J4n  => J4, 0;
  J4z  => J4, 1;
  J4p  => J4, 2;
  J4nn => J4, 3;
  J4nz => J4, 4;
  J4np => J4, 5;
  J5n  => J5, 0;
  J5z  => J5, 1;
  J5p  => J5, 2;
  J5nn => J5, 3;
  J5nz => J5, 4;
  J5np => J5, 5;
  J6n  => J6, 0;
  J6z  => J6, 1;
  J6p  => J6, 2;
  J6nn => J6, 3;
  J6nz => J6, 4;
  J6np => J6, 5;
  Jxn  => Jx, 0;
  Jxz  => Jx, 1;
  Jxp  => Jx, 2;
  Jxnn => Jx, 3;
  Jxnz => Jx, 4;
  Jxnp => Jx, 5;

  Inca => AddrA, 0;
  Deca => AddrA, 1;
  Enta => AddrA, 2;
  Enna => AddrA, 3;
  Inc1 => Addr1, 0;
  Dec1 => Addr1, 1;
  Ent1 => Addr1, 2;
  Enn1 => Addr1, 3;
  Inc2 => Addr2, 0;
  Dec2 => Addr2, 1;
  Ent2 => Addr2, 2;
  Enn2 => Addr2, 3;
  Inc3 => Addr3, 0;
  Dec3 => Addr3, 1;
  Ent3 => Addr3, 2;
  Enn3 => Addr3, 3;
  Inc4 => Addr4, 0;
  Dec4 => Addr4, 1;
  Ent4 => Addr4, 2;
  Enn4 => Addr4, 3;
  Inc5 => Addr5, 0;
  Dec5 => Addr5, 1;
  Ent5 => Addr5, 2;
  Enn5 => Addr5, 3;
  Inc6 => Addr6, 0;
  Dec6 => Addr6, 1;
  Ent6 => Addr6, 2;
  Enn6 => Addr6, 3;
  Incx => AddrX, 0;
  Decx => AddrX, 1;
  Entx => AddrX, 2;
  Ennx => AddrX, 3;

  Cmpa => Cmpa, WHOLE;
  Cmp1 => Cmp1, WHOLE;
  Cmp2 => Cmp2, WHOLE;
  Cmp3 => Cmp3, WHOLE;
  Cmp4 => Cmp4, WHOLE;
  Cmp5 => Cmp5, WHOLE;
  Cmp6 => Cmp6, WHOLE;
  Cmpx => Cmpx, WHOLE;
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  use crate::bytecode::{Command, Instruction, JumpCondition, RegisterCondition};
  use crate::registers::RegisterId;

  fn decode(operation: Operation) -> Instruction {
    let info = operation.info();
    Instruction::decode(&Command::new(info.opcode, 0, info.default_index, info.default_field).unwrap())
      .unwrap()
  }

  #[test]
  fn mnemonics_parse_uppercase(){
    assert_eq!(Operation::from_str("LD1N").unwrap(), Operation::Ld1n);
    assert_eq!(Operation::from_str("JXNZ").unwrap(), Operation::Jxnz);
    assert_eq!(Operation::from_str("CHAR").unwrap(), Operation::Char);
    assert!(Operation::from_str("lda").is_err());
    assert_eq!(Operation::Slax.to_string(), "SLAX");
  }

  #[test]
  fn defaults_decode_to_the_named_command(){
    assert_eq!(decode(Operation::Jge), Instruction::Jump(JumpCondition::GreaterOrEqual));
    assert_eq!(
      decode(Operation::J3nn),
      Instruction::RegisterJump { register: RegisterId::I(3), condition: RegisterCondition::NonNegative }
    );
    assert_eq!(decode(Operation::Hlt), Instruction::Halt);
    assert_eq!(Operation::Stj.info().opcode.code(), 32);
    assert_eq!(Operation::Cmpx.info().opcode.code(), 63);
  }
}
