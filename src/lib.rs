/*!
  A simulator of Knuth's MIX computer and the translation core of its assembly language, MIXAL.

  The machine model (`Byte`, `Word`, `WordField`, registers and memory), the command encoding
  (`bytecode`) and the execution engine (`Computer`) make up the simulator. Devices plug in
  through `IODevice` and execution is observed through `ComputerListener`. The `mixal` module
  turns already parsed MIXAL lines into words, including commands that refer to symbols defined
  later in the program.
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

mod byte;
mod field;
mod word;
mod registers;
mod memory;
mod errors;

pub mod char_table;
pub mod bytecode;
pub mod device;
pub mod listener;
pub mod computer;
pub mod mixal;

pub use byte::Byte;
pub use field::WordField;
pub use word::{Sign, Word, WordValue, BYTES_COUNT, MAX_ABS_VALUE};
pub use registers::{AddressRegister, IndexRegister, RegisterId, INDEX_REGISTERS_COUNT, MAX_INDEX_VALUE};
pub use memory::{Memory, MEMORY_SIZE};
pub use errors::{RunError, TranslateError, WordError};
pub use computer::{ComparisonIndicator, Computer, ComputerState, OverflowFlag};


#[cfg(test)]
mod tests {
  use super::*;
  use crate::mixal::{
    Address, BasicExpression, BinaryOp, Expression, Operation, Symbol, Translator, WValue
  };

  fn symbol(name: &str) -> Expression {
    Expression::symbol(Symbol::usual(name))
  }

  fn number(n: u64) -> Expression {
    Expression::number(n)
  }

  /// Sums 1..=5 into RESULT.
  #[test]
  fn translate_load_and_run(){
    let mut translator = Translator::new();
    let mut ids = vec![];

    translator.translate_orig(&WValue::from(number(100)), None).unwrap();
    ids.push(translator.translate_instruction(
      Operation::Enta, Some(&Address::from(number(0))), None, None, Some(&Symbol::usual("START"))
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::Ent1, Some(&Address::from(number(5))), None, None, None
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::Inca, Some(&Address::from(number(0))), Some(&number(1)), None, Some(&Symbol::usual("LOOP"))
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::Dec1, Some(&Address::from(number(1))), None, None, None
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::J1p, Some(&Address::from(symbol("LOOP"))), None, None, None
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::Sta, Some(&Address::from(symbol("RESULT"))), None, None, None
    ).unwrap());
    ids.push(translator.translate_instruction(
      Operation::Hlt, None, None, None, None
    ).unwrap());
    let result = translator.translate_con(&WValue::from(number(0)), Some(&Symbol::usual("RESULT"))).unwrap();
    let end = translator.translate_end(&WValue::from(symbol("START")), None).unwrap();

    let mut computer = Computer::new();
    for id in ids {
      let word = translator.translated_word(id).unwrap();
      computer.set_memory(word.original_address, word.value).unwrap();
    }
    computer.set_memory(result.original_address, result.value).unwrap();
    computer.set_next_address(end.start_address);

    computer.run().unwrap();

    assert_eq!(end.start_address, 100);
    assert_eq!(result.original_address, 107);
    assert_eq!(computer.memory(107).unwrap().value(), 15);
    assert_eq!(computer.ri(1).unwrap().value(), 0);
    assert!(computer.is_halted());
  }

  #[test]
  fn translated_fields_execute(){
    let mut translator = Translator::new();
    // LDA 10(1:3)
    let field = number(1).then(BinaryOp::Field, BasicExpression::Number(3));
    let load = translator.translate_instruction(Operation::Lda, Some(&Address::from(number(10))), None, Some(&field), None).unwrap();
    let halt = translator.translate_instruction(Operation::Hlt, None, None, None, None).unwrap();

    let mut computer = Computer::new();
    for id in [load, halt].iter() {
      let word = translator.translated_word(*id).unwrap();
      computer.set_memory(word.original_address, word.value).unwrap();
    }
    computer.set_memory(10, Word::from_value(-(1 << 24) - 3).unwrap()).unwrap();
    computer.run().unwrap();

    assert_eq!(computer.ra().value(), 64 * 64);
  }
}
