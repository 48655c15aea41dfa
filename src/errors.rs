//! Error types of the machine model, the execution engine and the translator.
//!
//! Flagged conditions (arithmetic overflow, the comparison indicator) are machine state and
//! never show up here.

use thiserror::Error;

use crate::mixal::Symbol;
use crate::word::{Word, WordValue};

/// Violations of the byte/word/field value bounds.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum WordError {
  #[error("value {0} does not fit in a byte")]
  ByteOverflow(i64),

  #[error("value {0} is too big for a word")]
  TooBigWordValue(i64),

  #[error("invalid word field ({left}:{right})")]
  InvalidField { left: usize, right: usize },

  #[error("value {0} does not fit in an index register")]
  IndexRegisterOverflow(i64),
}

/// Fatal execution conditions. Any of these halts the computer.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RunError {
  #[error("memory address {0} is out of range")]
  InvalidAddress(WordValue),

  #[error("index register {0} does not exist")]
  InvalidIndexRegister(u8),

  #[error("no command with opcode {opcode} and field {field}")]
  InvalidCommand { opcode: u8, field: u8 },

  #[error("division by zero")]
  DivisionByZero,

  #[error("byte {0} is not a character code")]
  InvalidCharacter(u8),

  #[error("device {0} is not connected")]
  UnknownDevice(u8),

  #[error("invalid shift count {0}")]
  InvalidShift(WordValue),

  #[error(transparent)]
  Word(#[from] WordError),
}

/// Static errors of the translation step.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TranslateError {
  #[error(transparent)]
  Word(#[from] WordError),

  #[error("number {0} is too big for a word")]
  TooBigValue(u64),

  #[error("invalid W-value field {0}")]
  InvalidWValueField(WordValue),

  #[error("symbol {symbol} is already defined (new value {value})")]
  DuplicateSymbol { symbol: Symbol, value: Word },

  #[error("symbol {0} is not defined")]
  UndefinedSymbol(Symbol),

  #[error("local symbol {0} can not be defined")]
  InvalidLocalSymbolDefinition(Symbol),

  #[error("invalid reference to local symbol {0}")]
  InvalidLocalSymbolReference(Symbol),

  #[error("invalid ALF text {0:?}")]
  InvalidAlfText(String),

  #[error("division by zero in expression")]
  DivisionByZero,

  #[error("value {0} does not fit in the address part of a command")]
  InvalidAddress(WordValue),

  #[error("value {0} does not fit in a byte")]
  InvalidByte(WordValue),

  #[error("invalid symbol name {0:?}")]
  InvalidSymbolName(String),
}
