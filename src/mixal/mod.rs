mod expression;
mod future_word;
mod operation;
mod symbol;
mod symbol_table;
mod translator;

pub use expression::{
  Address, BasicExpression, BinaryOp, Expression, ExpressionToken, Text, UnaryOp, WValue, WValueToken
};
pub use future_word::{EndCode, FutureTranslatedWord, FutureWordId, TranslatedWord};
pub use operation::{Operation, OperationInfo};
pub use symbol::{LocalSymbolKind, Symbol, MAX_SYMBOL_LENGTH};
pub use symbol_table::SymbolTable;
pub use translator::Translator;
