/*!
  Translation of MIXAL lines, already split into their parts by a front end, into words.

  The translator keeps the location counter, the symbol table and an arena of translated
  commands. A command whose address refers to a symbol that is not defined yet (a usual symbol
  or a `dF` reference) is kept in the arena with a zero address until `resolve_future_words`
  finds every symbol it needs; the caller holds its `FutureWordId` and reads the finished word
  with `translated_word` once it is ready. `translate_end` resolves what it can and fails if
  anything is still pending.

  Expressions are evaluated relative to the address of the line they occur on: `*` is that
  address, `dB` the last `dH` before it and `dF` the first `dH` after it.
*/

use std::convert::TryFrom;

use crate::byte::Byte;
use crate::char_table::char_to_byte;
use crate::errors::TranslateError;
use crate::field::WordField;
use crate::memory::MEMORY_SIZE;
use crate::mixal::{
  Address, BasicExpression, BinaryOp, EndCode, Expression, FutureTranslatedWord, FutureWordId,
  LocalSymbolKind, Operation, Symbol, SymbolTable, Text, TranslatedWord, UnaryOp, WValue
};
use crate::registers::MAX_INDEX_VALUE;
use crate::word::{Word, WordValue, BYTES_COUNT, MAX_ABS_VALUE};

/// The line an expression is evaluated for.
#[derive(Copy, Clone, Debug)]
struct Site {
  address         : WordValue,
  /// Whether `dF` may be looked up. Only pending words are evaluated that way.
  resolve_forward : bool,
}

#[derive(Clone, Default, Debug)]
pub struct Translator {
  current_address : WordValue,
  symbols         : SymbolTable,
  future_words    : Vec<FutureTranslatedWord>,
  unresolved      : Vec<FutureWordId>,
}

impl Translator {

  pub fn new() -> Translator {
    Translator::default()
  }

  /// A translator that starts at `current_address` with `symbols` already defined.
  pub fn with_symbols(symbols: SymbolTable, current_address: WordValue) -> Translator {
    Translator {
      current_address,
      symbols,
      future_words : Vec::new(),
      unresolved   : Vec::new(),
    }
  }

  // region Location counter and symbols

  pub fn current_address(&self) -> WordValue {
    self.current_address
  }

  pub fn set_current_address(&mut self, address: WordValue) -> Result<(), TranslateError> {
    self.current_address = require_memory_address(address)?;
    Ok(())
  }

  pub fn symbols(&self) -> &SymbolTable {
    &self.symbols
  }

  pub fn define_symbol(&mut self, symbol: &Symbol, value: Word) -> Result<(), TranslateError> {
    self.symbols.define(symbol, value)
  }

  /// Whether `symbol` can be evaluated on the current line.
  pub fn is_defined_symbol(&self, symbol: &Symbol) -> bool {
    self.symbols.is_defined(symbol, self.current_address - 1)
  }

  fn define_label(&mut self, label: Option<&Symbol>, value: Word) -> Result<(), TranslateError> {
    match label {
      Some(symbol) => self.define_symbol(symbol, value),
      None         => Ok(())
    }
  }

  fn current_address_word(&self) -> Result<Word, TranslateError> {
    Ok(Word::from_value(self.current_address as i64)?)
  }

  // endregion

  // region Evaluation

  fn site(&self) -> Site {
    Site { address: self.current_address, resolve_forward: false }
  }

  pub fn evaluate_expression(&self, expression: &Expression) -> Result<Word, TranslateError> {
    self.evaluate_expression_at(expression, self.site())
  }

  pub fn evaluate_w_value(&self, w_value: &WValue) -> Result<Word, TranslateError> {
    self.evaluate_w_value_at(w_value, self.site())
  }

  /// The five characters of `text` as one word of character codes.
  pub fn evaluate_text(&self, text: &Text) -> Result<Word, TranslateError> {
    let invalid = || TranslateError::InvalidAlfText(text.as_str().to_string());

    let chars: Vec<char> = text.as_str().chars().collect();
    if chars.len() != BYTES_COUNT {
      return Err(invalid());
    }

    let mut word = Word::new();
    for (i, c) in chars.into_iter().enumerate() {
      word.set_byte(i + 1, char_to_byte(c).ok_or_else(invalid)?);
    }
    Ok(word)
  }

  fn evaluate_expression_at(&self, expression: &Expression, site: Site) -> Result<Word, TranslateError> {
    let (first, rest) = match expression.tokens().split_first() {
      Some(split) => split,
      None        => return Ok(Word::new())
    };

    let mut value = self.evaluate_basic(&first.basic_expr, site)?;
    if let Some(UnaryOp::Minus) = first.unary_op {
      value = -value;
    }

    let mut op = first.binary_op;
    for token in rest {
      let right = self.evaluate_basic(&token.basic_expr, site)?;
      value = match op {
        Some(op) => apply_binary_op(op, &value, &right)?,
        None     => right
      };
      op = token.binary_op;
    }

    Ok(value)
  }

  fn evaluate_basic(&self, basic: &BasicExpression, site: Site) -> Result<Word, TranslateError> {
    match basic {

      BasicExpression::CurrentAddress => Ok(Word::from_value(site.address as i64)?),

      BasicExpression::Number(n) => {
        match *n > MAX_ABS_VALUE as u64 {
          true  => Err(TranslateError::TooBigValue(*n)),
          false => Ok(Word::from_value(*n as i64)?)
        }
      }

      BasicExpression::Symbol(symbol) => self.evaluate_symbol(symbol, site),

    }
  }

  fn evaluate_symbol(&self, symbol: &Symbol, site: Site) -> Result<Word, TranslateError> {
    match symbol {

      Symbol::Local { id, kind: LocalSymbolKind::Forward } if site.resolve_forward => {
        let address = self.symbols
                          .find_forward(*id, site.address)
                          .ok_or_else(|| TranslateError::UndefinedSymbol(symbol.clone()))?;
        Ok(Word::from_value(address as i64)?)
      }

      // `dB` on a line means a `dH` strictly before it.
      _ => self.symbols.query(symbol, site.address - 1)

    }
  }

  fn evaluate_w_value_at(&self, w_value: &WValue, site: Site) -> Result<Word, TranslateError> {
    let mut result = Word::new();

    for token in w_value.tokens() {
      let part = self.evaluate_expression_at(&token.expression, site)?;
      let field = match &token.field {
        None             => WordField::max(),
        Some(expression) => {
          let value = self.evaluate_expression_at(expression, site)?.value();
          Byte::new(value as i64)
              .and_then(WordField::from_byte)
              .map_err(|_| TranslateError::InvalidWValueField(value))?
        }
      };
      result.set_field(&part, field, field.includes_sign());
    }

    Ok(result)
  }

  fn evaluate_byte(&self, expression: &Expression) -> Result<Byte, TranslateError> {
    let value = self.evaluate_expression(expression)?.value();
    Byte::new(value as i64).map_err(|_| TranslateError::InvalidByte(value))
  }

  /// The address part of a command: at most two bytes and a sign.
  fn evaluate_address(&self, address: &Address, site: Site) -> Result<Word, TranslateError> {
    let address = match address {
      Address::Expression(expression) => self.evaluate_expression_at(expression, site)?,
      Address::WValue(w_value)        => self.evaluate_w_value_at(w_value, site)?
    };
    match address.magnitude() > MAX_INDEX_VALUE as u64 {
      true  => Err(TranslateError::InvalidAddress(address.value())),
      false => Ok(address)
    }
  }

  // endregion

  // region Pseudo-operations

  /// Defines the label as the value.
  pub fn translate_equ(&mut self, value: &WValue, label: Option<&Symbol>) -> Result<(), TranslateError> {
    let value = self.evaluate_w_value(value)?;
    self.define_label(label, value)
  }

  /**
    Moves the location counter. The label gets the address before the move, and is only defined
    once the new address is known to be in memory.
  */
  pub fn translate_orig(&mut self, value: &WValue, label: Option<&Symbol>) -> Result<(), TranslateError> {
    let address = require_memory_address(self.evaluate_w_value(value)?.value())?;
    let old_address = self.current_address_word()?;
    self.define_label(label, old_address)?;
    self.set_current_address(address)
  }

  /// Emits one word. The label is defined first, so the operand may refer to it.
  pub fn translate_con(&mut self, value: &WValue, label: Option<&Symbol>)
    -> Result<TranslatedWord, TranslateError>
  {
    self.define_label(label, self.current_address_word()?)?;
    let value = self.evaluate_w_value(value)?;
    Ok(self.emit_word(value))
  }

  pub fn translate_alf(&mut self, text: &Text, label: Option<&Symbol>)
    -> Result<TranslatedWord, TranslateError>
  {
    self.define_label(label, self.current_address_word()?)?;
    let value = self.evaluate_text(text)?;
    Ok(self.emit_word(value))
  }

  fn emit_word(&mut self, value: Word) -> TranslatedWord {
    let word = TranslatedWord { original_address: self.current_address, value };
    self.current_address += 1;
    word
  }

  /**
    Ends the program. The label is defined as the current address, every pending command is
    resolved, and the value is the address execution starts at. Fails with `UndefinedSymbol` if
    some command still refers to a symbol nobody defined.
  */
  pub fn translate_end(&mut self, value: &WValue, label: Option<&Symbol>) -> Result<EndCode, TranslateError> {
    let address = self.current_address_word()?;
    self.define_label(label, address)?;
    self.resolve_future_words()?;

    if let Some(symbol) = self.first_unresolved_symbol() {
      return Err(TranslateError::UndefinedSymbol(symbol));
    }

    let start = self.evaluate_w_value(value)?;
    Ok(EndCode { start_address: start.value() })
  }

  // endregion

  // region Commands

  /**
    Translates one machine instruction at the current address. Index and field are evaluated at
    once, defaulting to the operation's own; an absent address is zero. The address is an
    expression or a W-value. If the address refers to
    a symbol that is not defined yet the command stays pending. The label is defined after the
    address is evaluated, so a line never refers to its own label.
  */
  pub fn translate_instruction(
    &mut self,
    operation : Operation,
    address   : Option<&Address>,
    index     : Option<&Expression>,
    field     : Option<&Expression>,
    label     : Option<&Symbol>
  ) -> Result<FutureWordId, TranslateError>
  {
    let info = operation.info();

    let index = match index {
      Some(expression) => self.evaluate_byte(expression)?,
      None             => Byte::try_from(info.default_index)?
    };
    let field = match field {
      Some(expression) => self.evaluate_byte(expression)?,
      None             => Byte::try_from(info.default_field)?
    };
    if info.opcode.uses_word_field() {
      WordField::from_byte(field)?;
    }

    let mut command = Word::new();
    command.set_byte(3, index);
    command.set_byte(4, field);
    command.set_byte(5, Byte::try_from(info.opcode.code())?);

    let future_word = match address {

      Some(address) if self.has_forward_references(address) => {
        FutureTranslatedWord::pending(self.current_address, command, address.clone())
      }

      Some(address) => {
        let address = self.evaluate_address(address, self.site())?;
        let mut word = FutureTranslatedWord::ready(self.current_address, command);
        word.resolve(&address);
        word
      }

      None => FutureTranslatedWord::ready(self.current_address, command)

    };

    let here = self.current_address_word()?;
    self.define_label(label, here)?;

    let id = FutureWordId(self.future_words.len());
    if !future_word.is_ready() {
      self.unresolved.push(id);
    }
    self.future_words.push(future_word);
    self.current_address += 1;

    Ok(id)
  }

  pub fn future_word(&self, id: FutureWordId) -> Option<&FutureTranslatedWord> {
    self.future_words.get(id.0)
  }

  /// The finished word, once its address is known.
  pub fn translated_word(&self, id: FutureWordId) -> Option<TranslatedWord> {
    self.future_word(id)?.translated()
  }

  /// Every command translated so far, in translation order.
  pub fn future_words(&self) -> impl Iterator<Item = (FutureWordId, &FutureTranslatedWord)> {
    self.future_words.iter().enumerate().map(|(i, word)| (FutureWordId(i), word))
  }

  pub fn unresolved_count(&self) -> usize {
    self.unresolved.len()
  }

  /**
    Patches every pending command whose symbols are all defined by now. Commands that still
    miss a symbol stay pending. May be called any number of times.
  */
  pub fn resolve_future_words(&mut self) -> Result<(), TranslateError> {
    let mut resolved = Vec::new();

    for id in &self.unresolved {
      let word = &self.future_words[id.0];
      let address = match word.unresolved_address() {
        Some(address) => address,
        None          => continue
      };
      if !self.is_resolvable(address, word.original_address()) {
        continue;
      }

      let site = Site { address: word.original_address(), resolve_forward: true };
      resolved.push((*id, self.evaluate_address(address, site)?));
    }

    for (id, address) in &resolved {
      self.future_words[id.0].resolve(address);
    }
    let future_words = &self.future_words;
    self.unresolved.retain(|id| !future_words[id.0].is_ready());

    #[cfg(feature = "trace_computation")]
    println!("resolved {} words, {} pending", resolved.len(), self.unresolved.len());

    Ok(())
  }

  fn has_forward_references(&self, address: &Address) -> bool {
    address.symbols().any(|symbol| match symbol {
      Symbol::Local { kind: LocalSymbolKind::Forward, .. } => true,
      Symbol::Usual(_)                                     => !self.symbols.is_defined(symbol, 0),
      Symbol::Local { .. }                                 => false
    })
  }

  fn is_unresolvable(&self, symbol: &Symbol, address: WordValue) -> bool {
    match symbol {
      Symbol::Local { id, kind: LocalSymbolKind::Forward } => {
        self.symbols.find_forward(*id, address).is_none()
      }
      Symbol::Usual(_)     => !self.symbols.is_defined(symbol, 0),
      Symbol::Local { .. } => false
    }
  }

  fn is_resolvable(&self, operand: &Address, address: WordValue) -> bool {
    !operand.symbols().any(|symbol| self.is_unresolvable(symbol, address))
  }

  fn first_unresolved_symbol(&self) -> Option<Symbol> {
    self.unresolved.iter().find_map(|id| {
      let word = &self.future_words[id.0];
      word.unresolved_address()?
          .symbols()
          .find(|symbol| self.is_unresolvable(symbol, word.original_address()))
          .cloned()
    })
  }

  // endregion
}

fn require_memory_address(address: WordValue) -> Result<WordValue, TranslateError> {
  match address >= 0 && (address as usize) < MEMORY_SIZE {
    true  => Ok(address),
    false => Err(TranslateError::InvalidAddress(address))
  }
}

fn apply_binary_op(op: BinaryOp, left: &Word, right: &Word) -> Result<Word, TranslateError> {
  let a = left.value() as i64;
  let b = right.value() as i64;

  let result = match op {
    BinaryOp::Add      => a + b,
    BinaryOp::Subtract => a - b,
    BinaryOp::Multiply => a * b,
    BinaryOp::Divide   => {
      if b == 0 {
        return Err(TranslateError::DivisionByZero);
      }
      a / b
    }
    BinaryOp::DoubleSlash => {
      if b == 0 {
        return Err(TranslateError::DivisionByZero);
      }
      a * (MAX_ABS_VALUE + 1) / b
    }
    BinaryOp::Field => 8 * a + b,
  };

  Ok(Word::from_value(result)?)
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::bytecode::{Command, OpCode};
  use crate::errors::WordError;
  use crate::word::Sign;

  // region Helpers

  fn usual(name: &str) -> Symbol {
    Symbol::usual(name)
  }

  fn local(text: &str) -> Symbol {
    text.parse().unwrap()
  }

  fn number(n: u64) -> Expression {
    Expression::number(n)
  }

  fn symbol(name: &str) -> Expression {
    Expression::symbol(name.parse().unwrap())
  }

  fn w(n: u64) -> WValue {
    WValue::from(number(n))
  }

  fn word(value: i64) -> Word {
    Word::from_value(value).unwrap()
  }

  fn command(translator: &Translator, id: FutureWordId) -> Command {
    Command::from_word(&translator.translated_word(id).unwrap().value).unwrap()
  }

  // endregion

  // region Expressions

  #[test]
  fn expressions_fold_left_to_right(){
    let mut translator = Translator::new();
    translator.set_current_address(10).unwrap();

    // -1 + * * 2
    let expression =
      Expression::new(Some(UnaryOp::Minus), BasicExpression::Number(1))
        .then(BinaryOp::Add, BasicExpression::CurrentAddress)
        .then(BinaryOp::Multiply, BasicExpression::Number(2));
    assert_eq!(translator.evaluate_expression(&expression).unwrap(), word(18));

    let field = number(1).then(BinaryOp::Field, BasicExpression::Number(5));
    assert_eq!(translator.evaluate_expression(&field).unwrap(), word(13));

    let fraction = number(1).then(BinaryOp::DoubleSlash, BasicExpression::Number(3));
    assert_eq!(translator.evaluate_expression(&fraction).unwrap(), word(357913941));

    let quotient = number(7).then(BinaryOp::Divide, BasicExpression::Number(2));
    assert_eq!(translator.evaluate_expression(&quotient).unwrap(), word(3));
  }

  #[test]
  fn expression_errors(){
    let translator = Translator::new();

    assert_eq!(
      translator.evaluate_expression(&number(1 << 30)),
      Err(TranslateError::TooBigValue(1 << 30))
    );
    assert_eq!(
      translator.evaluate_expression(&number(1 << 29).then(BinaryOp::Multiply, BasicExpression::Number(4))),
      Err(TranslateError::Word(WordError::TooBigWordValue(1 << 31)))
    );
    assert_eq!(
      translator.evaluate_expression(&number(1).then(BinaryOp::Divide, BasicExpression::Number(0))),
      Err(TranslateError::DivisionByZero)
    );
    assert_eq!(
      translator.evaluate_expression(&symbol("NOWHERE")),
      Err(TranslateError::UndefinedSymbol(usual("NOWHERE")))
    );
    assert_eq!(
      translator.evaluate_expression(&symbol("3F")),
      Err(TranslateError::InvalidLocalSymbolReference(local("3F")))
    );
  }

  #[test]
  fn w_value_merges_fields(){
    let translator = Translator::new();

    // 1(1:1),-1000(0:2)
    let minus_thousand = Expression::new(Some(UnaryOp::Minus), BasicExpression::Number(1000));
    let value = WValue::new(number(1), Some(number(9)))
      .then(minus_thousand, Some(number(2)));
    let result = translator.evaluate_w_value(&value).unwrap();
    assert_eq!(result.sign(), Sign::Negative);
    assert_eq!(result.byte(1).value(), 15);
    assert_eq!(result.byte(2).value(), 40);
    assert_eq!(result.field(WordField::new(3, 5).unwrap()).value(), 0);

    // A later whole-word part replaces everything.
    let value = WValue::new(number(1), Some(number(9))).then(number(3), None);
    assert_eq!(translator.evaluate_w_value(&value).unwrap(), word(3));

    assert_eq!(
      translator.evaluate_w_value(&WValue::new(number(1), Some(number(7)))),
      Err(TranslateError::InvalidWValueField(7))
    );
  }

  #[test]
  fn text_is_five_characters(){
    let translator = Translator::new();
    let hello = translator.evaluate_text(&Text::new("HELLO")).unwrap();
    let codes: Vec<u8> = hello.bytes().iter().map(|b| b.value()).collect();
    assert_eq!(codes, vec![8, 5, 13, 13, 16]);

    assert_eq!(
      translator.evaluate_text(&Text::new("HI")),
      Err(TranslateError::InvalidAlfText("HI".to_string()))
    );
    assert!(translator.evaluate_text(&Text::new("hello")).is_err());
  }

  // endregion

  // region Pseudo-operations

  #[test]
  fn equ_defines_without_moving(){
    let mut translator = Translator::new();
    translator.translate_equ(&w(42), Some(&usual("X"))).unwrap();
    assert_eq!(translator.evaluate_expression(&symbol("X")).unwrap(), word(42));
    assert_eq!(translator.current_address(), 0);
    assert!(translator.is_defined_symbol(&usual("X")));

    assert_eq!(
      translator.translate_equ(&w(43), Some(&usual("X"))),
      Err(TranslateError::DuplicateSymbol { symbol: usual("X"), value: word(43) })
    );
  }

  #[test]
  fn orig_labels_the_old_address(){
    let mut translator = Translator::new();
    translator.set_current_address(10).unwrap();
    translator.translate_orig(&w(3000), Some(&usual("BUF"))).unwrap();

    assert_eq!(translator.evaluate_expression(&symbol("BUF")).unwrap(), word(10));
    assert_eq!(translator.current_address(), 3000);

    assert_eq!(translator.translate_orig(&w(4000), None), Err(TranslateError::InvalidAddress(4000)));
  }

  #[test]
  fn orig_out_of_memory_leaves_label_undefined(){
    let mut translator = Translator::with_symbols(SymbolTable::new(), 10);
    assert_eq!(
      translator.translate_orig(&w(5000), Some(&usual("FAR"))),
      Err(TranslateError::InvalidAddress(5000))
    );
    assert!(!translator.is_defined_symbol(&usual("FAR")));
    assert_eq!(translator.current_address(), 10);
  }

  #[test]
  fn con_and_alf_emit_at_current_address(){
    let mut translator = Translator::with_symbols(SymbolTable::new(), 500);

    let con = translator.translate_con(&w(7), Some(&usual("SEVEN"))).unwrap();
    assert_eq!(con, TranslatedWord { original_address: 500, value: word(7) });

    let alf = translator.translate_alf(&Text::new("  OK "), None).unwrap();
    assert_eq!(alf.original_address, 501);
    assert_eq!(alf.value.byte(3).value(), 16);

    assert_eq!(translator.current_address(), 502);
    assert_eq!(translator.evaluate_expression(&symbol("SEVEN")).unwrap(), word(500));
  }

  #[test]
  fn con_operand_sees_its_own_label(){
    let mut translator = Translator::with_symbols(SymbolTable::new(), 20);

    // X CON X
    let x = translator.translate_con(&WValue::from(symbol("X")), Some(&usual("X"))).unwrap();
    assert_eq!(x, TranslatedWord { original_address: 20, value: word(20) });

    // LINK CON LINK+1
    let link_plus_one = symbol("LINK").then(BinaryOp::Add, BasicExpression::Number(1));
    let link = translator.translate_con(&WValue::from(link_plus_one), Some(&usual("LINK"))).unwrap();
    assert_eq!(link.value, word(22));
    assert_eq!(translator.current_address(), 22);
  }

  // endregion

  // region Commands

  #[test]
  fn instruction_parts(){
    let mut translator = Translator::new();
    let field = number(1).then(BinaryOp::Field, BasicExpression::Number(3));
    let id = translator.translate_instruction(
      Operation::Lda, Some(&Address::from(number(2000))), Some(&number(2)), Some(&field), Some(&usual("L"))
    ).unwrap();

    let lda = command(&translator, id);
    assert_eq!(lda.opcode(), OpCode::Lda);
    assert_eq!(lda.address(), 2000);
    assert_eq!(lda.address_index(), 2);
    assert_eq!(lda.word_field().unwrap(), WordField::new(1, 3).unwrap());
    assert_eq!(translator.evaluate_expression(&symbol("L")).unwrap(), word(0));

    let id = translator.translate_instruction(Operation::Stj, Some(&Address::from(number(7))), None, None, None).unwrap();
    assert_eq!(command(&translator, id).field(), 2);

    let id = translator.translate_instruction(Operation::Hlt, None, None, None, None).unwrap();
    assert_eq!(command(&translator, id).to_word(), Command::new(OpCode::Special, 0, 0, 2).unwrap().to_word());
  }

  #[test]
  fn instruction_errors(){
    let mut translator = Translator::new();
    assert_eq!(
      translator.translate_instruction(Operation::Jmp, Some(&Address::from(number(5000))), None, None, None),
      Err(TranslateError::InvalidAddress(5000))
    );
    assert_eq!(
      translator.translate_instruction(Operation::Lda, Some(&Address::from(number(0))), Some(&number(64)), None, None),
      Err(TranslateError::InvalidByte(64))
    );
    // (3:1)
    assert!(translator.translate_instruction(Operation::Lda, None, None, Some(&number(25)), None).is_err());
    assert_eq!(translator.current_address(), 0);
  }

  #[test]
  fn pending_word_is_patched_once_defined(){
    let mut translator = Translator::with_symbols(SymbolTable::new(), 100);

    let jump = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("LATER"))), None, None, None).unwrap();
    assert_eq!(translator.translated_word(jump), None);
    let pending = translator.future_word(jump).unwrap();
    assert_eq!(pending.value().field(WordField::address()).value(), 0);
    assert_eq!(pending.original_address(), 100);

    // Nothing to resolve yet.
    translator.resolve_future_words().unwrap();
    assert_eq!(translator.unresolved_count(), 1);

    translator.translate_instruction(Operation::Hlt, None, None, None, Some(&usual("LATER"))).unwrap();
    translator.resolve_future_words().unwrap();

    assert_eq!(translator.unresolved_count(), 0);
    let patched = command(&translator, jump);
    assert_eq!(patched.address(), 101);
    assert_eq!(patched.opcode(), OpCode::Jump);
  }

  #[test]
  fn w_value_address(){
    let mut translator = Translator::with_symbols(SymbolTable::new(), 100);

    // LDA 1(4:4),2(5:5) packs 64 + 2 into the address.
    let packed = WValue::new(number(1), Some(number(36))).then(number(2), Some(number(45)));
    let id = translator.translate_instruction(Operation::Lda, Some(&Address::from(packed)), None, None, None).unwrap();
    assert_eq!(command(&translator, id).address(), 66);

    // JMP 0(0:2),SIZE(4:5) waits for SIZE, and for FLD used as the field.
    let pending = WValue::new(number(0), Some(number(2)))
      .then(symbol("SIZE"), Some(symbol("FLD")));
    let id = translator.translate_instruction(Operation::Jmp, Some(&Address::from(pending)), None, None, None).unwrap();
    assert!(translator.translated_word(id).is_none());

    translator.translate_equ(&w(7), Some(&usual("SIZE"))).unwrap();
    translator.resolve_future_words().unwrap();
    assert_eq!(translator.unresolved_count(), 1);

    translator.translate_equ(&w(37), Some(&usual("FLD"))).unwrap();
    translator.resolve_future_words().unwrap();
    assert_eq!(translator.unresolved_count(), 0);
    assert_eq!(command(&translator, id).address(), 7);
  }

  #[test]
  fn own_label_is_a_forward_reference(){
    let mut translator = Translator::new();
    let id = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("SELF"))), None, None, Some(&usual("SELF"))).unwrap();
    assert!(translator.translated_word(id).is_none());
    translator.resolve_future_words().unwrap();
    assert_eq!(command(&translator, id).address(), 0);
  }

  #[test]
  fn local_symbols_resolve_by_direction(){
    let mut translator = Translator::new();
    let h = local("1H");

    let first  = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("1F"))), None, None, None).unwrap();
    translator.translate_instruction(Operation::Nop, None, None, None, Some(&h)).unwrap();
    let back   = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("1B"))), None, None, None).unwrap();
    let self_b = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("1B"))), None, None, Some(&h)).unwrap();
    let last   = translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("1F"))), None, None, None).unwrap();
    translator.translate_instruction(Operation::Hlt, None, None, None, Some(&h)).unwrap();

    assert_eq!(command(&translator, back).address(), 1);
    assert_eq!(command(&translator, self_b).address(), 1);
    assert_eq!(translator.unresolved_count(), 2);

    translator.resolve_future_words().unwrap();
    assert_eq!(command(&translator, first).address(), 1);
    assert_eq!(command(&translator, last).address(), 5);
  }

  #[test]
  fn end_requires_every_symbol(){
    let mut translator = Translator::new();
    translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("NOWHERE"))), None, None, Some(&usual("START"))).unwrap();
    assert_eq!(
      translator.translate_end(&WValue::from(symbol("START")), None),
      Err(TranslateError::UndefinedSymbol(usual("NOWHERE")))
    );

    let mut translator = Translator::new();
    translator.translate_instruction(Operation::Jmp, Some(&Address::from(symbol("FIN"))), None, None, Some(&usual("START"))).unwrap();
    let end = translator.translate_end(&WValue::from(symbol("START")), Some(&usual("FIN"))).unwrap();
    assert_eq!(end, EndCode { start_address: 0 });
    assert_eq!(translator.evaluate_expression(&symbol("FIN")).unwrap(), word(1));
  }

  // endregion
}
