/*!
  Token trees of MIXAL operands, as produced by a front end.

  An `Expression` is a chain `[op] e1 b1 e2 b2 ... en` evaluated strictly left to right with no
  precedence: the unary operator applies to the first operand only, and every token but the
  last carries the binary operator joining it to the next one. The builders keep that shape, so
  an `Expression` is always well formed.

  A `WValue` is a comma separated list `E1(F1),E2(F2),...` where each part is stored into the
  field `Fi` of the result.
*/

use crate::mixal::Symbol;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
  Plus,
  Minus
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
  Add,
  Subtract,
  Multiply,
  /// Integer division.
  Divide,
  /// `a // b`: `(a * 64^5) / b`.
  DoubleSlash,
  /// `a : b`: `8a + b`.
  Field
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BasicExpression {
  /// `*`
  CurrentAddress,
  Number(u64),
  Symbol(Symbol)
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExpressionToken {
  pub unary_op   : Option<UnaryOp>,
  pub basic_expr : BasicExpression,
  /// Joins this token to the next one; `None` on the last token.
  pub binary_op  : Option<BinaryOp>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expression {
  tokens: Vec<ExpressionToken>
}

impl Expression {

  pub fn new(unary_op: Option<UnaryOp>, basic_expr: BasicExpression) -> Expression {
    Expression {
      tokens: vec![ExpressionToken { unary_op, basic_expr, binary_op: None }]
    }
  }

  pub fn number(value: u64) -> Expression {
    Expression::new(None, BasicExpression::Number(value))
  }

  pub fn symbol(symbol: Symbol) -> Expression {
    Expression::new(None, BasicExpression::Symbol(symbol))
  }

  pub fn current_address() -> Expression {
    Expression::new(None, BasicExpression::CurrentAddress)
  }

  /// Appends `op basic_expr` to the chain.
  pub fn then(mut self, op: BinaryOp, basic_expr: BasicExpression) -> Expression {
    if let Some(last) = self.tokens.last_mut() {
      last.binary_op = Some(op);
    }
    self.tokens.push(ExpressionToken { unary_op: None, basic_expr, binary_op: None });
    self
  }

  pub fn tokens(&self) -> &[ExpressionToken] {
    &self.tokens
  }

  /// Every symbol the expression refers to, in order.
  pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
    self.tokens.iter().filter_map(|token| match &token.basic_expr {
      BasicExpression::Symbol(symbol) => Some(symbol),
      _                               => None
    })
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WValueToken {
  pub expression : Expression,
  /// `None` means the whole word, `(0:5)`.
  pub field      : Option<Expression>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WValue {
  tokens: Vec<WValueToken>
}

impl WValue {

  pub fn new(expression: Expression, field: Option<Expression>) -> WValue {
    WValue {
      tokens: vec![WValueToken { expression, field }]
    }
  }

  pub fn then(mut self, expression: Expression, field: Option<Expression>) -> WValue {
    self.tokens.push(WValueToken { expression, field });
    self
  }

  pub fn tokens(&self) -> &[WValueToken] {
    &self.tokens
  }

  /// Every symbol in the parts and in their fields, in order.
  pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
    self.tokens.iter().flat_map(|token| {
      token.expression
           .symbols()
           .chain(token.field.iter().flat_map(|field| field.symbols()))
    })
  }
}

impl From<Expression> for WValue {
  fn from(expression: Expression) -> Self {
    WValue::new(expression, None)
  }
}

/// The address part of a command: an expression, or a W-value such as `1(1:2),2(4:5)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Address {
  Expression(Expression),
  WValue(WValue)
}

impl Address {
  pub fn symbols(&self) -> Box<dyn Iterator<Item = &Symbol> + '_> {
    match self {
      Address::Expression(expression) => Box::new(expression.symbols()),
      Address::WValue(w_value)        => Box::new(w_value.symbols())
    }
  }
}

impl From<Expression> for Address {
  fn from(expression: Expression) -> Self {
    Address::Expression(expression)
  }
}

impl From<WValue> for Address {
  fn from(w_value: WValue) -> Self {
    Address::WValue(w_value)
  }
}

/// The operand of `ALF`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Text(pub String);

impl Text {
  pub fn new(text: &str) -> Text {
    Text(text.to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}
