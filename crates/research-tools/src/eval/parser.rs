//! Recursive-descent parser producing a closed expression tree.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | FUNCTION '(' args? ')' | '(' expr ')' | '[' args? ']'
//! args    := expr (',' expr)*
//! ```
//!
//! Names are resolved against [`Function`] while parsing, so a tree that
//! parses successfully can only contain numbers, lists, arithmetic and
//! whitelisted calls.

use super::lexer::{Token, TokenKind};
use super::EvalError;

/// Maximum nesting of parentheses, brackets and unary operators.
const MAX_DEPTH: usize = 64;

/// The complete set of callable functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Round,
    Min,
    Max,
    Sum,
    Pow,
    Len,
}

impl Function {
    /// Every callable function, in documentation order.
    pub const ALL: [Function; 7] = [
        Function::Abs,
        Function::Round,
        Function::Min,
        Function::Max,
        Function::Sum,
        Function::Pow,
        Function::Len,
    ];

    /// Resolve a name against the whitelist.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "abs" => Some(Function::Abs),
            "round" => Some(Function::Round),
            "min" => Some(Function::Min),
            "max" => Some(Function::Max),
            "sum" => Some(Function::Sum),
            "pow" => Some(Function::Pow),
            "len" => Some(Function::Len),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Abs => "abs",
            Function::Round => "round",
            Function::Min => "min",
            Function::Max => "max",
            Function::Sum => "sum",
            Function::Pow => "pow",
            Function::Len => "len",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number(f64),
    List(Vec<Expr>),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

/// Parse a token stream into a single expression.
pub(crate) fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(EvalError::UnexpectedToken {
            found: token.kind.describe(),
            offset: token.offset,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), EvalError> {
        match self.next() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(EvalError::UnexpectedToken {
                found: token.kind.describe(),
                offset: token.offset,
            }),
            None => Err(EvalError::UnexpectedEnd(kind.describe())),
        }
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinOp::Div
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        if self.eat(&TokenKind::Minus) {
            self.enter()?;
            let operand = self.unary()?;
            self.leave();
            return Ok(Expr::Neg(Box::new(operand)));
        }
        if self.eat(&TokenKind::Plus) {
            self.enter()?;
            let operand = self.unary();
            self.leave();
            return operand;
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Power) {
            // Right-associative, and the exponent may carry its own sign.
            self.enter()?;
            let exponent = self.unary()?;
            self.leave();
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        let token = self
            .next()
            .ok_or_else(|| EvalError::UnexpectedEnd("a number".to_string()))?;

        match &token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(*value)),
            TokenKind::LParen => {
                self.enter()?;
                let inner = self.expr()?;
                self.expect(TokenKind::RParen)?;
                self.leave();
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.enter()?;
                let items = self.arguments(TokenKind::RBracket)?;
                self.leave();
                Ok(Expr::List(items))
            }
            TokenKind::Ident(name) => {
                let function = Function::from_name(name)
                    .ok_or_else(|| EvalError::UnknownName(name.clone()))?;
                if !self.eat(&TokenKind::LParen) {
                    return Err(EvalError::NotCalled(function.name()));
                }
                self.enter()?;
                let args = self.arguments(TokenKind::RParen)?;
                self.leave();
                Ok(Expr::Call { function, args })
            }
            other => Err(EvalError::UnexpectedToken {
                found: other.describe(),
                offset: token.offset,
            }),
        }
    }

    /// Comma-separated expressions up to and including `close`.
    fn arguments(&mut self, close: TokenKind) -> Result<Vec<Expr>, EvalError> {
        let mut items = Vec::new();
        if self.eat(&close) {
            return Ok(items);
        }
        loop {
            items.push(self.expr()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(close)?;
            return Ok(items);
        }
    }
}
