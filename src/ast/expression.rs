//! Expression nodes.
use std::fmt::{self, Display};

use crate::lexer::tokens::{Token, TokenKind};

use super::{BlockStatement, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(Boolean),
    Prefix(Box<PrefixExpression>),
    Infix(Box<InfixExpression>),
    If(Box<IfExpression>),
    Function(FunctionLiteral),
    Call(Box<CallExpression>),
}
impl Node for Expression {
    fn token_literal(&self) -> &str {
        let token = match self {
            Expression::Identifier(id) => &id.token,
            Expression::IntegerLiteral(int) => &int.token,
            Expression::Boolean(b) => &b.token,
            Expression::Prefix(pre) => &pre.token,
            Expression::Infix(inf) => &inf.token,
            Expression::If(if_expr) => &if_expr.token,
            Expression::Function(fun) => &fun.token,
            Expression::Call(call) => &call.token,
        };
        &token.literal
    }
}
impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Identifier(id) => write!(f, "{}", id),
            Expression::IntegerLiteral(int) => f.write_str(&int.token.literal),
            Expression::Boolean(b) => f.write_str(&b.token.literal),
            Expression::Prefix(pre) => write!(f, "{}", pre),
            Expression::Infix(inf) => write!(f, "{}", inf),
            Expression::If(if_expr) => write!(f, "{}", if_expr),
            Expression::Function(fun) => write!(f, "{}", fun),
            Expression::Call(call) => write!(f, "{}", call),
        }
    }
}

/// A reference to a bound name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}
impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }
}
impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}
impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Not,
    Negate,
}
impl PrefixOperator {
    pub fn for_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(PrefixOperator::Not),
            TokenKind::Minus => Some(PrefixOperator::Negate),
            _ => None,
        }
    }
}
impl Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PrefixOperator::Not => "!",
            PrefixOperator::Negate => "-",
        })
    }
}

/// `<operator><right>`, e.g. `!ok` or `-5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: PrefixOperator,
    pub right: Expression,
}
impl Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}
impl InfixOperator {
    pub fn for_token(kind: TokenKind) -> Option<Self> {
        use InfixOperator::*;
        Some(match kind {
            TokenKind::Plus => Add,
            TokenKind::Minus => Subtract,
            TokenKind::Asterisk => Multiply,
            TokenKind::Slash => Divide,
            TokenKind::LessThan => LessThan,
            TokenKind::GreaterThan => GreaterThan,
            TokenKind::Equal => Equal,
            TokenKind::NotEqual => NotEqual,
            _ => return None,
        })
    }
}
impl Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use InfixOperator::*;
        let op = match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            LessThan => "<",
            GreaterThan => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        f.write_str(op)
    }
}

/// `<left> <operator> <right>`. The token is the operator token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Expression,
    pub operator: InfixOperator,
    pub right: Expression,
}
impl Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// `if (<condition>) { <consequence> } else { <alternative> }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}
impl Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}
impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.token.literal,
            join(&self.parameters),
            self.body
        )
    }
}

/// `<function>(<arguments>)`. The token is the opening parenthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Expression,
    pub arguments: Vec<Expression>,
}
impl Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.function, join(&self.arguments))
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
