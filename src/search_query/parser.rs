use serde::Serialize;

use super::lexer::Token;

/// Boolean condition tree produced by the parser.
///
/// Serializes to the `{"type": "filter", "value": ...}` /
/// `{"type": "and", "left": ..., "right": ...}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Condition {
    Filter {
        value: String,
    },
    And {
        left: Box<Condition>,
        right: Box<Condition>,
    },
    Or {
        left: Box<Condition>,
        right: Box<Condition>,
    },
}

impl Condition {
    pub fn filter(value: impl Into<String>) -> Self {
        Condition::Filter {
            value: value.into(),
        }
    }

    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Join two optional operands. A missing side (dangling operator, empty group)
/// leaves the other side alone.
fn join(
    left: Option<Condition>,
    right: Option<Condition>,
    op: fn(Condition, Condition) -> Condition,
) -> Option<Condition> {
    match (left, right) {
        (Some(l), Some(r)) => Some(op(l, r)),
        (l, None) => l,
        (None, r) => r,
    }
}

/// Groups nested deeper than this are flattened into their parent.
const MAX_GROUP_DEPTH: usize = 128;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// or_expr = and_expr ("or" and_expr)*
    fn parse_or(&mut self) -> Option<Condition> {
        let mut left = self.parse_and();
        while matches!(self.peek(), Some(Token::Or)) {
            self.advance();
            let right = self.parse_and();
            left = join(left, right, Condition::or);
        }
        left
    }

    /// and_expr = term ("and" term)*
    fn parse_and(&mut self) -> Option<Condition> {
        let mut left = self.parse_term();
        while matches!(self.peek(), Some(Token::And)) {
            self.advance();
            let right = self.parse_term();
            left = join(left, right, Condition::and);
        }
        left
    }

    /// term = "(" or_expr ")"? | filter
    ///
    /// Stray `and`/`or` in term position are skipped. A `)` is left for the
    /// enclosing group to consume.
    fn parse_term(&mut self) -> Option<Condition> {
        loop {
            match self.peek()? {
                Token::LParen if self.depth < MAX_GROUP_DEPTH => {
                    self.advance();
                    self.depth += 1;
                    let expr = self.parse_or();
                    self.depth -= 1;
                    if matches!(self.peek(), Some(Token::RParen)) {
                        self.advance();
                    }
                    return expr;
                }
                Token::RParen => return None,
                Token::LParen | Token::And | Token::Or => {
                    self.advance();
                }
                Token::Filter(_) => {
                    return match self.advance() {
                        Some(Token::Filter(value)) => Some(Condition::Filter { value }),
                        _ => None,
                    };
                }
            }
        }
    }
}

/// Parse a token stream into top-level conditions.
///
/// Never fails. Adjacent expressions not joined by an operator become
/// separate roots; an empty stream yields no roots.
pub fn parse(tokens: Vec<Token>) -> Vec<Condition> {
    let mut parser = Parser::new(tokens);
    let mut roots = Vec::new();

    while !parser.is_done() {
        match parser.parse_or() {
            Some(expr) => roots.push(expr),
            None => {
                // unmatched `)` at top level
                if matches!(parser.peek(), Some(Token::RParen)) {
                    parser.advance();
                }
            }
        }
    }

    roots
}
