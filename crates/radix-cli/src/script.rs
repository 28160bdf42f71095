//! Script parsing.
//!
//! A script is a whitespace-separated sequence of `<line> <statement>`
//! pairs. Statements never contain spaces:
//!
//! ```text
//! x=123       assign a decimal literal
//! x=y+z       binary operation: + - * ^ / %
//! x=y!        factorial
//! x=y~        integer square root
//! x           print decimal value
//! x)          print raw digit dump
//! x?L         jump to L when x is nonzero
//! x?L1:L2     jump to L1 when x is nonzero, else to L2
//! ```

use std::collections::BTreeMap;

use radix_types::ScriptError;

/// Highest line number a script may use.
pub const MAX_LINE: usize = 1000;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Power,
    Divide,
    Modulo,
}

impl BinaryOp {
    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '^' => Some(Self::Power),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }
}

/// Unary postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Factorial,
    SquareRoot,
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Decimal literal, kept as text until execution picks the radix.
    Literal(String),
    Binary(char, BinaryOp, char),
    Unary(char, UnaryOp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign(char, Expr),
    Print(char),
    PrintRaw(char),
    Jump {
        var: char,
        if_nonzero: usize,
        if_zero: Option<usize>,
    },
}

/// A parsed program, ordered by line number.
#[derive(Debug, Default)]
pub struct Script {
    lines: BTreeMap<usize, Statement>,
}

impl Script {
    pub fn first_line(&self) -> Option<usize> {
        self.lines.keys().next().copied()
    }

    /// Next line number strictly above `line`.
    pub fn line_after(&self, line: usize) -> Option<usize> {
        self.lines.range(line + 1..).next().map(|(&n, _)| n)
    }

    pub fn statement(&self, line: usize) -> Option<&Statement> {
        self.lines.get(&line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Parse a whole program. Nothing is executed if any line is malformed.
pub fn parse(source: &str) -> Result<Script, ScriptError> {
    let mut script = Script::default();
    let mut tokens = source.split_whitespace();
    while let Some(number) = tokens.next() {
        let line = parse_line_number(number)?;
        let text = tokens.next().ok_or_else(|| ScriptError::MalformedStatement {
            line,
            text: String::new(),
        })?;
        let statement = parse_statement(line, text)?;
        if script.lines.insert(line, statement).is_some() {
            return Err(ScriptError::DuplicateLine(line));
        }
    }
    tracing::debug!(lines = script.len(), "parsed script");
    Ok(script)
}

fn parse_line_number(token: &str) -> Result<usize, ScriptError> {
    let line: usize = token
        .parse()
        .map_err(|_| ScriptError::InvalidLineNumber(token.to_string()))?;
    if line == 0 {
        return Err(ScriptError::InvalidLineNumber(token.to_string()));
    }
    if line > MAX_LINE {
        return Err(ScriptError::LineNumberTooLarge {
            line,
            max: MAX_LINE,
        });
    }
    Ok(line)
}

fn parse_statement(line: usize, text: &str) -> Result<Statement, ScriptError> {
    let malformed = || ScriptError::MalformedStatement {
        line,
        text: text.to_string(),
    };
    let chars: Vec<char> = text.chars().collect();
    let var = variable(chars.first().copied()).ok_or_else(malformed)?;

    let statement = match &chars[1..] {
        [] => Statement::Print(var),
        [')'] => Statement::PrintRaw(var),
        ['=', rhs @ ..] => Statement::Assign(var, parse_expr(rhs).ok_or_else(malformed)?),
        ['?', targets @ ..] => {
            let targets: String = targets.iter().collect();
            let (if_nonzero, if_zero) = match targets.split_once(':') {
                Some((nonzero, zero)) => (nonzero, Some(zero)),
                None => (targets.as_str(), None),
            };
            Statement::Jump {
                var,
                if_nonzero: parse_line_number(if_nonzero)?,
                if_zero: if_zero.map(parse_line_number).transpose()?,
            }
        }
        _ => return Err(malformed()),
    };
    Ok(statement)
}

fn parse_expr(rhs: &[char]) -> Option<Expr> {
    match rhs {
        [] => None,
        digits if digits.iter().all(char::is_ascii_digit) => {
            Some(Expr::Literal(digits.iter().collect()))
        }
        [a, '!'] => Some(Expr::Unary(variable(Some(*a))?, UnaryOp::Factorial)),
        [a, '~'] => Some(Expr::Unary(variable(Some(*a))?, UnaryOp::SquareRoot)),
        [a, op, b] => Some(Expr::Binary(
            variable(Some(*a))?,
            BinaryOp::from_symbol(*op)?,
            variable(Some(*b))?,
        )),
        _ => None,
    }
}

fn variable(c: Option<char>) -> Option<char> {
    c.filter(char::is_ascii_alphabetic)
}
