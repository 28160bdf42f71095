//! Script execution.

use std::collections::HashMap;
use std::io::Write;

use radix_bignum::{check_base, BigNumber, Digit};
use radix_types::ScriptError;

use crate::script::{BinaryOp, Expr, Script, Statement, UnaryOp};

/// Runs a [`Script`] against a variable table, writing prints to `out`.
pub struct Executor<W: Write> {
    out: W,
    base: Digit,
    max_steps: Option<u64>,
    vars: HashMap<char, BigNumber>,
}

impl<W: Write> Executor<W> {
    /// Literals are built in `base`.
    pub fn new(out: W, base: Digit) -> Result<Self, ScriptError> {
        check_base(base)?;
        Ok(Self {
            out,
            base,
            max_steps: None,
            vars: HashMap::new(),
        })
    }

    /// Stop with [`ScriptError::StepLimitExceeded`] after this many statements.
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Execute from the lowest line number until control runs off the end.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = script.len(), base = self.base))]
    pub fn run(&mut self, script: &Script) -> Result<(), ScriptError> {
        let mut current = script.first_line();
        let mut steps: u64 = 0;
        while let Some(line) = current {
            if self.max_steps.is_some_and(|max| steps >= max) {
                return Err(ScriptError::StepLimitExceeded(steps));
            }
            steps += 1;
            let statement = script
                .statement(line)
                .ok_or(ScriptError::UnknownLine { from: line, to: line })?;
            current = match self.step(line, statement)? {
                Some(target) => {
                    if script.statement(target).is_none() {
                        return Err(ScriptError::UnknownLine {
                            from: line,
                            to: target,
                        });
                    }
                    tracing::trace!(from = line, to = target, "jump");
                    Some(target)
                }
                None => script.line_after(line),
            };
        }
        tracing::debug!(steps, "script finished");
        self.out.flush()?;
        Ok(())
    }

    /// Execute one statement, returning a jump target if control transfers.
    fn step(&mut self, line: usize, statement: &Statement) -> Result<Option<usize>, ScriptError> {
        match statement {
            Statement::Assign(target, expr) => {
                let value = self.evaluate(line, expr)?;
                self.vars.insert(*target, value);
            }
            Statement::Print(var) => {
                let text = self.lookup(line, *var)?.render_decimal();
                writeln!(self.out, "{text}")?;
            }
            Statement::PrintRaw(var) => {
                let text = self.lookup(line, *var)?.render_raw();
                writeln!(self.out, "{text}")?;
            }
            Statement::Jump {
                var,
                if_nonzero,
                if_zero,
            } => {
                let value = self.lookup(line, *var)?;
                return Ok(if value.is_zero() { *if_zero } else { Some(*if_nonzero) });
            }
        }
        Ok(None)
    }

    fn evaluate(&self, line: usize, expr: &Expr) -> Result<BigNumber, ScriptError> {
        let value = match expr {
            Expr::Literal(digits) => BigNumber::from_decimal_in(digits, self.base)?,
            Expr::Unary(var, op) => {
                let a = self.lookup(line, *var)?;
                match op {
                    UnaryOp::Factorial => a.factorial()?,
                    UnaryOp::SquareRoot => a.integer_square_root()?,
                }
            }
            Expr::Binary(left, op, right) => {
                let a = self.lookup(line, *left)?;
                let b = self.lookup(line, *right)?;
                match op {
                    BinaryOp::Add => a.add(b),
                    BinaryOp::Subtract => a.subtract(b),
                    BinaryOp::Multiply => a.multiply(b),
                    BinaryOp::Power => a.power_big(b)?,
                    BinaryOp::Divide => a.divide(b)?.quotient,
                    BinaryOp::Modulo => a.modulo(b)?,
                }
            }
        };
        Ok(value)
    }

    fn lookup(&self, line: usize, name: char) -> Result<&BigNumber, ScriptError> {
        self.vars
            .get(&name)
            .ok_or(ScriptError::UndefinedVariable { line, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse;
    use radix_bignum::{ArithError, DEFAULT_BASE};

    fn run_script(source: &str, base: Digit) -> Result<String, ScriptError> {
        let script = parse(source)?;
        let mut executor = Executor::new(Vec::new(), base)?;
        executor.run(&script)?;
        Ok(String::from_utf8(executor.out).unwrap())
    }

    #[test]
    fn test_arithmetic_and_printing() {
        let out = run_script(
            "1 a=999 2 b=1 3 c=a+b 4 c 5 d=a*b 6 d 7 e=c-a 8 e 9 f=a/b 10 f",
            DEFAULT_BASE,
        )
        .unwrap();
        assert_eq!(out, "1000\n999\n1\n999\n");
    }

    #[test]
    fn test_every_operator() {
        let out = run_script(
            "1 a=100 2 b=7 3 c=a/b 4 c 5 c=a%b 6 c 7 c=b^b 8 c 9 c=b! 10 c 11 c=a~ 12 c 13 c=b-a 14 c",
            10,
        )
        .unwrap();
        assert_eq!(out, "14\n2\n823543\n5040\n10\n-93\n");
    }

    #[test]
    fn test_print_raw_uses_configured_base() {
        let out = run_script("1 a=1234 2 a) 3 b=0 4 b)", 10).unwrap();
        assert_eq!(out, "10:4 3 2 1\n10:0\n");
    }

    #[test]
    fn test_countdown_loop() {
        // Sum 1..=10 by counting down.
        let source = "1 n=10 2 s=0 3 o=1 4 s=s+n 5 n=n-o 6 n?4 7 s";
        assert_eq!(run_script(source, DEFAULT_BASE).unwrap(), "55\n");
        assert_eq!(run_script(source, 2).unwrap(), "55\n");
    }

    #[test]
    fn test_two_way_jump() {
        let source = "10 z=0 20 z?30:40 30 z 40 o=1 50 o?60:30 60 o";
        assert_eq!(run_script(source, 10).unwrap(), "1\n");
    }

    #[test]
    fn test_sparse_line_numbers() {
        let source = "100 a=5 7 b=2 500 c=a*b 300 c=a+b 900 c";
        // 7, 100, 300, 500, 900
        assert_eq!(run_script(source, 10).unwrap(), "10\n");
    }

    #[test]
    fn test_undefined_variable() {
        let err = run_script("1 a=1 2 b=a+c", 10).unwrap_err();
        assert!(matches!(err, ScriptError::UndefinedVariable { line: 2, name: 'c' }));
    }

    #[test]
    fn test_jump_to_unknown_line() {
        let err = run_script("1 a=1 2 a?5", 10).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownLine { from: 2, to: 5 }));
    }

    #[test]
    fn test_arithmetic_errors_propagate() {
        let err = run_script("1 a=1 2 b=0 3 c=a/b", 10).unwrap_err();
        assert!(matches!(err, ScriptError::ArithError(ArithError::DivideByZero)));

        let err = run_script("1 a=1 2 b=2 3 c=a-b 4 d=c~", 10).unwrap_err();
        assert!(matches!(err, ScriptError::ArithError(ArithError::NegativeRadicand)));

        let err = run_script("1 a=1 2 b=2 3 c=a-b 4 d=c!", 10).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::ArithError(ArithError::NegativeFactorialArgument)
        ));
    }

    #[test]
    fn test_step_limit() {
        let script = parse("1 a=1 2 a?1").unwrap();
        let mut executor = Executor::new(Vec::new(), 10).unwrap().with_max_steps(Some(50));
        let err = executor.run(&script).unwrap_err();
        assert!(matches!(err, ScriptError::StepLimitExceeded(50)));
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            Executor::new(Vec::new(), 1),
            Err(ScriptError::ArithError(ArithError::InvalidBase(1)))
        ));
    }

    #[test]
    fn test_variables_are_kept() {
        let script = parse("1 a=6 2 b=a!").unwrap();
        let mut executor = Executor::new(Vec::new(), 10).unwrap();
        executor.run(&script).unwrap();
        assert_eq!(executor.vars.get(&'b'), Some(&BigNumber::from_u64(720)));
        assert_eq!(executor.vars.get(&'z'), None);
    }
}
