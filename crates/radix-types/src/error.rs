/// Arithmetic engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    // Operation errors
    #[error("division by zero")]
    DivideByZero,
    #[error("square root of a negative number")]
    NegativeRadicand,
    #[error("factorial of a negative number")]
    NegativeFactorialArgument,
    #[error("negative exponent")]
    NegativeExponent,

    // Construction errors
    #[error("invalid digit {0:?} in decimal literal")]
    InvalidDigit(char),
    #[error("empty decimal literal")]
    EmptyLiteral,
    #[error("invalid base {0}: must be at least 2")]
    InvalidBase(u64),
    #[error("digit {digit} out of range for base {base}")]
    DigitOutOfRange { digit: u64, base: u64 },

    // Digit view errors
    #[error("digit cursor at position {position} cannot leave the significant range of length {len}")]
    CursorExhausted { position: usize, len: usize },
}

/// Script parsing and execution errors.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid line number {0:?}")]
    InvalidLineNumber(String),
    #[error("line number {line} exceeds the maximum of {max}")]
    LineNumberTooLarge { line: usize, max: usize },
    #[error("duplicate line number {0}")]
    DuplicateLine(usize),
    #[error("line {line}: malformed statement {text:?}")]
    MalformedStatement { line: usize, text: String },
    #[error("line {line}: undefined variable '{name}'")]
    UndefinedVariable { line: usize, name: char },
    #[error("line {from}: jump to unknown line {to}")]
    UnknownLine { from: usize, to: usize },
    #[error("step limit of {0} statements exceeded")]
    StepLimitExceeded(u64),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("arithmetic error: {0}")]
    ArithError(#[from] ArithError),
}
