//! Allow-list arithmetic evaluator behind the calculator tool.
//!
//! Expressions go through a dedicated tokenizer and recursive-descent parser
//! that only know numbers, `+ - * / ^` (and `**`), parentheses, list
//! literals and the functions in [`Function`]. There is no general-purpose
//! interpreter underneath: anything the grammar does not name is a parse
//! error, so nothing outside the whitelist can ever run.
//!
//! The one special form is the phrase `"<percent>% of <number>"`, handled
//! before parsing.

mod interp;
mod lexer;
mod parser;

use thiserror::Error;

pub use interp::Value;
pub use parser::Function;

/// Filler phrases stripped from the input before evaluation.
const FILLER_PHRASES: [&str; 2] = ["what is", "calculate"];

/// Longest token stream accepted. Operator chains build a left-nested tree,
/// so this also caps how deep evaluation recurses.
const MAX_TOKENS: usize = 1024;

/// Errors produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Nothing left to evaluate after cleanup.
    #[error("empty expression")]
    Empty,

    /// A character outside the expression alphabet.
    #[error("unexpected character '{ch}' at position {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    /// A numeric literal that does not parse.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A token in a position the grammar does not allow.
    #[error("unexpected {found} at position {offset}")]
    UnexpectedToken { found: String, offset: usize },

    /// Input ended while more was expected.
    #[error("unexpected end of expression, expected {0}")]
    UnexpectedEnd(String),

    /// A name that is not one of the allowed functions.
    #[error("name '{0}' is not allowed")]
    UnknownName(String),

    /// An allowed function used without a call.
    #[error("function '{0}' must be called with arguments")]
    NotCalled(&'static str),

    /// Wrong number of arguments for a function.
    #[error("{function}() takes {expected} argument(s), {found} given")]
    Arity {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// A list where a number was needed, or the reverse.
    #[error("{context} expects {expected}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    /// `min`/`max` over an empty list.
    #[error("{0}() arg is an empty sequence")]
    EmptySequence(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    /// Mathematically undefined operation.
    #[error("math domain error: {0}")]
    Domain(String),

    /// Result overflowed or is not a number.
    #[error("result is not a finite number")]
    NonFinite,

    /// Nesting deeper than the parser allows.
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),

    /// More tokens than the evaluator accepts.
    #[error("expression longer than {0} tokens")]
    TooLong(usize),

    /// A `%` expression that is not exactly `<percent>% of <number>`.
    #[error("malformed percentage '{0}', expected '<percent>% of <number>'")]
    MalformedPercentage(String),
}

/// Evaluate a calculator expression and format the value as `Result: <value>`.
pub fn evaluate(expression: &str) -> Result<String, EvalError> {
    let cleaned = preprocess(expression);
    if cleaned.is_empty() {
        return Err(EvalError::Empty);
    }

    let value = if cleaned.contains('%') {
        Value::Number(percentage(&cleaned)?)
    } else {
        let tokens = lexer::tokenize(&cleaned)?;
        if tokens.len() > MAX_TOKENS {
            return Err(EvalError::TooLong(MAX_TOKENS));
        }
        let expr = parser::parse(&tokens)?;
        interp::eval(&expr)?
    };

    Ok(format!("Result: {}", format_value(&value)?))
}

/// Lower-case, strip filler phrases and trim.
fn preprocess(expression: &str) -> String {
    let mut cleaned = expression.to_lowercase();
    for phrase in FILLER_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    cleaned.trim().to_string()
}

/// `"<percent>% of <base>"` evaluates to `percent / 100 * base`.
///
/// Both halves must be plain numbers, so compound forms such as
/// `"15% of 100 + 5"` are rejected rather than partially evaluated.
fn percentage(cleaned: &str) -> Result<f64, EvalError> {
    let malformed = || EvalError::MalformedPercentage(cleaned.to_string());

    let mut halves = cleaned.split("of");
    let (Some(left), Some(right), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(malformed());
    };

    let left = left.trim();
    let percent_str = left.strip_suffix('%').ok_or_else(malformed)?;
    let percent: f64 = percent_str.trim().parse().map_err(|_| malformed())?;
    let base: f64 = right.trim().parse().map_err(|_| malformed())?;

    let value = percent / 100.0 * base;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

fn format_value(value: &Value) -> Result<String, EvalError> {
    match value {
        Value::Number(n) => format_number(*n),
        Value::List(items) => {
            let parts = items
                .iter()
                .map(|n| format_number(*n))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
    }
}

/// Integral values print without a fractional part; others use the
/// shortest representation that round-trips.
fn format_number(n: f64) -> Result<String, EvalError> {
    if !n.is_finite() {
        return Err(EvalError::NonFinite);
    }
    if n == 0.0 {
        return Ok("0".to_string());
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Ok(format!("{:.0}", n))
    } else {
        Ok(format!("{}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("2+2").unwrap(), "Result: 4");
        assert_eq!(evaluate("10 - 3").unwrap(), "Result: 7");
        assert_eq!(evaluate("15 / 3").unwrap(), "Result: 5");
        assert_eq!(evaluate("10 / 4").unwrap(), "Result: 2.5");
        assert_eq!(evaluate("0.1 + 0.2").unwrap(), "Result: 0.30000000000000004");
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(evaluate("15% of 850").unwrap(), "Result: 127.5");
        assert_eq!(evaluate("What is 50% of 20").unwrap(), "Result: 10");
        assert_eq!(evaluate("12.5 % OF 80").unwrap(), "Result: 10");
    }

    #[test]
    fn test_percentage_compound_rejected() {
        assert!(matches!(
            evaluate("15% of 100 + 5"),
            Err(EvalError::MalformedPercentage(_))
        ));
        assert!(matches!(
            evaluate("15% of 100 of 3"),
            Err(EvalError::MalformedPercentage(_))
        ));
    }

    #[test]
    fn test_percentage_without_of_is_error() {
        assert!(matches!(
            evaluate("50%"),
            Err(EvalError::MalformedPercentage(_))
        ));
        assert!(matches!(
            evaluate("ten% of 5"),
            Err(EvalError::MalformedPercentage(_))
        ));
    }

    #[test]
    fn test_filler_phrases_stripped() {
        assert_eq!(evaluate("Calculate 3 * 4").unwrap(), "Result: 12");
        assert_eq!(evaluate("  WHAT IS pow(2, 8)  ").unwrap(), "Result: 256");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   \t\n"), Err(EvalError::Empty));
        assert_eq!(evaluate("what is"), Err(EvalError::Empty));
    }

    #[test]
    fn test_disallowed_names_never_evaluate() {
        assert!(evaluate("__import__('os')").is_err());
        assert!(matches!(
            evaluate("__import__(1)"),
            Err(EvalError::UnknownName(_))
        ));
        assert!(evaluate("open(1)").is_err());
        assert!(evaluate("abs.__class__").is_err());
        assert!(evaluate("x = 5").is_err());
        assert!(evaluate("2; 3").is_err());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_non_ascii_operators() {
        assert!(matches!(
            evaluate("6 × 7"),
            Err(EvalError::UnexpectedCharacter { .. })
        ));
        assert!(matches!(
            evaluate("8 − 2"),
            Err(EvalError::UnexpectedCharacter { .. })
        ));
        assert!(evaluate("２+２").is_err());
    }

    #[test]
    fn test_overflow_is_error() {
        assert_eq!(evaluate("10 ^ 400"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_list_result_formatting() {
        assert_eq!(evaluate("[1, 2.5]").unwrap(), "Result: [1, 2.5]");
    }

    #[test]
    fn test_large_and_negative_values() {
        assert_eq!(evaluate("-3 * 2").unwrap(), "Result: -6");
        assert_eq!(evaluate("0 * -1").unwrap(), "Result: 0");
        assert_eq!(evaluate("2 ^ 10").unwrap(), "Result: 1024");
    }

    #[test]
    fn test_long_operator_chain_rejected() {
        let chain = format!("{}1", "1+".repeat(20_000));
        assert_eq!(evaluate(&chain), Err(EvalError::TooLong(MAX_TOKENS)));

        let product = format!("{}2", "1*".repeat(30_000));
        assert_eq!(evaluate(&product), Err(EvalError::TooLong(MAX_TOKENS)));
    }

    #[test]
    fn test_chain_under_limit_evaluates() {
        let chain = format!("{}1", "1+".repeat(500));
        assert_eq!(evaluate(&chain).unwrap(), "Result: 501");
    }
}
