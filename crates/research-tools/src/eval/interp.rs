//! Evaluation of a parsed expression tree.

use super::parser::{BinOp, Expr, Function};
use super::EvalError;

/// A runtime value: calculator expressions only ever produce numbers and
/// flat lists of numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    List(Vec<f64>),
}

impl Value {
    fn number(self, context: &'static str) -> Result<f64, EvalError> {
        match self {
            Value::Number(n) => Ok(n),
            Value::List(_) => Err(EvalError::TypeMismatch {
                context,
                expected: "a number",
            }),
        }
    }
}

pub(crate) fn eval(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::List(items) => {
            let values = items
                .iter()
                .map(|item| eval(item)?.number("list element"))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(values))
        }
        Expr::Neg(inner) => Ok(Value::Number(-eval(inner)?.number("unary '-'")?)),
        Expr::Binary { op, lhs, rhs } => {
            let context = op_name(*op);
            let lhs = eval(lhs)?.number(context)?;
            let rhs = eval(rhs)?.number(context)?;
            binary(*op, lhs, rhs).map(Value::Number)
        }
        Expr::Call { function, args } => {
            let args = args.iter().map(eval).collect::<Result<Vec<_>, _>>()?;
            call(*function, args)
        }
    }
}

fn op_name(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "'+'",
        BinOp::Sub => "'-'",
        BinOp::Mul => "'*'",
        BinOp::Div => "'/'",
        BinOp::Pow => "'^'",
    }
}

fn binary(op: BinOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(lhs + rhs),
        BinOp::Sub => Ok(lhs - rhs),
        BinOp::Mul => Ok(lhs * rhs),
        BinOp::Div => {
            if rhs == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        BinOp::Pow => power(lhs, rhs),
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::Domain(
            "negative number raised to a fractional power".to_string(),
        ));
    }
    Ok(base.powf(exponent))
}

fn arity(function: Function, expected: &'static str, found: usize) -> EvalError {
    EvalError::Arity {
        function: function.name(),
        expected,
        found,
    }
}

fn call(function: Function, mut args: Vec<Value>) -> Result<Value, EvalError> {
    let name = function.name();
    match function {
        Function::Abs => {
            let [x] = take::<1>(&mut args).ok_or_else(|| arity(function, "1", args.len()))?;
            Ok(Value::Number(x.number(name)?.abs()))
        }
        Function::Round => match args.len() {
            1 | 2 => {
                let x = args.remove(0).number(name)?;
                let digits = match args.pop() {
                    Some(d) => Some(d.number(name)?),
                    None => None,
                };
                round(x, digits).map(Value::Number)
            }
            n => Err(arity(function, "1 or 2", n)),
        },
        Function::Min | Function::Max => {
            let values = iterable_or_numbers(function, args)?;
            if values.is_empty() {
                return Err(EvalError::EmptySequence(name));
            }
            let pick: fn(f64, f64) -> f64 = if function == Function::Min {
                f64::min
            } else {
                f64::max
            };
            let first = values[0];
            Ok(Value::Number(values[1..].iter().copied().fold(first, pick)))
        }
        Function::Sum => match args.len() {
            1 | 2 => {
                let start = match args.len() {
                    2 => args.pop().map(|v| v.number(name)).transpose()?.unwrap_or(0.0),
                    _ => 0.0,
                };
                match args.remove(0) {
                    Value::List(values) => Ok(Value::Number(values.iter().sum::<f64>() + start)),
                    Value::Number(_) => Err(EvalError::TypeMismatch {
                        context: name,
                        expected: "a list",
                    }),
                }
            }
            n => Err(arity(function, "1 or 2", n)),
        },
        Function::Pow => {
            let [base, exponent] =
                take::<2>(&mut args).ok_or_else(|| arity(function, "2", args.len()))?;
            power(base.number(name)?, exponent.number(name)?).map(Value::Number)
        }
        Function::Len => {
            let [x] = take::<1>(&mut args).ok_or_else(|| arity(function, "1", args.len()))?;
            match x {
                Value::List(values) => Ok(Value::Number(values.len() as f64)),
                Value::Number(_) => Err(EvalError::TypeMismatch {
                    context: name,
                    expected: "a list",
                }),
            }
        }
    }
}

/// Move exactly `N` arguments out of `args`, or leave it untouched.
fn take<const N: usize>(args: &mut Vec<Value>) -> Option<[Value; N]> {
    if args.len() != N {
        return None;
    }
    std::mem::take(args).try_into().ok()
}

/// `min`/`max` accept a single list or two or more numbers.
fn iterable_or_numbers(function: Function, args: Vec<Value>) -> Result<Vec<f64>, EvalError> {
    match args.len() {
        0 => Err(arity(function, "at least 1", 0)),
        1 => match args.into_iter().next() {
            Some(Value::List(values)) => Ok(values),
            _ => Err(EvalError::TypeMismatch {
                context: function.name(),
                expected: "a list or two or more numbers",
            }),
        },
        _ => args
            .into_iter()
            .map(|v| v.number(function.name()))
            .collect(),
    }
}

/// Round half to even, optionally at `digits` decimal places.
fn round(x: f64, digits: Option<f64>) -> Result<f64, EvalError> {
    let Some(digits) = digits else {
        return Ok(x.round_ties_even());
    };
    if digits.fract() != 0.0 {
        return Err(EvalError::TypeMismatch {
            context: "round",
            expected: "an integer number of digits",
        });
    }
    let digits = digits.clamp(-308.0, 308.0) as i32;
    let rounded = if digits >= 0 {
        let scale = 10f64.powi(digits);
        (x * scale).round_ties_even() / scale
    } else {
        let factor = 10f64.powi(-digits);
        (x / factor).round_ties_even() * factor
    };
    // Scaling can overflow for huge inputs; those have nothing to round.
    Ok(if rounded.is_finite() { rounded } else { x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::lexer::tokenize;
    use crate::eval::parser::parse;

    fn run(source: &str) -> Result<Value, EvalError> {
        eval(&parse(&tokenize(source)?)?)
    }

    fn num(source: &str) -> f64 {
        match run(source) {
            Ok(Value::Number(n)) => n,
            other => panic!("{} evaluated to {:?}", source, other),
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(num("2 + 3 * 4"), 14.0);
        assert_eq!(num("(2 + 3) * 4"), 20.0);
        assert_eq!(num("10 / 4"), 2.5);
        assert_eq!(num("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(num("-2 ^ 2"), -4.0);
        assert_eq!(num("2 ** -1"), 0.5);
        assert_eq!(num("--3"), 3.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(run("1/0"), Err(EvalError::DivisionByZero)));
        assert!(matches!(run("1/(2-2)"), Err(EvalError::DivisionByZero)));
        assert!(matches!(run("0^-1"), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn test_whitelisted_functions() {
        assert_eq!(num("abs(-5)"), 5.0);
        assert_eq!(num("pow(2, 8)"), 256.0);
        assert_eq!(num("min(3, 1, 2)"), 1.0);
        assert_eq!(num("max([3, 9, 2])"), 9.0);
        assert_eq!(num("sum([1, 2, 3])"), 6.0);
        assert_eq!(num("sum([1, 2], 10)"), 13.0);
        assert_eq!(num("len([4, 5, 6, 7])"), 4.0);
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(num("round(2.5)"), 2.0);
        assert_eq!(num("round(3.5)"), 4.0);
        assert_eq!(num("round(3.14159, 2)"), 3.14);
        assert_eq!(num("round(1234, -2)"), 1200.0);
    }

    #[test]
    fn test_type_and_arity_errors() {
        assert!(matches!(run("abs(1, 2)"), Err(EvalError::Arity { .. })));
        assert!(matches!(run("pow(2)"), Err(EvalError::Arity { .. })));
        assert!(matches!(run("len(5)"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(run("sum(1, 2)"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(run("max(5)"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(run("min([])"), Err(EvalError::EmptySequence("min"))));
        assert!(matches!(run("[1, 2] + 1"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(run("[[1]]"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(run("round(2.5, 0.5)"), Err(EvalError::TypeMismatch { .. })));
    }

    #[test]
    fn test_fractional_power_of_negative() {
        assert!(matches!(run("(-8) ^ 0.5"), Err(EvalError::Domain(_))));
    }

    #[test]
    fn test_list_value() {
        assert_eq!(run("[1, 2]").unwrap(), Value::List(vec![1.0, 2.0]));
    }
}
