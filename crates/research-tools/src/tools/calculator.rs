//! Calculator tool backed by the allow-list evaluator.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ToolError;
use crate::eval;
use crate::tool::Tool;

/// Calculator tool that evaluates arithmetic without running arbitrary code.
///
/// Supports `+ - * / ^`, parentheses, `"<n>% of <m>"` and the functions
/// abs, round, min, max, sum, pow and len.
///
/// # Examples
///
/// ```text
/// 2+2          -> Result: 4
/// 15% of 850   -> Result: 127.5
/// pow(2, 8)    -> Result: 256
/// ```
pub struct Calculator;

impl Calculator {
    /// Create a new calculator tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs mathematical calculations including basic arithmetic, percentages, \
         and expressions. Examples: '2+2', '15% of 850', 'pow(2,8)'"
    }

    fn input_description(&self) -> &str {
        "The mathematical expression to evaluate"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        debug!("Evaluating expression: {}", input);
        let result = eval::evaluate(input)?;
        debug!("{}", result);
        Ok(result)
    }
}

/// Evaluate `expression`, rendering failures the way the calculator tool does.
pub fn calculate(expression: &str) -> String {
    match eval::evaluate(expression) {
        Ok(result) => result,
        Err(e) => ToolError::from(e).render("Calculation error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invoke_success() {
        let calc = Calculator::new();
        assert_eq!(calc.invoke("2+2").await, "Result: 4");
        assert_eq!(calc.invoke("15% of 850").await, "Result: 127.5");
    }

    #[tokio::test]
    async fn test_invoke_rejects_code() {
        let output = Calculator::new().invoke("__import__('os')").await;
        assert!(output.starts_with("❌ Calculation error: "));
        assert!(output.ends_with("Please provide a valid mathematical expression."));
    }

    #[test]
    fn test_calculate_division_by_zero() {
        assert_eq!(
            calculate("1/0"),
            "❌ Calculation error: division by zero. Please provide a valid mathematical expression."
        );
    }

    #[test]
    fn test_calculate_empty() {
        assert!(calculate("   ").starts_with("❌ Calculation error: empty expression"));
    }
}
