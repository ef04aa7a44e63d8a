//! Current date and time.

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};

use crate::error::ToolError;
use crate::tool::Tool;

/// Clock tool. The argument is ignored.
pub struct DateTimeInfo;

impl DateTimeInfo {
    /// Create a new clock tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateTimeInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the date/time block for `now`.
pub fn render_datetime(now: NaiveDateTime) -> String {
    format!(
        "📅 Current Date & Time Information:\n\n\
         📆 Date: {} ({})\n\
         ⏰ Time: {} ({})\n\
         🌍 Day of Week: {}\n\
         📊 Week Number: {}\n\
         📈 Day of Year: {}",
        now.format("%Y-%m-%d"),
        now.format("%A, %B %d, %Y"),
        now.format("%H:%M:%S"),
        now.format("%I:%M:%S %p"),
        now.format("%A"),
        now.format("%V"),
        now.format("%j"),
    )
}

#[async_trait]
impl Tool for DateTimeInfo {
    fn name(&self) -> &str {
        "datetime"
    }

    fn description(&self) -> &str {
        "Gets current date, time, day of week, and related temporal information. Use this \
         when you need to know what day it is or current time."
    }

    fn input_description(&self) -> &str {
        "Optional hint such as 'date' or 'time'; ignored"
    }

    async fn execute(&self, _input: &str) -> Result<String, ToolError> {
        Ok(render_datetime(Local::now().naive_local()))
    }
}
