//! Fixed terminal text.

use orchestrator::ParseError;

const RULE_WIDTH: usize = 60;

/// What the assistant can do, shown under the banner.
pub const CAPABILITIES: [&str; 7] = [
    "Web search for current information",
    "Wikipedia knowledge lookup",
    "Mathematical calculations",
    "Web page content extraction",
    "Data analysis (CSV/JSON)",
    "File reading and saving",
    "Date/time information",
];

pub const QUERY_PROMPT: &str = "\n💡 What can I help you research? ";
pub const SAVE_PROMPT: &str = "\n💾 Save this research? (y/n): ";
pub const EMPTY_QUERY: &str = "❌ Please provide a valid query.";
pub const SAVED: &str = "✅ Research saved successfully!";

/// Startup banner with the capability list.
pub fn banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("{rule}\n🔬 AI Research Assistant\n{rule}\n\nAvailable capabilities:\n");
    for capability in CAPABILITIES {
        out.push_str(&format!("  • {}\n", capability));
    }
    out.push('\n');
    out.push_str(&rule);
    out
}

/// Progress lines printed before the brain starts.
pub fn researching(query: &str) -> String {
    format!("\n🔍 Researching: {}\n⏳ Please wait...\n", query)
}

/// Shown when the answer is not a valid report.
pub fn parse_failure(error: &ParseError) -> String {
    format!(
        "\n⚠️  Could not parse structured response.\nError: {}\n\n📄 Raw Response:\n{}",
        error.message, error.raw
    )
}

/// Only an explicit `y` saves.
pub fn wants_save(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let banner = banner();
        let rule = "=".repeat(60);
        assert!(banner.starts_with(&format!("{}\n🔬 AI Research Assistant\n{}", rule, rule)));
        assert!(banner.contains("  • Data analysis (CSV/JSON)\n"));
        assert!(banner.ends_with(&rule));
    }

    #[test]
    fn test_parse_failure_shows_raw_text() {
        let error = ParseError {
            raw: "Agent stopped due to iteration limit.".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let text = parse_failure(&error);
        assert!(text.contains("⚠️  Could not parse structured response."));
        assert!(text.contains("Error: expected value at line 1 column 1"));
        assert!(text.ends_with("📄 Raw Response:\nAgent stopped due to iteration limit."));
    }

    #[test]
    fn test_wants_save() {
        assert!(wants_save("y"));
        assert!(wants_save(" Y \n"));
        assert!(!wants_save("yes"));
        assert!(!wants_save(""));
        assert!(!wants_save("n"));
    }
}
