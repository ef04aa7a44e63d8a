//! Plain-text rendering of research reports.

use crate::report::ResearchResult;

/// Width of the `=` rules framing the report.
const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  • {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a report for the terminal.
pub fn render_report(result: &ResearchResult) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push_str("\n📊 RESEARCH RESULTS\n");
    out.push_str(&rule());
    out.push_str(&format!("\n\n📌 Topic: {}\n", result.topic));
    out.push_str(&format!("\n📝 Summary:\n{}\n", result.summary));
    out.push_str(&format!("\n🔑 Key Findings:\n{}\n", numbered(&result.key_findings)));
    out.push_str(&format!("\n🔗 Sources:\n{}\n", numbered(&result.sources)));
    out.push_str(&format!("\n🛠️  Tools Used: {}\n", result.tools_used.join(", ")));
    out.push_str(&rule());
    out
}

/// Render the text block appended to the output file when a report is saved.
pub fn render_save_payload(result: &ResearchResult) -> String {
    format!(
        "\nTOPIC: {}\n\nSUMMARY:\n{}\n\nKEY FINDINGS:\n{}\n\nSOURCES:\n{}\n\nTOOLS USED: {}\n",
        result.topic,
        result.summary,
        bulleted(&result.key_findings),
        bulleted(&result.sources),
        result.tools_used.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResearchResult {
        ResearchResult {
            topic: "Tides".to_string(),
            summary: "The moon pulls.".to_string(),
            sources: vec!["https://a.example".to_string(), "Wikipedia".to_string()],
            tools_used: vec!["wikipedia".to_string(), "search".to_string()],
            key_findings: vec!["Two tides a day".to_string()],
        }
    }

    #[test]
    fn test_render_report() {
        let text = render_report(&sample());
        let rule = "=".repeat(60);

        assert!(text.starts_with(&format!("{}\n📊 RESEARCH RESULTS\n{}\n", rule, rule)));
        assert!(text.contains("📌 Topic: Tides\n"));
        assert!(text.contains("📝 Summary:\nThe moon pulls.\n"));
        assert!(text.contains("🔑 Key Findings:\n  1. Two tides a day\n"));
        assert!(text.contains("🔗 Sources:\n  1. https://a.example\n  2. Wikipedia\n"));
        assert!(text.contains("🛠️  Tools Used: wikipedia, search\n"));
        assert!(text.ends_with(&rule));
    }

    #[test]
    fn test_render_save_payload() {
        assert_eq!(
            render_save_payload(&sample()),
            "\nTOPIC: Tides\n\nSUMMARY:\nThe moon pulls.\n\nKEY FINDINGS:\n  • Two tides a day\n\n\
             SOURCES:\n  • https://a.example\n  • Wikipedia\n\nTOOLS USED: wikipedia, search\n"
        );
    }

    #[test]
    fn test_empty_lists_render() {
        let mut result = sample();
        result.sources.clear();
        result.tools_used.clear();
        let text = render_report(&result);
        assert!(text.contains("🔗 Sources:\n\n"));
        assert!(text.contains("🛠️  Tools Used: \n"));
    }
}
