//! System prompt assembly.

use brain_core::ToolSpec;

use crate::report::format_instructions;

/// Opening line of the system prompt.
pub const ROLE: &str =
    "You are a research assistant that helps generate comprehensive research papers.";

/// Numbered working instructions.
pub const INSTRUCTIONS: [&str; 5] = [
    "Analyze the user's query carefully",
    "Select appropriate tools to gather information",
    "Synthesize findings into a coherent summary",
    "List all sources used",
    "Provide key findings as bullet points",
];

/// Build the system prompt from the tool menu, in menu order.
pub fn build_system_prompt(tools: &[ToolSpec]) -> String {
    let mut prompt = String::new();
    prompt.push_str(ROLE);
    prompt.push_str("\n\nAvailable tools:\n");
    for tool in tools {
        prompt.push_str(&format!("- {}: {}\n", tool.name, tool.description));
    }

    prompt.push_str("\nInstructions:\n");
    for (i, step) in INSTRUCTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, step));
    }

    prompt.push_str("\nWrap the output in this format and provide no other text:\n");
    prompt.push_str(&format_instructions());
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_sections_in_order() {
        let tools = vec![
            ToolSpec::new("search", "Search the web", "query"),
            ToolSpec::new("calculator", "Do math", "expression"),
        ];
        let prompt = build_system_prompt(&tools);

        assert!(prompt.starts_with(ROLE));
        assert!(prompt.contains("Available tools:\n- search: Search the web\n- calculator: Do math\n"));
        assert!(prompt.contains("1. Analyze the user's query carefully\n"));
        assert!(prompt.contains("5. Provide key findings as bullet points\n"));

        let tools_at = prompt.find("Available tools:").unwrap();
        let steps_at = prompt.find("Instructions:").unwrap();
        let format_at = prompt.find("Wrap the output").unwrap();
        assert!(tools_at < steps_at && steps_at < format_at);
        assert!(prompt.ends_with(&format_instructions()));
    }
}
