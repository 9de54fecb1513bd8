//! Prompt construction from the question and page context

use shared::{FreeFormMap, map_str};

/// Characters of the surrounding page text included in the prompt
pub const PARENT_TEXT_LIMIT: usize = 200;

/// System message for the OpenAI-style chat request
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are an intelligent web assistant helping users answer questions they encounter while browsing. Provide clear, concise answers under 150 words.";

/// Render the page context block shared by both provider prompts
pub fn build_context_info(context: &FreeFormMap) -> String {
    let url = map_str(context, "url").unwrap_or("Unknown");
    let title = map_str(context, "title").unwrap_or("Unknown");
    let parent_text = map_str(context, "parentText").unwrap_or("");

    format!(
        "Website: {}\nPage Title: {}\nParent Context: {}",
        url,
        title,
        truncate_chars(parent_text, PARENT_TEXT_LIMIT)
    )
}

/// Full single-message prompt for the Anthropic-style messages API
pub fn build_claude_prompt(question: &str, context: &FreeFormMap) -> String {
    format!(
        "You are an intelligent web assistant helping users answer questions they encounter while browsing.

Context Information:
{}

User Question: {}

Please provide a clear, concise, and helpful answer. If the question is ambiguous or you need more context, provide the best possible answer based on the available information. Keep responses under 150 words and be direct.

Answer:",
        build_context_info(context),
        question
    )
}

/// User message for the OpenAI-style chat request
pub fn build_gpt_user_message(question: &str, context: &FreeFormMap) -> String {
    format!(
        "Context:\n{}\n\nQuestion: {}\n\nAnswer:",
        build_context_info(context),
        question
    )
}

/// Prefix of `text` holding at most `limit` characters
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: serde_json::Value) -> FreeFormMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_context_info_defaults() {
        let info = build_context_info(&FreeFormMap::new());
        assert_eq!(info, "Website: Unknown\nPage Title: Unknown\nParent Context: ");
    }

    #[test]
    fn test_context_info_truncates_parent_text() {
        let long_text = "x".repeat(500);
        let ctx = context(json!({
            "url": "https://learn.example.com/quiz",
            "title": "Week 1 Quiz",
            "parentText": long_text,
        }));

        let info = build_context_info(&ctx);
        assert!(info.contains("Website: https://learn.example.com/quiz"));
        assert!(info.contains("Page Title: Week 1 Quiz"));
        let parent = info.rsplit("Parent Context: ").next().unwrap();
        assert_eq!(parent.len(), PARENT_TEXT_LIMIT);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(300);
        let truncated = truncate_chars(&text, PARENT_TEXT_LIMIT);
        assert_eq!(truncated.chars().count(), PARENT_TEXT_LIMIT);
        assert_eq!(truncate_chars("short", 200), "short");
    }

    #[test]
    fn test_claude_prompt_contains_question_and_limit() {
        let ctx = context(json!({ "title": "Neural Nets" }));
        let prompt = build_claude_prompt("What are neural networks?", &ctx);

        assert!(prompt.contains("User Question: What are neural networks?"));
        assert!(prompt.contains("Page Title: Neural Nets"));
        assert!(prompt.contains("under 150 words"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_gpt_user_message_layout() {
        let message = build_gpt_user_message("Why?", &FreeFormMap::new());
        assert!(message.starts_with("Context:\nWebsite: Unknown"));
        assert!(message.ends_with("\n\nQuestion: Why?\n\nAnswer:"));
    }

    #[test]
    fn test_non_string_context_values_ignored() {
        let ctx = context(json!({ "title": 42, "siblings": ["a", "b"] }));
        let info = build_context_info(&ctx);
        assert!(info.contains("Page Title: Unknown"));
    }
}
