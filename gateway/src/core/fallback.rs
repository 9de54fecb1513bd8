//! Demo-mode canned answers used when no provider answer is available

/// Visible prefix marking an answer as canned
pub const DEMO_MARKER: &str = "[Demo Mode]";

/// Topic keys matched against the lowercased question, in priority order
pub const DEMO_ANSWERS: &[(&str, &str)] = &[
    (
        "what is artificial intelligence",
        "Artificial Intelligence (AI) is a branch of computer science that aims to create machines capable of intelligent behavior. It involves developing algorithms that can perform tasks typically requiring human intelligence, such as learning, reasoning, problem-solving, and understanding language.",
    ),
    (
        "how does machine learning work",
        "Machine learning is a subset of AI where computers learn from data without being explicitly programmed. It uses algorithms to identify patterns in data, make predictions, and improve performance over time through experience.",
    ),
    (
        "what are neural networks",
        "Neural networks are computing systems inspired by biological neural networks. They consist of interconnected nodes (neurons) that process information and learn patterns through training on data.",
    ),
];

pub const DEFAULT_DEMO_ANSWER: &str = "I'm an AI assistant that helps answer questions you encounter while browsing the web. I can provide information on a wide variety of topics including technology, science, and general knowledge.";

/// Canned answer for a question; first matching topic wins
pub fn demo_answer(question: &str) -> &'static str {
    let question_lower = question.to_lowercase();

    DEMO_ANSWERS
        .iter()
        .find(|(key, _)| question_lower.contains(key))
        .map(|(_, answer)| *answer)
        .unwrap_or(DEFAULT_DEMO_ANSWER)
}

/// Canned answer with the demo marker, as returned to the caller
pub fn fallback_answer(question: &str) -> String {
    format!("{} {}", DEMO_MARKER, demo_answer(question))
}
