//! Prompt construction for the review generator
//!
//! The prompt embeds the submitted code verbatim inside a fixed instruction
//! template, so identical code always produces an identical prompt.

use serde::{Deserialize, Serialize};

/// System message framing the generator's role
const SYSTEM_MESSAGE: &str = "You are an advanced AI code reviewer with expertise \
     in security, performance, and best practices.";

/// A prompt for the review generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPrompt {
    /// System message sent with every request
    pub system: String,

    /// User message carrying the instructions and the code
    pub user: String,
}

impl ReviewPrompt {
    /// Build the review prompt for a piece of submitted code
    pub fn for_code(code: &str) -> Self {
        let mut user = String::new();

        user.push_str("Analyze the following code snippet based on these criteria:\n\n");
        user.push_str("- Code readability and maintainability\n");
        user.push_str("- Performance, including time and space complexity\n");
        user.push_str("- Security vulnerabilities and edge cases\n");
        user.push_str("- Language-specific best practices\n");
        user.push_str("- Potential bugs and errors\n");
        user.push_str("- Alternative approaches for improvement\n\n");

        user.push_str("## Analysis Process\n\n");
        user.push_str("1. Code overview: briefly summarize what the code does\n");
        user.push_str("2. Quality score (1-10): rate the code against best practices\n");
        user.push_str("3. Performance analysis: discuss complexity where applicable\n");
        user.push_str("4. Security risks: identify potential flaws\n");
        user.push_str("5. Key issues found: list inefficiencies and anti-patterns\n");
        user.push_str("6. Suggested improvements: show better ways to write the code\n\n");

        user.push_str("## Code to Review\n\n");
        user.push_str("```\n");
        user.push_str(code);
        user.push_str("\n```\n\n");

        user.push_str("Provide a detailed, structured response using markdown formatting. ");
        user.push_str(
            "If you can improve the code, finish with an \"Optimized Code\" heading \
             followed by the full improved code in a fenced code block.\n",
        );

        Self {
            system: SYSTEM_MESSAGE.to_string(),
            user,
        }
    }
}
