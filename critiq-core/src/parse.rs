//! Splitting generator responses into review text and optimized code
//!
//! Responses are markdown. When the generator follows the prompt it finishes
//! with an "Optimized Code" heading and a fenced block holding the improved
//! code; everything before the heading is the review itself. Responses
//! without such a heading are treated entirely as review text.

use serde::{Deserialize, Serialize};

/// A generator response split into its parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReview {
    /// Review text
    pub review: String,

    /// Optimized code, when the response carried a dedicated section
    pub optimized_code: Option<String>,
}

/// Split a generator response into review text and optional optimized code
///
/// Scans for a markdown heading whose text contains "optimized code"
/// (case-insensitive, headings inside code fences ignored). The review never
/// ends up empty for a non-empty response: if splitting would leave nothing
/// before the heading, the full text is kept as the review.
pub fn parse_response(text: &str) -> ParsedReview {
    let Some(heading_idx) = find_optimized_heading(text) else {
        return ParsedReview {
            review: text.trim_end().to_string(),
            optimized_code: None,
        };
    };

    let lines: Vec<&str> = text.lines().collect();
    let review = lines[..heading_idx].join("\n").trim_end().to_string();
    let optimized_code = extract_fenced_block(&lines[heading_idx + 1..]);

    let review = if review.is_empty() {
        text.trim_end().to_string()
    } else {
        review
    };

    ParsedReview {
        review,
        optimized_code,
    }
}

/// Find the line index of a heading whose title mentions optimized code
fn find_optimized_heading(text: &str) -> Option<usize> {
    let mut in_fence = false;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let level = trimmed.chars().take_while(|&c| c == '#').count();
        if !(1..=6).contains(&level) {
            continue;
        }
        let title = trimmed[level..].trim();
        if title.to_lowercase().contains("optimized code") {
            return Some(idx);
        }
    }

    None
}

/// Extract the body of the first fenced code block in the given lines
///
/// The fences and any language tag are stripped. Without a fence the raw
/// remainder is used; an empty remainder yields `None`.
fn extract_fenced_block(lines: &[&str]) -> Option<String> {
    let mut body: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for &line in lines {
        if line.trim().starts_with("```") {
            if in_fence {
                break;
            }
            in_fence = true;
            continue;
        }
        if in_fence {
            body.push(line);
        }
    }

    let block = if in_fence {
        body.join("\n")
    } else {
        lines.join("\n").trim().to_string()
    };

    if block.trim().is_empty() {
        None
    } else {
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE_WITH_OPTIMIZED: &str = r#"## Code Overview

Adds two numbers.

**Quality Score:** 7/10

## Key Issues Found

- No input validation

## Optimized Code

```javascript
function add(a, b) {
  return Number(a) + Number(b);
}
```
"#;

    #[test]
    fn test_split_on_optimized_heading() {
        let parsed = parse_response(RESPONSE_WITH_OPTIMIZED);

        assert!(parsed.review.contains("Quality Score"));
        assert!(parsed.review.contains("No input validation"));
        assert!(!parsed.review.contains("Optimized Code"));

        let optimized = parsed.optimized_code.unwrap();
        assert!(optimized.contains("function add(a, b)"));
        // Fences and language tag are stripped
        assert!(!optimized.contains("```"));
        assert!(!optimized.contains("javascript"));
    }

    #[test]
    fn test_no_heading_means_review_only() {
        let text = "The code looks fine.\n\nQuality score: 9/10.";
        let parsed = parse_response(text);

        assert_eq!(parsed.review, text);
        assert!(parsed.optimized_code.is_none());
    }

    #[test]
    fn test_heading_is_case_insensitive() {
        let text = "Review text.\n\n### OPTIMIZED CODE\n\n```\nlet x = 1;\n```\n";
        let parsed = parse_response(text);

        assert_eq!(parsed.review, "Review text.");
        assert_eq!(parsed.optimized_code.as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_heading_inside_fence_is_ignored() {
        let text = "Review of a markdown file:\n\n```\n# Optimized Code\nnot a real heading\n```\n\nThat is all.";
        let parsed = parse_response(text);

        assert!(parsed.optimized_code.is_none());
        assert!(parsed.review.contains("That is all."));
    }

    #[test]
    fn test_heading_deeper_than_six_hashes_is_text() {
        // Seven hashes is not a markdown heading and must not split
        let text = "Review text.\n\n####### Optimized Code\n\n```\nlet z = 3;\n```\n";
        let parsed = parse_response(text);

        assert!(parsed.optimized_code.is_none());
        assert_eq!(parsed.review, text.trim_end());

        // Six hashes is the deepest level that still splits
        let text = "Review text.\n\n###### Optimized Code\n\n```\nlet z = 3;\n```\n";
        let parsed = parse_response(text);

        assert_eq!(parsed.review, "Review text.");
        assert_eq!(parsed.optimized_code.as_deref(), Some("let z = 3;"));
    }

    #[test]
    fn test_heading_without_fence_takes_remainder() {
        let text = "Review text.\n\n## Optimized Code\n\nconst x = 1;";
        let parsed = parse_response(text);

        assert_eq!(parsed.review, "Review text.");
        assert_eq!(parsed.optimized_code.as_deref(), Some("const x = 1;"));
    }

    #[test]
    fn test_heading_with_nothing_after_it() {
        let text = "Review text.\n\n## Optimized Code\n";
        let parsed = parse_response(text);

        assert_eq!(parsed.review, "Review text.");
        assert!(parsed.optimized_code.is_none());
    }

    #[test]
    fn test_empty_fenced_block_yields_none() {
        let text = "Review text.\n\n## Optimized Code\n\n```\n```\n";
        let parsed = parse_response(text);

        assert!(parsed.optimized_code.is_none());
    }

    #[test]
    fn test_unterminated_fence_keeps_content() {
        let text = "Review text.\n\n## Optimized Code\n\n```python\nprint(1)\nprint(2)";
        let parsed = parse_response(text);

        assert_eq!(parsed.optimized_code.as_deref(), Some("print(1)\nprint(2)"));
    }

    #[test]
    fn test_leading_heading_keeps_full_text_as_review() {
        let text = "## Optimized Code\n\n```\nlet y = 2;\n```\n";
        let parsed = parse_response(text);

        // Nothing precedes the heading, so the full response stays readable
        assert_eq!(parsed.review, text.trim_end());
        assert_eq!(parsed.optimized_code.as_deref(), Some("let y = 2;"));
    }

    #[test]
    fn test_indentation_preserved_in_block() {
        let text = "Fine.\n\n## Optimized Code\n\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n";
        let parsed = parse_response(text);

        assert_eq!(
            parsed.optimized_code.as_deref(),
            Some("fn main() {\n    println!(\"hi\");\n}")
        );
    }

    #[test]
    fn test_only_first_block_after_heading_is_taken() {
        let text = "Fine.\n\n## Optimized Code\n\n```\nfirst\n```\n\n```\nsecond\n```\n";
        let parsed = parse_response(text);

        assert_eq!(parsed.optimized_code.as_deref(), Some("first"));
    }
}
