//! Extracting JSON from model answers.
//!
//! Schema-constrained answers are usually bare JSON, but models still wrap
//! them in markdown fences or a sentence of preamble from time to time.

/// Extract a JSON document from a response that may contain markdown or extra text.
///
/// Tries, in order:
/// 1. The whole trimmed answer, when it already parses as JSON
/// 2. Markdown code blocks (```json ... ```), when their content parses
/// 3. Balanced braces: { ... }
///
/// A bare answer is never cut down, so fence markers or braces inside its
/// string values are left alone. Returns `None` when nothing JSON-shaped is found.
///
/// # Examples
///
/// ```
/// use delulu_interface::extract_json;
///
/// let response = "Here is the character:\n```json\n{\"name\": \"Ada\"}\n```";
/// assert_eq!(extract_json(response).as_deref(), Some("{\"name\": \"Ada\"}"));
///
/// assert_eq!(extract_json("null").as_deref(), Some("null"));
/// assert_eq!(extract_json("no idea"), None);
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    let trimmed = response.trim();
    if parses(trimmed) {
        return Some(trimmed.to_string());
    }

    if let Some(json) = extract_from_code_block(response).filter(|json| parses(json)) {
        return Some(json);
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Some(json);
    }

    tracing::debug!(response_length = response.len(), "No JSON found in model response");
    None
}

fn parses(candidate: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(candidate).is_ok()
}

/// Content of the first fenced block, with or without a language tag.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip the language specifier line
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    match response[skip_to..].find("```") {
        Some(end) => Some(response[skip_to..skip_to + end].trim().to_string()),
        // No closing fence, likely a truncated response
        None => Some(response[skip_to..].trim().to_string()),
    }
}

/// Content between the first `open` and its matching `close`, string-aware.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
