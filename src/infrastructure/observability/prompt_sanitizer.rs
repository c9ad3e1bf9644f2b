use crate::domain::truncate_chars;

const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens prompt text and masks credentials before it reaches a log line.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        format!(
            "{}... ({} chars total)",
            truncate_chars(trimmed, MAX_VISIBLE_CHARS),
            total_chars
        )
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    // (pattern, replacement, must start a word)
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]", false),
        ("hf_", "hf_[REDACTED]", true),
        ("api_key=", "api_key=[REDACTED]", false),
        ("password=", "password=[REDACTED]", false),
        ("token=", "token=[REDACTED]", false),
    ];

    let mut result = text.to_string();
    for (pattern, replacement, word_start) in patterns {
        let mut cursor = 0;
        while let Some(offset) = result[cursor..].find(pattern) {
            let idx = cursor + offset;

            if word_start && !starts_word(&result, idx) {
                cursor = idx + pattern.len();
                continue;
            }

            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
            cursor = idx + replacement.len();
        }
    }

    result
}

fn starts_word(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
}
