//! Response chunking for Discord message limits
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Split long catalog texts into reply + follow-ups

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Chunk text into pieces that fit Discord limits (UTF-8 safe, line-aware)
///
/// This function splits text respecting:
/// - UTF-8 character boundaries (never splits mid-character)
/// - Line boundaries when possible (prefers splitting at newlines)
/// - Falls back to byte-aware character splitting for very long lines
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line_with_newline = format!("{line}\n");
        if current.len() + line_with_newline.len() > max_size {
            if !current.is_empty() {
                chunks.push(current.trim_end().to_string());
                current = String::new();
            }
            if line_with_newline.len() > max_size {
                chunks.extend(chunk_long_line(line, max_size));
            } else {
                current = line_with_newline;
            }
        } else {
            current.push_str(&line_with_newline);
        }
    }
    if !current.trim_end().is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

/// Split a single long line into chunks respecting UTF-8 boundaries
fn chunk_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Chunk text for message content (2000 byte limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_no_chunk() {
        assert_eq!(chunk_text("hello", 100), vec!["hello"]);
    }

    #[test]
    fn test_chunk_respects_lines() {
        let result = chunk_text("line1\nline2\nline3", 12);
        assert_eq!(result, vec!["line1\nline2", "line3"]);
    }

    #[test]
    fn test_chunk_handles_long_lines() {
        let result = chunk_text(&"a".repeat(100), 30);
        assert_eq!(result.len(), 4);
        for chunk in &result {
            assert!(chunk.len() <= 30);
        }
        assert_eq!(result.concat(), "a".repeat(100));
    }

    #[test]
    fn test_message_limit() {
        let result = chunk_for_message(&"a".repeat(3000));
        assert_eq!(result.len(), 2);
        assert!(result[0].len() <= MESSAGE_LIMIT);
    }

    #[test]
    fn test_long_love_letter_keeps_every_line() {
        let paragraph = "Te quiero muchísimo, cada día más 🤍";
        let text = vec![paragraph; 150].join("\n");
        let chunks = chunk_for_message(&text);

        assert!(chunks.len() >= 3);
        for chunk in &chunks {
            assert!(chunk.len() <= MESSAGE_LIMIT);
            assert!(chunk.lines().all(|line| line == paragraph));
        }
        let lines: usize = chunks.iter().map(|c| c.lines().count()).sum();
        assert_eq!(lines, 150);
    }

    #[test]
    fn test_utf8_safety() {
        let text = "🤍".repeat(1000);
        for chunk in chunk_for_message(&text) {
            assert!(chunk.len() <= MESSAGE_LIMIT);
            assert!(chunk.chars().all(|c| c == '🤍'));
        }
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(100);
        let result = chunk_text(&text, 100);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 100);
    }
}
