//! Display helpers for wire payloads.

/// Shorten a key or signature to `edge` characters on each side.
///
/// Counts characters, not bytes: payload strings arrive off the wire
/// from arbitrary senders, and a byte slice through multi-byte UTF-8
/// would panic. Values at or under `2 * edge` characters pass through
/// unchanged.
pub fn abbreviate(value: &str, edge: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= edge * 2 {
        return value.to_string();
    }
    let head: String = chars[..edge].iter().collect();
    let tail: String = chars[chars.len() - edge..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_values_keep_both_edges() {
        assert_eq!(
            abbreviate("5VfYJQKYGzGjdHHvv5YLRzTMZ8Mw9A7Q", 8),
            "5VfYJQKY...Z8Mw9A7Q"
        );
    }

    #[test]
    fn short_values_pass_through() {
        assert_eq!(abbreviate("abc123", 8), "abc123");
        assert_eq!(abbreviate("", 4), "");
    }

    #[test]
    fn multibyte_values_never_split_a_character() {
        // each character here is 3 bytes; byte-indexed slicing would panic
        assert_eq!(
            abbreviate("ありがとうございました、どうも", 4),
            "ありがと...、どうも"
        );
        assert_eq!(abbreviate("ありがとうござい", 4), "ありがとうござい");
    }

    #[test]
    fn boundary_length_is_not_shortened() {
        assert_eq!(abbreviate("aaaabbbb", 4), "aaaabbbb");
        assert_eq!(abbreviate("aaaabbbbc", 4), "aaaa...bbbc");
    }
}
