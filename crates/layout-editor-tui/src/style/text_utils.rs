//! Text utility functions

use unicode_width::UnicodeWidthChar;

/// Cut a string so it occupies at most `max_width` cells
pub fn clip(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("hello", 3), "hel");
        assert_eq!(clip("hi", 10), "hi");
        assert_eq!(clip("日本語", 5), "日本");
    }
}
