use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;

/// Box-drawing characters for card and table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub bullet: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            bullet: "●".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            bullet: "*".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Truncate or right-pad `text` to exactly `width` terminal columns
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Left-pad `text` to `width` terminal columns, never truncating
pub fn align_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode() -> DisplayConfig {
        DisplayConfig { use_unicode: true, box_chars: BoxChars::unicode() }
    }

    fn ascii() -> DisplayConfig {
        DisplayConfig { use_unicode: false, box_chars: BoxChars::ascii() }
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let result = format_header("Test Header", false, &unicode());
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let result = format_header("Test Header", true, &ascii());
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_format_header_uses_display_width() {
        let result = format_header("Arsenal • BBC", false, &ascii());
        assert_eq!(result, "Arsenal • BBC\n-------------\n");
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(format_header("", false, &unicode()), "\n\n");
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("Lakers", 8), "Lakers  ");
        assert_eq!(fit_width("Golden State Warriors", 6), "Golden");
        assert_eq!(fit_width("", 3), "   ");
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("7", 3), "  7");
        assert_eq!(align_right("1234", 3), "1234");
    }
}
