//! Palette handling for rendered symbols

/// Fill used when the palette has no usable foreground
pub const DEFAULT_FOREGROUND: &str = "#484848";

/// `#rgb` or `#rrggbb`, hex digits in either case
pub fn is_valid_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Resolved foreground and optional background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Module fill
    pub foreground: String,
    /// Fill of a full-size rectangle behind the symbol
    pub background: Option<String>,
}

impl Palette {
    /// Entry 0 is the foreground and falls back to [`DEFAULT_FOREGROUND`];
    /// entry 1, if valid, becomes the background. Further entries are ignored.
    pub fn from_entries(entries: &[String]) -> Self {
        let foreground = entries
            .first()
            .filter(|c| is_valid_color(c))
            .cloned()
            .unwrap_or_else(|| DEFAULT_FOREGROUND.to_string());
        let background = entries.get(1).filter(|c| is_valid_color(c)).cloned();
        Self {
            foreground,
            background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_entries(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#00AAff"));
        assert!(!is_valid_color("fff"));
        assert!(!is_valid_color("#ffff"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("red"));
        assert!(!is_valid_color("#"));
    }

    #[test]
    fn test_palette_fallbacks() {
        let palette = Palette::from_entries(&[]);
        assert_eq!(palette.foreground, DEFAULT_FOREGROUND);
        assert_eq!(palette.background, None);

        let palette = Palette::from_entries(&["blue".into(), "#fff".into()]);
        assert_eq!(palette.foreground, DEFAULT_FOREGROUND);
        assert_eq!(palette.background.as_deref(), Some("#fff"));

        let palette = Palette::from_entries(&["#123456".into(), "nope".into()]);
        assert_eq!(palette.foreground, "#123456");
        assert_eq!(palette.background, None);
    }
}
