//! Hex text handling for ARGB values, shared by command-line callers.

/// Parses hex color text: 1..=8 hex digits with an optional `#` or
/// `0x`/`0X` prefix. Returns `None` on anything else; callers decide
/// how to report.
pub fn parse(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Renders a color as `#` + 8 uppercase hex digits. Fixed width so the
/// alpha channel is always visible.
pub fn format(value: u32) -> String {
    format!("#{value:08X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse("#FF0000"), Some(0xFF0000));
        assert_eq!(parse("0xFF000000"), Some(0xFF00_0000));
        assert_eq!(parse("0X0000ff"), Some(0x0000FF));
        assert_eq!(parse("abc"), Some(0xABC));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("#"), None);
        assert_eq!(parse("123456789"), None); // 9 digits
        assert_eq!(parse("red"), None);
        assert_eq!(parse("-1"), None);
    }

    #[test]
    fn formats_fixed_width() {
        assert_eq!(format(0xFF00_0000), "#FF000000");
        assert_eq!(format(0xFF0000), "#00FF0000");
        assert_eq!(format(0), "#00000000");
    }
}
