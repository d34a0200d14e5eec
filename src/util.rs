//! Text decoding and display helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// 1. Tries UTF-8 (a BOM is handled by encoding_rs)
/// 2. If malformed, tries the hint encoding (from a declaration in the document)
/// 3. Falls back to Windows-1252, which older EDGAR filings are usually saved in
///
/// Returns a borrowed string when the input is already valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find the encoding declared near the start of a document.
///
/// Looks for `encoding="..."` in an XML declaration or `charset=...` in a
/// `<meta>` tag within the first kilobyte.
pub fn extract_declared_encoding(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    let value_start = find_ascii_ci(prefix, b"encoding=")
        .map(|pos| pos + b"encoding=".len())
        .or_else(|| find_ascii_ci(prefix, b"charset=").map(|pos| pos + b"charset=".len()))?;

    let rest = &prefix[value_start..];
    let (rest, quote) = match rest.first() {
        Some(&q) if q == b'"' || q == b'\'' => (&rest[1..], Some(q)),
        Some(_) => (rest, None),
        None => return None,
    };

    let end = rest
        .iter()
        .position(|&b| match quote {
            Some(q) => b == q,
            None => matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace(),
        })
        .unwrap_or(rest.len());

    let value = std::str::from_utf8(&rest[..end]).ok()?.trim();
    if value.is_empty() { None } else { Some(value) }
}

fn find_ascii_ci(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts chars rather than bytes so multi-byte text is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_end, _)) => Cow::Owned(format!("{}...", &text[..byte_end])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrows() {
        let decoded = decode_text("Item 1A. Risk Factors".as_bytes(), None);
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "Item 1A. Risk Factors");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0x92 is a right single quote in Windows-1252
        let decoded = decode_text(b"Company\x92s", None);
        assert_eq!(decoded, "Company\u{2019}s");
    }

    #[test]
    fn test_decode_with_hint() {
        // 0xE9 is 'é' in ISO-8859-1
        let decoded = decode_text(b"caf\xe9", Some("iso-8859-1"));
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_extract_xml_encoding() {
        let doc = br#"<?xml version="1.0" encoding="ISO-8859-1"?><html></html>"#;
        assert_eq!(extract_declared_encoding(doc), Some("ISO-8859-1"));
    }

    #[test]
    fn test_extract_meta_charset() {
        let doc = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=windows-1252"></head>"#;
        assert_eq!(extract_declared_encoding(doc), Some("windows-1252"));

        let doc = br#"<meta charset='utf-8'>"#;
        assert_eq!(extract_declared_encoding(doc), Some("utf-8"));

        assert_eq!(extract_declared_encoding(b"<html><body>x</body></html>"), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Part I\n\t Financial   Information "), "Part I Financial Information");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ééé", 2), "éé...");
    }
}
