/// Highest page number the application will request.
pub const MAX_PAGE: u32 = 100_000;

/// Parses a raw `page` parameter into a 1-based page number.
///
/// Missing, non-numeric, or below-1 values become page 1. Numbers above
/// [`MAX_PAGE`] are clamped to it.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return 1;
    };

    match raw.parse::<u64>() {
        Ok(0) => 1,
        Ok(p) => u32::try_from(p).unwrap_or(MAX_PAGE).min(MAX_PAGE),
        // digits too long for u64
        Err(_) if raw.bytes().all(|b| b.is_ascii_digit()) => MAX_PAGE,
        Err(_) => 1,
    }
}

/// Offset of the first item on `page` for a fixed `page_size`.
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.max(1) - 1) * u64::from(page_size)
}

/// Returns the trimmed value if it has any content.
pub fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Escapes text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
