//! Input sanitization for player-supplied vendor text (item descriptions,
//! shop and vendor names).

/// Longest description stored on a sale entry, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Longest shop or vendor name, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Replace markup-significant characters and drop control characters.
fn strip_markup(input: &str, keep_whitespace_controls: bool) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '<' => Some('('),
            '>' => Some(')'),
            '\n' | '\t' if keep_whitespace_controls => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].trim_end().to_string(),
        None => s.to_string(),
    }
}

/// Sanitize an item description: markup neutralized, control characters
/// removed (newlines and tabs become spaces), trimmed and length-capped.
/// Never fails; the worst case is an empty string.
pub fn sanitize_description(input: &str) -> String {
    let cleaned = strip_markup(input, true);
    truncate_chars(cleaned.trim(), MAX_DESCRIPTION_CHARS)
}

/// Sanitize a shop or vendor name. Runs of whitespace collapse to one space.
pub fn sanitize_shop_name(input: &str) -> String {
    let cleaned = strip_markup(input, true);
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, MAX_NAME_CHARS)
}
