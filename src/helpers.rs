/// Lower-case a User-Agent. Absent input becomes the empty string.
pub(crate) fn normalize_user_agent(raw: Option<&str>) -> String {
    raw.map(str::to_lowercase).unwrap_or_default()
}

/// Trim and lower-case a hint or override token. Blank input is absent.
pub(crate) fn normalize_token(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Interpret raw header or cookie bytes as text. Anything that is not valid
/// UTF-8 is treated as absent.
pub(crate) fn decode_text(raw: Option<&[u8]>) -> Option<&str> {
    raw.and_then(|b| std::str::from_utf8(b).ok())
}

/// Longest prefix of `s` holding at most `max_chars` characters.
pub(crate) fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
