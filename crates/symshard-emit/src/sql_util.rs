//! Shared SQL text helpers used by the shard statement generator.

/// Wrap `s` in single quotes, doubling any embedded single quote.
///
/// Plain ticker symbols pass through unchanged apart from the quotes.
#[inline]
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Render members as `'A','B','C'`.
pub fn quoted_list<'a, I>(members: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    members.into_iter().map(quote_literal).collect::<Vec<_>>().join(",")
}

/// Whether `s` can be appended to an identifier without quoting.
#[inline]
pub fn is_identifier_fragment(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `<prefix>_<boundary>`.
#[inline]
pub fn table_name(prefix: &str, boundary: &str) -> String {
    format!("{prefix}_{boundary}")
}
