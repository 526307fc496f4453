//! `Authorization` header parsing.

pub const BEARER_SCHEME: &str = "Bearer";

/// Extracts the token from an `Authorization` header value.
///
/// The `Bearer` scheme is stripped when present (matched case-insensitively)
/// but not required, so a bare token is accepted as-is. Returns `None` when
/// nothing is left to verify.
pub fn strip_bearer(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let scheme_len = BEARER_SCHEME.len();

    let has_scheme = trimmed
        .get(..scheme_len)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BEARER_SCHEME))
        && trimmed[scheme_len..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);

    let token = if has_scheme {
        trimmed[scheme_len..].trim_start()
    } else {
        trimmed
    };

    (!token.is_empty()).then_some(token)
}
