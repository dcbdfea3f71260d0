//! Content-Type enforcement for JSON request bodies.

use crate::error::{ApiError, ApiResult};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use std::collections::HashSet;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Require a `Content-Type` header whose media type is `application/json`.
///
/// A missing or malformed header is a bad request; a well-formed header
/// naming another media type is unsupported. Parameters such as `charset`
/// are ignored.
pub fn require_json(headers: &HeaderMap) -> ApiResult<()> {
    let raw = match headers.get(CONTENT_TYPE) {
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::BadRequest("mime: invalid Content-Type header".to_string()))?,
        None => "",
    };

    let media_type = parse_media_type(raw).map_err(ApiError::BadRequest)?;
    if media_type != JSON_MEDIA_TYPE {
        return Err(ApiError::UnsupportedMediaType(
            "expect application/json Content-Type".to_string(),
        ));
    }
    Ok(())
}

/// Parse a media type declaration, returning the lowercased `type/subtype`.
///
/// Parameters are checked for shape only: each is `; key=value` where the
/// value is a token or a quoted-string, and no key appears twice.
pub(crate) fn parse_media_type(raw: &str) -> Result<String, String> {
    let (base, mut rest) = raw.split_at(raw.find(';').unwrap_or(raw.len()));
    let media_type = base.trim().to_ascii_lowercase();

    if media_type.is_empty() {
        return Err("mime: no media type".to_string());
    }

    let (main, sub) = match media_type.split_once('/') {
        Some((main, sub)) => (main, Some(sub)),
        None => (media_type.as_str(), None),
    };
    if !is_token(main) {
        return Err(format!("mime: invalid media type {:?}", media_type));
    }
    if let Some(sub) = sub {
        if !is_token(sub) {
            return Err("mime: expected token after slash".to_string());
        }
    }

    let mut seen = HashSet::new();
    loop {
        rest = rest.trim_start_matches(WHITESPACE);
        if rest.is_empty() {
            break;
        }
        match consume_param(rest) {
            Some((key, remaining)) => {
                if !seen.insert(key) {
                    return Err("mime: duplicate parameter name".to_string());
                }
                rest = remaining;
            }
            // A lone trailing semicolon is tolerated
            None if rest.trim() == ";" => break,
            None => return Err(format!("mime: invalid media parameter {:?}", rest.trim())),
        }
    }

    Ok(media_type)
}

const WHITESPACE: [char; 2] = [' ', '\t'];

/// Consume `; key=value` from the front of `s`, returning the lowercased key
/// and whatever follows the value.
fn consume_param(s: &str) -> Option<(String, &str)> {
    let s = s.strip_prefix(';')?.trim_start_matches(WHITESPACE);
    let (key, s) = consume_token(s)?;
    let s = s
        .trim_start_matches(WHITESPACE)
        .strip_prefix('=')?
        .trim_start_matches(WHITESPACE);
    let rest = if s.starts_with('"') {
        consume_quoted(s)?
    } else {
        consume_token(s)?.1
    };
    Some((key.to_ascii_lowercase(), rest))
}

fn consume_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c| !is_token_char(c)).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(s.split_at(end))
    }
}

/// Skip the quoted-string at the front of `s`, honoring backslash escapes.
fn consume_quoted(s: &str) -> Option<&str> {
    let mut chars = s.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(&s[i + 1..]),
            '\\' => {
                chars.next()?;
            }
            '\r' | '\n' => return None,
            _ => {}
        }
    }
    None
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c)
}
