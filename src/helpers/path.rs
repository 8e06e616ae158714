//! URL path segment utilities
//!
//! Small helpers for inspecting and rebuilding path strings. These operate
//! on the path component only; query strings and fragments are the host's
//! concern.

use std::borrow::Cow;

/// Iterate the non-empty segments of a path
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// First non-empty segment of a path, if any
pub fn first_segment(path: &str) -> Option<&str> {
    segments(path).next()
}

/// Ensure the path starts with `/`; empty input becomes `/`
pub fn rooted(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Strip a leading `/{segment}` from the path
///
/// The match is exact-segment: the prefix must be followed by `/` or the
/// end of the path, so `/fr-FRx` is not stripped by `fr-FR`. Returns the
/// remainder (possibly empty) on a match.
pub fn strip_leading_segment<'a>(path: &'a str, segment: &str) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(segment)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
