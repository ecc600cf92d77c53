//! Meta-string splitting and joining: the ordered path components of
//! a URI after the `@keys` portion, with the empty-segment run-length
//! rule spec.md §4.1/§8 requires.
//!
//! `path` here always either is empty (no path at all) or starts with
//! the separator that introduced it (`/file` for `@keys/file`,
//! `//file` for `@keys//file`) — the leading separator is the
//! boundary marker between the keys segment and the path, not itself
//! a meta-string separator.

use hyphanet_types::HyphanetError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Reserved characters that must never appear literally inside a
/// serialized meta-string segment.
const DEFAULT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'@')
    .add(b',')
    .add(b' ');

/// Split a `path` string (as produced by [`super::split_keys_and_path`])
/// into its ordered, percent-decoded meta-strings.
pub fn split(path: &str) -> Result<Vec<String>, HyphanetError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let mut tokens: Vec<&str> = path.split('/').collect();
    // The leading token is always "" — the boundary separator, not a
    // meta-string of its own.
    tokens.remove(0);
    // A trailing "" means the path ended in a separator with nothing
    // after it; only a non-empty trailing segment is emitted.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
        .into_iter()
        .map(|raw| {
            percent_decode_str(raw)
                .decode_utf8()
                .map(|cow| cow.into_owned())
                .map_err(|e| HyphanetError::MalformedUri(format!("bad percent-encoding: {e}")))
        })
        .collect()
}

/// Serialize meta-strings back into a `/`-separated path, percent-
/// encoding each segment. Does not include the leading separator
/// before the first segment — callers decide whether to emit it
/// (dropped entirely when a URI carries no routing key).
pub fn join(meta_strings: &[String], pure_ascii: bool) -> String {
    let mut out = String::new();
    for segment in meta_strings {
        out.push('/');
        out.push_str(&encode_segment(segment, pure_ascii));
    }
    out
}

fn encode_segment(segment: &str, pure_ascii: bool) -> String {
    let set = if pure_ascii {
        NON_ALPHANUMERIC
    } else {
        DEFAULT_ENCODE_SET
    };
    utf8_percent_encode(segment, set).to_string()
}
