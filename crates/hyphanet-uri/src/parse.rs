//! Structural parsing ahead of meta-string handling: scheme/host
//! stripping, query stripping, the percent-decode-and-retry fallback,
//! and splitting into `type@keys/path`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hyphanet_types::{DecryptionKey, HyphanetError, KeyType, RoutingKey};
use percent_encoding::percent_decode_str;

const SCHEME_NAMES: [&str; 3] = ["freenet", "hyphanet", "hypha"];

/// Strip an optional `http(s)://host/` prefix.
fn strip_http_prefix(s: &str) -> &str {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    let Some(rest) = rest else {
        return s;
    };
    match rest.find('/') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    }
}

/// Strip an optional `(ext+|web+)?(freenet|hyphanet|hypha):` scheme.
fn strip_scheme(s: &str) -> &str {
    let rest = s
        .strip_prefix("ext+")
        .or_else(|| s.strip_prefix("web+"))
        .unwrap_or(s);
    for name in SCHEME_NAMES {
        if let Some(stripped) = rest.strip_prefix(name).and_then(|r| r.strip_prefix(':')) {
            return stripped;
        }
    }
    s
}

/// Drop everything from the first unencoded `?`.
fn strip_query(s: &str) -> &str {
    match s.find('?') {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Structural parts of a URI before meta-string decoding.
pub struct Parts {
    pub key_type: KeyType,
    pub routing: Option<RoutingKey>,
    pub decryption: Option<DecryptionKey>,
    pub extra: Vec<u8>,
    pub path: String,
}

pub fn parse_structure(input: &str, no_trim: bool) -> Result<Parts, HyphanetError> {
    let trimmed;
    let mut s: &str = if no_trim {
        input
    } else {
        trimmed = input.trim();
        trimmed
    };

    s = strip_http_prefix(s);
    s = strip_scheme(s);
    s = strip_query(s);

    let decoded_once;
    if !s.contains('@') && !s.contains('/') {
        decoded_once = percent_decode_str(s)
            .decode_utf8()
            .map_err(|e| HyphanetError::MalformedUri(format!("bad percent-encoding: {e}")))?
            .into_owned();
        s = &decoded_once;
    }

    let (type_str, rest) = s
        .split_once('@')
        .ok_or_else(|| HyphanetError::MalformedUri("missing '@' key-type separator".into()))?;
    let key_type: KeyType = type_str.parse()?;

    // KSK carries no keys segment at all: the keyword (and any
    // further path components) sit directly after "@", with no
    // comma-separated base64 fields to strip first.
    if key_type == KeyType::Ksk {
        return Ok(Parts {
            key_type,
            routing: None,
            decryption: None,
            extra: Vec::new(),
            path: format!("/{rest}"),
        });
    }

    let (keys_str, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].to_string()),
        None => (rest, String::new()),
    };

    let mut fields = keys_str.splitn(3, ',');
    let routing_b64 = fields.next().unwrap_or("");
    let decryption_b64 = fields.next().unwrap_or("");
    let extra_b64 = fields.next().unwrap_or("");

    let routing = decode_key_field(routing_b64)?;
    let decryption = decode_key_field(decryption_b64)?;
    let extra = if extra_b64.is_empty() {
        Vec::new()
    } else {
        URL_SAFE_NO_PAD
            .decode(extra_b64)
            .map_err(|e| HyphanetError::MalformedUri(format!("bad extra-bytes base64: {e}")))?
    };

    Ok(Parts {
        key_type,
        routing,
        decryption,
        extra,
        path,
    })
}

fn decode_key_field<T>(field: &str) -> Result<Option<T>, HyphanetError>
where
    T: std::str::FromStr<Err = HyphanetError>,
{
    if field.is_empty() {
        Ok(None)
    } else {
        Ok(Some(field.parse()?))
    }
}
