//! # hyphanet-uri
//!
//! The textual wire identifier: `[scheme:]TYPE@[keys][/path]`. This
//! crate only knows the grammar; it has no idea what a `ClientKey`
//! is. `hyphanet-keys` builds client keys out of a parsed [`Uri`] and
//! serializes them back into one.

mod meta;
mod parse;

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hyphanet_types::{DecryptionKey, HyphanetError, KeyType, RoutingKey};

/// A parsed Hyphanet URI. Value type: two `Uri`s are equal iff every
/// field is equal, including meta-string order and empty elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    pub key_type: KeyType,
    pub routing: Option<RoutingKey>,
    pub decryption: Option<DecryptionKey>,
    pub extra: Vec<u8>,
    pub meta_strings: Vec<String>,
}

/// Options controlling [`Uri::serialize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions {
    /// Emit a leading `freenet:` scheme.
    pub prefix: bool,
    /// Force ASCII-only percent-encoding of meta-strings.
    pub pure_ascii: bool,
}

impl Uri {
    pub fn new(key_type: KeyType) -> Self {
        Self {
            key_type,
            routing: None,
            decryption: None,
            extra: Vec::new(),
            meta_strings: Vec::new(),
        }
    }

    /// Parse a URI string. `no_trim` disables the usual
    /// leading/trailing whitespace trim.
    pub fn parse(input: &str, no_trim: bool) -> Result<Self, HyphanetError> {
        let parts = parse::parse_structure(input, no_trim)?;
        let meta_strings = meta::split(&parts.path)?;
        Ok(Self {
            key_type: parts.key_type,
            routing: parts.routing,
            decryption: parts.decryption,
            extra: parts.extra,
            meta_strings,
        })
    }

    /// Serialize with the given options.
    pub fn serialize(&self, options: SerializeOptions) -> String {
        let mut out = String::new();
        if options.prefix {
            out.push_str("freenet:");
        }
        out.push_str(&self.key_type.to_string());
        out.push('@');

        if let Some(routing) = &self.routing {
            out.push_str(&URL_SAFE_NO_PAD.encode(routing.as_bytes()));
            if let Some(decryption) = &self.decryption {
                out.push(',');
                out.push_str(&URL_SAFE_NO_PAD.encode(decryption.as_bytes()));
                if !self.extra.is_empty() {
                    out.push(',');
                    out.push_str(&URL_SAFE_NO_PAD.encode(&self.extra));
                }
            }
        }

        let joined = meta::join(&self.meta_strings, options.pure_ascii);
        if self.routing.is_none() {
            // No routing emitted: drop the leading '/' before the
            // first meta-string so "KSK@keyword" round-trips instead
            // of becoming "KSK@/keyword".
            out.push_str(joined.strip_prefix('/').unwrap_or(&joined));
        } else {
            out.push_str(&joined);
        }
        out
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize(SerializeOptions::default()))
    }
}

impl std::str::FromStr for Uri {
    type Err = HyphanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_routing() -> RoutingKey {
        RoutingKey::from_bytes([0x11u8; 32])
    }

    fn sample_decryption() -> DecryptionKey {
        DecryptionKey::from_bytes([0x22u8; 32])
    }

    #[test]
    fn test_round_trip_chk_with_meta_strings() {
        let uri = Uri {
            key_type: KeyType::Chk,
            routing: Some(sample_routing()),
            decryption: Some(sample_decryption()),
            extra: vec![0, 3, 0, 0, 0],
            meta_strings: vec!["index.html".to_string()],
        };
        let s = uri.serialize(SerializeOptions::default());
        let parsed = Uri::parse(&s, false).unwrap();
        assert_eq!(parsed, uri);
    }

    #[test]
    fn test_empty_meta_string_policy_double_slash() {
        let uri = format!(
            "SSK@{},{}//file",
            sample_routing(),
            sample_decryption()
        );
        let parsed = Uri::parse(&uri, false).unwrap();
        assert_eq!(parsed.meta_strings, vec!["".to_string(), "file".to_string()]);
    }

    #[test]
    fn test_empty_meta_string_policy_single_slashes() {
        let uri = format!("SSK@{},{}/a/b", sample_routing(), sample_decryption());
        let parsed = Uri::parse(&uri, false).unwrap();
        assert_eq!(parsed.meta_strings, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_meta_string_policy_trailing_slash() {
        let uri = format!("SSK@{},{}/", sample_routing(), sample_decryption());
        let parsed = Uri::parse(&uri, false).unwrap();
        assert!(parsed.meta_strings.is_empty());
    }

    #[test]
    fn test_ksk_round_trip_has_no_slash_before_keyword() {
        let uri = Uri {
            key_type: KeyType::Ksk,
            routing: None,
            decryption: None,
            extra: Vec::new(),
            meta_strings: vec!["test".to_string()],
        };
        let s = uri.serialize(SerializeOptions::default());
        assert_eq!(s, "KSK@test");
        let parsed = Uri::parse(&s, false).unwrap();
        assert_eq!(parsed, uri);
    }

    #[test]
    fn test_base64_keys_are_url_safe() {
        let uri = Uri {
            key_type: KeyType::Chk,
            routing: Some(RoutingKey::from_bytes([0xFFu8; 32])),
            decryption: None,
            extra: Vec::new(),
            meta_strings: Vec::new(),
        };
        let s = uri.serialize(SerializeOptions::default());
        assert!(!s.contains('+'));
        assert!(!s.contains('='));
    }

    #[test]
    fn test_scheme_prefix_option() {
        let uri = Uri::new(KeyType::Chk);
        let s = uri.serialize(SerializeOptions {
            prefix: true,
            pure_ascii: false,
        });
        assert!(s.starts_with("freenet:CHK@"));
    }

    #[test]
    fn test_case_insensitive_type_in_input() {
        let parsed = Uri::parse("chk@", false).unwrap();
        assert_eq!(parsed.key_type, KeyType::Chk);
    }

    #[test]
    fn test_display_matches_default_serialize() {
        let uri = Uri::new(KeyType::Ksk);
        assert_eq!(uri.to_string(), uri.serialize(SerializeOptions::default()));
    }
}
