//! 32-byte key material: [`RoutingKey`] (public, identifies a block
//! on the overlay) and [`DecryptionKey`] (private, never leaves the
//! requester). Both serialise the same way: URL-safe base64, no
//! padding — the "freenet" alphabet the wire format has always used.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::HyphanetError;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub [u8; 32]);

        impl $name {
            pub const LEN: usize = 32;

            pub fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            pub fn into_bytes(self) -> [u8; 32] {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", URL_SAFE_NO_PAD.encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = HyphanetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let decoded = URL_SAFE_NO_PAD
                    .decode(s)
                    .map_err(|e| HyphanetError::MalformedUri(format!("bad base64 key: {e}")))?;
                let bytes: [u8; 32] = decoded.try_into().map_err(|v: Vec<u8>| {
                    HyphanetError::MalformedUri(format!(
                        "key must decode to 32 bytes, got {}",
                        v.len()
                    ))
                })?;
                Ok(Self(bytes))
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = HyphanetError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let arr: [u8; 32] = bytes.try_into().map_err(|_| {
                    HyphanetError::MalformedUri(format!(
                        "key must be 32 bytes, got {}",
                        bytes.len()
                    ))
                })?;
                Ok(Self(arr))
            }
        }
    };
}

key_newtype!(RoutingKey);
key_newtype!(DecryptionKey);
