//! `Uri::create_client_key()` (spec.md §4.7) lives here rather than in
//! `hyphanet-uri`, since it needs `hyphanet-keys` and `hyphanet-uri`
//! must not depend upward on it.

use hyphanet_keys::ClientKey;
use hyphanet_types::HyphanetError;
use hyphanet_uri::Uri;

pub trait UriExt {
    /// Parse this URI's keys segment into the right `ClientKey`
    /// variant for its `KeyType`.
    fn create_client_key(&self) -> Result<ClientKey, HyphanetError>;
}

impl UriExt for Uri {
    fn create_client_key(&self) -> Result<ClientKey, HyphanetError> {
        ClientKey::from_uri(self)
    }
}
