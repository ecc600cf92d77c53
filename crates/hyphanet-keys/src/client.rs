//! `ClientKey`: a single tagged enum standing in for the source's
//! `ClientKey` class hierarchy (spec §9 redesign note — Rust has no
//! inheritance, so the five concrete shapes become enum variants
//! instead of subclasses).

use hyphanet_types::{CryptoAlgorithm, HyphanetError, KeyType, SskExtraBytes};
use hyphanet_uri::Uri;

use crate::chk::ClientChk;
use crate::ksk;
use crate::node::NodeKey;
use crate::ssk::{ClientSsk, InsertableClientSsk};
use crate::usk::Usk;

#[derive(Debug, Clone)]
pub enum ClientKey {
    Chk(ClientChk),
    Ssk(ClientSsk),
    InsertableSsk(InsertableClientSsk),
    Usk(Usk),
}

impl ClientKey {
    pub fn from_uri(uri: &Uri) -> Result<Self, HyphanetError> {
        match uri.key_type {
            KeyType::Chk => Ok(Self::Chk(ClientChk::from_uri(uri)?)),
            KeyType::Ssk => Ok(Self::Ssk(ClientSsk::from_uri(uri)?)),
            KeyType::Ksk => Ok(Self::InsertableSsk(Self::ksk_from_uri(uri)?)),
            KeyType::Usk => Ok(Self::Usk(Usk::from_uri(uri)?)),
        }
    }

    /// A KSK URI carries only the keyword (spec.md §4.1/§4.2): there
    /// is no routing/decryption/public-key material to parse, so
    /// "constructing" a `ClientKey` from one means deriving a fresh
    /// keypair from the keyword the same way `create_ksk` does, not
    /// parsing fields that were never on the wire.
    fn ksk_from_uri(uri: &Uri) -> Result<InsertableClientSsk, HyphanetError> {
        let mut meta_strings = uri.meta_strings.clone();
        if meta_strings.is_empty() {
            return Err(HyphanetError::MalformedUri(
                "KSK URI missing keyword meta-string".into(),
            ));
        }
        let keyword = meta_strings.remove(0);
        let crypto_algo = SskExtraBytes::from_bytes(&uri.extra)
            .map(|extra| extra.crypto_algo)
            .unwrap_or(CryptoAlgorithm::AesCtr256Sha256);
        Ok(ksk::create_with_meta(&keyword, crypto_algo, meta_strings))
    }

    pub fn to_uri(&self) -> Uri {
        match self {
            Self::Chk(chk) => chk.to_uri(),
            Self::Ssk(ssk) => ssk.to_uri(),
            Self::InsertableSsk(insertable) => insertable.ssk.to_uri(),
            Self::Usk(usk) => usk.to_uri(),
        }
    }

    pub fn node_key(&self) -> NodeKey {
        match self {
            Self::Chk(chk) => NodeKey::Chk(chk.node_key()),
            Self::Ssk(ssk) => NodeKey::Ssk(ssk.node_key()),
            Self::InsertableSsk(insertable) => NodeKey::Ssk(insertable.ssk.node_key()),
            Self::Usk(usk) => NodeKey::Ssk(usk.to_ssk().node_key()),
        }
    }
}
