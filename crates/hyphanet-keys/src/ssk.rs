//! `ClientSsk`, `InsertableClientSsk`, and their `Usk` conversions.

use hyphanet_primitives::{rijndael256, sha256};
use hyphanet_types::{CryptoAlgorithm, DecryptionKey, HyphanetError, KeyType, RoutingKey, SskExtraBytes};
use hyphanet_uri::Uri;

use crate::edition;
use crate::node::NodeSsk;
use crate::usk::Usk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSsk {
    pub routing: RoutingKey,
    pub decryption: DecryptionKey,
    pub crypto_algo: CryptoAlgorithm,
    pub doc_name: String,
    pub public_key: Option<Vec<u8>>,
    pub eh_docname: [u8; 32],
    /// Meta-strings following `doc_name` in the URI path.
    pub meta_strings: Vec<String>,
    node_key: NodeSsk,
}

impl ClientSsk {
    pub fn new(
        routing: RoutingKey,
        decryption: DecryptionKey,
        crypto_algo: CryptoAlgorithm,
        doc_name: String,
        public_key: Option<Vec<u8>>,
        meta_strings: Vec<String>,
    ) -> Result<Self, HyphanetError> {
        if let Some(public_key) = &public_key {
            let digest = sha256::hash(public_key);
            if digest != *routing.as_bytes() {
                return Err(HyphanetError::verify_failed(
                    KeyType::Ssk,
                    "public key does not hash to routing key",
                ));
            }
        }
        let doc_name_hash = sha256::hash(doc_name.as_bytes());
        let eh_docname = rijndael256::ecb_encrypt_block(decryption.as_bytes(), &doc_name_hash);
        let node_key = NodeSsk::derive(&routing, crypto_algo, eh_docname);
        Ok(Self {
            routing,
            decryption,
            crypto_algo,
            doc_name,
            public_key,
            eh_docname,
            meta_strings,
            node_key,
        })
    }

    pub fn node_key(&self) -> NodeSsk {
        self.node_key
    }

    pub fn from_uri(uri: &Uri) -> Result<Self, HyphanetError> {
        if uri.key_type != KeyType::Ssk {
            return Err(HyphanetError::MalformedUri(format!(
                "expected SSK, got {}",
                uri.key_type
            )));
        }
        let routing = uri
            .routing
            .ok_or_else(|| HyphanetError::MalformedUri("SSK URI missing routing key".into()))?;
        let decryption = uri
            .decryption
            .ok_or_else(|| HyphanetError::MalformedUri("SSK URI missing decryption key".into()))?;
        let extra = SskExtraBytes::from_bytes(&uri.extra)?;
        let mut meta_strings = uri.meta_strings.clone();
        if meta_strings.is_empty() {
            return Err(HyphanetError::MalformedUri(
                "SSK URI missing doc_name meta-string".into(),
            ));
        }
        let doc_name = meta_strings.remove(0);
        Self::new(routing, decryption, extra.crypto_algo, doc_name, None, meta_strings)
    }

    pub fn to_uri(&self) -> Uri {
        // A bare `ClientSsk` is always the fetch (request) side.
        let extra = SskExtraBytes {
            insert: false,
            crypto_algo: self.crypto_algo,
        };
        let mut meta_strings = Vec::with_capacity(self.meta_strings.len() + 1);
        meta_strings.push(self.doc_name.clone());
        meta_strings.extend(self.meta_strings.iter().cloned());
        Uri {
            key_type: KeyType::Ssk,
            routing: Some(self.routing),
            decryption: Some(self.decryption),
            extra: extra.to_bytes().to_vec(),
            meta_strings,
        }
    }

    /// `doc_name` must end in `-<edition>`; the prefix becomes the
    /// USK's `doc_name`, the rest of the path is carried through.
    pub fn to_usk(&self) -> Result<Usk, HyphanetError> {
        let (prefix, edition) = edition::split(&self.doc_name).ok_or_else(|| {
            HyphanetError::MalformedUri(format!(
                "SSK doc_name {:?} has no trailing -<edition>",
                self.doc_name
            ))
        })?;
        Ok(Usk::new(
            self.routing,
            self.decryption,
            self.crypto_algo,
            prefix,
            edition,
            self.meta_strings.clone(),
        ))
    }
}

/// An SSK with its private signing key attached — the insertable
/// (write) side of the same key.
#[derive(Clone)]
pub struct InsertableClientSsk {
    pub ssk: ClientSsk,
    pub signing_key: dsa::SigningKey,
}

impl InsertableClientSsk {
    pub fn new(ssk: ClientSsk, signing_key: dsa::SigningKey) -> Self {
        Self { ssk, signing_key }
    }
}

impl std::fmt::Debug for InsertableClientSsk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertableClientSsk")
            .field("ssk", &self.ssk)
            .field("signing_key", &"<redacted>")
            .finish()
    }
}
