//! `ClientChk`: the content-hash client key.

use hyphanet_types::{ChkExtraBytes, CompressionAlgorithm, CryptoAlgorithm, DecryptionKey, HyphanetError, KeyType, RoutingKey};
use hyphanet_uri::Uri;

use crate::node::NodeChk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientChk {
    pub routing: RoutingKey,
    pub decryption: Option<DecryptionKey>,
    pub crypto_algo: CryptoAlgorithm,
    pub is_control_doc: bool,
    pub compression: CompressionAlgorithm,
    pub filename: Option<String>,
    node_key: NodeChk,
}

impl ClientChk {
    pub fn new(
        routing: RoutingKey,
        decryption: Option<DecryptionKey>,
        crypto_algo: CryptoAlgorithm,
        is_control_doc: bool,
        compression: CompressionAlgorithm,
        filename: Option<String>,
    ) -> Self {
        let node_key = NodeChk { routing, crypto_algo };
        Self {
            routing,
            decryption,
            crypto_algo,
            is_control_doc,
            compression,
            filename,
            node_key,
        }
    }

    /// Eagerly-derived node key. Construction already computed it
    /// (a `ClientChk`'s node key never changes after the fact), so
    /// this is a plain accessor, never a lazily-populated cache.
    pub fn node_key(&self) -> NodeChk {
        self.node_key
    }

    pub fn is_compressed(&self) -> bool {
        self.compression.is_compressed()
    }

    pub fn from_uri(uri: &Uri) -> Result<Self, HyphanetError> {
        if uri.key_type != KeyType::Chk {
            return Err(HyphanetError::MalformedUri(format!(
                "expected CHK, got {}",
                uri.key_type
            )));
        }
        let routing = uri
            .routing
            .ok_or_else(|| HyphanetError::MalformedUri("CHK URI missing routing key".into()))?;
        let extra = ChkExtraBytes::from_bytes(&uri.extra)?;
        let filename = uri.meta_strings.first().cloned();
        Ok(Self::new(
            routing,
            uri.decryption,
            extra.crypto_algo,
            extra.is_control_doc,
            extra.compression,
            filename,
        ))
    }

    pub fn to_uri(&self) -> Uri {
        let extra = ChkExtraBytes {
            crypto_algo: self.crypto_algo,
            is_control_doc: self.is_control_doc,
            compression: self.compression,
        };
        Uri {
            key_type: KeyType::Chk,
            routing: Some(self.routing),
            decryption: self.decryption,
            extra: extra.to_bytes().to_vec(),
            meta_strings: self.filename.iter().cloned().collect(),
        }
    }
}
