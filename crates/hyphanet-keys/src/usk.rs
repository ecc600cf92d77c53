//! `Usk`: an updatable SSK whose `doc_name` embeds an integer
//! edition.

use hyphanet_types::{CryptoAlgorithm, DecryptionKey, HyphanetError, KeyType, RoutingKey, SskExtraBytes};
use hyphanet_uri::Uri;

use crate::edition;
use crate::ssk::ClientSsk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usk {
    pub routing: RoutingKey,
    pub decryption: DecryptionKey,
    pub crypto_algo: CryptoAlgorithm,
    pub doc_name: String,
    pub edition: i64,
    pub extra_meta: Vec<String>,
}

impl Usk {
    pub fn new(
        routing: RoutingKey,
        decryption: DecryptionKey,
        crypto_algo: CryptoAlgorithm,
        doc_name: String,
        edition: i64,
        extra_meta: Vec<String>,
    ) -> Self {
        Self {
            routing,
            decryption,
            crypto_algo,
            doc_name,
            edition,
            extra_meta,
        }
    }

    pub fn from_uri(uri: &Uri) -> Result<Self, HyphanetError> {
        if uri.key_type != KeyType::Usk {
            return Err(HyphanetError::MalformedUri(format!(
                "expected USK, got {}",
                uri.key_type
            )));
        }
        let routing = uri
            .routing
            .ok_or_else(|| HyphanetError::MalformedUri("USK URI missing routing key".into()))?;
        let decryption = uri
            .decryption
            .ok_or_else(|| HyphanetError::MalformedUri("USK URI missing decryption key".into()))?;
        let extra = SskExtraBytes::from_bytes(&uri.extra)?;
        let mut meta_strings = uri.meta_strings.clone();
        if meta_strings.len() < 2 {
            return Err(HyphanetError::MalformedUri(
                "USK URI missing doc_name/edition meta-strings".into(),
            ));
        }
        let doc_name = meta_strings.remove(0);
        let edition_str = meta_strings.remove(0);
        let edition = edition_str.parse::<i64>().map_err(|_| {
            HyphanetError::MalformedUri(format!("USK edition {edition_str:?} is not an integer"))
        })?;
        Ok(Self::new(routing, decryption, extra.crypto_algo, doc_name, edition, meta_strings))
    }

    pub fn to_uri(&self) -> Uri {
        let extra = SskExtraBytes {
            insert: false,
            crypto_algo: self.crypto_algo,
        };
        let mut meta_strings = Vec::with_capacity(self.extra_meta.len() + 2);
        meta_strings.push(self.doc_name.clone());
        meta_strings.push(self.edition.to_string());
        meta_strings.extend(self.extra_meta.iter().cloned());
        Uri {
            key_type: KeyType::Usk,
            routing: Some(self.routing),
            decryption: Some(self.decryption),
            extra: extra.to_bytes().to_vec(),
            meta_strings,
        }
    }

    /// The SSK this edition actually lives at on the network.
    pub fn to_ssk(&self) -> ClientSsk {
        let doc_name = edition::join(&self.doc_name, self.edition);
        ClientSsk::new(
            self.routing,
            self.decryption,
            self.crypto_algo,
            doc_name,
            None,
            self.extra_meta.clone(),
        )
        .expect("USK routing/decryption never carry a mismatched public key")
    }
}
