//! `NodeKey`: the routing identity the overlay network actually
//! sees, derived from a `ClientKey`. Wire layouts are a hard
//! compatibility contract (spec §6), not a place for invention.

use hyphanet_primitives::sha256;
use hyphanet_types::{CryptoAlgorithm, RoutingKey};

const CHK_BASE_TYPE: u8 = 0x01;
const SSK_BASE_TYPE: u16 = 0x02;

/// `base_type(1) || crypto_algo(1) || routing(32)` — 34 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeChk {
    pub routing: RoutingKey,
    pub crypto_algo: CryptoAlgorithm,
}

impl NodeChk {
    pub fn to_bytes(self) -> [u8; 34] {
        let mut out = [0u8; 34];
        out[0] = CHK_BASE_TYPE;
        out[1] = self.crypto_algo.as_u8();
        out[2..].copy_from_slice(self.routing.as_bytes());
        out
    }
}

/// `base_type_hi(1) || base_type_lo(1) || eh_docname(32) || routing(32)`
/// — 66 bytes. `routing` here is `SHA-256(eh_docname || client_routing)`,
/// distinct from the `ClientSsk.routing` it was derived from.
#[derive(Debug, Clone, Copy)]
pub struct NodeSsk {
    pub routing: RoutingKey,
    pub crypto_algo: CryptoAlgorithm,
    pub eh_docname: [u8; 32],
}

impl NodeSsk {
    pub fn derive(client_routing: &RoutingKey, crypto_algo: CryptoAlgorithm, eh_docname: [u8; 32]) -> Self {
        let routing_bytes = sha256::hash_concat(&[&eh_docname, client_routing.as_bytes()]);
        Self {
            routing: RoutingKey::from_bytes(routing_bytes),
            crypto_algo,
            eh_docname,
        }
    }

    pub fn to_bytes(self) -> [u8; 66] {
        let mut out = [0u8; 66];
        out[0] = (SSK_BASE_TYPE >> 8) as u8;
        out[1] = SSK_BASE_TYPE as u8;
        out[2..34].copy_from_slice(&self.eh_docname);
        out[34..].copy_from_slice(self.routing.as_bytes());
        out
    }
}

/// `NodeKey` equality is `routing` and `crypto_algo` (and, for SSK,
/// `eh_docname`) — never whatever public key the block happened to
/// carry, which is why this is a manual impl rather than a derive.
impl PartialEq for NodeSsk {
    fn eq(&self, other: &Self) -> bool {
        self.routing == other.routing
            && self.crypto_algo == other.crypto_algo
            && self.eh_docname == other.eh_docname
    }
}
impl Eq for NodeSsk {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKey {
    Chk(NodeChk),
    Ssk(NodeSsk),
}

impl NodeKey {
    pub fn crypto_algo(&self) -> CryptoAlgorithm {
        match self {
            Self::Chk(chk) => chk.crypto_algo,
            Self::Ssk(ssk) => ssk.crypto_algo,
        }
    }

    pub fn routing(&self) -> RoutingKey {
        match self {
            Self::Chk(chk) => chk.routing,
            Self::Ssk(ssk) => ssk.routing,
        }
    }
}
