//! The user-visible decode entry points (spec.md §4.7): a fetched
//! node block paired with the client key that can open it.

use hyphanet_codec::{ChkDecodeInput, NodeChkBlock, NodeSskBlock, SskDecodeInput};
use hyphanet_keys::{ClientChk, ClientSsk};
use hyphanet_types::HyphanetError;

pub struct ClientChkBlock {
    pub node_block: NodeChkBlock,
    pub client: ClientChk,
}

impl ClientChkBlock {
    pub fn new(node_block: NodeChkBlock, client: ClientChk) -> Self {
        Self { node_block, client }
    }

    pub fn decode(&self, decompress: bool, max_length: u64) -> Result<Vec<u8>, HyphanetError> {
        hyphanet_codec::decode_chk(ChkDecodeInput {
            block: &self.node_block,
            client: &self.client,
            decompress,
            max_length,
        })
    }
}

pub struct ClientSskBlock {
    pub node_block: NodeSskBlock,
    pub client: ClientSsk,
}

impl ClientSskBlock {
    pub fn new(node_block: NodeSskBlock, client: ClientSsk) -> Self {
        Self { node_block, client }
    }

    pub fn decode(&self, dont_decompress: bool, max_length: u64) -> Result<Vec<u8>, HyphanetError> {
        hyphanet_codec::decode_ssk(SskDecodeInput {
            client: &self.client,
            block: &self.node_block,
            dont_decompress,
            max_length,
        })
    }
}
