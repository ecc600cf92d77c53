//! Typed client keys (CHK/SSK/USK/KSK) and the node-key routing
//! identities the overlay network derives from them.

pub mod chk;
pub mod client;
pub mod dsa_keys;
pub mod edition;
pub mod ksk;
pub mod node;
pub mod ssk;
pub mod usk;

pub use chk::ClientChk;
pub use client::ClientKey;
pub use dsa_keys::{group as dsa_group, verifying_key_from_mpi, DsaKeyPair};
pub use ksk::{create as create_ksk, ClientKsk};
pub use node::{NodeChk, NodeKey, NodeSsk};
pub use ssk::{ClientSsk, InsertableClientSsk};
pub use usk::Usk;
