//! Integration test crate for the Hyphanet access layer.
//!
//! This crate has no library code — it only contains integration
//! tests that exercise end-to-end flows across multiple workspace
//! crates (URI parsing, key derivation, the block codec, and the
//! compression pipeline together).
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p hyphanet-integration-tests
//! ```
