//! Cryptographic primitives for the Attest endorsement toolkit.
//!
//! - **Ed25519** for endorsement signing and verification
//! - **Blake2b** for hashing (payload digests, deterministic test signers)

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
