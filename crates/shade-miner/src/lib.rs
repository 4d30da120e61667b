//! Mining primitive adapter: wraps an external proof-of-work hasher.
//!
//! The core never implements the PoW hash itself (RandomX or otherwise) — it
//! is handed a `Hasher` that turns a seed into a stateful object with a
//! `hash(input) -> [u8; 32]` method (see [`mining::HashAlgorithm`]). This
//! crate owns nonce-offset discovery in the hashing blob, the difficulty
//! check, and the multi-threaded job-distribution loop around that hasher.

pub mod miner;
pub mod mining;

pub use miner::{
    check_hash, check_hash_target, find_nonce_offset, parse_difficulty, set_nonce, FoundBlock,
    MiningEngine, MiningJob,
};
pub use mining::{HashAlgorithm, MiningLoop};
