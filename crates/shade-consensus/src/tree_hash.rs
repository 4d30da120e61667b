//! CryptoNote tree hash (Merkle root) computation.
//!
//! Used to compute the root hash of transaction hashes in a block.
//! This is NOT a standard binary Merkle tree — it uses the CryptoNote
//! algorithm from crypto/tree-hash.c.
//!
//! Reference: shade/src/crypto/tree-hash.c, mining.js treeHash()

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of 64 bytes (two concatenated 32-byte hashes).
fn cn_fast_hash(data: &[u8]) -> [u8; 32] {
    let mut keccak = Keccak::v256();
    let mut output = [0u8; 32];
    keccak.update(data);
    keccak.finalize(&mut output);
    output
}

/// Hash a pair of 32-byte values.
fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut combined = [0u8; 64];
    combined[..32].copy_from_slice(a);
    combined[32..].copy_from_slice(b);
    cn_fast_hash(&combined)
}

/// Compute the CryptoNote tree hash (Merkle root) of transaction hashes.
///
/// Algorithm:
/// - 0 hashes → zero hash
/// - 1 hash → identity
/// - 2 hashes → hash(h0 || h1)
/// - N ≥ 3 → CryptoNote power-of-2 tree algorithm
///
/// Reference: crypto/tree-hash.c `tree_hash()`
pub fn tree_hash(hashes: &[[u8; 32]]) -> [u8; 32] {
    let count = hashes.len();

    if count == 0 {
        return [0u8; 32];
    }

    if count == 1 {
        return hashes[0];
    }

    if count == 2 {
        return hash_pair(&hashes[0], &hashes[1]);
    }

    // Find cnt = largest power of 2 ≤ count
    let mut cnt = 1usize;
    while cnt * 2 <= count {
        cnt *= 2;
    }

    // Initialize intermediate hashes
    let mut ints = vec![[0u8; 32]; cnt];

    // Copy hashes that don't need initial hashing
    let start_idx = 2 * cnt - count;
    ints[..start_idx].copy_from_slice(&hashes[..start_idx]);

    // Hash remaining pairs into intermediate array
    let mut i = start_idx;
    let mut j = start_idx;
    while j < cnt {
        ints[j] = hash_pair(&hashes[i], &hashes[i + 1]);
        i += 2;
        j += 1;
    }

    // Reduce tree until we have 2 elements
    while cnt > 2 {
        cnt >>= 1;
        let mut i = 0;
        let mut j = 0;
        while j < cnt {
            let a = ints[i];
            let b = ints[i + 1];
            ints[j] = hash_pair(&a, &b);
            i += 2;
            j += 1;
        }
    }

    // Final hash of 2 remaining elements
    hash_pair(&ints[0], &ints[1])
}
