//! Account and subaddress management.
//!
//! Each account has a major index and a set of subaddresses (minor indices).
//! Subaddress maps are generated in batch from shade-crypto for both
//! CryptoNote (legacy) and CARROT protocols.

use crate::keys::WalletKeys;

/// A wallet account with pre-computed subaddress maps.
#[derive(Debug, Clone)]
pub struct Account {
    /// Account major index (0 = primary).
    pub index: u32,
    /// Human-readable label.
    pub label: String,
    /// Number of subaddresses generated (minor indices 0..count).
    pub subaddress_count: u32,
}

/// CryptoNote + CARROT subaddress lookup maps.
///
/// Each entry is `(spend_public_key, major_index, minor_index)`.
/// Used by the scanner to detect owned outputs sent to subaddresses.
#[derive(Debug, Clone)]
pub struct SubaddressMaps {
    pub cn: Vec<([u8; 32], u32, u32)>,
    pub carrot: Vec<([u8; 32], u32, u32)>,
}

impl SubaddressMaps {
    /// Generate subaddress maps for all accounts.
    ///
    /// * `num_accounts` — number of accounts (major indices 0..num_accounts).
    /// * `minor_per_account` — subaddresses per account (minor indices 0..minor_per_account).
    pub fn generate(
        keys: &WalletKeys,
        num_accounts: u32,
        minor_per_account: u32,
    ) -> Self {
        let major_count = num_accounts.saturating_sub(1);
        let minor_count = minor_per_account.saturating_sub(1);

        let cn_raw = shade_crypto::subaddress::cn_subaddress_map_batch(
            &keys.cn.spend_public_key,
            &keys.cn.view_secret_key,
            major_count,
            minor_count,
        );
        let cn = parse_subaddress_map(&cn_raw);

        let carrot = if !keys.carrot.is_empty() {
            let carrot_raw = shade_crypto::subaddress::carrot_subaddress_map_batch(
                &keys.carrot.account_spend_pubkey,
                &keys.carrot.account_view_pubkey,
                &keys.carrot.generate_address_secret,
                major_count,
                minor_count,
            );
            parse_subaddress_map(&carrot_raw)
        } else {
            vec![]
        };

        Self { cn, carrot }
    }

    /// Number of CN subaddress entries.
    pub fn cn_count(&self) -> usize {
        self.cn.len()
    }

    /// Number of CARROT subaddress entries.
    pub fn carrot_count(&self) -> usize {
        self.carrot.len()
    }

    /// Look up a CN subaddress by spend public key.
    pub fn cn_lookup(&self, spend_pubkey: &[u8; 32]) -> Option<(u32, u32)> {
        self.cn
            .iter()
            .find(|(pk, _, _)| pk == spend_pubkey)
            .map(|(_, major, minor)| (*major, *minor))
    }

    /// Look up a CARROT subaddress by spend public key.
    pub fn carrot_lookup(&self, spend_pubkey: &[u8; 32]) -> Option<(u32, u32)> {
        self.carrot
            .iter()
            .find(|(pk, _, _)| pk == spend_pubkey)
            .map(|(_, major, minor)| (*major, *minor))
    }
}

/// Parse the flat binary subaddress map from shade-crypto batch functions.
///
/// Format: `[count: u32 LE] [entry_0: 40 bytes] [entry_1: 40 bytes] ...`
/// Each entry: `[spend_pubkey: 32 bytes] [major: u32 LE] [minor: u32 LE]`
pub fn parse_subaddress_map(data: &[u8]) -> Vec<([u8; 32], u32, u32)> {
    if data.len() < 4 {
        return vec![];
    }
    let count = u32::from_le_bytes(data[0..4].try_into().unwrap()) as usize;
    let mut result = Vec::with_capacity(count);
    for i in 0..count {
        let offset = 4 + i * 40;
        if offset + 40 > data.len() {
            break;
        }
        let mut pubkey = [0u8; 32];
        pubkey.copy_from_slice(&data[offset..offset + 32]);
        let major = u32::from_le_bytes(data[offset + 32..offset + 36].try_into().unwrap());
        let minor = u32::from_le_bytes(data[offset + 36..offset + 40].try_into().unwrap());
        result.push((pubkey, major, minor));
    }
    result
}
