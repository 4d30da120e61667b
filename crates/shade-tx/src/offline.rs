//! Offline signing support for cold-wallet workflows.
//!
//! Provides types and functions for creating, exporting, importing, and
//! validating unsigned/signed transactions as well as key-image and output
//! export files. These allow a view-only (hot) wallet to prepare transactions
//! that are then signed on an air-gapped (cold) device.

use serde::{Deserialize, Serialize};

// ─── Version Constants ──────────────────────────────────────────────────────

/// Format version for unsigned transaction files.
pub const UNSIGNED_TX_VERSION: u32 = 1;

/// Format version for signed transaction files.
pub const SIGNED_TX_VERSION: u32 = 1;

// ─── Unsigned Transaction Types ─────────────────────────────────────────────

/// An unsigned transaction prepared by a view-only wallet for cold signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsignedTx {
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub fee: u64,
    pub extra: Vec<u8>,
    pub tx_type: u32,
    pub asset_type: String,
    pub ring_size: usize,
}

/// Input for an unsigned transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxInput {
    pub key_image: String,
    pub amount: u64,
    pub key_offsets: Vec<u64>,
    pub real_output_index: usize,
    pub real_output_pub_key: String,
}

/// Output for an unsigned transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    pub amount: u64,
    pub destination: String,
    pub is_subaddress: bool,
}

// ─── Signed Transaction Types ───────────────────────────────────────────────

/// A signed transaction ready for broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedTx {
    pub version: u32,
    pub tx_hash: String,
    pub tx_blob: String,
    pub tx_key: String,
    pub fee: u64,
    pub tx_type: u32,
    pub asset_type: String,
}

// ─── Key Image / Output Export Types ────────────────────────────────────────

/// Exported key image for view-only wallets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedKeyImage {
    pub key_image: String,
    pub signature: String,
    pub output_index: u64,
    pub amount: u64,
}

/// Exported output for offline signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedOutput {
    pub public_key: String,
    pub key_image: String,
    pub tx_hash: String,
    pub output_index: u64,
    pub amount: u64,
    pub block_height: u64,
    pub asset_type: String,
    pub subaddress_major: u32,
    pub subaddress_minor: u32,
}

// ─── Transaction Summary ────────────────────────────────────────────────────

/// Summary of an unsigned transaction for display purposes.
#[derive(Debug, Clone)]
pub struct TxSummary {
    pub input_count: usize,
    pub output_count: usize,
    pub fee: u64,
    pub total_in: u64,
    pub total_out: u64,
    pub ring_size: usize,
    pub tx_type: u32,
    pub asset_type: String,
}

// ─── Unsigned Transaction Functions ─────────────────────────────────────────

/// Create a new unsigned transaction with the current format version.
pub fn create_unsigned_tx(
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    fee: u64,
    tx_type: u32,
    asset_type: String,
    ring_size: usize,
    extra: Vec<u8>,
) -> UnsignedTx {
    UnsignedTx {
        version: UNSIGNED_TX_VERSION,
        inputs,
        outputs,
        fee,
        extra,
        tx_type,
        asset_type,
        ring_size,
    }
}

/// Deserialize an unsigned transaction from JSON, verifying the version.
pub fn parse_unsigned_tx(json: &str) -> Result<UnsignedTx, String> {
    let tx: UnsignedTx =
        serde_json::from_str(json).map_err(|e| format!("invalid unsigned tx JSON: {}", e))?;
    if tx.version != UNSIGNED_TX_VERSION {
        return Err(format!(
            "unsupported unsigned tx version: expected {}, got {}",
            UNSIGNED_TX_VERSION, tx.version
        ));
    }
    Ok(tx)
}

/// Serialize an unsigned transaction to a JSON string.
pub fn export_unsigned_tx(tx: &UnsignedTx) -> String {
    serde_json::to_string(tx).expect("UnsignedTx serialization should not fail")
}

/// Import an unsigned transaction from a JSON string (alias for `parse_unsigned_tx`).
pub fn import_unsigned_tx(json: &str) -> Result<UnsignedTx, String> {
    parse_unsigned_tx(json)
}

// ─── Signed Transaction Functions ───────────────────────────────────────────

/// Create a new signed transaction with the current format version.
pub fn create_signed_tx(
    tx_hash: String,
    tx_blob: String,
    tx_key: String,
    fee: u64,
    tx_type: u32,
    asset_type: String,
) -> SignedTx {
    SignedTx {
        version: SIGNED_TX_VERSION,
        tx_hash,
        tx_blob,
        tx_key,
        fee,
        tx_type,
        asset_type,
    }
}

/// Deserialize a signed transaction from JSON, verifying the version.
pub fn parse_signed_tx(json: &str) -> Result<SignedTx, String> {
    let tx: SignedTx =
        serde_json::from_str(json).map_err(|e| format!("invalid signed tx JSON: {}", e))?;
    if tx.version != SIGNED_TX_VERSION {
        return Err(format!(
            "unsupported signed tx version: expected {}, got {}",
            SIGNED_TX_VERSION, tx.version
        ));
    }
    Ok(tx)
}

/// Serialize a signed transaction to a JSON string.
pub fn export_signed_tx(tx: &SignedTx) -> String {
    serde_json::to_string(tx).expect("SignedTx serialization should not fail")
}

/// Import a signed transaction from a JSON string (alias for `parse_signed_tx`).
pub fn import_signed_tx(json: &str) -> Result<SignedTx, String> {
    parse_signed_tx(json)
}

// ─── Key Image Export/Import ────────────────────────────────────────────────

/// Serialize a slice of exported key images to a JSON array string.
pub fn export_key_images(images: &[ExportedKeyImage]) -> String {
    serde_json::to_string(images).expect("ExportedKeyImage serialization should not fail")
}

/// Deserialize exported key images from a JSON array string.
pub fn import_key_images(json: &str) -> Result<Vec<ExportedKeyImage>, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid key images JSON: {}", e))
}

// ─── Output Export/Import ───────────────────────────────────────────────────

/// Serialize a slice of exported outputs to a JSON array string.
pub fn export_outputs(outputs: &[ExportedOutput]) -> String {
    serde_json::to_string(outputs).expect("ExportedOutput serialization should not fail")
}

/// Deserialize exported outputs from a JSON array string.
pub fn import_outputs(json: &str) -> Result<Vec<ExportedOutput>, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid outputs JSON: {}", e))
}

// ─── Validation ─────────────────────────────────────────────────────────────

/// Validate an unsigned transaction. Returns `Ok(())` if valid, or a list of
/// errors describing every problem found.
pub fn verify_unsigned_tx(tx: &UnsignedTx) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if tx.inputs.is_empty() {
        errors.push("transaction has no inputs".to_string());
    }

    if tx.outputs.is_empty() {
        errors.push("transaction has no outputs".to_string());
    }

    // Miner transactions (tx_type == 1) can have zero fee.
    if tx.fee == 0 && tx.tx_type != 1 {
        errors.push("fee must be greater than zero for non-miner transactions".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ─── Summary ────────────────────────────────────────────────────────────────

/// Produce a human-readable summary of an unsigned transaction.
pub fn summarize_unsigned_tx(tx: &UnsignedTx) -> TxSummary {
    let total_in: u64 = tx.inputs.iter().map(|i| i.amount).sum();
    let total_out: u64 = tx.outputs.iter().map(|o| o.amount).sum();

    TxSummary {
        input_count: tx.inputs.len(),
        output_count: tx.outputs.len(),
        fee: tx.fee,
        total_in,
        total_out,
        ring_size: tx.ring_size,
        tx_type: tx.tx_type,
        asset_type: tx.asset_type.clone(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
