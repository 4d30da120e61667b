//! Blockchain synchronization engine.
//!
//! Fetches blocks from the daemon, scans transactions for owned outputs,
//! stores results in the wallet database, and handles chain reorganizations.

use crate::error::WalletError;
use crate::scanner::{self, FoundOutput, ScanContext, ScanTxData, TxOutput};
use shade_rpc::DaemonRpc;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Instant;

/// How many recent block hashes the reorg-detection ring buffer keeps. Deep
/// enough to cover any realistic reorg depth without retaining the whole chain.
const BLOCK_HASH_RING_SIZE: i64 = 5000;

/// Smallest batch the adaptive fetcher will fall back to against a slow node.
const MIN_BATCH: u64 = 20;
/// Largest batch requested from a fast node in one `get_blocks_by_height_bin` call.
const MAX_BATCH: u64 = 1000;
/// Below this many ms/block, double the batch size for the next round.
const LOW_WATER_MS_PER_BLOCK: f64 = 5.0;
/// Above this many ms/block, halve the batch size for the next round.
const HIGH_WATER_MS_PER_BLOCK: f64 = 50.0;

/// Sync progress events.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// Sync started.
    Started { target_height: u64 },
    /// Block range processed.
    Progress {
        current_height: u64,
        target_height: u64,
        outputs_found: usize,
    },
    /// Sync completed.
    Complete { height: u64 },
    /// Chain reorganization detected.
    Reorg { from_height: u64, to_height: u64 },
    /// Error during sync.
    Error(String),
}

/// Lifecycle state of a [`SyncEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Running,
    Stopping,
    Error,
}

/// Blockchain sync engine.
///
/// One engine can be shared (via `Arc`) between the task driving [`SyncEngine::start`]
/// and whatever wants to call [`SyncEngine::stop`] or poll [`SyncEngine::state`] from
/// elsewhere — e.g. a UI cancel button.
pub struct SyncEngine {
    should_stop: Arc<AtomicBool>,
    state: Arc<StdMutex<SyncState>>,
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine {
    pub fn new() -> Self {
        Self {
            should_stop: Arc::new(AtomicBool::new(false)),
            state: Arc::new(StdMutex::new(SyncState::Idle)),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SyncState {
        *self.state.lock().expect("sync state mutex poisoned")
    }

    /// Request cancellation. Takes effect at the next batch boundary; does
    /// not interrupt a batch fetch already in flight.
    pub fn stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
        let mut state = self.state.lock().expect("sync state mutex poisoned");
        if *state == SyncState::Running {
            *state = SyncState::Stopping;
        }
    }

    /// Sync the wallet from the current sync height to the daemon's tip.
    ///
    /// Fetches blocks in adaptively-sized batches over the binary bulk
    /// endpoint, falling back to one-at-a-time JSON fetches for a batch the
    /// daemon can't serve in bulk. Scans all transactions in each block,
    /// stores found outputs, and handles reorganizations. Returns
    /// [`WalletError::SyncAlreadyRunning`] if called while already running.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn start(
        &self,
        daemon: &DaemonRpc,
        db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
        scan_ctx: &ScanContext,
        event_tx: Option<&tokio::sync::mpsc::Sender<SyncEvent>>,
    ) -> Result<u64, WalletError> {
        {
            let mut state = self.state.lock().expect("sync state mutex poisoned");
            if *state == SyncState::Running || *state == SyncState::Stopping {
                return Err(WalletError::SyncAlreadyRunning);
            }
            *state = SyncState::Running;
        }
        self.should_stop.store(false, Ordering::SeqCst);

        let result = self.run(daemon, db, scan_ctx, event_tx).await;

        let mut state = self.state.lock().expect("sync state mutex poisoned");
        *state = match &result {
            Ok(_) => SyncState::Idle,
            Err(_) => SyncState::Error,
        };
        result
    }

    async fn run(
        &self,
        daemon: &DaemonRpc,
        db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
        scan_ctx: &ScanContext,
        event_tx: Option<&tokio::sync::mpsc::Sender<SyncEvent>>,
    ) -> Result<u64, WalletError> {
        let daemon_height = daemon
            .get_height()
            .await
            .map_err(|e| WalletError::Sync(e.to_string()))?;

        // daemon_height is the block count, so the last valid block index
        // is daemon_height - 1.
        let top_block = daemon_height.saturating_sub(1);

        let sync_height = {
            let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
            db.get_sync_height()
                .map_err(|e| WalletError::Storage(e.to_string()))?
        };

        if sync_height as u64 >= top_block {
            return Ok(sync_height as u64);
        }

        if let Some(tx) = event_tx {
            let _ = tx
                .send(SyncEvent::Started {
                    target_height: top_block,
                })
                .await;
        }

        let mut current = sync_height as u64;
        let mut total_outputs_found = 0usize;
        let mut batch_size = MIN_BATCH;

        'outer: while current < top_block {
            if self.should_stop.load(Ordering::SeqCst) {
                return Ok(current);
            }

            let batch_end = (current + batch_size).min(top_block);
            let heights: Vec<u64> = (current + 1..=batch_end).collect();

            let started = Instant::now();
            let bulk = daemon.get_blocks_by_height_bin(&heights).await;

            match bulk {
                Ok(entries) if entries.len() == heights.len() => {
                    for (&height, entry) in heights.iter().zip(entries.iter()) {
                        if self.should_stop.load(Ordering::SeqCst) {
                            return Ok(current);
                        }

                        match sync_block_from_raw(daemon, db, scan_ctx, height, entry).await? {
                            BlockOutcome::Synced(found) => {
                                total_outputs_found += found;
                                {
                                    let db = db
                                        .lock()
                                        .map_err(|e| WalletError::Storage(e.to_string()))?;
                                    db.set_sync_height(height as i64)
                                        .map_err(|e| WalletError::Storage(e.to_string()))?;
                                }
                                current = height;

                                if let Some(tx) = event_tx {
                                    let _ = tx
                                        .send(SyncEvent::Progress {
                                            current_height: current,
                                            target_height: top_block,
                                            outputs_found: total_outputs_found,
                                        })
                                        .await;
                                }
                            }
                            BlockOutcome::Reorg => {
                                let reorg_start = find_fork_point(daemon, db, current).await?;

                                if let Some(tx) = event_tx {
                                    let _ = tx
                                        .send(SyncEvent::Reorg {
                                            from_height: current,
                                            to_height: reorg_start,
                                        })
                                        .await;
                                }

                                {
                                    let db = db
                                        .lock()
                                        .map_err(|e| WalletError::Storage(e.to_string()))?;
                                    db.rollback(reorg_start as i64)
                                        .map_err(|e| WalletError::Storage(e.to_string()))?;
                                }

                                current = reorg_start;
                                batch_size = MIN_BATCH;
                                continue 'outer;
                            }
                        }
                    }

                    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                    let ms_per_block = elapsed_ms / heights.len() as f64;
                    if ms_per_block < LOW_WATER_MS_PER_BLOCK {
                        batch_size = (batch_size * 2).min(MAX_BATCH);
                    } else if ms_per_block > HIGH_WATER_MS_PER_BLOCK {
                        batch_size = (batch_size / 2).max(MIN_BATCH);
                    }
                }
                _ => {
                    // Bulk endpoint unavailable or returned a short page —
                    // fall back to one JSON round trip per block in this
                    // batch, and stay conservative on batch size afterward.
                    for height in heights {
                        if self.should_stop.load(Ordering::SeqCst) {
                            return Ok(current);
                        }

                        if current > 0 {
                            let expected_hash = {
                                let db = db
                                    .lock()
                                    .map_err(|e| WalletError::Storage(e.to_string()))?;
                                db.get_block_hash(current as i64)
                                    .map_err(|e| WalletError::Storage(e.to_string()))?
                            };

                            if let Some(expected) = expected_hash {
                                let header = daemon
                                    .get_block_header_by_height(height)
                                    .await
                                    .map_err(|e| WalletError::Sync(e.to_string()))?;

                                if header.prev_hash != expected {
                                    let reorg_start =
                                        find_fork_point(daemon, db, current).await?;

                                    if let Some(tx) = event_tx {
                                        let _ = tx
                                            .send(SyncEvent::Reorg {
                                                from_height: current,
                                                to_height: reorg_start,
                                            })
                                            .await;
                                    }

                                    {
                                        let db = db.lock().map_err(|e| {
                                            WalletError::Storage(e.to_string())
                                        })?;
                                        db.rollback(reorg_start as i64).map_err(|e| {
                                            WalletError::Storage(e.to_string())
                                        })?;
                                    }

                                    current = reorg_start;
                                    batch_size = MIN_BATCH;
                                    continue 'outer;
                                }
                            }
                        }

                        let outputs_found = sync_block(daemon, db, scan_ctx, height).await?;
                        total_outputs_found += outputs_found;

                        {
                            let db =
                                db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
                            db.set_sync_height(height as i64)
                                .map_err(|e| WalletError::Storage(e.to_string()))?;
                        }

                        current = height;

                        if let Some(tx) = event_tx {
                            let _ = tx
                                .send(SyncEvent::Progress {
                                    current_height: current,
                                    target_height: top_block,
                                    outputs_found: total_outputs_found,
                                })
                                .await;
                        }
                    }
                    batch_size = MIN_BATCH;
                }
            }
        }

        if let Some(tx) = event_tx {
            let _ = tx
                .send(SyncEvent::Complete { height: top_block })
                .await;
        }

        Ok(top_block)
    }
}

/// Outcome of scanning one block fetched from the bulk endpoint.
enum BlockOutcome {
    Synced(usize),
    Reorg,
}

/// Scan a single block fetched via `get_blocks_by_height_bin`.
///
/// The reorg check comes for free here: the parsed header's `prevId` is
/// already part of the raw block bytes, so no extra round trip is needed to
/// detect a fork the way the JSON fallback path needs `get_block_header_by_height`.
#[cfg(not(target_arch = "wasm32"))]
async fn sync_block_from_raw(
    daemon: &DaemonRpc,
    db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
    scan_ctx: &ScanContext,
    height: u64,
    entry: &shade_rpc::RawBlockEntry,
) -> Result<BlockOutcome, WalletError> {
    let block_json_str = shade_crypto::parse_block_bytes(&entry.block);
    let parsed: ParsedBlockFull = serde_json::from_str(&block_json_str)
        .map_err(|e| WalletError::Sync(format!("parse_block({}): {}", height, e)))?;

    if height > 0 {
        let expected_hash = {
            let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
            db.get_block_hash((height - 1) as i64)
                .map_err(|e| WalletError::Storage(e.to_string()))?
        };

        if let Some(expected) = expected_hash {
            if parsed.header.prev_id != expected {
                return Ok(BlockOutcome::Reorg);
            }
        }
    }

    let block_hash = daemon
        .get_block_hash(height)
        .await
        .map_err(|e| WalletError::Sync(e.to_string()))?;
    let block_timestamp = parsed.header.timestamp;
    let mut outputs_found = 0;

    if let Some(miner_tx_json) = &parsed.miner_tx {
        let miner_tx_hash = coinbase_tx_hash(miner_tx_json)
            .map(|h| hex::encode(h))
            .unwrap_or_default();
        if !miner_tx_hash.is_empty() {
            if let Some(scan_data) =
                parse_tx_for_scanning(miner_tx_json, &miner_tx_hash, height, true)
            {
                let found = scanner::scan_transaction(scan_ctx, &scan_data);
                outputs_found += found.len();
                store_found_outputs(db, &found, &scan_data, block_timestamp)?;
            }
        }
    }

    for (tx_bytes, tx_hash_hex) in entry.txs.iter().zip(parsed.tx_hashes.iter()) {
        let tx_json_str = shade_crypto::parse_transaction_bytes(tx_bytes);
        if let Ok(tx_json) = serde_json::from_str::<serde_json::Value>(&tx_json_str) {
            detect_spent_outputs(db, &tx_json, tx_hash_hex, height)?;

            if let Some(scan_data) = parse_tx_for_scanning(&tx_json, tx_hash_hex, height, false) {
                let found = scanner::scan_transaction(scan_ctx, &scan_data);
                outputs_found += found.len();
                store_found_outputs(db, &found, &scan_data, block_timestamp)?;
            }
        }
    }

    {
        let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
        db.put_block_hash(height as i64, &block_hash)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        db.prune_block_hashes(height as i64, BLOCK_HASH_RING_SIZE)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
    }

    Ok(BlockOutcome::Synced(outputs_found))
}

/// Hash of a coinbase (non-RingCT) transaction: `keccak256` of its own
/// serialized bytes. Unlike a RingCT tx, a coinbase tx's hash isn't a tree of
/// prefix/rctBase/rctPrunable hashes — it's the plain blob hash.
fn coinbase_tx_hash(miner_tx_json: &serde_json::Value) -> Option<[u8; 32]> {
    let json_str = miner_tx_json.to_string();
    let bytes = shade_crypto::tx_serialize::serialize_transaction(&json_str).ok()?;
    Some(shade_crypto::keccak256(&bytes))
}

/// Block header fields needed by the bulk-fetch path, from `parse_block`'s
/// JSON shape.
#[derive(Debug, Deserialize)]
struct ParsedBlockHeader {
    timestamp: u64,
    #[serde(rename = "prevId")]
    prev_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedBlockFull {
    header: ParsedBlockHeader,
    #[serde(default)]
    miner_tx: Option<serde_json::Value>,
    #[serde(default)]
    tx_hashes: Vec<String>,
}

/// Parsed block JSON from shade-crypto's parse_block_bytes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedBlock {
    #[serde(default)]
    miner_tx: Option<serde_json::Value>,
    #[serde(default)]
    tx_hashes: Vec<String>,
}

/// Fetch and scan a single block.
#[cfg(not(target_arch = "wasm32"))]
async fn sync_block(
    daemon: &DaemonRpc,
    db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
    scan_ctx: &ScanContext,
    height: u64,
) -> Result<usize, WalletError> {
    // Get block data.
    let block = daemon
        .get_block(height)
        .await
        .map_err(|e| WalletError::Sync(format!("get_block({}): {}", height, e)))?;

    let block_hash = block.block_header.hash.clone();
    let block_timestamp = block.block_header.timestamp;
    let mut outputs_found = 0;

    // Parse the block blob to get miner tx.
    let block_blob = hex::decode(&block.blob)
        .map_err(|e| WalletError::Sync(format!("hex decode block: {}", e)))?;
    let block_json_str = shade_crypto::parse_block_bytes(&block_blob);

    if let Ok(parsed_block) = serde_json::from_str::<ParsedBlock>(&block_json_str) {
        // Scan miner transaction.
        if let Some(miner_tx_json) = &parsed_block.miner_tx {
            if let Some(scan_data) =
                parse_tx_for_scanning(miner_tx_json, &block.miner_tx_hash, height, true)
            {
                let found = scanner::scan_transaction(scan_ctx, &scan_data);
                outputs_found += found.len();
                store_found_outputs(db, &found, &scan_data, block_timestamp)?;
            }
        }
    }

    // Fetch and scan regular transactions.
    if !block.tx_hashes.is_empty() {
        let hash_refs: Vec<&str> = block.tx_hashes.iter().map(|s| s.as_str()).collect();
        let tx_entries = daemon
            .get_transactions(&hash_refs, false)
            .await
            .map_err(|e| WalletError::Sync(format!("get_transactions: {}", e)))?;

        for (entry, tx_hash_hex) in tx_entries.iter().zip(block.tx_hashes.iter()) {
            let tx_hex = &entry.as_hex;

            if tx_hex.is_empty() {
                continue;
            }

            if let Ok(tx_bytes) = hex::decode(tx_hex) {
                let tx_json_str = shade_crypto::parse_transaction_bytes(&tx_bytes);
                if let Ok(tx_json) = serde_json::from_str::<serde_json::Value>(&tx_json_str) {
                    // Detect spent outputs: check if any inputs spend our UTXOs.
                    detect_spent_outputs(db, &tx_json, tx_hash_hex, height)?;

                    if let Some(scan_data) =
                        parse_tx_for_scanning(&tx_json, tx_hash_hex, height, false)
                    {
                        let found = scanner::scan_transaction(scan_ctx, &scan_data);
                        outputs_found += found.len();
                        store_found_outputs(db, &found, &scan_data, block_timestamp)?;
                    }
                }
            }
        }
    }

    // Store block hash for reorg detection, then drop anything that has
    // fallen out of the ring buffer's retention window.
    {
        let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
        db.put_block_hash(height as i64, &block_hash)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        db.prune_block_hashes(height as i64, BLOCK_HASH_RING_SIZE)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
    }

    Ok(outputs_found)
}

/// Parse a transaction JSON (from parse_block_bytes / parse_transaction_bytes)
/// into ScanTxData.
///
/// The JSON format from shade-crypto uses camelCase and a nested `prefix`
/// structure:
/// ```json
/// {
///   "prefix": {
///     "txType": 1,
///     "extra": [{ "type": 1, "tag": "tx_pubkey", "key": "hex..." }],
///     "vout": [{ "key": "hex...", "viewTag": "hex...", "type": 4, "amount": "123" }],
///     "vin": [{ "type": 255, "height": 1230 }]
///   },
///   "rct": { "type": 0 }
/// }
/// ```
fn parse_tx_for_scanning(
    tx_json: &serde_json::Value,
    tx_hash_hex: &str,
    block_height: u64,
    is_coinbase: bool,
) -> Option<ScanTxData> {
    let tx_hash = hex_to_32(tx_hash_hex)?;

    // The prefix may be nested under "prefix" or at top level.
    let prefix = tx_json.get("prefix").unwrap_or(tx_json);

    // Extract tx public key from extra.
    let tx_pub_key = extract_tx_pub_key_from_parsed(prefix)
        .or_else(|| extract_tx_pub_key_from_raw(tx_json))?;

    // Extract first key image (for non-coinbase).
    let first_key_image = if !is_coinbase {
        extract_first_key_image(prefix)
    } else {
        None
    };

    // Determine tx_type.
    let tx_type = prefix
        .get("txType")
        .or_else(|| prefix.get("tx_type"))
        .and_then(|v| v.as_u64())
        .unwrap_or(if is_coinbase { 1 } else { 3 }) as u8;

    // Extract RCT type.
    let rct_type = tx_json
        .get("rct")
        .or_else(|| tx_json.get("rct_signatures"))
        .and_then(|r| r.get("type"))
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u8;

    // Parse outputs — try new format (prefix.vout[]) first, then legacy (vout[]).
    let vout = prefix
        .get("vout")
        .or_else(|| tx_json.get("vout"))
        .and_then(|v| v.as_array())?;

    // Legacy ECDH info and output commitments.
    let rct_section = tx_json
        .get("rct")
        .or_else(|| tx_json.get("rct_signatures"));
    let ecdh_info = rct_section
        .and_then(|r| r.get("ecdhInfo"))
        .and_then(|e| e.as_array());
    let out_pk = rct_section
        .and_then(|r| r.get("outPk"))
        .and_then(|e| e.as_array());

    let mut outputs = Vec::with_capacity(vout.len());
    for (i, out) in vout.iter().enumerate() {
        // Amount: try string first (new format), then integer (legacy).
        let amount = out
            .get("amount")
            .and_then(|a| {
                a.as_str()
                    .and_then(|s| s.parse::<u64>().ok())
                    .or_else(|| a.as_u64())
            })
            .unwrap_or(0);

        // Output public key: try flat "key" (new format), then nested
        // "target.tagged_key.key" or "target.key" (legacy).
        let (public_key, target_view_tag) = if let Some(k) = out.get("key").and_then(|v| v.as_str())
        {
            // New format: flat key with optional 1-byte CryptoNote view tag.
            let pk = hex_to_32(k)?;
            let vt = out
                .get("targetViewTag")
                .and_then(|v| v.as_str())
                .and_then(|s| hex::decode(s).ok())
                .and_then(|b| if b.is_empty() { None } else { Some(b[0]) });
            (pk, vt)
        } else if let Some(target) = out.get("target") {
            // Legacy format.
            if let Some(tk) = target.get("tagged_key") {
                let pk = hex_to_32(tk.get("key")?.as_str()?)?;
                let vt = tk
                    .get("view_tag")
                    .and_then(|v| v.as_str())
                    .and_then(|s| hex::decode(s).ok())
                    .and_then(|b| if b.is_empty() { None } else { Some(b[0]) });
                (pk, vt)
            } else if let Some(k) = target.get("key") {
                let pk = hex_to_32(k.as_str()?)?;
                (pk, None)
            } else {
                continue;
            }
        } else {
            continue;
        };

        // Output type field (type 4 = CARROT).
        let out_type = out
            .get("type")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u8;

        // CARROT 3-byte view tag (from "viewTag" field, 3 hex bytes = 6 chars).
        let carrot_view_tag = if out_type == 4 {
            out.get("viewTag")
                .and_then(|v| v.as_str())
                .and_then(|s| hex::decode(s).ok())
                .and_then(|b| {
                    if b.len() == 3 {
                        let mut arr = [0u8; 3];
                        arr.copy_from_slice(&b);
                        Some(arr)
                    } else {
                        None
                    }
                })
        } else {
            None
        };

        // CARROT ephemeral pubkey (D_e).
        // For CARROT outputs, D_e IS the tx_pubkey stored in tx_extra — it's
        // already in X25519 Montgomery u-coordinate form.
        let carrot_ephemeral_pubkey = if out_type == 4 {
            Some(tx_pub_key)
        } else {
            out.get("ephemeralPubkey")
                .and_then(|v| v.as_str())
                .and_then(hex_to_32)
        };

        // ECDH encrypted amount (from ecdhInfo if present).
        let enc_amount = ecdh_info
            .and_then(|info| info.get(i))
            .and_then(|e| e.get("amount"))
            .and_then(|a| a.as_str())
            .and_then(|s| hex::decode(s).ok())
            .and_then(|b| {
                if b.len() >= 8 {
                    let mut arr = [0u8; 8];
                    arr.copy_from_slice(&b[..8]);
                    Some(arr)
                } else {
                    None
                }
            })
            .unwrap_or([0u8; 8]);

        // Pedersen commitment.
        let commitment = out_pk
            .and_then(|pks| pks.get(i))
            .and_then(|v| v.as_str())
            .and_then(hex_to_32);

        // Asset type from on-chain output (e.g. "SHD", "SHD1").
        // New format: flat field at vout level ("assetType" or "asset_type").
        // Legacy format: nested inside target sub-object
        //   (target.tagged_key.asset_type, target.to_tagged_key.asset_type,
        //    target.to_key.asset_type, target.to_carrot_v1.asset_type).
        let asset_type = out
            .get("assetType")
            .or_else(|| out.get("asset_type"))
            .or_else(|| {
                out.get("target").and_then(|t| {
                    t.get("tagged_key")
                        .or_else(|| t.get("to_tagged_key"))
                        .or_else(|| t.get("key"))
                        .or_else(|| t.get("to_key"))
                        .or_else(|| t.get("to_carrot_v1"))
                        .and_then(|inner| inner.get("asset_type"))
                })
            })
            .and_then(|v| v.as_str())
            .unwrap_or("SHD")
            .to_string();

        outputs.push(TxOutput {
            index: i as u32,
            public_key,
            target_view_tag,
            amount,
            rct_type,
            ecdh_encrypted_amount: enc_amount,
            commitment,
            carrot_view_tag,
            carrot_ephemeral_pubkey,
            asset_type,
        });
    }

    Some(ScanTxData {
        tx_hash,
        tx_pub_key,
        outputs,
        is_coinbase,
        block_height,
        first_key_image,
        tx_type,
    })
}

/// Extract tx pubkey from structured extra (parse_block_bytes format).
///
/// Extra is an array of objects like:
/// `[{ "type": 1, "tag": "tx_pubkey", "key": "hex..." }, ...]`
fn extract_tx_pub_key_from_parsed(prefix: &serde_json::Value) -> Option<[u8; 32]> {
    let extra = prefix.get("extra")?.as_array()?;
    for entry in extra {
        // Match on type == 1 or tag == "tx_pubkey".
        let is_pubkey = entry
            .get("type")
            .and_then(|v| v.as_u64())
            .map(|t| t == 1)
            .unwrap_or(false)
            || entry
                .get("tag")
                .and_then(|v| v.as_str())
                .map(|t| t == "tx_pubkey")
                .unwrap_or(false);

        if is_pubkey {
            if let Some(key_hex) = entry.get("key").and_then(|v| v.as_str()) {
                return hex_to_32(key_hex);
            }
        }
    }
    None
}

/// Extract tx pubkey from raw extra bytes (legacy daemon RPC format).
///
/// Extra is an array of integers; tag 0x01 followed by 32-byte key.
fn extract_tx_pub_key_from_raw(tx_json: &serde_json::Value) -> Option<[u8; 32]> {
    // Try extra_parsed field.
    if let Some(extra) = tx_json.get("extra_parsed") {
        if let Some(pk) = extra.get("tx_pub_key").and_then(|v| v.as_str()) {
            return hex_to_32(pk);
        }
    }

    // Try raw byte array.
    if let Some(extra) = tx_json.get("extra").and_then(|v| v.as_array()) {
        let bytes: Vec<u8> = extra
            .iter()
            .filter_map(|v| v.as_u64().map(|n| n as u8))
            .collect();
        for i in 0..bytes.len() {
            if bytes[i] == 0x01 && i + 33 <= bytes.len() {
                let mut key = [0u8; 32];
                key.copy_from_slice(&bytes[i + 1..i + 33]);
                return Some(key);
            }
        }
    }

    None
}

/// Extract the first key image from transaction inputs.
fn extract_first_key_image(prefix: &serde_json::Value) -> Option<[u8; 32]> {
    let vin = prefix.get("vin")?.as_array()?;
    let first = vin.first()?;

    // New format: { "keyImage": "hex", ... } or { "key": { "keyImage": "hex" } }
    if let Some(ki) = first
        .get("keyImage")
        .and_then(|v| v.as_str())
        .and_then(hex_to_32)
    {
        return Some(ki);
    }

    // Legacy format: { "key": { "k_image": "hex" } }
    if let Some(key) = first.get("key") {
        if let Some(ki) = key
            .get("k_image")
            .or_else(|| key.get("keyImage"))
            .and_then(|v| v.as_str())
            .and_then(hex_to_32)
        {
            return Some(ki);
        }
    }

    None
}

/// Extract ALL key images from transaction inputs.
fn extract_all_key_images(prefix: &serde_json::Value) -> Vec<String> {
    let mut key_images = Vec::new();
    let vin = match prefix.get("vin").and_then(|v| v.as_array()) {
        Some(v) => v,
        None => return key_images,
    };

    for input in vin {
        // New format: { "keyImage": "hex", ... }
        if let Some(ki) = input.get("keyImage").and_then(|v| v.as_str()) {
            if ki.len() == 64 {
                key_images.push(ki.to_string());
            }
        }
        // Legacy format: { "key": { "k_image": "hex" } }
        else if let Some(key) = input.get("key") {
            if let Some(ki) = key
                .get("k_image")
                .or_else(|| key.get("keyImage"))
                .and_then(|v| v.as_str())
            {
                if ki.len() == 64 {
                    key_images.push(ki.to_string());
                }
            }
        }
    }

    key_images
}

/// Check transaction inputs for key images that belong to our wallet and mark
/// the corresponding outputs as spent.
#[cfg(not(target_arch = "wasm32"))]
fn detect_spent_outputs(
    db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
    tx_json: &serde_json::Value,
    tx_hash_hex: &str,
    block_height: u64,
) -> Result<usize, WalletError> {
    let prefix = tx_json.get("prefix").unwrap_or(tx_json);
    let key_images = extract_all_key_images(prefix);

    if key_images.is_empty() {
        return Ok(0);
    }

    let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
    let mut spent_count = 0;

    for ki_hex in &key_images {
        // Check if this key image belongs to one of our outputs.
        let output = db
            .get_output(ki_hex)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        if let Some(row) = output {
            if !row.is_spent {
                db.mark_spent(ki_hex, tx_hash_hex, block_height as i64)
                    .map_err(|e| WalletError::Storage(e.to_string()))?;
                spent_count += 1;
            }
        }
    }

    Ok(spent_count)
}

/// Store found outputs in the database.
#[cfg(not(target_arch = "wasm32"))]
fn store_found_outputs(
    db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
    found: &[FoundOutput],
    tx: &ScanTxData,
    block_timestamp: u64,
) -> Result<(), WalletError> {
    if found.is_empty() {
        return Ok(());
    }

    let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;

    for output in found {
        let row = shade_crypto::storage::OutputRow {
            key_image: output.key_image.map(|ki| hex::encode(ki)),
            public_key: Some(hex::encode(output.output_public_key)),
            tx_hash: hex::encode(tx.tx_hash),
            output_index: output.output_index as i64,
            global_index: None,
            asset_type_index: None,
            block_height: Some(tx.block_height as i64),
            block_timestamp: Some(block_timestamp as i64),
            amount: output.amount.to_string(),
            asset_type: output.asset_type.clone(),
            commitment: None,
            mask: Some(hex::encode(output.mask)),
            subaddress_index: shade_crypto::storage::SubaddressIndex {
                major: output.subaddress_major as i64,
                minor: output.subaddress_minor as i64,
            },
            is_carrot: output.is_carrot,
            carrot_ephemeral_pubkey: None,
            carrot_shared_secret: output.carrot_shared_secret.map(|s| hex::encode(s)),
            carrot_enote_type: output.carrot_enote_type.map(|t| t as i64),
            is_spent: false,
            spent_height: None,
            spent_tx_hash: None,
            unlock_time: "0".to_string(),
            tx_type: tx.tx_type as i64,
            tx_pub_key: Some(hex::encode(tx.tx_pub_key)),
            is_frozen: false,
            created_at: None,
            updated_at: None,
        };

        // Use key_image as primary key. Skip if no key image (view-only wallet).
        if row.key_image.is_some() {
            db.put_output(&row)
                .map_err(|e| WalletError::Storage(e.to_string()))?;
        }
    }

    Ok(())
}

/// Convert a hex string to a 32-byte array.
fn hex_to_32(s: &str) -> Option<[u8; 32]> {
    let bytes = hex::decode(s).ok()?;
    if bytes.len() != 32 {
        return None;
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Some(arr)
}

/// Walk back from `height` to find the fork point during a reorg.
#[cfg(not(target_arch = "wasm32"))]
async fn find_fork_point(
    daemon: &DaemonRpc,
    db: &std::sync::Mutex<shade_crypto::storage::WalletDb>,
    mut height: u64,
) -> Result<u64, WalletError> {
    while height > 0 {
        let stored_hash = {
            let db = db.lock().map_err(|e| WalletError::Storage(e.to_string()))?;
            db.get_block_hash(height as i64)
                .map_err(|e| WalletError::Storage(e.to_string()))?
        };

        if let Some(stored) = stored_hash {
            let remote_hash = daemon
                .get_block_hash(height)
                .await
                .map_err(|e| WalletError::Sync(e.to_string()))?;

            if stored == remote_hash {
                return Ok(height);
            }
        }

        height -= 1;
    }

    Ok(0)
}
