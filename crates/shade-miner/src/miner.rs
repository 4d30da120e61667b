//! Generic mining engine driving an injected proof-of-work hasher.
//!
//! The hasher itself (RandomX or otherwise) lives outside this crate; we only
//! own nonce placement in the hashing blob, difficulty/target comparison, and
//! distributing work across worker threads that each hold one hasher
//! instance. Workers partition the nonce space into non-overlapping ranges.

use crate::mining::HashAlgorithm;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// A found block ready for submission.
pub struct FoundBlock {
    pub nonce: u32,
    pub hash: Vec<u8>,
    pub blob_hex: String,
    pub job_id: u64,
}

/// Job data sent to worker threads.
#[derive(Clone)]
pub struct MiningJob {
    pub job_id: u64,
    pub hashing_blob: Vec<u8>,
    pub template_blob: Vec<u8>,
    pub difficulty: u128,
    pub height: u64,
    /// Pre-computed nonce offset; recomputed from `hashing_blob` when absent.
    pub nonce_offset: Option<usize>,
    /// A literal 256-bit little-endian target, used instead of `difficulty`
    /// when the caller already has one (e.g. a pool handed out a target).
    pub target: Option<[u8; 32]>,
}

/// Mining engine managing worker threads around an injected [`HashAlgorithm`].
pub struct MiningEngine {
    pub hash_count: Arc<AtomicU64>,
    pub running: Arc<AtomicBool>,
    result_rx: mpsc::Receiver<FoundBlock>,
    job_senders: Vec<mpsc::Sender<MiningJob>>,
    _handles: Vec<thread::JoinHandle<()>>,
}

impl MiningEngine {
    /// Spawn `num_threads` workers, each built via `create_hasher(worker_id)`.
    /// `create_hasher` is responsible for calling the hasher's `init` with
    /// the current seed before returning it; the engine re-initializes
    /// nothing on its own — seed rotation (every 2048 blocks on this chain)
    /// is handled by the caller recreating the engine.
    pub fn new<F>(num_threads: usize, create_hasher: F) -> Result<Self, String>
    where
        F: Fn(usize) -> Result<Box<dyn HashAlgorithm>, String> + Send + Sync + 'static,
    {
        let hash_count = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(true));
        let (result_tx, result_rx) = mpsc::channel();
        let mut job_senders = Vec::new();
        let mut handles = Vec::new();

        let create_hasher = Arc::new(create_hasher);

        for worker_id in 0..num_threads {
            let (job_tx, job_rx) = mpsc::channel::<MiningJob>();
            job_senders.push(job_tx);

            let hash_count = Arc::clone(&hash_count);
            let running = Arc::clone(&running);
            let result_tx = result_tx.clone();
            let create_hasher = Arc::clone(&create_hasher);
            let nonce_start = (worker_id as u64 * (u32::MAX as u64 / num_threads as u64)) as u32;

            let handle = thread::spawn(move || {
                let mut hasher = match create_hasher(worker_id) {
                    Ok(h) => h,
                    Err(e) => {
                        log::error!("worker {} init failed: {}", worker_id, e);
                        return;
                    }
                };

                worker_loop(&mut *hasher, &job_rx, &running, &hash_count, &result_tx, nonce_start);
            });

            handles.push(handle);
        }

        Ok(Self {
            hash_count,
            running,
            result_rx,
            job_senders,
            _handles: handles,
        })
    }

    pub fn send_job(&self, job: MiningJob) {
        for tx in &self.job_senders {
            let _ = tx.send(job.clone());
        }
    }

    pub fn try_recv_block(&self) -> Option<FoundBlock> {
        self.result_rx.try_recv().ok()
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn worker_loop(
    hasher: &mut dyn HashAlgorithm,
    job_rx: &mpsc::Receiver<MiningJob>,
    running: &AtomicBool,
    hash_count: &AtomicU64,
    result_tx: &mpsc::Sender<FoundBlock>,
    nonce_start: u32,
) {
    while running.load(Ordering::Relaxed) {
        let mut job = match job_rx.recv_timeout(std::time::Duration::from_millis(100)) {
            Ok(j) => j,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(_) => break,
        };

        loop {
            if !running.load(Ordering::Relaxed) {
                return;
            }

            if let Ok(new_job) = job_rx.try_recv() {
                job = new_job;
            }

            let nonce_offset = job.nonce_offset.unwrap_or_else(|| find_nonce_offset(&job.hashing_blob));
            let mut nonce = nonce_start;
            let mut blob = job.hashing_blob.clone();
            let mut switched = false;

            while !switched {
                if !running.load(Ordering::Relaxed) {
                    return;
                }
                if let Ok(new_job) = job_rx.try_recv() {
                    job = new_job;
                    switched = true;
                    break;
                }

                set_nonce(&mut blob, nonce_offset, nonce);
                let hash = hasher.hash(&blob);
                hash_count.fetch_add(1, Ordering::Relaxed);

                let meets = match job.target {
                    Some(ref t) => check_hash_target(&hash, t),
                    None => check_hash(&hash, job.difficulty),
                };
                if meets {
                    let mut template = job.template_blob.clone();
                    let tmpl_offset = job.nonce_offset.unwrap_or_else(|| find_nonce_offset(&template));
                    set_nonce(&mut template, tmpl_offset, nonce);
                    let _ = result_tx.send(FoundBlock {
                        nonce,
                        hash: hash.to_vec(),
                        blob_hex: hex::encode(&template),
                        job_id: job.job_id,
                    });
                }

                nonce = nonce.wrapping_add(1);
                if nonce == nonce_start {
                    break; // nonce space exhausted for this worker's slice
                }
            }

            if !switched {
                break;
            }
        }
    }
}

pub fn set_nonce(blob: &mut [u8], offset: usize, nonce: u32) {
    blob[offset] = (nonce & 0xff) as u8;
    blob[offset + 1] = ((nonce >> 8) & 0xff) as u8;
    blob[offset + 2] = ((nonce >> 16) & 0xff) as u8;
    blob[offset + 3] = ((nonce >> 24) & 0xff) as u8;
}

/// Locate the 4-byte nonce field inside a block-hashing blob.
///
/// Layout: major_version(varint) + minor_version(varint) + timestamp(varint)
/// + prev_id(32 bytes) + nonce(4 bytes).
pub fn find_nonce_offset(blob: &[u8]) -> usize {
    let mut offset = 0;
    for _ in 0..3 {
        while blob[offset] & 0x80 != 0 {
            offset += 1;
        }
        offset += 1;
    }
    offset += 32;
    offset
}

/// Check whether `hash` meets `difficulty`, interpreting `hash` as a
/// little-endian 256-bit integer: accept when `hash * difficulty <= 2^256`.
pub fn check_hash(hash: &[u8], difficulty: u128) -> bool {
    if difficulty == 0 {
        return false;
    }
    let mut lo = 0u128;
    let mut hi = 0u128;
    for i in 0..16 {
        lo |= (hash[i] as u128) << (i * 8);
    }
    for i in 0..16 {
        hi |= (hash[16 + i] as u128) << (i * 8);
    }

    let (_, lo_overflow) = lo.overflowing_mul(difficulty);
    let hi_prod = match hi.checked_mul(difficulty) {
        Some(h) => h,
        None => return false,
    };
    let carry = if lo_overflow { difficulty } else { 0 };
    hi_prod.checked_add(carry).is_some()
}

/// Check whether `hash` (little-endian 256-bit) is <= a literal target.
pub fn check_hash_target(hash: &[u8], target: &[u8; 32]) -> bool {
    for i in (0..32).rev() {
        if hash[i] != target[i] {
            return hash[i] < target[i];
        }
    }
    true
}

/// Parse difficulty from a `wide_difficulty` hex string or a plain `u64`.
pub fn parse_difficulty(difficulty: u64, wide_difficulty: Option<&str>) -> u128 {
    if let Some(wide) = wide_difficulty {
        let hex_str = wide.strip_prefix("0x").unwrap_or(wide);
        u128::from_str_radix(hex_str, 16).unwrap_or(difficulty as u128)
    } else {
        difficulty as u128
    }
}
