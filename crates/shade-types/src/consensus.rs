//! Shade consensus rules and constants.
//!
//! Block reward calculation, difficulty algorithms, timestamp validation,
//! unlock time logic, and fee computation.
//!
//! Reference: shade/src/cryptonote_config.h, cryptonote_basic_impl.cpp, difficulty.cpp

use crate::constants::{
    network_config, AssetType, HfVersion, Network, TxType,
};

// =============================================================================
// Core Constants
// =============================================================================

/// Total money supply: 184.4M coins × 10^8 atomic units.
pub const MONEY_SUPPLY: u64 = 18_440_000_000_000_000;

/// Emission speed factor per minute.
pub const EMISSION_SPEED_FACTOR_PER_MINUTE: u32 = 21;

/// Minimum subsidy per minute (tail emission): 3 × 10^7.
pub const FINAL_SUBSIDY_PER_MINUTE: u64 = 30_000_000;

/// Premine amount (genesis block reward).
pub const PREMINE_AMOUNT: u64 = 2_210_000_000_000_000;

/// Premine upfront portion.
pub const PREMINE_AMOUNT_UPFRONT: u64 = 650_000_000_000_000;

/// Premine monthly portion.
pub const PREMINE_AMOUNT_MONTHLY: u64 = 65_000_000_000_000;

/// Treasury SHD1 mint amount.
pub const TREASURY_SHD1_MINT_AMOUNT: u64 = 130_000_000_000_000;

/// Treasury SHD1 mint count.
pub const TREASURY_SHD1_MINT_COUNT: u32 = 8;

// Block timing
/// Target block time before first fork (seconds).
pub const DIFFICULTY_TARGET_V1: u64 = 60;

/// Current target block time (seconds).
pub const DIFFICULTY_TARGET_V2: u64 = 120;

/// Maximum allowed future timestamp offset (2 hours).
pub const BLOCK_FUTURE_TIME_LIMIT: u64 = 60 * 60 * 2;

/// Number of recent blocks to check for median timestamp.
pub const TIMESTAMP_CHECK_WINDOW: usize = 60;

// Difficulty adjustment
/// Difficulty window (original algorithm).
pub const DIFFICULTY_WINDOW: usize = 720;

/// Difficulty window (LWMA v2).
pub const DIFFICULTY_WINDOW_V2: usize = 70;

/// Difficulty lag (original algorithm).
pub const DIFFICULTY_LAG: usize = 15;

/// Difficulty cut (original algorithm).
pub const DIFFICULTY_CUT: usize = 60;

// Block weight
/// Full reward zone v1 (bytes).
pub const BLOCK_GRANTED_FULL_REWARD_ZONE_V1: u64 = 20_000;

/// Full reward zone v2 (bytes).
pub const BLOCK_GRANTED_FULL_REWARD_ZONE_V2: u64 = 60_000;

/// Full reward zone v5 (bytes).
pub const BLOCK_GRANTED_FULL_REWARD_ZONE_V5: u64 = 300_000;

/// Long-term block weight window size.
pub const LONG_TERM_BLOCK_WEIGHT_WINDOW_SIZE: u64 = 100_000;

/// Short-term block weight surge factor.
pub const SHORT_TERM_BLOCK_WEIGHT_SURGE_FACTOR: u64 = 50;

// Transaction limits
/// Maximum transaction size (bytes).
pub const MAX_TX_SIZE: u64 = 1_000_000;

/// Maximum transactions per block.
pub const MAX_TX_PER_BLOCK: u64 = 0x1000_0000;

/// Maximum tx_extra size (bytes).
pub const MAX_TX_EXTRA_SIZE: usize = 1060;

/// Maximum Bulletproof/BP+ outputs.
pub const BULLETPROOF_MAX_OUTPUTS: usize = 16;

// Maturity and unlock
/// Coinbase maturity window (blocks).
pub const MINED_MONEY_UNLOCK_WINDOW: u64 = 60;

/// Default minimum age before spending (blocks).
pub const DEFAULT_TX_SPENDABLE_AGE: u64 = 10;

/// Allowed delta blocks for unlock time.
pub const LOCKED_TX_ALLOWED_DELTA_BLOCKS: u64 = 1;

// Fees
/// Per-byte fee.
pub const FEE_PER_BYTE: u64 = 30;

/// Per-KB fee (legacy).
pub const FEE_PER_KB: u64 = 200_000;

/// Dynamic fee base (per KB).
pub const DYNAMIC_FEE_PER_KB_BASE_FEE: u64 = 200_000;

/// Dynamic fee base block reward.
pub const DYNAMIC_FEE_PER_KB_BASE_BLOCK_REWARD: u64 = 1_000_000_000;

/// Dynamic fee reference transaction weight.
pub const DYNAMIC_FEE_REFERENCE_TRANSACTION_WEIGHT: u64 = 3000;

/// Fee quantization decimals.
pub const PER_KB_FEE_QUANTIZATION_DECIMALS: u32 = 8;

/// Fee estimate grace blocks.
pub const FEE_ESTIMATE_GRACE_BLOCKS: u64 = 10;

/// Default dust threshold.
pub const DEFAULT_DUST_THRESHOLD: u64 = 2_000_000_000;

/// Base reward clamp threshold.
pub const BASE_REWARD_CLAMP_THRESHOLD: u64 = 100_000_000;

// Mempool
/// Mempool TX lifetime (3 days in seconds).
pub const MEMPOOL_TX_LIVETIME: u64 = 86400 * 3;

/// Mempool TX from alt block lifetime (1 week).
pub const MEMPOOL_TX_FROM_ALT_BLOCK_LIVETIME: u64 = 604800;

// Pricing record
/// Pricing record validity window (blocks).
pub const PRICING_RECORD_VALID_BLOCKS: u64 = 10;

/// Pricing record time diff tolerance (seconds).
pub const PRICING_RECORD_VALID_TIME_DIFF: u64 = 120;

// Lock periods
/// Burn lock period (blocks).
pub const BURN_LOCK_PERIOD: u64 = 0;

/// Convert lock period (blocks).
pub const CONVERT_LOCK_PERIOD: u64 = 0;

/// Unlock time threshold: below = height, above = timestamp.
pub const UNLOCK_TIME_THRESHOLD: u64 = 500_000_000;

// =============================================================================
// Hard Fork Queries
// =============================================================================

/// Get the hard fork version active at a given block height.
pub fn hf_version_for_height(height: u64, network: Network) -> u8 {
    let config = network_config(network);
    let mut active_version = 1u8;
    for &(version, activation_height) in config.hard_fork_heights {
        if height >= activation_height && version > active_version {
            active_version = version;
        }
    }
    active_version
}

/// Check if a specific hard fork is active at a given height.
pub fn is_hf_active(hf_version: u8, height: u64, network: Network) -> bool {
    hf_version_for_height(height, network) >= hf_version
}

/// Get the active asset type at a given height.
pub fn active_asset_type(height: u64, network: Network) -> AssetType {
    if is_hf_active(HfVersion::SHADE_ONE_PROOFS, height, network) {
        AssetType::Shd1
    } else {
        AssetType::Shd
    }
}

/// Check if CARROT outputs are enabled at a given height.
pub fn is_carrot_active(height: u64, network: Network) -> bool {
    is_hf_active(HfVersion::CARROT, height, network)
}

/// Get the correct TX version for a given TX type and height.
pub fn tx_version(tx_type: TxType, height: u64, network: Network) -> u8 {
    let hf = hf_version_for_height(height, network);
    if hf >= HfVersion::CARROT {
        4
    } else if hf >= HfVersion::ENABLE_N_OUTS && tx_type == TxType::Transfer {
        3
    } else {
        2
    }
}

/// Get the required RCT signature type for a given height.
pub fn rct_type(height: u64, network: Network) -> u8 {
    let hf = hf_version_for_height(height, network);
    if hf >= HfVersion::CARROT {
        9 // ShadeOne
    } else if hf >= HfVersion::SHADE_ONE_PROOFS {
        8 // ShadeZero
    } else if hf >= HfVersion::FULL_PROOFS {
        7 // FullProofs
    } else {
        6 // BulletproofPlus
    }
}

/// Get the signature type name for a given RCT type.
///
/// Returns "CLSAG" for rct_type < 8, "TCLSAG" for rct_type >= 8.
/// TCLSAG (Tree-based CLSAG) is used starting with ShadeZero (type 8)
/// proof system, but practically only appears at HF10+ (CARROT, type 9).
pub fn signature_type_for_rct(rct_type: u8) -> &'static str {
    if rct_type >= 8 {
        "TCLSAG"
    } else {
        "CLSAG"
    }
}

// =============================================================================
// Block Reward Calculation
// =============================================================================

/// Get minimum block weight for full reward.
pub fn min_block_weight(version: u8) -> u64 {
    if version < 2 {
        BLOCK_GRANTED_FULL_REWARD_ZONE_V1
    } else {
        BLOCK_GRANTED_FULL_REWARD_ZONE_V5
    }
}

/// Calculate block reward.
///
/// Formula: base_reward = (MONEY_SUPPLY - already_generated) >> emission_speed_factor
/// With penalty for blocks larger than median weight.
pub fn block_reward(
    median_weight: u64,
    current_block_weight: u64,
    already_generated_coins: u64,
    version: u8,
) -> Option<u64> {
    let target_minutes = DIFFICULTY_TARGET_V2 / 60;
    let emission_speed_factor = EMISSION_SPEED_FACTOR_PER_MINUTE - (target_minutes as u32 - 1);

    // Genesis block (premine)
    if already_generated_coins == 0 {
        return Some(PREMINE_AMOUNT);
    }

    // Calculate base reward using u128 to avoid overflow
    let remaining = MONEY_SUPPLY.saturating_sub(already_generated_coins);
    let mut base_reward = remaining >> emission_speed_factor;

    // Apply tail emission (minimum subsidy)
    let min_subsidy = FINAL_SUBSIDY_PER_MINUTE * target_minutes;
    if base_reward < min_subsidy {
        base_reward = min_subsidy;
    }

    // Get full reward zone
    let full_reward_zone = min_block_weight(version);
    let effective_median = median_weight.max(full_reward_zone);

    // No penalty if block is small
    if current_block_weight <= effective_median {
        return Some(base_reward);
    }

    // Block too large
    if current_block_weight > 2 * effective_median {
        return None; // reward = 0, block invalid
    }

    // Calculate penalty: reward × (2M - W) × W / M²
    let m = effective_median as u128;
    let w = current_block_weight as u128;
    let multiplicand = (2 * m - w) * w;
    let reward = (base_reward as u128 * multiplicand) / m / m;

    Some(reward as u64)
}

// =============================================================================
// Difficulty Calculation
// =============================================================================

/// Calculate next difficulty using original algorithm.
pub fn next_difficulty(
    timestamps: &[u64],
    cumulative_difficulties: &[u128],
    target_seconds: u64,
) -> u128 {
    let mut ts: Vec<u64> = timestamps.to_vec();
    let mut cd: Vec<u128> = cumulative_difficulties.to_vec();

    // Trim to window size
    if ts.len() > DIFFICULTY_WINDOW {
        ts.truncate(DIFFICULTY_WINDOW);
        cd.truncate(DIFFICULTY_WINDOW);
    }

    let length = ts.len();
    assert_eq!(length, cd.len(), "timestamps and difficulties must have same length");

    if length <= 1 {
        return 1;
    }

    // Sort pairs by timestamp
    let mut pairs: Vec<(u64, u128)> = ts.into_iter().zip(cd).collect();
    pairs.sort_by_key(|p| p.0);
    let ts: Vec<u64> = pairs.iter().map(|p| p.0).collect();
    let cd: Vec<u128> = pairs.iter().map(|p| p.1).collect();

    // Calculate cut points
    let (cut_begin, cut_end) = if length <= DIFFICULTY_WINDOW - 2 * DIFFICULTY_CUT {
        (0, length)
    } else {
        let begin = (length - (DIFFICULTY_WINDOW - 2 * DIFFICULTY_CUT)).div_ceil(2);
        (begin, begin + (DIFFICULTY_WINDOW - 2 * DIFFICULTY_CUT))
    };

    // Calculate time span and work
    let mut time_span = ts[cut_end - 1] as u128 - ts[cut_begin] as u128;
    if time_span == 0 {
        time_span = 1;
    }

    let total_work = cd[cut_end - 1] - cd[cut_begin];

    // difficulty = work × target / timeSpan
    (total_work * target_seconds as u128).div_ceil(time_span)
}

/// Calculate next difficulty using LWMA (Linearly Weighted Moving Average) v2.
///
/// LWMA algorithm by Zawy.
pub fn next_difficulty_v2(
    timestamps: &[u64],
    cumulative_difficulties: &[u128],
    target_seconds: u64,
) -> u128 {
    let t = target_seconds as i128;
    let mut n = DIFFICULTY_WINDOW_V2;

    let mut ts = timestamps.to_vec();
    let mut cd = cumulative_difficulties.to_vec();

    if ts.len() > n + 1 {
        ts.truncate(n + 1);
        cd.truncate(n + 1);
    }

    let count = ts.len();
    assert_eq!(count, cd.len());

    // First 5 blocks: return difficulty 1
    if count < 6 {
        return 1;
    }

    // Adjust N if we don't have enough data
    if count < n + 1 {
        n = count - 1;
    }

    let n_big = n as i128;

    // Normalization divisor: k = N × (N + 1) / 2
    let k = n_big * (n_big + 1) / 2;

    // Scale factor for fixed-point arithmetic
    const SCALE: i128 = 1_000_000;
    const ADJUST_NUM: i128 = 998;
    const ADJUST_DEN: i128 = 1000;

    let mut weighted_solve_time: i128 = 0;
    let mut total_difficulty: u128 = 0;

    for i in 1..=n {
        let mut solve_time = ts[i] as i128 - ts[i - 1] as i128;
        // Clamp solve time to [-7T, 7T]
        let max_st = 7 * t;
        if solve_time > max_st {
            solve_time = max_st;
        }
        if solve_time < -max_st {
            solve_time = -max_st;
        }

        let difficulty = cd[i] - cd[i - 1];
        weighted_solve_time += solve_time * i as i128;
        total_difficulty += difficulty;
    }

    // LWMA = weighted_solve_time / k
    let mut lwma_scaled = weighted_solve_time * SCALE / k;
    let min_lwma = t * SCALE / 20;
    if lwma_scaled < min_lwma {
        lwma_scaled = min_lwma;
    }

    // Next difficulty = avgD × T × adjust / LWMA
    let next_diff = total_difficulty as i128 * t * ADJUST_NUM * SCALE
        / (n_big * ADJUST_DEN * lwma_scaled);

    if next_diff < 1 { 1 } else { next_diff as u128 }
}

/// Check if a hash meets difficulty target: hash × difficulty ≤ 2^256.
pub fn check_hash(hash: &[u8; 32], difficulty: u128) -> bool {
    // Convert hash to 256-bit integer matching C++ byte order:
    // Four 64-bit LE words, read from word[3] down to word[0].
    let mut lo: u128 = 0;
    for word in 0..2 {
        let mut w: u64 = 0;
        let base = word * 8;
        for b in (0..8).rev() {
            w = (w << 8) | hash[base + b] as u64;
        }
        lo |= (w as u128) << (word * 64);
    }
    let mut hi: u128 = 0;
    for word in 2..4 {
        let mut w: u64 = 0;
        let base = word * 8;
        for b in (0..8).rev() {
            w = (w << 8) | hash[base + b] as u64;
        }
        hi |= (w as u128) << ((word - 2) * 64);
    }

    // Multiply 256-bit hash by 128-bit difficulty and check ≤ 2^256 - 1
    // Using u256 arithmetic via two u128s
    let (prod_lo, carry) = lo.overflowing_mul(difficulty);
    let prod_hi_part = hi.checked_mul(difficulty);

    match prod_hi_part {
        Some(ph) => {
            let (prod_hi, overflow) = ph.overflowing_add(carry as u128);
            // If overflow in high part, product > 2^256
            !overflow || (prod_hi == 0 && prod_lo == 0)
        }
        None => false, // overflow means > 2^256
    }
}

// =============================================================================
// Timestamp Validation
// =============================================================================

/// Get median timestamp from recent blocks.
pub fn median_timestamp(timestamps: &[u64]) -> u64 {
    if timestamps.is_empty() {
        return 0;
    }
    let mut sorted = timestamps.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

/// Validate a block timestamp.
pub fn validate_block_timestamp(
    timestamp: u64,
    recent_timestamps: &[u64],
    current_time: u64,
) -> Result<(), String> {
    if timestamp > current_time + BLOCK_FUTURE_TIME_LIMIT {
        return Err(format!(
            "Timestamp too far in future: {} > {}",
            timestamp,
            current_time + BLOCK_FUTURE_TIME_LIMIT
        ));
    }

    if recent_timestamps.len() >= TIMESTAMP_CHECK_WINDOW {
        let window = &recent_timestamps[..TIMESTAMP_CHECK_WINDOW];
        let median = median_timestamp(window);
        if timestamp <= median {
            return Err(format!(
                "Timestamp not greater than median: {} <= {}",
                timestamp, median
            ));
        }
    }

    Ok(())
}

// =============================================================================
// Unlock Time Validation
// =============================================================================

/// Check if an output is unlocked (spendable).
pub fn is_output_unlocked(
    unlock_time: u64,
    current_height: u64,
    current_time: u64,
    version: u8,
) -> bool {
    if unlock_time == 0 {
        return true;
    }

    if unlock_time < UNLOCK_TIME_THRESHOLD {
        // Block height based unlock
        current_height + LOCKED_TX_ALLOWED_DELTA_BLOCKS >= unlock_time
    } else {
        // Timestamp based unlock
        let delta = if version >= 2 {
            DIFFICULTY_TARGET_V2 * LOCKED_TX_ALLOWED_DELTA_BLOCKS
        } else {
            DIFFICULTY_TARGET_V1 * LOCKED_TX_ALLOWED_DELTA_BLOCKS
        };
        current_time + delta >= unlock_time
    }
}

/// Check if coinbase output is mature (spendable).
pub fn is_coinbase_mature(output_height: u64, current_height: u64) -> bool {
    current_height >= output_height + MINED_MONEY_UNLOCK_WINDOW
}

/// Check if output meets minimum age requirement.
pub fn meets_minimum_age(output_height: u64, current_height: u64) -> bool {
    current_height >= output_height + DEFAULT_TX_SPENDABLE_AGE
}

// =============================================================================
// Fee Calculation
// =============================================================================

/// Calculate minimum required fee.
pub fn minimum_fee(tx_weight: u64, _base_reward: u64, version: u8) -> u64 {
    if version >= HfVersion::PER_BYTE_FEE {
        tx_weight * FEE_PER_BYTE
    } else {
        let kb = tx_weight.div_ceil(1024);
        kb * FEE_PER_KB
    }
}
