//! Dynamic block weight system.
//!
//! Implements the long-term / short-term block weight median system that
//! governs Shade's dynamic block size limits.  The algorithm clamps
//! individual long-term weights within +/-70 % of the running median and
//! derives an effective median (with a surge-factor cap) that ultimately
//! determines the maximum block weight miners may produce.
//!
//! Reference: shade/src/cryptonote_core/blockchain.cpp:5518-5608

use shade_types::consensus::{
    BLOCK_GRANTED_FULL_REWARD_ZONE_V5, SHORT_TERM_BLOCK_WEIGHT_SURGE_FACTOR,
};

use crate::chain_state::get_median_block_weight;

// Re-export the constant under the short alias used throughout this module's
// documentation and tests.
const FRZ: u64 = BLOCK_GRANTED_FULL_REWARD_ZONE_V5;

// =============================================================================
// BlockWeightInfo
// =============================================================================

/// Result of [`get_effective_median_block_weight`]: the three numbers a miner
/// needs to evaluate whether a candidate block is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWeightInfo {
    /// `max(FRZ, median(long_term_weights))`
    pub long_term_effective_median: u64,
    /// The effective median after applying surge-factor clamping and the FRZ
    /// floor.
    pub effective_median: u64,
    /// `2 * effective_median` -- the hard upper limit on block weight.
    pub block_limit: u64,
}

// =============================================================================
// Public API
// =============================================================================

/// Clamp `block_weight` to within +/-70 % of the long-term effective median.
///
/// The *effective median* used here is `max(FRZ, long_term_median)` so that the
/// network always allows blocks up to the full reward zone even when the chain
/// is young or mostly empty.
///
/// * **lower bound** = `effective_median * 10 / 17`
/// * **upper bound** = `effective_median + effective_median * 7 / 10`
///
/// Returns `block_weight` unchanged when it falls inside [lower, upper].
pub fn get_next_long_term_block_weight(block_weight: u64, long_term_median: u64) -> u64 {
    let effective_median = FRZ.max(long_term_median);

    let lower_bound = effective_median * 10 / 17;
    let upper_bound = effective_median + effective_median * 7 / 10;

    if block_weight < lower_bound {
        lower_bound
    } else if block_weight > upper_bound {
        upper_bound
    } else {
        block_weight
    }
}

/// Compute the effective median block weight and the resulting block limit from
/// the rolling long-term and short-term weight windows.
///
/// Algorithm:
///
/// 1. `long_term_effective_median = max(FRZ, median(long_term_weights))`
/// 2. `short_term_median = median(short_term_weights)`
/// 3. `effective_median = max(long_term_effective_median, short_term_median)`
/// 4. Clamp: `effective_median = min(effective_median, SURGE_FACTOR * long_term_effective_median)`
/// 5. Floor: `effective_median = max(effective_median, FRZ)`
/// 6. `block_limit = effective_median * 2`
pub fn get_effective_median_block_weight(
    long_term_weights: &[u64],
    short_term_weights: &[u64],
) -> BlockWeightInfo {
    let long_term_median = get_median_block_weight(long_term_weights);
    let long_term_effective_median = FRZ.max(long_term_median);

    let short_term_median = get_median_block_weight(short_term_weights);

    let mut effective_median = long_term_effective_median.max(short_term_median);

    // Clamp to surge factor.
    effective_median = effective_median
        .min(SHORT_TERM_BLOCK_WEIGHT_SURGE_FACTOR * long_term_effective_median);

    // Floor at full reward zone.
    effective_median = effective_median.max(FRZ);

    let block_limit = effective_median * 2;

    BlockWeightInfo {
        long_term_effective_median,
        effective_median,
        block_limit,
    }
}

// =============================================================================
// Tests
// =============================================================================
