//! Query presets and factory functions for wallet output/transaction filtering.
//!
//! Provides commonly-used query configurations for outputs and transactions.

use shade_crypto::storage::{OutputQuery, TxQuery};

// ─── Output Query Presets ───────────────────────────────────────────────────

/// Query for unspent, unfrozen outputs.
pub fn unspent_outputs() -> OutputQuery {
    OutputQuery {
        is_spent: Some(false),
        is_frozen: Some(false),
        asset_type: None,
        tx_type: None,
        account_index: None,
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

/// Query for spent outputs.
pub fn spent_outputs() -> OutputQuery {
    OutputQuery {
        is_spent: Some(true),
        is_frozen: None,
        asset_type: None,
        tx_type: None,
        account_index: None,
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

/// Query for staking outputs (tx_type = 6).
pub fn staking_outputs() -> OutputQuery {
    OutputQuery {
        is_spent: Some(false),
        is_frozen: None,
        asset_type: None,
        tx_type: Some(6),
        account_index: None,
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

/// Query for yield/return outputs (tx_type = 7).
pub fn yield_outputs() -> OutputQuery {
    OutputQuery {
        is_spent: Some(false),
        is_frozen: None,
        asset_type: None,
        tx_type: Some(7),
        account_index: None,
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

/// Query for outputs of a specific asset type.
pub fn outputs_by_asset(asset_type: &str) -> OutputQuery {
    OutputQuery {
        is_spent: None,
        is_frozen: None,
        asset_type: Some(asset_type.to_string()),
        tx_type: None,
        account_index: None,
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

/// Query for outputs in an amount range.
pub fn outputs_in_range(min: u64, max: u64) -> OutputQuery {
    OutputQuery {
        is_spent: None,
        is_frozen: None,
        asset_type: None,
        tx_type: None,
        account_index: None,
        subaddress_index: None,
        min_amount: Some(min.to_string()),
        max_amount: Some(max.to_string()),
    }
}

/// Query for outputs by account.
pub fn outputs_by_account(account_index: i64) -> OutputQuery {
    OutputQuery {
        is_spent: Some(false),
        is_frozen: None,
        asset_type: None,
        tx_type: None,
        account_index: Some(account_index),
        subaddress_index: None,
        min_amount: None,
        max_amount: None,
    }
}

// ─── Transaction Query Presets ──────────────────────────────────────────────

/// Query for incoming transactions.
pub fn incoming_txs() -> TxQuery {
    TxQuery {
        is_incoming: Some(true),
        is_outgoing: None,
        is_confirmed: None,
        in_pool: None,
        tx_type: None,
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for outgoing transactions.
pub fn outgoing_txs() -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: Some(true),
        is_confirmed: None,
        in_pool: None,
        tx_type: None,
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for pending (in-pool) transactions.
pub fn pending_txs() -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: None,
        in_pool: Some(true),
        tx_type: None,
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for confirmed transactions.
pub fn confirmed_txs() -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: Some(true),
        in_pool: None,
        tx_type: None,
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for staking transactions (tx_type = 6).
pub fn staking_txs() -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: None,
        in_pool: None,
        tx_type: Some(6),
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for yield/return transactions (tx_type = 7).
pub fn yield_txs() -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: None,
        in_pool: None,
        tx_type: Some(7),
        min_height: None,
        max_height: None,
        tx_hash: None,
    }
}

/// Query for transactions in a height range.
pub fn txs_in_height_range(min: i64, max: i64) -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: None,
        in_pool: None,
        tx_type: None,
        min_height: Some(min),
        max_height: Some(max),
        tx_hash: None,
    }
}

/// Query for a specific transaction by hash.
pub fn tx_by_hash(hash: &str) -> TxQuery {
    TxQuery {
        is_incoming: None,
        is_outgoing: None,
        is_confirmed: None,
        in_pool: None,
        tx_type: None,
        min_height: None,
        max_height: None,
        tx_hash: Some(hash.to_string()),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
