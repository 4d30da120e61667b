//! Shade wallet core.
//!
//! Provides key management, output scanning, blockchain sync, balance tracking,
//! UTXO selection, and wallet file encryption.

pub mod error;
pub mod keys;
pub mod account;
pub mod scanner;
pub mod sync;
pub mod utxo;
pub mod encryption;
pub mod wallet;
pub mod stake;
pub mod query;

pub use error::WalletError;
pub use keys::{WalletKeys, WalletType, CnKeys, CarrotKeys};
pub use account::Account;
pub use scanner::{ScanContext, FoundOutput};
pub use sync::{SyncEngine, SyncEvent, SyncState};
pub use utxo::{SelectionStrategy, SelectionOptions};
pub use wallet::Wallet;

// Re-export storage types from shade-crypto for convenience.
pub use shade_crypto::storage::{
    OutputRow, TransactionRow, StakeRow, SubaddressIndex,
    OutputQuery, TxQuery, BalanceResult, WalletDb, AddressBookEntry,
};
