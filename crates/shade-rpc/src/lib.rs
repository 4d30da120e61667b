//! RPC client for the remote node.
//!
//! Provides an async HTTP client for the daemon's JSON-RPC interface, plus
//! Epee portable-storage binary format support for the `.bin` endpoints used
//! by the bulk block-fetch path.
//!
//! # Example
//!
//! ```ignore
//! use shade_rpc::DaemonRpc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let daemon = DaemonRpc::new("http://localhost:19081");
//!     let info = daemon.get_info().await.unwrap();
//!     println!("Height: {}", info.height);
//! }
//! ```

pub mod error;
pub mod client;
pub mod daemon;
pub mod portable_storage;

pub use client::RpcClient;
pub use daemon::{DaemonRpc, RawBlockEntry};
pub use error::RpcError;

/// Default ports per network: P2P, JSON-RPC, binary-RPC.
pub mod ports {
    pub const P2P_MAINNET: u16 = 19080;
    pub const P2P_TESTNET: u16 = 29080;
    pub const P2P_STAGENET: u16 = 39080;
    pub const JSON_RPC_MAINNET: u16 = 19081;
    pub const JSON_RPC_TESTNET: u16 = 29081;
    pub const JSON_RPC_STAGENET: u16 = 39081;
    pub const BINARY_RPC_MAINNET: u16 = 19083;
    pub const BINARY_RPC_TESTNET: u16 = 29083;
    pub const BINARY_RPC_STAGENET: u16 = 39083;
}
