pub mod wallet;

pub use wallet::{SourceError, WalletListing, WalletRecord, WalletSource};
