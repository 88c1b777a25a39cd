//! Wallet records and the boundary that turns raw JSON into a typed listing

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One wallet contract, identified by its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// The upstream API spells this field `walletAdress`.
    #[serde(rename = "walletAdress", alias = "walletAddress")]
    pub address: String,
}

impl WalletRecord {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// What the wallet list is asked to render.
///
/// `Invalid` is produced when the source payload is not an array of wallet
/// objects. The list view shows its fallback row for it instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletListing {
    Wallets(Vec<WalletRecord>),
    Invalid,
}

impl Default for WalletListing {
    fn default() -> Self {
        WalletListing::Wallets(Vec::new())
    }
}

impl WalletListing {
    /// Shape check at the data boundary.
    ///
    /// Anything that is not an array, or an array holding an element without a
    /// string address, becomes `Invalid`.
    pub fn from_value(value: Value) -> Self {
        if !value.is_array() {
            tracing::warn!(kind = json_kind(&value), "wallet payload is not an array");
            return WalletListing::Invalid;
        }
        match serde_json::from_value::<Vec<WalletRecord>>(value) {
            Ok(wallets) => WalletListing::Wallets(wallets),
            Err(err) => {
                tracing::warn!("wallet payload has malformed entries: {err}");
                WalletListing::Invalid
            }
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, SourceError> {
        let value: Value = serde_json::from_str(input).map_err(SourceError::Syntax)?;
        Ok(Self::from_value(value))
    }

    pub fn wallets(&self) -> Option<&[WalletRecord]> {
        match self {
            WalletListing::Wallets(wallets) => Some(wallets),
            WalletListing::Invalid => None,
        }
    }

    /// Number of wallets, `None` when the payload was not a sequence.
    pub fn total(&self) -> Option<usize> {
        self.wallets().map(|wallets| wallets.len())
    }

    pub fn get(&self, index: usize) -> Option<&WalletRecord> {
        self.wallets().and_then(|wallets| wallets.get(index))
    }

    /// Index of the first row whose action id (the address) matches.
    pub fn position_of(&self, address: &str) -> Option<usize> {
        let needle = address.trim();
        self.wallets()?
            .iter()
            .position(|wallet| wallet.address.eq_ignore_ascii_case(needle))
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read wallet source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("wallet source is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
}

/// Wallet data read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct WalletSource {
    path: PathBuf,
}

impl WalletSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<WalletListing, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let listing = WalletListing::from_json_str(&content)?;
        match listing.total() {
            Some(total) => tracing::info!(path = %self.path.display(), total, "loaded wallets"),
            None => tracing::warn!(path = %self.path.display(), "wallet source has invalid shape"),
        }
        Ok(listing)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
