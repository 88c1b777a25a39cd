pub mod session;

pub use session::{
    KeyValueStore, MemoryStore, SqliteStore, StoreError, StoredValue, SELECTED_WALLET_KEY,
};
