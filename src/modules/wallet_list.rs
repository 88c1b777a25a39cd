//! Wallet list: the table model and the selection-and-redirect flow

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel, Route};
use crate::domain::{WalletListing, WalletRecord};
use crate::store::{StoreError, SELECTED_WALLET_KEY};

pub const LIST_TITLE: &str = "Wallet List";
pub const TOTAL_LABEL: &str = "Total Wallets : ";
pub const COLUMN_HEADERS: [&str; 3] = ["Wallet", "Wallet Address", ""];
pub const ACTION_LABEL: &str = "Access";
pub const FALLBACK_TEXT: &str = "Invalid data format";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRow {
    /// 1-based
    pub position: usize,
    pub address: String,
    /// Addresses the row's action control. Duplicate addresses collide.
    pub action_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<WalletRow>),
    /// Single notice spanning every column
    Fallback(&'static str),
}

/// Everything the table draws, computed from the listing alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletTableModel {
    pub total: String,
    pub body: TableBody,
}

impl WalletTableModel {
    pub fn build(listing: &WalletListing) -> Self {
        match listing {
            WalletListing::Wallets(wallets) => Self {
                total: wallets.len().to_string(),
                body: TableBody::Rows(
                    wallets
                        .iter()
                        .enumerate()
                        .map(|(idx, wallet)| WalletRow {
                            position: idx + 1,
                            address: wallet.address.clone(),
                            action_id: wallet.address.clone(),
                        })
                        .collect(),
                ),
            },
            WalletListing::Invalid => Self {
                total: "--".to_string(),
                body: TableBody::Fallback(FALLBACK_TEXT),
            },
        }
    }

    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Fallback(_) => 1,
        }
    }

    pub fn action_ids(&self) -> Vec<&str> {
        match &self.body {
            TableBody::Rows(rows) => rows.iter().map(|row| row.action_id.as_str()).collect(),
            TableBody::Fallback(_) => Vec::new(),
        }
    }
}

/// Wallet list state: the listing it was handed and the highlighted row.
#[derive(Debug, Clone, Default)]
pub struct WalletListView {
    listing: WalletListing,
    selected: usize,
    pending_g: bool,
}

impl WalletListView {
    pub fn new(listing: WalletListing) -> Self {
        Self {
            listing,
            selected: 0,
            pending_g: false,
        }
    }

    pub fn listing(&self) -> &WalletListing {
        &self.listing
    }

    pub fn set_listing(&mut self, listing: WalletListing) {
        self.listing = listing;
        self.clamp();
    }

    pub fn model(&self) -> WalletTableModel {
        WalletTableModel::build(&self.listing)
    }

    pub fn len(&self) -> usize {
        self.listing.total().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highlighted row, `None` when there is nothing to select.
    pub fn selected(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.selected)
    }

    pub fn selected_wallet(&self) -> Option<&WalletRecord> {
        self.selected().and_then(|idx| self.listing.get(idx))
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn go_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    /// Record the row's address in the session store, then ask to open it.
    ///
    /// A failed write returns the error and no navigation is requested.
    pub fn activate(&self, index: usize, ctx: &mut Context) -> Result<Action, StoreError> {
        let Some(wallet) = self.listing.get(index) else {
            return Ok(Action::None);
        };
        ctx.store.set(SELECTED_WALLET_KEY, &wallet.address)?;
        tracing::info!(position = index + 1, address = %wallet.address, "wallet selected");
        Ok(Action::Navigate(Route::Wallet {
            address: Some(wallet.address.clone()),
        }))
    }

    /// `activate` with the store error turned into a status notification.
    pub fn activate_or_notify(&self, index: usize, ctx: &mut Context) -> Action {
        match self.activate(index, ctx) {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!("failed to record wallet selection: {err}");
                Action::Notify(format!("Selection not saved: {err}"), NotifyLevel::Error)
            }
        }
    }

    fn clamp(&mut self) {
        self.selected = self.selected.min(self.len().saturating_sub(1));
    }
}

impl Module for WalletListView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let chord = std::mem::take(&mut self.pending_g);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home => self.go_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.go_to_bottom(),
            KeyCode::Char('g') => {
                if chord {
                    self.go_to_top();
                } else {
                    self.pending_g = true;
                }
            }
            KeyCode::Enter => {
                if let Some(index) = self.selected() {
                    return self.activate_or_notify(index, ctx);
                }
            }
            _ => {}
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::store::{KeyValueStore, StoredValue};

    fn listing(addresses: &[&str]) -> WalletListing {
        WalletListing::Wallets(addresses.iter().map(|a| WalletRecord::new(*a)).collect())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_model_rows_and_total() {
        let model = WalletTableModel::build(&listing(&["0xAA", "0xBB"]));
        assert_eq!(model.total, "2");
        assert_eq!(model.row_count(), 2);
        let TableBody::Rows(rows) = &model.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].address, "0xAA");
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].address, "0xBB");
        assert_eq!(model.action_ids(), vec!["0xAA", "0xBB"]);
    }

    #[test]
    fn test_model_fallback() {
        let model = WalletTableModel::build(&WalletListing::Invalid);
        assert_eq!(model.body, TableBody::Fallback("Invalid data format"));
        assert_eq!(model.row_count(), 1);
        assert!(model.action_ids().is_empty());
        assert_eq!(model.total, "--");
    }

    #[test]
    fn test_duplicate_addresses_share_action_id() {
        let model = WalletTableModel::build(&listing(&["0xAA", "0xAA"]));
        assert_eq!(model.action_ids(), vec!["0xAA", "0xAA"]);
    }

    #[test]
    fn test_activate_writes_then_navigates() {
        let view = WalletListView::new(listing(&["0xAA", "0xBB"]));
        let mut ctx = Context::default();
        ctx.store.set(SELECTED_WALLET_KEY, "stale").unwrap();

        let action = view.activate(1, &mut ctx).unwrap();
        assert_eq!(
            action,
            Action::Navigate(Route::Wallet {
                address: Some("0xBB".to_string())
            })
        );
        let stored = ctx.store.get(SELECTED_WALLET_KEY).unwrap().unwrap();
        assert_eq!(stored.value, "0xBB");
    }

    #[test]
    fn test_activate_out_of_range_is_noop() {
        let view = WalletListView::new(listing(&["0xAA"]));
        let mut ctx = Context::default();
        assert_eq!(view.activate(3, &mut ctx).unwrap(), Action::None);
        assert_eq!(ctx.store.get(SELECTED_WALLET_KEY).unwrap(), None);
    }

    #[test]
    fn test_enter_on_invalid_listing_does_nothing() {
        let mut view = WalletListView::new(WalletListing::Invalid);
        let mut ctx = Context::default();
        assert_eq!(view.handle_key(key(KeyCode::Enter), &mut ctx), Action::None);
        assert_eq!(ctx.store.get(SELECTED_WALLET_KEY).unwrap(), None);
    }

    #[test]
    fn test_keys_move_and_activate() {
        let mut view = WalletListView::new(listing(&["0x01", "0x02", "0x03"]));
        let mut ctx = Context::default();

        view.handle_key(key(KeyCode::Char('j')), &mut ctx);
        view.handle_key(key(KeyCode::Char('j')), &mut ctx);
        view.handle_key(key(KeyCode::Char('j')), &mut ctx);
        assert_eq!(view.selected(), Some(2));

        view.handle_key(key(KeyCode::Char('g')), &mut ctx);
        view.handle_key(key(KeyCode::Char('g')), &mut ctx);
        assert_eq!(view.selected(), Some(0));

        view.handle_key(key(KeyCode::Char('G')), &mut ctx);
        let action = view.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(
            action,
            Action::Navigate(Route::Wallet {
                address: Some("0x03".into())
            })
        );
    }

    #[test]
    fn test_store_failure_reported() {
        struct FailingStore;
        impl KeyValueStore for FailingStore {
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Sql(rusqlite::Error::InvalidQuery))
            }
            fn get(&self, _key: &str) -> Result<Option<StoredValue>, StoreError> {
                Ok(None)
            }
            fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let view = WalletListView::new(listing(&["0xAA"]));
        let mut ctx = Context::new(Box::new(FailingStore));
        assert!(view.activate(0, &mut ctx).is_err());
        assert!(matches!(
            view.activate_or_notify(0, &mut ctx),
            Action::Notify(_, NotifyLevel::Error)
        ));
    }

    #[test]
    fn test_set_listing_clamps_selection() {
        let mut view = WalletListView::new(listing(&["0x01", "0x02", "0x03"]));
        view.go_to_bottom();
        view.set_listing(listing(&["0x01"]));
        assert_eq!(view.selected(), Some(0));
        view.set_listing(WalletListing::Invalid);
        assert_eq!(view.selected(), None);
    }
}
