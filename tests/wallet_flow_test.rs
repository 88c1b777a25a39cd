//! Wallet selection flow driven through the app, the way a user would

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use walletdash::app::App;
use walletdash::core::{Context, Route};
use walletdash::domain::WalletListing;
use walletdash::input::handle_key;
use walletdash::store::{KeyValueStore, SqliteStore, SELECTED_WALLET_KEY};

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_from(value: serde_json::Value) -> App {
    App::new(Context::default()).with_listing(WalletListing::from_value(value))
}

#[test]
fn test_access_second_wallet_stores_and_navigates() {
    let mut app = app_from(json!([{"walletAdress": "0xAA"}, {"walletAdress": "0xBB"}]));
    let before = app.router.navigations();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let stored = app.ctx.store.get(SELECTED_WALLET_KEY).unwrap().unwrap();
    assert_eq!(stored.value, "0xBB");
    assert_eq!(app.router.navigations(), before + 1);
    assert_eq!(app.current_route().path(), "/wallet");
    assert_eq!(
        app.current_route(),
        &Route::Wallet {
            address: Some("0xBB".to_string())
        }
    );
}

#[test]
fn test_each_row_stores_its_own_address() {
    let addresses = ["0x01", "0x02", "0x03", "0x04"];
    let payload: Vec<_> = addresses
        .iter()
        .map(|a| json!({ "walletAdress": a }))
        .collect();

    for (idx, expected) in addresses.iter().enumerate() {
        let mut app = app_from(json!(payload));
        for _ in 0..idx {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        let stored = app.stored_selection().unwrap();
        assert_eq!(&stored.value, expected);
        assert_eq!(app.router.navigations(), 1);
    }
}

#[test]
fn test_later_selection_overwrites_earlier() {
    let mut app = app_from(json!([{"walletAdress": "0xAA"}, {"walletAdress": "0xBB"}]));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.stored_selection().unwrap().value, "0xAA");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_route(), &Route::Dashboard);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.stored_selection().unwrap().value, "0xBB");
}

#[test]
fn test_header_back_goes_to_root_once() {
    let mut app = app_from(json!([{"walletAdress": "0xAA"}]));
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.current_route().path(), "/");
    assert_eq!(app.router.navigations(), 1);
    assert!(app.stored_selection().is_none());
}

#[test]
fn test_invalid_input_has_no_actions() {
    for value in [json!(null), json!({"walletAdress": "0xAA"}), json!("0xAA")] {
        let mut app = app_from(value);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_route(), &Route::Dashboard);
        assert_eq!(app.router.navigations(), 0);
        assert!(app.stored_selection().is_none());
    }
}

#[test]
fn test_selection_survives_in_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.sqlite3");

    {
        let store = SqliteStore::open(&path).unwrap();
        let mut app = App::new(Context::new(Box::new(store))).with_listing(
            WalletListing::from_value(json!([{"walletAdress": "0xAA"}])),
        );
        press(&mut app, KeyCode::Enter);
    }

    let store = SqliteStore::open(&path).unwrap();
    let stored = store.get(SELECTED_WALLET_KEY).unwrap().unwrap();
    assert_eq!(stored.value, "0xAA");
}
