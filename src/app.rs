use std::time::{Duration, Instant};

use crate::core::{Action, Command, Context, Navigator, NotifyLevel, OpenTarget, Route, Router};
use crate::domain::{WalletListing, WalletSource};
use crate::modules::header::HeaderBanner;
use crate::modules::tabs::TabController;
use crate::modules::wallet_list::WalletListView;
use crate::store::{StoredValue, SELECTED_WALLET_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub router: Router,
    pub header: HeaderBanner,
    pub wallets: WalletListView,
    pub tabs: TabController,
    pub source: Option<WalletSource>,
    /// Width at which the layout shell goes horizontal
    pub breakpoint: u16,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    status_ttl: Duration,
}

impl App {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            router: Router::new(Route::Dashboard),
            header: HeaderBanner::new(),
            wallets: WalletListView::default(),
            tabs: TabController::default(),
            source: None,
            breakpoint: crate::config::DEFAULT_BREAKPOINT,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
            status_ttl: Duration::from_secs(3),
        }
    }

    pub fn with_listing(mut self, listing: WalletListing) -> Self {
        self.wallets.set_listing(listing);
        self
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.status_ttl {
                self.status = None;
            }
        }
    }

    /// Last selection written by the wallet list, read back from the store.
    pub fn stored_selection(&self) -> Option<StoredValue> {
        match self.ctx.store.get(SELECTED_WALLET_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("failed to read stored selection: {err}");
                None
            }
        }
    }

    /// Address the copy action would put on the clipboard.
    pub fn copy_target(&self) -> Option<String> {
        match self.current_route() {
            Route::Wallet { address } => address
                .clone()
                .or_else(|| self.stored_selection().map(|stored| stored.value)),
            Route::Dashboard => self
                .wallets
                .selected_wallet()
                .map(|wallet| wallet.address.clone()),
            Route::Factory => None,
        }
    }

    pub fn reload(&mut self) {
        tracing::info!("wallet source reload requested");
        let Some(source) = self.source.as_ref() else {
            self.set_status("No wallet source configured", StatusLevel::Warn);
            return;
        };
        match source.load() {
            Ok(listing) => {
                let message = match listing.total() {
                    Some(total) => (format!("Loaded {total} wallets"), StatusLevel::Info),
                    None => (
                        "Wallet source has an invalid data format".to_string(),
                        StatusLevel::Warn,
                    ),
                };
                self.wallets.set_listing(listing);
                self.set_status(message.0, message.1);
            }
            Err(err) => {
                tracing::warn!("wallet reload failed: {err}");
                self.set_status(err.to_string(), StatusLevel::Error);
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Factory => Action::Navigate(Route::Factory),
            Command::Dashboard => Action::Navigate(Route::Dashboard),
            Command::Open(target) => {
                let index = match target {
                    OpenTarget::Position(position) => match position.checked_sub(1) {
                        Some(index) => index,
                        None => return Action::Notify("Positions start at 1".into(), NotifyLevel::Warn),
                    },
                    OpenTarget::Address(address) => {
                        match self.wallets.listing().position_of(address) {
                            Some(index) => index,
                            None => {
                                return Action::Notify(
                                    format!("No wallet with address {address}"),
                                    NotifyLevel::Warn,
                                )
                            }
                        }
                    }
                };
                if index >= self.wallets.len() {
                    return Action::Notify(
                        format!("No wallet at position {}", index + 1),
                        NotifyLevel::Warn,
                    );
                }
                self.wallets.select(index);
                self.wallets.activate_or_notify(index, &mut self.ctx)
            }
            Command::Tab(name) => {
                let mut tabs = self.tabs.clone();
                if tabs.select_named(name) {
                    Action::SelectTab(tabs.active_index())
                } else {
                    Action::Notify(format!("Unknown tab: {name}"), NotifyLevel::Warn)
                }
            }
            Command::Reload => Action::Reload,
            Command::Copy => match self.copy_target() {
                Some(text) => Action::Copy(text),
                None => Action::Notify("Nothing to copy".into(), NotifyLevel::Warn),
            },
            Command::Help => Action::Help,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => {
                self.help_open = false;
                self.router.navigate(route);
            }
            Action::Back => {
                if !self.router.back() {
                    self.set_status("Already at the top", StatusLevel::Warn);
                }
            }
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::SelectTab(index) => {
                self.tabs.select(index);
            }
            Action::Reload => self.reload(),
            Action::Help => self.help_open = true,
            Action::Quit => self.should_quit = true,
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        use arboard::Clipboard;

        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => {
                self.set_status(format!("Copied: {}", short_text(&text, 20)), StatusLevel::Info);
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.set_status("Clipboard not available", StatusLevel::Error);
            }
        }
    }
}

fn short_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletRecord;

    fn app_with(addresses: &[&str]) -> App {
        App::new(Context::default()).with_listing(WalletListing::Wallets(
            addresses.iter().map(|a| WalletRecord::new(*a)).collect(),
        ))
    }

    #[test]
    fn test_starts_on_dashboard() {
        let app = app_with(&[]);
        assert_eq!(app.current_route(), &Route::Dashboard);
    }

    #[test]
    fn test_open_command_by_position() {
        let mut app = app_with(&["0xAA", "0xBB"]);
        app.command.input = "open 2".into();
        app.apply_command();
        assert_eq!(
            app.current_route(),
            &Route::Wallet {
                address: Some("0xBB".into())
            }
        );
        assert_eq!(app.stored_selection().unwrap().value, "0xBB");
        assert_eq!(app.wallets.selected(), Some(1));
    }

    #[test]
    fn test_open_command_by_address() {
        let mut app = app_with(&["0xAA", "0xBB"]);
        let action = app.execute_command(&Command::Open(OpenTarget::Address("0xaa".into())));
        assert_eq!(
            action,
            Action::Navigate(Route::Wallet {
                address: Some("0xAA".into())
            })
        );
    }

    #[test]
    fn test_open_command_out_of_range() {
        let mut app = app_with(&["0xAA"]);
        app.command.input = "open 5".into();
        app.apply_command();
        assert_eq!(app.current_route(), &Route::Dashboard);
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));
        assert!(app.stored_selection().is_none());
    }

    #[test]
    fn test_tab_command() {
        let mut app = app_with(&[]);
        app.command.input = "tab session".into();
        app.apply_command();
        assert!(app.tabs.is_visible("session"));

        app.command.input = "tab bogus".into();
        app.apply_command();
        assert!(app.tabs.is_visible("session"));
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));
    }

    #[test]
    fn test_unknown_command_warns() {
        let mut app = app_with(&[]);
        app.command.input = "frobnicate".into();
        app.apply_command();
        assert_eq!(
            app.status_text(),
            Some(("Unknown command: frobnicate", StatusLevel::Warn))
        );
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_reload_without_source() {
        let mut app = app_with(&["0xAA"]);
        app.reload();
        assert_eq!(app.wallets.len(), 1);
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));
    }

    #[test]
    fn test_reload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        std::fs::write(&path, r#"[{"walletAdress":"0x01"},{"walletAdress":"0x02"}]"#).unwrap();

        let mut app = app_with(&[]);
        app.source = Some(WalletSource::new(&path));
        app.reload();
        assert_eq!(app.wallets.len(), 2);
        assert_eq!(app.status_text(), Some(("Loaded 2 wallets", StatusLevel::Info)));

        std::fs::write(&path, r#"{"walletAdress":"0x01"}"#).unwrap();
        app.reload();
        assert_eq!(app.wallets.listing(), &WalletListing::Invalid);

        std::fs::write(&path, "not json").unwrap();
        app.reload();
        assert_eq!(app.wallets.listing(), &WalletListing::Invalid);
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Error));
    }

    #[test]
    fn test_back_from_wallet() {
        let mut app = app_with(&["0xAA"]);
        app.apply_action(Action::Navigate(Route::Wallet {
            address: Some("0xAA".into()),
        }));
        app.apply_action(Action::Back);
        assert_eq!(app.current_route(), &Route::Dashboard);
        app.apply_action(Action::Back);
        assert_eq!(app.current_route(), &Route::Dashboard);
    }

    #[test]
    fn test_copy_target_by_route() {
        let mut app = app_with(&["0xAA", "0xBB"]);
        app.wallets.select(1);
        assert_eq!(app.copy_target(), Some("0xBB".into()));

        app.apply_action(Action::Navigate(Route::Wallet { address: None }));
        assert_eq!(app.copy_target(), None);

        app.ctx
            .store
            .set(SELECTED_WALLET_KEY, "0xCC")
            .unwrap();
        assert_eq!(app.copy_target(), Some("0xCC".into()));

        app.apply_action(Action::Navigate(Route::Factory));
        assert_eq!(app.copy_target(), None);
    }

    #[test]
    fn test_fresh_status_survives_tick() {
        let mut app = app_with(&[]);
        assert_eq!(app.status_ttl, Duration::from_secs(3));
        app.set_status("Loaded 2 wallets", StatusLevel::Info);
        app.on_tick();
        assert_eq!(
            app.status_text(),
            Some(("Loaded 2 wallets", StatusLevel::Info))
        );
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut app = app_with(&[]);
        app.set_status("Copied: 0xAA", StatusLevel::Info);
        app.status_ttl = Duration::from_millis(10);
        std::thread::sleep(Duration::from_millis(20));
        app.on_tick();
        assert_eq!(app.status_text(), None);

        // a newer message restarts the clock
        app.set_status("Already at the top", StatusLevel::Warn);
        app.on_tick();
        assert!(app.status_text().is_some());
    }

    #[test]
    fn test_short_text() {
        assert_eq!(short_text("0x1234", 20), "0x1234");
        assert_eq!(short_text("abcdef", 3), "abc...");
    }
}
