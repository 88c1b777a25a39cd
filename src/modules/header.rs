//! Header banner shown above the dashboard

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, Route};

pub const TITLE: &str = "Threshold Signature Wallet Dashboard";
pub const SUBTITLE: &str = "Discover your threshold signature wallet contract here.";
pub const BACK_LABEL: &str = "Back to Factory";

/// Stateless banner with a single "back" button.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBanner;

impl HeaderBanner {
    pub fn new() -> Self {
        Self
    }

    /// Text of the button as drawn, arrow included.
    pub fn button_text() -> String {
        format!(" ← {BACK_LABEL} ")
    }

    /// The button always sends the user to the factory root.
    pub fn activate(&self) -> Action {
        Action::Navigate(Route::Factory)
    }
}

impl Module for HeaderBanner {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('b') | KeyCode::Backspace => self.activate(),
            _ => Action::None,
        }
    }
}
