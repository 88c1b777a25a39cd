//! Keyboard and mouse dispatch

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::core::{Action, Command, Module, Route};
use crate::modules::tabs::WALLET_PANEL;
use crate::ui::{layout, wallet_table};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => return app.apply_action(Action::Quit),
        KeyCode::Char('?') => return app.apply_action(Action::Help),
        KeyCode::Char(':') | KeyCode::Char('/') => return app.enter_command(),
        KeyCode::Char('y') => {
            let action = app.execute_command(&Command::Copy);
            return app.apply_action(action);
        }
        _ => {}
    }

    let action = match app.current_route() {
        Route::Factory => match key.code {
            KeyCode::Enter | KeyCode::Char('d') => Action::Navigate(Route::Dashboard),
            _ => Action::None,
        },
        Route::Wallet { .. } => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
            _ => Action::None,
        },
        Route::Dashboard => dashboard_key(app, key),
    };
    app.apply_action(action);
}

fn dashboard_key(app: &mut App, key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('b') | KeyCode::Backspace, _) => app.header.handle_key(key, &mut app.ctx),
        (KeyCode::Tab, _) | (KeyCode::Char(']'), _) => {
            app.tabs.cycle(true);
            Action::None
        }
        (KeyCode::BackTab, _) | (KeyCode::Char('['), _) => {
            app.tabs.cycle(false);
            Action::None
        }
        (KeyCode::Char(ch), mods) if ch.is_ascii_digit() && !mods.contains(KeyModifiers::CONTROL) => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index == 0 {
                Action::None
            } else {
                Action::SelectTab(index - 1)
            }
        }
        (KeyCode::Char('r'), _) => Action::Reload,
        (KeyCode::Esc, _) => Action::Back,
        _ if app.tabs.is_visible(WALLET_PANEL.id) => app.wallets.handle_key(key, &mut app.ctx),
        _ => Action::None,
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    if app.current_route() != &Route::Dashboard {
        return;
    }
    let areas = layout::areas(size, app.breakpoint);
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp if layout::rect_contains(areas.content, col, row) => {
            app.wallets.move_up()
        }
        MouseEventKind::ScrollDown if layout::rect_contains(areas.content, col, row) => {
            app.wallets.move_down()
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: layout::UiAreas, col: u16, row: u16) {
    if layout::rect_contains(areas.header_button, col, row) {
        let action = app.header.activate();
        app.apply_action(action);
        return;
    }

    if layout::rect_contains(areas.nav, col, row) {
        let rects = layout::tab_rects(areas.nav, areas.nav_direction, app.tabs.panels());
        if let Some(idx) = rects
            .iter()
            .position(|rect| layout::rect_contains(*rect, col, row))
        {
            app.apply_action(Action::SelectTab(idx));
        }
        return;
    }

    if layout::rect_contains(areas.content, col, row) && app.tabs.is_visible(WALLET_PANEL.id) {
        let table = layout::wallet_panel_areas(areas.content).table;
        if !layout::rect_contains(table, col, row) {
            return;
        }
        let Some(index) = wallet_table::row_at(table, &app.wallets, row) else {
            return;
        };
        app.wallets.select(index);
        if wallet_table::is_action_column(table, col) {
            let action = app.wallets.activate_or_notify(index, &mut app.ctx);
            app.apply_action(action);
        }
    }
}
