//! Tab navigator and tab panels

use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{self, UiAreas};
use super::{theme, wallet_table};
use crate::app::App;
use crate::modules::tabs::{TabPanel, SESSION_PANEL, WALLET_PANEL};

/// Draw the tab buttons, side list or top bar depending on the layout.
pub fn draw_tab_nav(f: &mut Frame, area: Rect, direction: Direction, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false));
    f.render_widget(block, area);

    let panels = app.tabs.panels();
    for (idx, rect) in layout::tab_rects(area, direction, panels).into_iter().enumerate() {
        let Some(panel) = panels.get(idx) else {
            break;
        };
        let active = idx == app.tabs.active_index();
        let style = if active {
            theme::highlight()
        } else {
            Style::default().fg(theme::PURPLE_LIGHT)
        };
        let label = Paragraph::new(Span::styled(format!("{}:{}", idx + 1, panel.title), style))
            .alignment(Alignment::Center);
        f.render_widget(label, rect);
    }
}

/// Draw the panel the tab controller says is visible.
pub fn draw_active_panel(f: &mut Frame, areas: &UiAreas, app: &App) {
    let Some(panel) = app.tabs.active().copied() else {
        return;
    };
    draw_panel_frame(f, areas.content, &panel);
    match panel.id {
        id if id == WALLET_PANEL.id => {
            let panel_areas = layout::wallet_panel_areas(areas.content);
            wallet_table::draw_wallet_list(f, panel_areas, &app.wallets);
        }
        id if id == SESSION_PANEL.id => {
            let paragraph = Paragraph::new(Text::from(session_lines(app))).wrap(Wrap { trim: true });
            f.render_widget(paragraph, layout::rect_inner(areas.content));
        }
        _ => {}
    }
}

fn draw_panel_frame(f: &mut Frame, area: Rect, panel: &TabPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(panel.heading(), theme::title()))
        .border_style(theme::border(true));
    f.render_widget(block, area);
}

fn session_lines(app: &App) -> Vec<Line<'static>> {
    let source = app
        .source
        .as_ref()
        .map(|source| source.path().display().to_string())
        .unwrap_or_else(|| "none".to_string());
    let total = app
        .wallets
        .listing()
        .total()
        .map(|total| total.to_string())
        .unwrap_or_else(|| "invalid data format".to_string());
    let (selected, updated) = match app.stored_selection() {
        Some(stored) => (
            stored.value,
            stored.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        None => ("none".to_string(), "--".to_string()),
    };

    vec![
        field_line("Source", source),
        field_line("Wallets", total),
        Line::from(""),
        field_line("Selected", selected),
        field_line("Updated", updated),
    ]
}

pub(super) fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), theme::label()),
        Span::raw(value),
    ])
}
