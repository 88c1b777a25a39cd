//! Wallet list rendering

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::layout::WalletPanelAreas;
use super::theme;
use crate::modules::wallet_list::{
    TableBody, WalletListView, ACTION_LABEL, COLUMN_HEADERS, LIST_TITLE, TOTAL_LABEL,
};

pub const POSITION_WIDTH: u16 = 8;
pub const ACTION_WIDTH: u16 = 8;

pub fn column_widths() -> [Constraint; 3] {
    [
        Constraint::Length(POSITION_WIDTH),
        Constraint::Min(20),
        Constraint::Length(ACTION_WIDTH),
    ]
}

pub fn draw_wallet_list(f: &mut Frame, areas: WalletPanelAreas, view: &WalletListView) {
    let model = view.model();

    let summary = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(areas.summary);
    f.render_widget(
        Paragraph::new(Span::styled(LIST_TITLE, theme::heading())),
        summary[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(TOTAL_LABEL, theme::label()),
            Span::styled(model.total.clone(), theme::heading()),
        ]))
        .alignment(Alignment::Right),
        summary[1],
    );

    let header = Row::new(COLUMN_HEADERS.iter().map(|title| Cell::from(*title)))
        .style(theme::table_header());

    match &model.body {
        TableBody::Rows(rows) => {
            let rows: Vec<Row> = rows
                .iter()
                .map(|row| {
                    Row::new(vec![
                        Cell::from(row.position.to_string()),
                        Cell::from(Span::styled(format!(" {} ", row.address), theme::badge())),
                        Cell::from(Span::styled(ACTION_LABEL, theme::action())),
                    ])
                })
                .collect();
            let table = Table::new(rows, column_widths())
                .header(header)
                .highlight_style(theme::highlight());
            let mut state = TableState::default();
            state.select(view.selected());
            f.render_stateful_widget(table, areas.table, &mut state);
        }
        TableBody::Fallback(text) => {
            let table = Table::new(Vec::<Row>::new(), column_widths()).header(header);
            f.render_widget(table, areas.table);
            if areas.table.height > 1 {
                let notice = Rect {
                    x: areas.table.x,
                    y: areas.table.y + 1,
                    width: areas.table.width,
                    height: 1,
                };
                f.render_widget(
                    Paragraph::new(*text).alignment(Alignment::Center),
                    notice,
                );
            }
        }
    }
}

/// Index of the wallet drawn at terminal row `row`, if any.
pub fn row_at(table: Rect, view: &WalletListView, row: u16) -> Option<usize> {
    // first line is the column header
    let first = table.y.saturating_add(1);
    let visible = table.height.saturating_sub(1) as usize;
    if row < first || visible == 0 {
        return None;
    }
    let row_idx = (row - first) as usize;
    if row_idx >= visible {
        return None;
    }
    let selected = view.selected().unwrap_or(0);
    let offset = if selected >= visible {
        selected.saturating_sub(visible.saturating_sub(1))
    } else {
        0
    };
    let clicked = offset + row_idx;
    (clicked < view.len()).then_some(clicked)
}

/// Whether `col` falls on the action column.
pub fn is_action_column(table: Rect, col: u16) -> bool {
    let right = table.x.saturating_add(table.width);
    col < right && col >= right.saturating_sub(ACTION_WIDTH)
}
