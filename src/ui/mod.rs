use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod header;
pub mod layout;
pub mod tabs;
pub mod theme;
pub mod wallet_table;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::Route;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    match app.current_route() {
        Route::Dashboard => draw_dashboard(f, size, app),
        Route::Factory => {
            let areas = layout::page_areas(size);
            draw_factory(f, areas.body);
            draw_status_line(f, areas.status_line, app);
            draw_command_line(f, areas.command_line, app);
        }
        Route::Wallet { address } => {
            let areas = layout::page_areas(size);
            draw_wallet_detail(f, areas.body, app, address.as_deref());
            draw_status_line(f, areas.status_line, app);
            draw_command_line(f, areas.command_line, app);
        }
    }

    if app.help_open {
        draw_help_popup(f, size, app);
    }
}

fn draw_dashboard(f: &mut Frame, size: Rect, app: &App) {
    let areas = layout::areas(size, app.breakpoint);

    header::draw_header(f, areas.header);
    tabs::draw_tab_nav(f, areas.nav, areas.nav_direction, app);
    tabs::draw_active_panel(f, &areas, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);
}

fn draw_factory(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Threshold Signature Wallet Factory",
            theme::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Create and manage threshold signature wallet contracts.",
            theme::subtitle(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  d / Enter", Style::default().fg(theme::ORANGE)),
            Span::raw("  Open the wallet dashboard"),
        ]),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Factory")
                .border_style(theme::border(true)),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_wallet_detail(f: &mut Frame, area: Rect, app: &App, address: Option<&str>) {
    let stored = app.stored_selection();
    let mut lines = vec![
        Line::from(""),
        tabs::field_line(
            "Address",
            address.map(str::to_string).unwrap_or_else(|| "--".to_string()),
        ),
    ];
    match stored {
        Some(stored) => {
            lines.push(tabs::field_line("Stored", stored.value.clone()));
            lines.push(tabs::field_line(
                "Updated",
                stored.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ));
            if address.is_some_and(|address| address != stored.value) {
                lines.push(Line::from(Span::styled(
                    "Stored selection differs from the opened wallet",
                    Style::default().fg(Color::LightYellow),
                )));
            }
        }
        None => lines.push(tabs::field_line("Stored", "none".to_string())),
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Wallet Detail", theme::title()))
                .border_style(theme::border(true)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Route ", theme::label()),
        Span::raw(format!("{}  ", app.current_route().path())),
        Span::styled("View ", theme::label()),
        Span::raw(app.router.breadcrumb()),
    ];
    if let Some(total) = app.wallets.listing().total() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Wallets ", theme::label()));
        spans.push(Span::raw(total.to_string()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Yellow)),
            Span::raw(app.command.input.clone()),
            Span::styled(
                "  open <n|addr> | tab <name> | factory | dashboard | reload | copy | quit",
                theme::label(),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", theme::label()),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.current_route() {
        Route::Factory => &[("d", "dashboard"), (":", "command"), ("?", "help"), ("q", "quit")],
        Route::Dashboard => &[
            ("j/k", "move"),
            ("Enter", "access"),
            ("Tab", "switch tab"),
            ("b", "back to factory"),
            ("y", "copy"),
            ("r", "reload"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Route::Wallet { .. } => &[("Esc", "back"), ("y", "copy"), ("?", "help"), ("q", "quit")],
    };
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(theme::ORANGE),
        ));
        spans.push(Span::styled(format!("{label}  "), theme::label()));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  j / k      Move selection"),
        Line::from("  gg / G     Top / bottom"),
        Line::from("  Tab / [ ]  Switch tab"),
        Line::from("  1-2        Jump to tab"),
        Line::from("  Enter      Access wallet"),
        Line::from("  b          Back to factory"),
        Line::from("  Esc        Back / close"),
        Line::from("  Mouse      Click tab, row or Access"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  :          Command line"),
        Line::from("  y          Copy address"),
        Line::from("  r          Reload wallets"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :open 2    :open 0x..   :tab session"),
        Line::from("  :factory   :dashboard   :reload   :copy"),
        Line::from(""),
        Line::from(format!("Current route: {}", app.current_route().path())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
