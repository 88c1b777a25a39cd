use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::modules::header::{HeaderBanner, SUBTITLE, TITLE};

pub fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(HeaderBanner::button_text(), theme::button()),
        ]),
        Line::from(Span::styled(format!(" {TITLE}"), theme::title())),
        Line::from(Span::styled(format!(" {SUBTITLE}"), theme::subtitle())),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(false)),
    );
    f.render_widget(paragraph, area);
}
