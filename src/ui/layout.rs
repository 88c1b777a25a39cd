use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::modules::header::HeaderBanner;
use crate::modules::tabs::TabPanel;

pub const HEADER_HEIGHT: u16 = 5;
pub const NAV_WIDTH: u16 = 20;
pub const NAV_HEIGHT: u16 = 3;

/// Responsive container: children side by side on wide terminals, stacked
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutShell {
    pub breakpoint: u16,
}

impl LayoutShell {
    pub fn new(breakpoint: u16) -> Self {
        Self { breakpoint }
    }

    pub fn direction(&self, area: Rect) -> Direction {
        if area.width >= self.breakpoint {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// Split `area` among children, using `wide` or `narrow` constraints
    /// depending on the arrangement.
    pub fn split(&self, area: Rect, wide: &[Constraint], narrow: &[Constraint]) -> Rc<[Rect]> {
        let direction = self.direction(area);
        let constraints = match direction {
            Direction::Horizontal => wide,
            Direction::Vertical => narrow,
        };
        Layout::default()
            .direction(direction)
            .constraints(constraints.to_vec())
            .split(area)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub header_button: Rect,
    pub body: Rect,
    pub nav: Rect,
    pub nav_direction: Direction,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Areas of the dashboard page.
pub fn areas(size: Rect, breakpoint: u16) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let shell = LayoutShell::new(breakpoint);
    let body = vertical[1];
    let children = shell.split(
        body,
        &[Constraint::Length(NAV_WIDTH), Constraint::Min(0)],
        &[Constraint::Length(NAV_HEIGHT), Constraint::Min(0)],
    );

    let header = vertical[0];
    let button_width = HeaderBanner::button_text().chars().count() as u16;
    let header_button = Rect {
        x: header.x.saturating_add(2),
        y: header.y.saturating_add(1),
        width: button_width.min(header.width.saturating_sub(4)),
        height: 1.min(header.height),
    };

    UiAreas {
        size,
        header,
        header_button,
        body,
        nav: children[0],
        nav_direction: shell.direction(body),
        content: children[1],
        status_line: vertical[2],
        command_line: vertical[3],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageAreas {
    pub body: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Areas of the full-screen pages (factory, wallet detail).
pub fn page_areas(size: Rect) -> PageAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);
    PageAreas {
        body: vertical[0],
        status_line: vertical[1],
        command_line: vertical[2],
    }
}

/// Click target of each tab inside the navigator.
pub fn tab_rects(nav: Rect, direction: Direction, panels: &[TabPanel]) -> Vec<Rect> {
    let inner = rect_inner(nav);
    let mut rects = Vec::with_capacity(panels.len());
    match direction {
        Direction::Horizontal => {
            for (idx, _) in panels.iter().enumerate() {
                let y = inner.y.saturating_add(idx as u16);
                if y >= inner.y.saturating_add(inner.height) {
                    break;
                }
                rects.push(Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                });
            }
        }
        Direction::Vertical => {
            let right = inner.x.saturating_add(inner.width);
            let mut x = inner.x;
            for panel in panels {
                let width = panel.title.chars().count() as u16 + 4;
                if x >= right || inner.height == 0 {
                    break;
                }
                rects.push(Rect {
                    x,
                    y: inner.y,
                    width: width.min(right - x),
                    height: 1,
                });
                x = x.saturating_add(width + 1);
            }
        }
    }
    rects
}

#[derive(Debug, Clone, Copy)]
pub struct WalletPanelAreas {
    pub summary: Rect,
    pub table: Rect,
}

/// Split the inside of the wallet panel into summary line and table.
pub fn wallet_panel_areas(content: Rect) -> WalletPanelAreas {
    let inner = rect_inner(content);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    WalletPanelAreas {
        summary: chunks[0],
        table: chunks[2],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tabs::{SESSION_PANEL, WALLET_PANEL};

    #[test]
    fn test_shell_direction_follows_breakpoint() {
        let shell = LayoutShell::new(100);
        assert_eq!(shell.direction(Rect::new(0, 0, 120, 40)), Direction::Horizontal);
        assert_eq!(shell.direction(Rect::new(0, 0, 100, 40)), Direction::Horizontal);
        assert_eq!(shell.direction(Rect::new(0, 0, 80, 40)), Direction::Vertical);
    }

    #[test]
    fn test_wide_dashboard_puts_nav_beside_content() {
        let ui = areas(Rect::new(0, 0, 120, 40), 100);
        assert_eq!(ui.nav_direction, Direction::Horizontal);
        assert_eq!(ui.nav.width, NAV_WIDTH);
        assert_eq!(ui.nav.y, ui.content.y);
        assert_eq!(ui.content.x, NAV_WIDTH);
    }

    #[test]
    fn test_narrow_dashboard_stacks_nav_over_content() {
        let ui = areas(Rect::new(0, 0, 80, 40), 100);
        assert_eq!(ui.nav_direction, Direction::Vertical);
        assert_eq!(ui.nav.height, NAV_HEIGHT);
        assert_eq!(ui.content.y, ui.nav.y + NAV_HEIGHT);
        assert_eq!(ui.content.width, 80);
    }

    #[test]
    fn test_tab_rects() {
        let panels = [WALLET_PANEL, SESSION_PANEL];
        let side = tab_rects(Rect::new(0, 5, 20, 10), Direction::Horizontal, &panels);
        assert_eq!(side, vec![Rect::new(1, 6, 18, 1), Rect::new(1, 7, 18, 1)]);

        let bar = tab_rects(Rect::new(0, 5, 80, 3), Direction::Vertical, &panels);
        assert_eq!(bar, vec![Rect::new(1, 6, 10, 1), Rect::new(12, 6, 11, 1)]);
    }

    #[test]
    fn test_header_button_inside_header() {
        let ui = areas(Rect::new(0, 0, 120, 40), 100);
        assert!(rect_contains(ui.header, ui.header_button.x, ui.header_button.y));
        assert_eq!(ui.header_button.width, HeaderBanner::button_text().chars().count() as u16);
    }
}
