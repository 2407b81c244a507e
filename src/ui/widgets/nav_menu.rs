use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::app::MENU_ENTRIES;
use crate::ui::theme;

/// Collapsible navigation menu, drawn as an overlay near the top-left
pub struct NavMenuWidget {
    pub selected: usize,
}

impl Widget for NavMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width: u16 = 24;
        let height = MENU_ENTRIES.len() as u16 + 2;
        if area.width < width + 2 || area.height < height + 1 {
            return;
        }

        let x = area.x + 1;
        let y = area.y + 1;
        let bg = Style::default().bg(theme::HEADER_BG).fg(theme::FG);

        // Panel background and border rows
        for row in 0..height {
            buf.set_string(x, y + row, " ".repeat(width as usize), bg);
        }
        buf.set_string(x, y, format!("┌{}┐", "─".repeat(width as usize - 2)), bg);
        buf.set_string(
            x,
            y + height - 1,
            format!("└{}┘", "─".repeat(width as usize - 2)),
            bg,
        );

        for (i, (label, _)) in MENU_ENTRIES.iter().enumerate() {
            let style = if i == self.selected {
                Style::default().bg(theme::SELECTED_BG).fg(theme::ACCENT)
            } else {
                bg
            };
            let line = format!(" {} {:<width$}", i + 1, label, width = width as usize - 5);
            buf.set_string(x + 1, y + 1 + i as u16, line, style);
        }
    }
}
