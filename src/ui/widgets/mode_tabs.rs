use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::app::AppMode;
use crate::ui::theme;

/// Header nav tabs, one per mode
pub struct ModeTabsWidget {
    pub current: AppMode,
    pub menu_open: bool,
}

impl Widget for ModeTabsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 30 || area.height < 1 {
            return;
        }

        let modes = [AppMode::Dashboard, AppMode::Signal];
        let mut x = area.x + 1;

        let menu_style = if self.menu_open {
            Style::default().fg(theme::BG).bg(theme::ACCENT)
        } else {
            Style::default().fg(theme::DIM)
        };
        buf.set_string(x, area.y, " ☰ ", menu_style);
        x += 4;

        for mode in &modes {
            let is_current = *mode == self.current;
            let label = format!(" {} ", mode.label());

            let style = if is_current {
                Style::default().fg(theme::BG).bg(theme::ACCENT)
            } else {
                Style::default().fg(theme::DIM)
            };

            buf.set_string(x, area.y, &label, style);
            x += label.len() as u16 + 1;
        }
    }
}
