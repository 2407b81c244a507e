use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme;

/// Two-row footer: an optional alert line above the key hints
pub struct FooterWidget<'a> {
    pub hints: Vec<(&'static str, &'static str)>,
    pub alert: Option<&'a str>,
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        if let Some(alert) = self.alert {
            buf.set_string(area.x + 1, area.y, alert, Style::default().fg(theme::ALERT));
        }

        let hint_y = if area.height > 1 {
            area.y + area.height - 1
        } else {
            area.y
        };

        let mut x = area.x + 1;
        for (key, desc) in &self.hints {
            if x + (key.len() + desc.len() + 3) as u16 > area.x + area.width {
                break;
            }
            buf.set_string(x, hint_y, key, Style::default().fg(theme::ACCENT));
            x += key.len() as u16;
            buf.set_string(x, hint_y, ":", Style::default().fg(theme::DIM));
            x += 1;
            buf.set_string(x, hint_y, desc, Style::default().fg(theme::FG));
            x += desc.len() as u16 + 2;
        }
    }
}
