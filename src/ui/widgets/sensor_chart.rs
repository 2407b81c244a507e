use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme;

/// Mini line chart for one sensor's sliding window, min/max autoscaled
pub struct SensorChartWidget<'a> {
    pub data: &'a [f32],
}

impl Widget for SensorChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }

        // Horizontal grid rows
        let grid = Style::default().fg(theme::GRID);
        for i in 0..=4u16 {
            let y = area.y + (area.height.saturating_sub(1)) * i / 4;
            for x in area.x..area.x + area.width {
                buf.set_string(x, y, "·", grid);
            }
        }

        if self.data.len() < 2 {
            return;
        }

        let min = self.data.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let range = if max > min { max - min } else { 1.0 };

        let width = area.width as usize;
        let height = area.height as usize;
        let denom = width.saturating_sub(1).max(1);
        let line = Style::default().fg(theme::ACCENT);
        let glow = Style::default().fg(theme::GRID);

        let mut prev_y: Option<i32> = None;
        for col in 0..width {
            let idx = col * (self.data.len() - 1) / denom;
            let value = self.data[idx];
            let norm = (value - min) / range;
            let y = area.y as i32 + (height as i32 - 1) - (norm * (height - 1) as f32).round() as i32;
            let x = area.x + col as u16;

            // Soft halo above and below the line point
            for dy in [-1i32, 1] {
                let gy = y + dy;
                if gy >= area.y as i32 && gy < (area.y + area.height) as i32 {
                    buf.set_string(x, gy as u16, "░", glow);
                }
            }
            buf.set_string(x, y as u16, "●", line);

            if let Some(py) = prev_y {
                let (lo, hi) = if py < y { (py, y) } else { (y, py) };
                for fill_y in (lo + 1)..hi {
                    buf.set_string(x, fill_y as u16, "│", line);
                }
            }
            prev_y = Some(y);
        }
    }
}
