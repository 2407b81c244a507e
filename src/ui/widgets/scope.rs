use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::ui::theme;

/// One trace with its drawing color; listed back-to-front
pub struct Trace<'a> {
    pub data: &'a [f32],
    pub color: Color,
}

/// Oscilloscope pane: grid, center axis, then each trace as a polyline,
/// every trace autoscaled independently to ±40% of the pane height
pub struct ScopeWidget<'a> {
    pub traces: Vec<Trace<'a>>,
    pub corner_labels: Vec<String>,
}

impl ScopeWidget<'_> {
    fn draw_grid(&self, area: Rect, buf: &mut Buffer) {
        let grid = Style::default().fg(theme::GRID);

        // Vertical lines
        for i in 0..=10u16 {
            let x = area.x + (area.width.saturating_sub(1)) * i / 10;
            for y in area.y..area.y + area.height {
                buf.set_string(x, y, "·", grid);
            }
        }
        // Horizontal lines
        for i in 0..=6u16 {
            let y = area.y + (area.height.saturating_sub(1)) * i / 6;
            for x in area.x..area.x + area.width {
                if buf[(x, y)].symbol() == " " {
                    buf.set_string(x, y, "·", grid);
                }
            }
        }
        // Center axis
        let mid_y = area.y + area.height / 2;
        for x in area.x..area.x + area.width {
            buf.set_string(x, mid_y, "─", Style::default().fg(theme::DIM));
        }
    }

    fn draw_trace(&self, trace: &Trace, area: Rect, buf: &mut Buffer) {
        if trace.data.len() < 2 {
            return;
        }
        let width = area.width as usize;
        let mid_y = (area.y + area.height / 2) as i32;
        let peak = trace
            .data
            .iter()
            .fold(0.0f32, |acc, s| acc.max(s.abs()));
        let scale = if peak > 0.0 {
            (area.height as f32 * 0.4) / peak
        } else {
            1.0
        };
        let style = Style::default().fg(trace.color);

        let denom = width.saturating_sub(1).max(1);
        let mut prev_y: Option<i32> = None;
        for col in 0..width {
            let idx = col * (trace.data.len() - 1) / denom;
            let value = trace.data[idx.min(trace.data.len() - 1)];
            let y = mid_y - (value * scale).round() as i32;
            let x = area.x + col as u16;

            if y >= area.y as i32 && y < (area.y + area.height) as i32 {
                buf.set_string(x, y as u16, "●", style);
            }

            // Connect vertical jumps so square edges read as lines
            if let Some(py) = prev_y {
                let (lo, hi) = if py < y { (py, y) } else { (y, py) };
                for fill_y in (lo + 1)..hi {
                    if fill_y >= area.y as i32 && fill_y < (area.y + area.height) as i32 {
                        buf.set_string(x, fill_y as u16, "│", style);
                    }
                }
            }
            prev_y = Some(y);
        }
    }
}

impl Widget for ScopeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 5 {
            return;
        }

        self.draw_grid(area, buf);
        for trace in &self.traces {
            self.draw_trace(trace, area, buf);
        }

        // Legend, top-right, like the canvas corner labels
        let mut y = area.y;
        for label in &self.corner_labels {
            let x = (area.x + area.width).saturating_sub(label.len() as u16 + 1);
            buf.set_string(x, y, label, Style::default().fg(theme::FG));
            y += 1;
        }

        // Axis captions
        if area.height > 2 {
            buf.set_string(
                area.x + 1,
                area.y + area.height - 1,
                "Time (s)",
                Style::default().fg(theme::DIM),
            );
        }
    }
}
