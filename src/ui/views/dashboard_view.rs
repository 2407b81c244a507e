use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::sensors::SensorRecord;
use crate::ui::layout::{sensor_cells, DashboardLayout};
use crate::ui::theme;
use crate::ui::views::View;
use crate::ui::widgets::sensor_chart::SensorChartWidget;

pub struct DashboardView;

impl View for DashboardView {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = DashboardLayout::new(area);

        // Toolbar: next sensor kind and stream state
        let stream = if state.dashboard.is_streaming() {
            "STREAMING"
        } else {
            "STOPPED"
        };
        let toolbar = format!(
            "Add: {}   Stream: {}   Sensors: {}",
            state.sensor_kind.label(),
            stream,
            state.dashboard.sensors().len()
        );
        frame.render_widget(
            Paragraph::new(toolbar).style(Style::default().fg(theme::FG)),
            layout.toolbar,
        );

        if state.dashboard.is_empty() {
            render_placeholder(frame, layout.grid);
            return;
        }

        let cells = sensor_cells(layout.grid, state.dashboard.sensors().len());
        for (i, (sensor, cell)) in state
            .dashboard
            .sensors()
            .iter()
            .zip(cells.iter())
            .enumerate()
        {
            render_sensor(frame, sensor, *cell, i == state.selected_sensor);
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .split(area);
    frame.render_widget(
        Paragraph::new("Add your first sensor to start monitoring  [A]")
            .style(Style::default().fg(theme::DIM))
            .centered(),
        chunks[1],
    );
}

fn render_sensor(frame: &mut Frame, sensor: &SensorRecord, area: Rect, selected: bool) {
    if area.width < 10 || area.height < 5 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Current value
            Constraint::Min(2),    // Mini chart
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let title_style = if selected {
        Style::default().fg(theme::ACCENT).bg(theme::SELECTED_BG)
    } else {
        Style::default().fg(theme::FG)
    };
    frame.render_widget(
        Paragraph::new(format!(" {} #{}", sensor.kind.label(), sensor.id)).style(title_style),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(format!(" {:.1} {}", sensor.current, sensor.kind.unit()))
            .style(Style::default().fg(theme::ACCENT)),
        chunks[1],
    );

    let series: Vec<f32> = sensor.series.iter().cloned().collect();
    frame.render_widget(SensorChartWidget { data: &series }, chunks[2]);

    let status = match sensor.last_update {
        Some(at) => format!(" Active · updated {:.0}s", at),
        None => " Waiting for stream".to_string(),
    };
    let status_style = if sensor.last_update.is_some() {
        Style::default().fg(theme::STATUS_OK)
    } else {
        Style::default().fg(theme::DIM)
    };
    frame.render_widget(Paragraph::new(status).style(status_style), chunks[3]);
}
