use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::signal::params::{FilterKind, ModKind};
use crate::ui::layout::SignalLayout;
use crate::ui::theme;
use crate::ui::views::View;
use crate::ui::widgets::scope::{ScopeWidget, Trace};

pub struct SignalView;

impl View for SignalView {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = SignalLayout::new(area);
        render_controls(state, frame, layout.controls);
        render_scope(state, frame, layout.scope);
    }
}

fn render_controls(state: &AppState, frame: &mut Frame, area: Rect) {
    let p = &state.signal;

    let audio = if !state.audio_available {
        ("audio unavailable", theme::DIM)
    } else if state.audio_playing {
        ("PLAYING", theme::STATUS_OK)
    } else {
        ("stopped", theme::DIM)
    };

    let label = Style::default().fg(theme::DIM);
    let value = Style::default().fg(theme::ACCENT);
    let lines = vec![
        Line::styled("SIGNAL LAB", Style::default().fg(theme::FG)),
        Line::default(),
        Line::styled(format!("Wave      {}", p.wave.label()), value),
        Line::styled(format!("Freq      {:.0} Hz", p.frequency), value),
        Line::styled(format!("Amp       {:.1}", p.amplitude), value),
        Line::default(),
        Line::styled(format!("Filter    {}", p.filter.label()), value),
        Line::styled(format!("Cutoff    {:.0} Hz", p.cutoff), value),
        Line::default(),
        Line::styled(format!("Mod       {}", p.modulation.label()), value),
        Line::default(),
        Line::styled(
            format!("Audio     {}", audio.0),
            Style::default().fg(audio.1),
        ),
        Line::default(),
        Line::styled("W/F/O cycle controls", label),
        Line::styled("Space plays the tone", label),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_scope(state: &AppState, frame: &mut Frame, area: Rect) {
    let p = &state.signal;
    let mut traces = vec![Trace {
        data: &state.traces.raw,
        color: theme::TRACE_RAW,
    }];
    if p.filter != FilterKind::None {
        traces.push(Trace {
            data: &state.traces.filtered,
            color: theme::TRACE_FILTERED,
        });
    }
    if p.modulation != ModKind::None {
        traces.push(Trace {
            data: &state.traces.modulated,
            color: theme::TRACE_MODULATED,
        });
    }

    let mut corner_labels = vec![format!("Signal: {}", p.wave.label())];
    if p.filter != FilterKind::None {
        corner_labels.push(format!("Filter: {}", p.filter.label()));
    }
    if p.modulation != ModKind::None {
        corner_labels.push(format!("Mod: {}", p.modulation.label()));
    }

    frame.render_widget(
        ScopeWidget {
            traces,
            corner_labels,
        },
        area,
    );
}
