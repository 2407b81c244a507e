mod app;
mod audio;
mod constants;
mod input;
mod messages;
mod sensors;
mod signal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{AppMode, AppState, MENU_ENTRIES};
use crate::audio::engine::AudioEngine;
use crate::audio::voice::VoiceParams;
use crate::constants::*;
use crate::messages::*;
use crate::sensors::generator::RandNoise;
use crate::ui::views::dashboard_view::DashboardView;
use crate::ui::views::signal_view::SignalView;
use crate::ui::views::View;
use crate::ui::widgets::keyboard_hint::FooterWidget;
use crate::ui::widgets::mode_tabs::ModeTabsWidget;
use crate::ui::widgets::nav_menu::NavMenuWidget;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Setup channels ---
    let (audio_cmd_tx, audio_cmd_rx): (Sender<AudioCmd>, Receiver<AudioCmd>) =
        bounded(CHANNEL_CAPACITY);
    let (audio_msg_tx, audio_msg_rx): (Sender<AudioMsg>, Receiver<AudioMsg>) =
        bounded(CHANNEL_CAPACITY);

    // --- Audio engine setup ---
    let engine = AudioEngine::new();
    let _output_stream = match engine.start(audio_cmd_rx, audio_msg_tx) {
        Ok(stream) => Some(stream),
        Err(e) => {
            eprintln!("Warning: Audio engine failed to start: {}", e);
            eprintln!("Running in UI-only mode (no audio preview).");
            None
        }
    };

    // Keep the stream alive and run UI
    run_ui_loop(audio_cmd_tx, audio_msg_rx, _output_stream.is_some())
}

fn run_ui_loop(
    audio_cmd_tx: Sender<AudioCmd>,
    audio_msg_rx: Receiver<AudioMsg>,
    audio_available: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // --- Terminal setup ---
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // --- App state ---
    let mut state = AppState::new(audio_available);
    let mut noise = RandNoise;

    let frame_duration = Duration::from_millis(1000 / UI_FPS);
    let started = Instant::now();
    let mut last_sensor_tick = Instant::now();
    // Resize events are debounced: redraw only after a quiet period
    let mut pending_resize: Option<Instant> = None;

    // --- Main loop ---
    loop {
        let frame_start = Instant::now();

        // --- Process audio messages (non-blocking) ---
        while let Ok(msg) = audio_msg_rx.try_recv() {
            match msg {
                AudioMsg::Finished => state.audio_playing = false,
            }
        }

        // --- Process terminal events ---
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(evt) = input::handle_key(key, state.mode, state.menu.open) {
                        handle_ui_event(&mut state, evt, &audio_cmd_tx, &started, &mut noise);
                    }
                }
                Event::Resize(_, _) => {
                    pending_resize = Some(Instant::now());
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }

        // --- Sensor generation tick, once per second while streaming ---
        if state.dashboard.is_streaming()
            && last_sensor_tick.elapsed().as_secs_f64() >= SENSOR_TICK_SECS
        {
            last_sensor_tick = Instant::now();
            state
                .dashboard
                .tick(started.elapsed().as_secs_f64(), &mut noise);
        }

        // --- Debounced resize: full clear + redraw after the quiet period ---
        if let Some(at) = pending_resize {
            if at.elapsed() >= Duration::from_millis(RESIZE_DEBOUNCE_MS) {
                pending_resize = None;
                terminal.clear()?;
            }
        }

        // --- Render ---
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = ui::layout::ScreenLayout::new(area);

            frame.render_widget(
                ModeTabsWidget {
                    current: state.mode,
                    menu_open: state.menu.open,
                },
                layout.header,
            );

            match state.mode {
                AppMode::Dashboard => DashboardView.render(&state, frame, layout.main),
                AppMode::Signal => SignalView.render(&state, frame, layout.main),
            }

            if state.menu.open {
                frame.render_widget(
                    NavMenuWidget {
                        selected: state.menu.selected,
                    },
                    layout.main,
                );
            }

            let hints = input::key_hints(state.mode, state.menu.open);
            frame.render_widget(
                FooterWidget {
                    hints,
                    alert: state.alert.as_deref(),
                },
                layout.footer,
            );
        })?;

        // --- Frame rate limiting ---
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    // --- Cleanup: stop the tone, restore the terminal; all best-effort ---
    let _ = audio_cmd_tx.try_send(AudioCmd::Stop);
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_ui_event(
    state: &mut AppState,
    event: UiEvent,
    audio_cmd_tx: &Sender<AudioCmd>,
    started: &Instant,
    noise: &mut RandNoise,
) {
    match event {
        UiEvent::Quit => {
            state.should_quit = true;
        }
        UiEvent::CycleMode => {
            state.mode = state.mode.next();
        }
        UiEvent::ToggleMenu => {
            state.menu.toggle();
        }
        UiEvent::MenuSelect(index) => {
            if let Some((_, mode)) = MENU_ENTRIES.get(index) {
                state.mode = *mode;
                state.menu.selected = index;
            }
            state.menu.close();
        }
        UiEvent::MenuDismiss => {
            state.menu.close();
        }
        UiEvent::AddSensor => {
            state.dashboard.add_sensor(
                state.sensor_kind,
                started.elapsed().as_secs_f64(),
                noise,
            );
        }
        UiEvent::RemoveSelectedSensor => {
            if let Some(sensor) = state.dashboard.sensors().get(state.selected_sensor) {
                let id = sensor.id;
                state.dashboard.remove_sensor(id);
                state.clamp_sensor_selection();
            }
        }
        UiEvent::CycleSensorKind => {
            state.sensor_kind = state.sensor_kind.next();
        }
        UiEvent::SelectSensor(index) => {
            if index < state.dashboard.sensors().len() {
                state.selected_sensor = index;
            }
        }
        UiEvent::SelectPrevSensor => {
            state.selected_sensor = state.selected_sensor.saturating_sub(1);
        }
        UiEvent::SelectNextSensor => {
            state.selected_sensor += 1;
            state.clamp_sensor_selection();
        }
        UiEvent::ToggleStream => {
            state.dashboard.toggle_stream();
        }
        UiEvent::ClearDashboard => {
            state.dashboard.clear();
            state.selected_sensor = 0;
        }
        UiEvent::CycleWave => {
            state.signal.wave = state.signal.wave.next();
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::CycleFilter => {
            state.signal.filter = state.signal.filter.next();
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::CycleModulation => {
            state.signal.modulation = state.signal.modulation.next();
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::AdjustFrequency(delta) => {
            state.signal.adjust_frequency(delta);
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::AdjustAmplitude(delta) => {
            state.signal.adjust_amplitude(delta);
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::AdjustCutoff(delta) => {
            state.signal.adjust_cutoff(delta);
            signal_changed(state, audio_cmd_tx);
        }
        UiEvent::ToggleAudio => {
            if !state.audio_available {
                state.alert = Some("Audio preview is not available on this device".to_string());
                return;
            }
            if state.audio_playing {
                state.audio_playing = false;
                let _ = audio_cmd_tx.try_send(AudioCmd::Stop);
            } else {
                state.audio_playing = true;
                let params = VoiceParams::from_signal(&state.signal);
                let _ = audio_cmd_tx.try_send(AudioCmd::Start(params));
            }
        }
    }
}

/// Every control change rebuilds the traces and retunes a live tone
fn signal_changed(state: &mut AppState, audio_cmd_tx: &Sender<AudioCmd>) {
    state.refresh_traces();
    if state.audio_playing {
        let params = VoiceParams::from_signal(&state.signal);
        let _ = audio_cmd_tx.try_send(AudioCmd::Start(params));
    }
}
