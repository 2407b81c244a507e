use crate::sensors::dashboard::Dashboard;
use crate::sensors::SensorKind;
use crate::signal::params::SignalParams;
use crate::signal::TraceSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Dashboard,
    Signal,
}

impl AppMode {
    pub fn next(self) -> Self {
        match self {
            AppMode::Dashboard => AppMode::Signal,
            AppMode::Signal => AppMode::Dashboard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Dashboard => "DASHBOARD",
            AppMode::Signal => "SIGNAL",
        }
    }
}

/// Collapsible navigation menu; an overlay over the current view
pub struct NavMenu {
    pub open: bool,
    pub selected: usize,
}

pub const MENU_ENTRIES: [(&str, AppMode); 2] = [
    ("IoT Dashboard", AppMode::Dashboard),
    ("Signal Lab", AppMode::Signal),
];

impl NavMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// All mutable state the widgets share, owned in one place instead of
/// scattered module-level globals
pub struct AppState {
    pub mode: AppMode,
    pub menu: NavMenu,
    // Dashboard
    pub dashboard: Dashboard,
    pub sensor_kind: SensorKind,
    pub selected_sensor: usize,
    // Signal sandbox
    pub signal: SignalParams,
    pub traces: TraceSet,
    pub audio_playing: bool,
    pub audio_available: bool,
    /// One-line user-facing notice (audio failures and the like)
    pub alert: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(audio_available: bool) -> Self {
        let signal = SignalParams::default();
        let traces = TraceSet::from_params(&signal);
        Self {
            mode: AppMode::Dashboard,
            menu: NavMenu::new(),
            dashboard: Dashboard::new(),
            sensor_kind: SensorKind::Temperature,
            selected_sensor: 0,
            signal,
            traces,
            audio_playing: false,
            audio_available,
            alert: None,
            should_quit: false,
        }
    }

    /// Rebuild all three traces from the current controls
    pub fn refresh_traces(&mut self) {
        self.traces = TraceSet::from_params(&self.signal);
    }

    /// Keep the sensor selection on a valid index after removals
    pub fn clamp_sensor_selection(&mut self) {
        let count = self.dashboard.sensors().len();
        if count == 0 {
            self.selected_sensor = 0;
        } else if self.selected_sensor >= count {
            self.selected_sensor = count - 1;
        }
    }
}
