use crate::audio::voice::VoiceParams;

/// Messages from keyboard input → app controller
#[derive(Debug, Clone)]
pub enum UiEvent {
    CycleMode,
    ToggleMenu,
    /// Pick a menu entry (nav link); switches mode and closes the menu
    MenuSelect(usize),
    /// Any other key while the menu is open closes it, like a click outside
    MenuDismiss,
    // Dashboard
    AddSensor,
    RemoveSelectedSensor,
    CycleSensorKind,
    SelectSensor(usize),
    SelectPrevSensor,
    SelectNextSensor,
    ToggleStream,
    ClearDashboard,
    // Signal sandbox
    CycleWave,
    CycleFilter,
    CycleModulation,
    AdjustFrequency(f32),
    AdjustAmplitude(f32),
    AdjustCutoff(f32),
    ToggleAudio,
    Quit,
}

/// Messages from UI thread → audio callback
#[derive(Debug, Clone)]
pub enum AudioCmd {
    /// Start (or retune) the preview voice; replaces any live voice
    Start(VoiceParams),
    Stop,
}

/// Messages from audio callback → UI thread
#[derive(Debug, Clone)]
pub enum AudioMsg {
    /// The auto-stop timer fired; the UI should reset its toggle
    Finished,
}
