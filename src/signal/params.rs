#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl WaveKind {
    pub fn next(self) -> Self {
        match self {
            WaveKind::Sine => WaveKind::Square,
            WaveKind::Square => WaveKind::Triangle,
            WaveKind::Triangle => WaveKind::Sawtooth,
            WaveKind::Sawtooth => WaveKind::Sine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WaveKind::Sine => "SINE",
            WaveKind::Square => "SQUARE",
            WaveKind::Triangle => "TRIANGLE",
            WaveKind::Sawtooth => "SAWTOOTH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    None,
    LowPass,
    HighPass,
}

impl FilterKind {
    pub fn next(self) -> Self {
        match self {
            FilterKind::None => FilterKind::LowPass,
            FilterKind::LowPass => FilterKind::HighPass,
            FilterKind::HighPass => FilterKind::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::None => "NONE",
            FilterKind::LowPass => "LOWPASS",
            FilterKind::HighPass => "HIGHPASS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModKind {
    None,
    Am,
    Fm,
}

impl ModKind {
    pub fn next(self) -> Self {
        match self {
            ModKind::None => ModKind::Am,
            ModKind::Am => ModKind::Fm,
            ModKind::Fm => ModKind::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModKind::None => "NONE",
            ModKind::Am => "AM",
            ModKind::Fm => "FM",
        }
    }
}

/// All sandbox controls in one typed struct; the signal math never reads UI state
#[derive(Debug, Clone, Copy)]
pub struct SignalParams {
    pub wave: WaveKind,
    pub frequency: f32,
    pub amplitude: f32,
    pub filter: FilterKind,
    pub cutoff: f32,
    pub modulation: ModKind,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            wave: WaveKind::Sine,
            frequency: 5.0,
            amplitude: 1.0,
            filter: FilterKind::None,
            cutoff: 10.0,
            modulation: ModKind::None,
        }
    }
}

impl SignalParams {
    pub fn adjust_frequency(&mut self, delta: f32) {
        self.frequency = (self.frequency + delta).clamp(1.0, 20.0);
    }

    pub fn adjust_amplitude(&mut self, delta: f32) {
        self.amplitude = (self.amplitude + delta).clamp(0.1, 2.0);
    }

    pub fn adjust_cutoff(&mut self, delta: f32) {
        self.cutoff = (self.cutoff + delta).clamp(1.0, 40.0);
    }
}
