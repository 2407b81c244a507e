use crate::constants::{AUDIBLE_FREQ_SCALE, PREVIEW_GAIN, SAMPLE_RATE};
use crate::signal::filter;
use crate::signal::generate::waveform_at;
use crate::signal::params::{SignalParams, WaveKind};

/// Everything the audio thread needs to voice the current sandbox settings
#[derive(Debug, Clone, Copy)]
pub struct VoiceParams {
    pub wave: WaveKind,
    /// Oscillator frequency in Hz, already scaled into the audible range
    pub frequency: f32,
    /// Output gain, already scaled down for comfortable listening
    pub gain: f32,
}

impl VoiceParams {
    /// Mirror the sandbox controls into an audible tone: frequency scaled up,
    /// amplitude scaled down and further reduced by the filter attenuation
    pub fn from_signal(params: &SignalParams) -> Self {
        let att = filter::attenuation(params.filter, params.cutoff, params.frequency);
        Self {
            wave: params.wave,
            frequency: params.frequency * AUDIBLE_FREQ_SCALE,
            gain: params.amplitude * PREVIEW_GAIN * att,
        }
    }
}

/// Phase-accumulating oscillator; one live voice is one audible tone
pub struct Voice {
    params: VoiceParams,
    phase: f64,
}

impl Voice {
    pub fn new(params: VoiceParams) -> Self {
        Self { params, phase: 0.0 }
    }

    pub fn next_sample(&mut self) -> f32 {
        // waveform_at expects t with phase = f·t; feed it normalized phase
        let sample = waveform_at(self.params.wave, 1.0, self.phase as f32);
        self.phase += self.params.frequency as f64 / SAMPLE_RATE as f64;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        sample * self.params.gain
    }
}

/// Holds at most one live voice. Starting a new tone always replaces the
/// previous one; stopping twice is harmless.
pub struct VoiceSlot {
    voice: Option<Voice>,
}

impl VoiceSlot {
    pub fn new() -> Self {
        Self { voice: None }
    }

    pub fn start(&mut self, params: VoiceParams) {
        self.voice = Some(Voice::new(params));
    }

    pub fn stop(&mut self) {
        self.voice = None;
    }

    pub fn is_active(&self) -> bool {
        self.voice.is_some()
    }

    pub fn next_sample(&mut self) -> f32 {
        match &mut self.voice {
            Some(voice) => voice.next_sample(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::params::{FilterKind, ModKind};

    fn test_params() -> VoiceParams {
        VoiceParams {
            wave: WaveKind::Sine,
            frequency: 250.0,
            gain: 0.1,
        }
    }

    #[test]
    fn samples_stay_within_gain() {
        let mut voice = Voice::new(test_params());
        for _ in 0..4410 {
            assert!(voice.next_sample().abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn from_signal_scales_frequency_and_gain() {
        let signal = SignalParams {
            wave: WaveKind::Square,
            frequency: 5.0,
            amplitude: 1.0,
            filter: FilterKind::None,
            cutoff: 10.0,
            modulation: ModKind::None,
        };
        let params = VoiceParams::from_signal(&signal);
        assert_eq!(params.frequency, 250.0);
        assert!((params.gain - 0.1).abs() < 1e-6);
    }

    #[test]
    fn filter_attenuation_reduces_preview_gain() {
        let signal = SignalParams {
            wave: WaveKind::Sine,
            frequency: 10.0,
            amplitude: 1.0,
            filter: FilterKind::LowPass,
            cutoff: 5.0,
            modulation: ModKind::None,
        };
        let params = VoiceParams::from_signal(&signal);
        assert!(params.gain < 0.1);
    }

    #[test]
    fn slot_replaces_the_previous_voice_on_start() {
        let mut slot = VoiceSlot::new();
        slot.start(test_params());
        slot.start(VoiceParams {
            frequency: 500.0,
            ..test_params()
        });
        assert!(slot.is_active());
        slot.stop();
        assert!(!slot.is_active());
    }

    #[test]
    fn double_stop_leaves_no_dangling_voice() {
        let mut slot = VoiceSlot::new();
        slot.start(test_params());
        slot.stop();
        slot.stop();
        assert!(!slot.is_active());
        assert_eq!(slot.next_sample(), 0.0);

        // Toggle a second time for good measure
        slot.start(test_params());
        slot.stop();
        assert!(!slot.is_active());
    }
}
