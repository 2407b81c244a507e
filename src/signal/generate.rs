use std::f32::consts::TAU;

use crate::signal::params::{SignalParams, WaveKind};

/// Evaluate one waveform sample at time `t` for unit amplitude
pub fn waveform_at(wave: WaveKind, frequency: f32, t: f32) -> f32 {
    let phase = TAU * frequency * t;
    match wave {
        WaveKind::Sine => phase.sin(),
        WaveKind::Square => phase.sin().signum(),
        WaveKind::Triangle => (2.0 / std::f32::consts::PI) * phase.sin().asin(),
        WaveKind::Sawtooth => {
            let ft = frequency * t;
            2.0 * (ft - (ft + 0.5).floor())
        }
    }
}

/// Closed-form waveform synthesis: `sample_rate * duration` samples at `t = i / sample_rate`
pub fn generate(params: &SignalParams, sample_rate: u32, duration: u32) -> Vec<f32> {
    let count = (sample_rate * duration) as usize;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / sample_rate as f32;
        samples.push(params.amplitude * waveform_at(params.wave, params.frequency, t));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::params::{FilterKind, ModKind};

    fn params(wave: WaveKind, frequency: f32, amplitude: f32) -> SignalParams {
        SignalParams {
            wave,
            frequency,
            amplitude,
            filter: FilterKind::None,
            cutoff: 10.0,
            modulation: ModKind::None,
        }
    }

    #[test]
    fn buffer_length_is_rate_times_duration() {
        let buf = generate(&params(WaveKind::Sine, 5.0, 1.0), 1000, 2);
        assert_eq!(buf.len(), 2000);
    }

    #[test]
    fn sine_starts_at_zero_and_peaks_at_quarter_period() {
        // 5 Hz at 1 kHz: quarter period is t = 0.05 s, sample index 50
        let buf = generate(&params(WaveKind::Sine, 5.0, 2.0), 1000, 2);
        assert!(buf[0].abs() < 1e-9);
        assert!((buf[50] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn all_waves_stay_within_amplitude() {
        let waves = [
            WaveKind::Sine,
            WaveKind::Square,
            WaveKind::Triangle,
            WaveKind::Sawtooth,
        ];
        for wave in waves {
            let amp = 1.5;
            let buf = generate(&params(wave, 7.0, amp), 400, 2);
            for (i, s) in buf.iter().enumerate() {
                assert!(
                    s.abs() <= amp + 1e-5,
                    "{:?} sample {} out of range: {}",
                    wave,
                    i,
                    s
                );
            }
        }
    }

    #[test]
    fn square_is_full_scale_off_the_zero_crossings() {
        let buf = generate(&params(WaveKind::Square, 5.0, 1.0), 1000, 1);
        // Sample inside the first half cycle
        assert_eq!(buf[25], 1.0);
        // Sample inside the second half cycle
        assert_eq!(buf[125], -1.0);
    }

    #[test]
    fn sawtooth_resets_once_per_period() {
        // 1 Hz at 100 Hz sample rate: ramp from 0 up to +1, jump to -1 at mid period
        let buf = generate(&params(WaveKind::Sawtooth, 1.0, 1.0), 100, 1);
        assert!(buf[0].abs() < 1e-6);
        assert!(buf[25] > 0.0 && buf[25] < 1.0);
        assert!(buf[75] < 0.0);
    }
}
