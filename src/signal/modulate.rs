use std::f32::consts::TAU;

use crate::signal::params::ModKind;

/// Carrier runs at five times the base frequency
pub fn carrier_freq(base_freq: f32) -> f32 {
    base_freq * 5.0
}

/// Amplitude or phase modulation against a synthesized carrier, in place.
///
/// `sample_rate` must match the rate the buffer was generated at so the
/// carrier lines up with the signal's time axis.
pub fn apply_modulation(buffer: &mut [f32], kind: ModKind, base_freq: f32, sample_rate: u32) {
    if kind == ModKind::None {
        return;
    }
    let carrier = carrier_freq(base_freq);
    for (i, sample) in buffer.iter_mut().enumerate() {
        let t = i as f32 / sample_rate as f32;
        let phase = TAU * carrier * t;
        *sample = match kind {
            ModKind::Am => (1.0 + 0.5 * *sample) * phase.sin(),
            ModKind::Fm => (phase + 0.5 * *sample).sin(),
            ModKind::None => unreachable!(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_leaves_buffer_unchanged() {
        let original = vec![0.1, 0.9, -0.4];
        let mut buf = original.clone();
        apply_modulation(&mut buf, ModKind::None, 5.0, 400);
        assert_eq!(buf, original);
    }

    #[test]
    fn fm_output_is_bounded_by_one() {
        let mut buf: Vec<f32> = (0..800).map(|i| ((i as f32) * 0.01).sin()).collect();
        apply_modulation(&mut buf, ModKind::Fm, 5.0, 400);
        for s in &buf {
            assert!(s.abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn am_envelope_follows_input() {
        // With input x in [-1, 1] the AM product stays within (1 + 0.5|x|)
        let mut buf: Vec<f32> = (0..800).map(|i| ((i as f32) * 0.05).sin()).collect();
        apply_modulation(&mut buf, ModKind::Am, 5.0, 400);
        for s in &buf {
            assert!(s.abs() <= 1.5 + 1e-6);
        }
    }

    #[test]
    fn am_carrier_is_zero_at_t_zero() {
        let mut buf = vec![1.0, 1.0];
        apply_modulation(&mut buf, ModKind::Am, 5.0, 400);
        // sin(0) = 0 regardless of the input sample
        assert!(buf[0].abs() < 1e-6);
    }
}
