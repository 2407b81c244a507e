use crate::signal::params::FilterKind;

/// Scalar attenuation factor for a pure tone of `signal_freq` against `cutoff`.
///
/// This is the single-factor filter model: the whole buffer is one tone, so
/// the filter's effect reduces to one gain multiplier in [0, 1].
pub fn attenuation(kind: FilterKind, cutoff: f32, signal_freq: f32) -> f32 {
    if cutoff <= 0.0 || signal_freq <= 0.0 {
        return 1.0;
    }
    let ratio = signal_freq / cutoff;
    match kind {
        FilterKind::None => 1.0,
        FilterKind::LowPass => {
            if ratio <= 1.0 {
                1.0
            } else {
                (-(ratio - 1.0) * 2.0).exp()
            }
        }
        FilterKind::HighPass => {
            if ratio >= 1.0 {
                1.0
            } else {
                (-(1.0 / ratio - 1.0) * 2.0).exp()
            }
        }
    }
}

/// Scale every sample by the attenuation factor in place
pub fn apply_filter(buffer: &mut [f32], kind: FilterKind, cutoff: f32, signal_freq: f32) {
    let factor = attenuation(kind, cutoff, signal_freq);
    if factor == 1.0 {
        return;
    }
    for sample in buffer.iter_mut() {
        *sample *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        let original = vec![0.3, -0.7, 1.0, -1.0, 0.0];
        let mut buf = original.clone();
        apply_filter(&mut buf, FilterKind::None, 5.0, 20.0);
        assert_eq!(buf, original);
    }

    #[test]
    fn lowpass_passes_at_cutoff_boundary() {
        assert_eq!(attenuation(FilterKind::LowPass, 10.0, 10.0), 1.0);
    }

    #[test]
    fn lowpass_attenuates_above_cutoff() {
        // ratio 2 ⇒ exp(-2)
        let a = attenuation(FilterKind::LowPass, 5.0, 10.0);
        assert!((a - (-2.0f32).exp()).abs() < 1e-6);
        assert!(a < 1.0);
    }

    #[test]
    fn lowpass_passes_below_cutoff() {
        assert_eq!(attenuation(FilterKind::LowPass, 10.0, 2.0), 1.0);
    }

    #[test]
    fn highpass_mirrors_lowpass() {
        assert_eq!(attenuation(FilterKind::HighPass, 5.0, 10.0), 1.0);
        // ratio 0.5 ⇒ exp(-(1/0.5 - 1)·2) = exp(-2)
        let a = attenuation(FilterKind::HighPass, 10.0, 5.0);
        assert!((a - (-2.0f32).exp()).abs() < 1e-6);
    }

    #[test]
    fn attenuation_scales_every_sample() {
        let mut buf = vec![1.0, -0.5, 0.25];
        let factor = attenuation(FilterKind::LowPass, 5.0, 10.0);
        apply_filter(&mut buf, FilterKind::LowPass, 5.0, 10.0);
        assert!((buf[0] - factor).abs() < 1e-6);
        assert!((buf[1] + 0.5 * factor).abs() < 1e-6);
        assert!((buf[2] - 0.25 * factor).abs() < 1e-6);
    }

    #[test]
    fn degenerate_frequencies_pass_through() {
        assert_eq!(attenuation(FilterKind::LowPass, 0.0, 10.0), 1.0);
        assert_eq!(attenuation(FilterKind::HighPass, 10.0, 0.0), 1.0);
    }
}
