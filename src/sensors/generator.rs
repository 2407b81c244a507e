use rand::Rng;

use crate::sensors::SensorKind;

/// Uniform noise in [-0.5, 0.5), substitutable in tests
pub trait NoiseSource {
    fn sample(&mut self) -> f32;
}

/// Production noise backed by the thread RNG
pub struct RandNoise;

impl NoiseSource for RandNoise {
    fn sample(&mut self) -> f32 {
        rand::thread_rng().gen::<f32>() - 0.5
    }
}

/// Fabricate one reading: range midpoint, a slow sine drift on a 10 s period,
/// and uniform jitter, clamped to the sensor's range.
pub fn reading(kind: SensorKind, elapsed_secs: f64, noise: &mut dyn NoiseSource) -> f32 {
    let (min, max) = kind.range();
    let variation = (max - min) * 0.1;
    let base = (max + min) / 2.0;
    let drift = (elapsed_secs / 10.0).sin() as f32 * variation * 0.5;
    let value = base + noise.sample() * variation + drift;
    value.clamp(min, max)
}

#[cfg(test)]
pub mod test_support {
    use super::NoiseSource;

    /// Replays a fixed sequence of noise values, cycling when exhausted
    pub struct StubNoise {
        values: Vec<f32>,
        index: usize,
    }

    impl StubNoise {
        pub fn new(values: Vec<f32>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl NoiseSource for StubNoise {
        fn sample(&mut self) -> f32 {
            let v = self.values[self.index % self.values.len()];
            self.index += 1;
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubNoise;
    use super::*;

    #[test]
    fn readings_stay_in_range_across_many_random_ticks() {
        let mut noise = RandNoise;
        let kinds = [
            SensorKind::Temperature,
            SensorKind::Humidity,
            SensorKind::Pressure,
            SensorKind::Light,
        ];
        for kind in kinds {
            let (min, max) = kind.range();
            for i in 0..1000 {
                let value = reading(kind, i as f64, &mut noise);
                assert!(value >= min && value <= max, "{:?}: {}", kind, value);
            }
        }
    }

    #[test]
    fn zero_noise_at_t_zero_gives_the_midpoint() {
        let mut noise = StubNoise::new(vec![0.0]);
        let value = reading(SensorKind::Temperature, 0.0, &mut noise);
        assert!((value - 30.0).abs() < 1e-6);
    }

    #[test]
    fn extreme_noise_is_clamped() {
        // Noise far outside [-0.5, 0.5) still cannot escape the range
        let mut noise = StubNoise::new(vec![100.0]);
        let value = reading(SensorKind::Pressure, 0.0, &mut noise);
        assert_eq!(value, 105.0);
    }
}
