pub mod filter;
pub mod generate;
pub mod modulate;
pub mod params;

use crate::constants::{TRACE_SAMPLE_RATE, TRACE_SECONDS};
use crate::signal::params::SignalParams;

/// The three scope traces, each rebuilt wholesale from the current params
pub struct TraceSet {
    pub raw: Vec<f32>,
    pub filtered: Vec<f32>,
    pub modulated: Vec<f32>,
}

impl TraceSet {
    pub fn from_params(params: &SignalParams) -> Self {
        let raw = generate::generate(params, TRACE_SAMPLE_RATE, TRACE_SECONDS);
        let mut filtered = raw.clone();
        filter::apply_filter(
            &mut filtered,
            params.filter,
            params.cutoff,
            params.frequency,
        );
        let mut modulated = filtered.clone();
        modulate::apply_modulation(
            &mut modulated,
            params.modulation,
            params.frequency,
            TRACE_SAMPLE_RATE,
        );
        Self {
            raw,
            filtered,
            modulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRACE_SAMPLES;
    use crate::signal::params::{FilterKind, ModKind};

    #[test]
    fn traces_have_the_fixed_length() {
        let traces = TraceSet::from_params(&SignalParams::default());
        assert_eq!(traces.raw.len(), TRACE_SAMPLES);
        assert_eq!(traces.filtered.len(), TRACE_SAMPLES);
        assert_eq!(traces.modulated.len(), TRACE_SAMPLES);
    }

    #[test]
    fn default_params_pass_filter_and_modulation_through() {
        let traces = TraceSet::from_params(&SignalParams::default());
        assert_eq!(traces.raw, traces.filtered);
        assert_eq!(traces.filtered, traces.modulated);
    }

    #[test]
    fn filtered_trace_derives_from_raw() {
        let params = SignalParams {
            filter: FilterKind::LowPass,
            cutoff: 2.5,
            frequency: 5.0,
            modulation: ModKind::None,
            ..SignalParams::default()
        };
        let traces = TraceSet::from_params(&params);
        let factor = crate::signal::filter::attenuation(params.filter, params.cutoff, 5.0);
        for (raw, filtered) in traces.raw.iter().zip(traces.filtered.iter()) {
            assert!((raw * factor - filtered).abs() < 1e-6);
        }
    }
}
