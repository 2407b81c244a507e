use crate::sensors::generator::{self, NoiseSource};
use crate::sensors::{SensorKind, SensorRecord};

/// Owns every sensor record and the streaming flag; the UI only reads it
pub struct Dashboard {
    sensors: Vec<SensorRecord>,
    streaming: bool,
    /// Monotonic id counter. Ids are never reused after a removal, so a
    /// removed widget's id can't resurface on a later add.
    next_id: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            sensors: Vec::new(),
            streaming: false,
            next_id: 0,
        }
    }

    pub fn sensors(&self) -> &[SensorRecord] {
        &self.sensors
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Add a sensor; if the stream is live it gets a first reading immediately
    pub fn add_sensor(
        &mut self,
        kind: SensorKind,
        elapsed_secs: f64,
        noise: &mut dyn NoiseSource,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let mut record = SensorRecord::new(id, kind);
        if self.streaming {
            let value = generator::reading(kind, elapsed_secs, noise);
            record.push(value, elapsed_secs);
        }
        self.sensors.push(record);
        id
    }

    pub fn remove_sensor(&mut self, id: u64) -> bool {
        let before = self.sensors.len();
        self.sensors.retain(|s| s.id != id);
        self.sensors.len() != before
    }

    pub fn toggle_stream(&mut self) -> bool {
        self.streaming = !self.streaming;
        self.streaming
    }

    /// Drop every record and stop the stream
    pub fn clear(&mut self) {
        self.sensors.clear();
        self.streaming = false;
    }

    /// One generation pass over every record; called once per second while
    /// streaming
    pub fn tick(&mut self, elapsed_secs: f64, noise: &mut dyn NoiseSource) {
        if !self.streaming {
            return;
        }
        for sensor in &mut self.sensors {
            let value = generator::reading(sensor.kind, elapsed_secs, noise);
            sensor.push(value, elapsed_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SENSOR_WINDOW;
    use crate::sensors::generator::test_support::StubNoise;

    fn zero_noise() -> StubNoise {
        StubNoise::new(vec![0.0])
    }

    #[test]
    fn window_caps_at_twenty_most_recent() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        dash.add_sensor(SensorKind::Temperature, 0.0, &mut noise);
        dash.toggle_stream();
        for i in 0..25 {
            dash.tick(i as f64, &mut noise);
        }
        let sensor = &dash.sensors()[0];
        assert_eq!(sensor.series.len(), SENSOR_WINDOW);

        // Last element is the 25th generated value (tick at t = 24 s)
        let expected = generator::reading(SensorKind::Temperature, 24.0, &mut zero_noise());
        assert_eq!(*sensor.series.back().unwrap(), expected);

        // Chronological order: window holds readings for t = 5..=24
        let front = generator::reading(SensorKind::Temperature, 5.0, &mut zero_noise());
        assert_eq!(*sensor.series.front().unwrap(), front);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        let a = dash.add_sensor(SensorKind::Temperature, 0.0, &mut noise);
        let b = dash.add_sensor(SensorKind::Humidity, 0.0, &mut noise);
        let c = dash.add_sensor(SensorKind::Pressure, 0.0, &mut noise);
        assert!(dash.remove_sensor(b));
        let d = dash.add_sensor(SensorKind::Light, 0.0, &mut noise);
        assert_ne!(d, a);
        assert_ne!(d, c);
        assert_ne!(d, b);
    }

    #[test]
    fn adding_while_streaming_produces_an_immediate_reading() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        dash.toggle_stream();
        dash.add_sensor(SensorKind::Humidity, 3.0, &mut noise);
        assert_eq!(dash.sensors()[0].series.len(), 1);
    }

    #[test]
    fn adding_while_stopped_starts_with_an_empty_series() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        dash.add_sensor(SensorKind::Humidity, 0.0, &mut noise);
        assert!(dash.sensors()[0].series.is_empty());
    }

    #[test]
    fn tick_is_a_no_op_while_stopped() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        dash.add_sensor(SensorKind::Light, 0.0, &mut noise);
        dash.tick(1.0, &mut noise);
        assert!(dash.sensors()[0].series.is_empty());
    }

    #[test]
    fn clear_drops_records_and_stops_streaming() {
        let mut dash = Dashboard::new();
        let mut noise = zero_noise();
        dash.add_sensor(SensorKind::Temperature, 0.0, &mut noise);
        dash.toggle_stream();
        dash.clear();
        assert!(dash.is_empty());
        assert!(!dash.is_streaming());
    }

    #[test]
    fn remove_unknown_id_reports_false() {
        let mut dash = Dashboard::new();
        assert!(!dash.remove_sensor(42));
    }
}
