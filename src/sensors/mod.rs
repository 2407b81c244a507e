pub mod dashboard;
pub mod generator;

use std::collections::VecDeque;

use crate::constants::SENSOR_WINDOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Humidity,
    Pressure,
    Light,
}

impl SensorKind {
    pub fn next(self) -> Self {
        match self {
            SensorKind::Temperature => SensorKind::Humidity,
            SensorKind::Humidity => SensorKind::Pressure,
            SensorKind::Pressure => SensorKind::Light,
            SensorKind::Light => SensorKind::Temperature,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::Pressure => "Pressure",
            SensorKind::Light => "Light Intensity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Pressure => "kPa",
            SensorKind::Light => "lux",
        }
    }

    /// Plausible measurement range for the fabricated readings
    pub fn range(self) -> (f32, f32) {
        match self {
            SensorKind::Temperature => (15.0, 45.0),
            SensorKind::Humidity => (30.0, 90.0),
            SensorKind::Pressure => (95.0, 105.0),
            SensorKind::Light => (0.0, 1000.0),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            SensorKind::Temperature => 25.0,
            SensorKind::Humidity => 60.0,
            SensorKind::Pressure => 101.0,
            SensorKind::Light => 300.0,
        }
    }
}

/// One tracked sensor: identity, kind, and its recent readings
pub struct SensorRecord {
    pub id: u64,
    pub kind: SensorKind,
    /// Sliding window of the most recent readings, oldest first
    pub series: VecDeque<f32>,
    pub current: f32,
    /// Seconds-since-start of the last reading, for the status line
    pub last_update: Option<f64>,
}

impl SensorRecord {
    pub fn new(id: u64, kind: SensorKind) -> Self {
        Self {
            id,
            kind,
            series: VecDeque::with_capacity(SENSOR_WINDOW),
            current: kind.default_value(),
            last_update: None,
        }
    }

    /// Append a reading, dropping the oldest once the window is full
    pub fn push(&mut self, value: f32, at_secs: f64) {
        if self.series.len() == SENSOR_WINDOW {
            self.series.pop_front();
        }
        self.series.push_back(value);
        self.current = value;
        self.last_update = Some(at_secs);
    }
}
