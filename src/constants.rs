pub const SAMPLE_RATE: u32 = 44_100;
/// Sample rate of the scope trace buffers (display only, not audio)
pub const TRACE_SAMPLE_RATE: u32 = 400;
/// Time span covered by one trace, in seconds
pub const TRACE_SECONDS: u32 = 2;
/// Samples per trace buffer
pub const TRACE_SAMPLES: usize = (TRACE_SAMPLE_RATE * TRACE_SECONDS) as usize;
/// Sliding window length of a sensor's recent readings
pub const SENSOR_WINDOW: usize = 20;
/// Seconds between sensor readings while streaming
pub const SENSOR_TICK_SECS: f64 = 1.0;
/// Quiet period before a resize triggers a redraw
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
/// Scope frequencies are sub-audible; scale up for the preview tone
pub const AUDIBLE_FREQ_SCALE: f32 = 50.0;
/// Preview gain headroom so full amplitude stays at a comfortable level
pub const PREVIEW_GAIN: f32 = 0.1;
/// Preview tones stop themselves after this long
pub const AUTO_STOP_SECS: u32 = 3;
/// UI refresh rate target
pub const UI_FPS: u64 = 60;
/// Channel capacity for inter-thread messages
pub const CHANNEL_CAPACITY: usize = 64;
