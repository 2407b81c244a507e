use ratatui::style::Color;

/// Palette lifted from the conference site styling
pub const BG: Color = Color::Rgb(18, 18, 18);
pub const FG: Color = Color::Rgb(204, 204, 204);
pub const DIM: Color = Color::Rgb(80, 80, 90);
/// Site teal (#32b8c6): charts, live traces, highlights
pub const ACCENT: Color = Color::Rgb(50, 184, 198);
pub const GRID: Color = Color::Rgb(40, 70, 75);
pub const HEADER_BG: Color = Color::Rgb(30, 30, 36);
pub const SELECTED_BG: Color = Color::Rgb(40, 45, 55);
pub const STATUS_OK: Color = Color::Rgb(50, 220, 100);
pub const ALERT: Color = Color::Rgb(220, 80, 80);
/// Raw trace is drawn faded behind the processed ones
pub const TRACE_RAW: Color = Color::Rgb(100, 100, 100);
pub const TRACE_FILTERED: Color = ACCENT;
pub const TRACE_MODULATED: Color = Color::Rgb(255, 200, 50);
