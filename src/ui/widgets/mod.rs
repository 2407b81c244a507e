pub mod keyboard_hint;
pub mod mode_tabs;
pub mod nav_menu;
pub mod scope;
pub mod sensor_chart;
