pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
