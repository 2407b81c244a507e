pub mod engine;
pub mod voice;
