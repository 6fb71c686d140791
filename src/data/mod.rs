pub mod curve;
pub mod detail;
pub mod export;
pub mod filter;
pub mod loader;
pub mod record;
pub mod render;
pub mod scale;
pub mod state;
pub mod transition;
pub mod view;
