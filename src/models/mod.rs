// Module exports for models

pub mod event;
pub mod placement;
pub mod settings;
pub mod ui;
