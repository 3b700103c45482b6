// Module exports for models

pub mod month_progress;
pub mod settings;
