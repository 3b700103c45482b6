// Service module exports

pub mod clock;
pub mod progress;
pub mod quote;
pub mod scheduler;
pub mod settings;
