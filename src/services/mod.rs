pub mod fallback;
pub mod metrics_manager;
pub mod resolver;
pub mod uploads;
