pub mod cohort_service;
pub mod format_service;
pub mod lead_service;
pub mod listeners;
pub mod metrics_projector;
pub mod position_tracker;
