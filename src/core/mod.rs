//! Core business logic

pub mod config;
pub mod currency;
pub mod log;
pub mod sample;
pub mod upload;

// Re-export main types for cleaner imports
pub use currency::{Currency, CurrencyCode, CurrencyFormatter};
pub use upload::{
    FileHandle, HistoricalTrend, Notification, Notifier, UploadError, UploadSimulator,
    UploadSnapshot, UploadState, UploadedData,
};
