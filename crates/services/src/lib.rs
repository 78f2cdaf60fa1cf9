#![forbid(unsafe_code)]

pub mod app_services;
pub mod content;
pub mod error;
pub mod progress_service;

pub use quran_core::Clock;

pub use app_services::AppServices;
pub use content::{ContentConfig, ContentService, HttpQuranApi, QuranApi, VersesPage};
pub use error::{AppServicesError, ProgressServiceError, RetrievalError};
pub use progress_service::ProgressService;
