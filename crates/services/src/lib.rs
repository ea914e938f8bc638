#![forbid(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod preferences_service;

pub use error::{GatewayError, PreferencesServiceError};
pub use gateway::{DEFAULT_BACKEND_URL, GatewayConfig, HttpTutorBackend, TutorAction, TutorBackend};
pub use preferences_service::PreferencesService;
