pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod output;
pub mod service;

// Re-export commonly used types
pub use detection::{Clock, FixedClock, RiskEvaluator, RiskFactor, RiskFactorCatalog, SystemClock};
pub use error::{Error, Result};
pub use models::{Location, LoginEvent, PreviousLogin, RiskAssessment, RiskStatus, TriggeredFactor};
