pub mod catalog;
pub mod clock;
pub mod context;
pub mod evaluator;
pub mod rules;

pub use catalog::{CatalogView, RiskFactor, RiskFactorCatalog, StatusThresholds};
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::EvaluationContext;
pub use evaluator::{RiskEvaluator, MAX_RISK_SCORE};
pub use rules::{Rule, DEFAULT_RULES};
