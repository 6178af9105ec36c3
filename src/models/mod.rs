mod assessment;
mod event;

pub use assessment::{RiskAssessment, RiskStatus, TriggeredFactor};
pub use event::{Location, LoginEvent, PreviousLogin};
