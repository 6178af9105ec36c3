use serde::{Deserialize, Serialize};
use std::fmt;

use crate::detection::RiskFactor;

/// Verdict tier derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Safe,
    Warning,
    Suspicious,
}

impl RiskStatus {
    /// Lowest score classified as `Warning`
    pub const WARNING_THRESHOLD: u32 = 30;
    /// Lowest score classified as `Suspicious`
    pub const SUSPICIOUS_THRESHOLD: u32 = 60;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::SUSPICIOUS_THRESHOLD {
            RiskStatus::Suspicious
        } else if score >= Self::WARNING_THRESHOLD {
            RiskStatus::Warning
        } else {
            RiskStatus::Safe
        }
    }

    /// Fixed advice for the caller, independent of the exact score
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskStatus::Suspicious => "Block login and require additional verification",
            RiskStatus::Warning => "Allow login but monitor closely",
            RiskStatus::Safe => "Allow login normally",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "safe",
            RiskStatus::Warning => "warning",
            RiskStatus::Suspicious => "suspicious",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule that fired, with the points it contributed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredFactor {
    pub factor: RiskFactor,
    pub description: String,
    pub score: u32,
}

/// Result of scoring one login event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub status: RiskStatus,
    pub factors: Vec<TriggeredFactor>,
    pub recommendation: String,
}

impl RiskAssessment {
    pub fn is_suspicious(&self) -> bool {
        self.status == RiskStatus::Suspicious
    }

    pub fn triggered(&self, factor: RiskFactor) -> bool {
        self.factors.iter().any(|f| f.factor == factor)
    }
}
