//! Risk evaluator
//!
//! Scores one login event against the rule table, clamps the total, and
//! classifies it. Stateless apart from the injected clock, so a single
//! instance can be shared across threads.

use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::context::EvaluationContext;
use super::rules::{Rule, DEFAULT_RULES};
use crate::models::{LoginEvent, RiskAssessment, RiskStatus, TriggeredFactor};

/// Highest score an assessment can carry
pub const MAX_RISK_SCORE: u32 = 100;

pub struct RiskEvaluator {
    rules: Vec<Rule>,
    clock: Arc<dyn Clock>,
}

impl RiskEvaluator {
    /// Evaluator with the default rules and the host's local clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Evaluator reading time from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        RiskEvaluator {
            rules: DEFAULT_RULES.to_vec(),
            clock,
        }
    }

    /// Evaluator with a custom rule table
    pub fn with_rules(rules: Vec<Rule>, clock: Arc<dyn Clock>) -> Self {
        RiskEvaluator { rules, clock }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Score a login event. Never fails: absent input is defaulted.
    pub fn evaluate(&self, event: &LoginEvent) -> RiskAssessment {
        let ctx = EvaluationContext::new(event, self.clock.hour());

        let factors: Vec<TriggeredFactor> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.check(&ctx).map(|description| TriggeredFactor {
                    factor: rule.factor,
                    description,
                    score: rule.factor.weight(),
                })
            })
            .collect();

        let total: u32 = factors.iter().map(|f| f.score).sum();
        let risk_score = total.min(MAX_RISK_SCORE);
        let status = RiskStatus::from_score(risk_score);

        if !factors.is_empty() {
            log::debug!(
                "Triggered factors [{}] -> score {} ({})",
                factors
                    .iter()
                    .map(|f| f.factor.name())
                    .collect::<Vec<_>>()
                    .join(", "),
                risk_score,
                status
            );
        }

        RiskAssessment {
            risk_score,
            status,
            factors,
            recommendation: status.recommendation().to_string(),
        }
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
