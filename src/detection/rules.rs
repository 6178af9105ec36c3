//! Scoring rules
//!
//! Each rule pairs a factor with a predicate over the evaluation context and
//! a description builder. Rules are independent: each contributes either
//! nothing or its factor's full weight.

use super::catalog::RiskFactor;
use super::context::EvaluationContext;

/// Impossible-travel is only considered below this many hours
pub const TRAVEL_WINDOW_HOURS: f64 = 12.0;
/// Impossible-travel fires below this many hours
pub const IMPOSSIBLE_TRAVEL_HOURS: f64 = 6.0;
/// Inclusive local-hour range treated as unusual
pub const UNUSUAL_HOURS: std::ops::RangeInclusive<u32> = 2..=5;
/// A previous login counts as a recent attempt below this age
pub const RECENT_ATTEMPT_HOURS: f64 = 1.0;
/// Recent attempts must exceed this count
pub const MAX_RECENT_ATTEMPTS: usize = 3;

/// One entry of the rule table
#[derive(Clone, Copy)]
pub struct Rule {
    pub factor: RiskFactor,
    pub applies: fn(&EvaluationContext<'_>) -> bool,
    pub describe: fn(&EvaluationContext<'_>) -> String,
}

impl Rule {
    /// Returns the description when the rule fires
    pub fn check(&self, ctx: &EvaluationContext<'_>) -> Option<String> {
        (self.applies)(ctx).then(|| (self.describe)(ctx))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("factor", &self.factor).finish()
    }
}

/// The rule table, in evaluation order
pub const DEFAULT_RULES: [Rule; 4] = [
    Rule {
        factor: RiskFactor::NewLocation,
        applies: new_location,
        describe: describe_new_location,
    },
    Rule {
        factor: RiskFactor::ImpossibleTravel,
        applies: impossible_travel,
        describe: describe_impossible_travel,
    },
    Rule {
        factor: RiskFactor::UnusualTime,
        applies: unusual_time,
        describe: describe_unusual_time,
    },
    Rule {
        factor: RiskFactor::MultipleAttempts,
        applies: multiple_attempts,
        describe: describe_multiple_attempts,
    },
];

fn new_location(ctx: &EvaluationContext<'_>) -> bool {
    ctx.country_changed()
}

fn describe_new_location(ctx: &EvaluationContext<'_>) -> String {
    format!(
        "Login from new country: {}",
        ctx.current_country.unwrap_or("unknown")
    )
}

fn impossible_travel(ctx: &EvaluationContext<'_>) -> bool {
    // Two gates: the travel window admits the check, the tighter bound fires it.
    if ctx.previous_logins.is_empty() || ctx.hours_since_last_login >= TRAVEL_WINDOW_HOURS {
        return false;
    }
    ctx.country_changed() && ctx.hours_since_last_login < IMPOSSIBLE_TRAVEL_HOURS
}

fn describe_impossible_travel(ctx: &EvaluationContext<'_>) -> String {
    format!("Country change in {:.1} hours", ctx.hours_since_last_login)
}

fn unusual_time(ctx: &EvaluationContext<'_>) -> bool {
    UNUSUAL_HOURS.contains(&ctx.hour_of_day)
}

fn describe_unusual_time(ctx: &EvaluationContext<'_>) -> String {
    format!("Login at unusual hour: {}:00", ctx.hour_of_day)
}

fn multiple_attempts(ctx: &EvaluationContext<'_>) -> bool {
    ctx.logins_within(RECENT_ATTEMPT_HOURS) > MAX_RECENT_ATTEMPTS
}

fn describe_multiple_attempts(ctx: &EvaluationContext<'_>) -> String {
    format!("{} attempts in last hour", ctx.logins_within(RECENT_ATTEMPT_HOURS))
}
