//! Evaluation context
//!
//! Normalizes a loosely-shaped login event into concrete values before any
//! rule runs. This is the only place where absent fields are defaulted.

use crate::models::{Location, LoginEvent};

/// Hours assumed for a previous login that carries no time difference
pub const DEFAULT_TIME_DIFF_HOURS: f64 = 24.0;

/// A previous login after defaulting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorLogin<'a> {
    pub country: Option<&'a str>,
    pub time_diff_hours: f64,
}

/// Everything the rules may look at for one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext<'a> {
    pub current_country: Option<&'a str>,
    /// Most recent first
    pub previous_logins: Vec<PriorLogin<'a>>,
    pub hours_since_last_login: f64,
    pub user_agent: &'a str,
    /// Local hour when the evaluation started
    pub hour_of_day: u32,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(event: &'a LoginEvent, hour_of_day: u32) -> Self {
        let previous_logins = event
            .previous_logins
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|login| PriorLogin {
                country: country_of(login.location.as_ref()),
                time_diff_hours: login.time_diff.unwrap_or(DEFAULT_TIME_DIFF_HOURS),
            })
            .collect();

        EvaluationContext {
            current_country: country_of(event.current_location.as_ref()),
            previous_logins,
            hours_since_last_login: event.hours_since_last_login.unwrap_or(0.0),
            user_agent: event.user_agent.as_deref().unwrap_or(""),
            hour_of_day,
        }
    }

    pub fn most_recent_login(&self) -> Option<&PriorLogin<'a>> {
        self.previous_logins.first()
    }

    /// Whether the country differs from the most recent previous login.
    ///
    /// False when there is no previous login. Two absent countries compare
    /// equal; an absent and a present one do not.
    pub fn country_changed(&self) -> bool {
        self.most_recent_login()
            .is_some_and(|last| last.country != self.current_country)
    }

    /// Previous logins less than `hours` ago
    pub fn logins_within(&self, hours: f64) -> usize {
        self.previous_logins
            .iter()
            .filter(|login| login.time_diff_hours < hours)
            .count()
    }
}

fn country_of(location: Option<&Location>) -> Option<&str> {
    location.and_then(|l| l.country.as_deref())
}
