//! Risk factor catalog
//!
//! The fixed table of named factors and their point weights. It is a
//! process-lifetime constant: nothing mutates it after startup.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RiskStatus;

/// A named contributor to the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    NewLocation,
    ImpossibleTravel,
    UnusualTime,
    /// Reserved: no rule triggers it yet
    NewDevice,
    MultipleAttempts,
}

impl RiskFactor {
    /// All factors in catalog order
    pub const ALL: [RiskFactor; 5] = [
        RiskFactor::NewLocation,
        RiskFactor::ImpossibleTravel,
        RiskFactor::UnusualTime,
        RiskFactor::NewDevice,
        RiskFactor::MultipleAttempts,
    ];

    pub const fn weight(&self) -> u32 {
        match self {
            RiskFactor::NewLocation => 30,
            RiskFactor::ImpossibleTravel => 70,
            RiskFactor::UnusualTime => 20,
            RiskFactor::NewDevice => 25,
            RiskFactor::MultipleAttempts => 40,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            RiskFactor::NewLocation => "new_location",
            RiskFactor::ImpossibleTravel => "impossible_travel",
            RiskFactor::UnusualTime => "unusual_time",
            RiskFactor::NewDevice => "new_device",
            RiskFactor::MultipleAttempts => "multiple_attempts",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of the factor weights
///
/// Serializes as a `name -> weight` map in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskFactorCatalog;

impl RiskFactorCatalog {
    pub fn weight_of(&self, name: &str) -> Option<u32> {
        self.iter().find(|(n, _)| *n == name).map(|(_, w)| w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        RiskFactor::ALL.into_iter().map(|f| (f.name(), f.weight()))
    }
}

impl Serialize for RiskFactorCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RiskFactor::ALL.len()))?;
        for (name, weight) in self.iter() {
            map.serialize_entry(name, &weight)?;
        }
        map.end()
    }
}

/// Human-readable score ranges for each status tier
#[derive(Debug, Clone, Serialize)]
pub struct StatusThresholds {
    pub safe: String,
    pub warning: String,
    pub suspicious: String,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        StatusThresholds {
            safe: format!("< {}", RiskStatus::WARNING_THRESHOLD),
            warning: format!(
                "{}-{}",
                RiskStatus::WARNING_THRESHOLD,
                RiskStatus::SUSPICIOUS_THRESHOLD - 1
            ),
            suspicious: format!(">= {}", RiskStatus::SUSPICIOUS_THRESHOLD),
        }
    }
}

/// Catalog weights and tier ranges, as exposed to callers
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogView {
    pub risk_factors: RiskFactorCatalog,
    pub thresholds: StatusThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_weights() {
        let catalog = RiskFactorCatalog;
        assert_eq!(catalog.weight_of("new_location"), Some(30));
        assert_eq!(catalog.weight_of("impossible_travel"), Some(70));
        assert_eq!(catalog.weight_of("unusual_time"), Some(20));
        assert_eq!(catalog.weight_of("new_device"), Some(25));
        assert_eq!(catalog.weight_of("multiple_attempts"), Some(40));
        assert_eq!(catalog.weight_of("tor_exit_node"), None);
    }

    #[test]
    fn test_catalog_serializes_in_order() {
        let json = serde_json::to_string(&RiskFactorCatalog).unwrap();
        assert_eq!(
            json,
            r#"{"new_location":30,"impossible_travel":70,"unusual_time":20,"new_device":25,"multiple_attempts":40}"#
        );
    }

    #[test]
    fn test_factor_names_match_serde() {
        for factor in RiskFactor::ALL {
            let json = serde_json::to_string(&factor).unwrap();
            assert_eq!(json, format!("\"{}\"", factor.name()));
        }
    }

    #[test]
    fn test_view_keeps_catalog_order() {
        let json = serde_json::to_string(&CatalogView::default()).unwrap();
        assert!(json.starts_with(r#"{"risk_factors":{"new_location":30,"impossible_travel":70,"#));
        assert!(json.ends_with(r#""thresholds":{"safe":"< 30","warning":"30-59","suspicious":">= 60"}}"#));
    }

    #[test]
    fn test_threshold_strings() {
        let thresholds = StatusThresholds::default();
        assert_eq!(thresholds.safe, "< 30");
        assert_eq!(thresholds.warning, "30-59");
        assert_eq!(thresholds.suspicious, ">= 60");
    }
}
