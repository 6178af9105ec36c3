use serde::{Deserialize, Serialize};

/// Geographic details attached to a login
///
/// Only `country` takes part in scoring; the other fields are carried so the
/// caller can forward whatever its geo lookup produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn in_country(country: &str) -> Self {
        Location {
            country: Some(country.to_string()),
            ..Default::default()
        }
    }
}

/// A prior login of the same user, as reported by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviousLogin {
    #[serde(default)]
    pub location: Option<Location>,
    /// Hours between that login and now
    #[serde(default)]
    pub time_diff: Option<f64>,
}

/// One login attempt to be scored
///
/// Every field is optional on the wire. Defaults are applied when the event
/// is turned into an evaluation context, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginEvent {
    #[serde(default)]
    pub current_location: Option<Location>,
    /// Most recent first
    #[serde(default)]
    pub previous_logins: Option<Vec<PreviousLogin>>,
    #[serde(default, rename = "time_since_last_login")]
    pub hours_since_last_login: Option<f64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let event: LoginEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event, LoginEvent::default());
    }

    #[test]
    fn test_nulls_are_absent() {
        let event: LoginEvent = serde_json::from_str(
            r#"{"current_location": null, "previous_logins": null,
                "time_since_last_login": null, "user_agent": null}"#,
        )
        .unwrap();
        assert_eq!(event, LoginEvent::default());
    }

    #[test]
    fn test_wire_names() {
        let event: LoginEvent = serde_json::from_str(
            r#"{
                "current_location": {"country": "FR", "city": "Paris", "latitude": 48.85},
                "previous_logins": [{"location": {"country": "US"}, "time_diff": 0.2}, {"time_diff": 3}],
                "time_since_last_login": 3,
                "user_agent": "curl/8.0",
                "ignored": true
            }"#,
        )
        .unwrap();

        let current = event.current_location.unwrap();
        assert_eq!(current.country.as_deref(), Some("FR"));
        assert_eq!(current.city.as_deref(), Some("Paris"));
        assert_eq!(event.hours_since_last_login, Some(3.0));
        assert_eq!(event.user_agent.as_deref(), Some("curl/8.0"));

        let previous = event.previous_logins.unwrap();
        assert_eq!(previous.len(), 2);
        assert_eq!(previous[0].location, Some(Location::in_country("US")));
        assert_eq!(previous[1].location, None);
        assert_eq!(previous[1].time_diff, Some(3.0));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<LoginEvent>(r#"{"time_since_last_login": "soon"}"#);
        assert!(result.is_err());
    }
}
