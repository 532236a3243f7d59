//! Connector configuration as read from the host's key-value store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// The three values a hosting dispatcher persists for this connector.
///
/// All fields default so a partial store still deserializes.
pub struct Settings {
    /// Whether the user switched the connector on at all.
    pub enabled: bool,
    /// SMSPilot API key; empty means not yet configured.
    pub apikey: String,
    /// Drop the gateway's `status=` line from reported balance strings.
    #[serde(rename = "hideApiStatus")]
    pub hide_api_status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Readiness of the connector given its current [`Settings`].
pub enum ConnectorStatus {
    /// Switched off by the user.
    Inactive,
    /// Switched on, but no API key has been entered yet.
    MissingApiKey,
    /// Configured and ready to send.
    Ready,
}

impl Settings {
    /// Classify the settings the way the hosting dispatcher does before
    /// routing a command to this connector.
    pub fn status(&self) -> ConnectorStatus {
        if !self.enabled {
            ConnectorStatus::Inactive
        } else if self.apikey.trim().is_empty() {
            ConnectorStatus::MissingApiKey
        } else {
            ConnectorStatus::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_enabled_and_apikey() {
        let settings = Settings::default();
        assert_eq!(settings.status(), ConnectorStatus::Inactive);

        let settings = Settings {
            enabled: true,
            ..Default::default()
        };
        assert_eq!(settings.status(), ConnectorStatus::MissingApiKey);

        let settings = Settings {
            enabled: true,
            apikey: "key".to_owned(),
            ..Default::default()
        };
        assert_eq!(settings.status(), ConnectorStatus::Ready);
    }

    #[test]
    fn whitespace_apikey_is_not_configured() {
        let settings = Settings {
            enabled: true,
            apikey: "   ".to_owned(),
            ..Default::default()
        };
        assert_eq!(settings.status(), ConnectorStatus::MissingApiKey);
    }

    #[test]
    fn deserializes_from_the_host_store_keys() {
        let settings: Settings = serde_json::from_str(
            r#"{"enabled": true, "apikey": "key", "hideApiStatus": true}"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            Settings {
                enabled: true,
                apikey: "key".to_owned(),
                hide_api_status: true,
            }
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
