//! Data models for the control broker

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ============================================================================
// Control State Models
// ============================================================================

/// Authoritative command record fetched by the device.
///
/// `speed` and `steering` are always within [-100, 100]. The flag fields hold
/// whatever number the operator last sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub speed: i32,
    pub steering: i32,
    pub speed1: Number,
    pub speed2: Number,
    pub off: Number,
    pub auto: Number,
    pub water: Number,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            speed: 0,
            steering: 0,
            speed1: Number::from(0),
            speed2: Number::from(0),
            off: Number::from(0),
            auto: Number::from(0),
            water: Number::from(0),
        }
    }
}

/// Inbound partial command as posted by the operator console.
///
/// `None` means the field was absent (or `null`) and must not be touched.
/// An explicit `0` is `Some(0)` and clears the field. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlCommand {
    pub speed: Option<f64>,
    pub steering: Option<f64>,
    pub speed1: Option<Number>,
    pub speed2: Option<Number>,
    pub off: Option<Number>,
    pub auto: Option<Number>,
    pub water: Option<Number>,
}

impl ControlCommand {
    /// Decode a command from a JSON object. Only objects are accepted; a
    /// recognised field holding a non-numeric value is an error.
    pub fn from_object(body: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(body))
    }
}

/// Normalized partial update applied by the store.
///
/// Axis values are integral but not yet clamped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ControlPatch {
    pub speed: Option<i64>,
    pub steering: Option<i64>,
    pub speed1: Option<Number>,
    pub speed2: Option<Number>,
    pub off: Option<Number>,
    pub auto: Option<Number>,
    pub water: Option<Number>,
}

impl ControlPatch {
    /// Names of the fields present in this patch, in wire order
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        let presence = [
            ("speed", self.speed.is_some()),
            ("steering", self.steering.is_some()),
            ("speed1", self.speed1.is_some()),
            ("speed2", self.speed2.is_some()),
            ("off", self.off.is_some()),
            ("auto", self.auto.is_some()),
            ("water", self.water.is_some()),
        ];
        presence
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.supplied_fields().is_empty()
    }
}

// ============================================================================
// Link Status Models
// ============================================================================

/// Connectivity verdict returned by `GET /api/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStatus {
    pub connected: bool,
    /// Milliseconds since the device last fetched its state
    #[serde(rename = "diff")]
    pub diff_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_default_state_serializes_all_fields_as_zero() {
        let value = serde_json::to_value(ControlState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "speed": 0, "steering": 0, "speed1": 0, "speed2": 0,
                "off": 0, "auto": 0, "water": 0
            })
        );
    }

    #[test]
    fn test_command_presence() {
        let cmd = ControlCommand::from_object(object(json!({"off": 0, "speed": 12}))).unwrap();
        assert_eq!(cmd.off, Some(Number::from(0)));
        assert_eq!(cmd.speed, Some(12.0));
        assert_eq!(cmd.steering, None);
        assert_eq!(cmd.water, None);
    }

    #[test]
    fn test_command_null_is_absent() {
        let cmd = ControlCommand::from_object(object(json!({"water": null}))).unwrap();
        assert_eq!(cmd.water, None);
    }

    #[test]
    fn test_command_ignores_unknown_fields() {
        let cmd =
            ControlCommand::from_object(object(json!({"horn": 1, "auto": 1}))).unwrap();
        assert_eq!(cmd.auto, Some(Number::from(1)));
        assert_eq!(
            cmd,
            ControlCommand {
                auto: Some(Number::from(1)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_command_rejects_non_numeric_values() {
        assert!(ControlCommand::from_object(object(json!({"speed": "fast"}))).is_err());
        assert!(ControlCommand::from_object(object(json!({"off": true}))).is_err());
        assert!(ControlCommand::from_object(object(json!({"water": [1]}))).is_err());
    }

    #[test]
    fn test_flag_numbers_kept_verbatim() {
        let cmd = ControlCommand::from_object(object(json!({"speed2": 2.5, "auto": -3}))).unwrap();
        assert_eq!(cmd.speed2.unwrap().as_f64(), Some(2.5));
        assert_eq!(cmd.auto.unwrap().as_i64(), Some(-3));
    }

    #[test]
    fn test_supplied_fields() {
        let patch = ControlPatch {
            steering: Some(5),
            water: Some(Number::from(1)),
            ..Default::default()
        };
        assert_eq!(patch.supplied_fields(), vec!["steering", "water"]);
        assert!(!patch.is_empty());
        assert!(ControlPatch::default().is_empty());
    }

    #[test]
    fn test_link_status_wire_shape() {
        let status = LinkStatus {
            connected: true,
            diff_ms: 1000,
        };
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            json!({"connected": true, "diff": 1000})
        );
    }
}
