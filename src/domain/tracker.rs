// Tracker domain models and the position/device merge
use serde::{Deserialize, Serialize};

/// A device's last known location as reported by the tracking upstream.
///
/// Only the fields the merge needs are typed; everything else the upstream
/// sends is carried verbatim in `extra` and re-emitted on serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_time: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A registered device as reported by the tracking upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
}

/// The `{id, name}` projection of a Device attached to a merged Tracker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSummary {
    pub id: i64,
    pub name: String,
}

/// A Position enriched with its matching device, or `null` when none exists.
#[derive(Debug, Clone, Serialize)]
pub struct Tracker {
    #[serde(flatten)]
    pub position: Position,
    pub device: Option<DeviceSummary>,
}

/// Join positions with devices on the device id.
///
/// The result preserves the order and count of `positions`. A position whose
/// device id matches no device gets `device: None`; under duplicate device
/// ids the first match in `devices` wins. Devices without a position are
/// omitted.
pub fn merge_trackers(positions: Vec<Position>, devices: &[Device]) -> Vec<Tracker> {
    positions
        .into_iter()
        .map(|position| {
            let device = devices
                .iter()
                .find(|d| d.id == position.device_id)
                .map(|d| DeviceSummary {
                    id: d.id,
                    name: d.name.clone(),
                });
            Tracker { position, device }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn position(id: i64, device_id: i64) -> Position {
        Position {
            id,
            device_id,
            latitude: 48.85,
            longitude: 2.35,
            device_time: None,
            extra: serde_json::Map::new(),
        }
    }

    fn device(id: i64, name: &str) -> Device {
        Device {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_merge_preserves_order_and_count() {
        let positions = vec![position(10, 3), position(11, 1), position(12, 2)];
        let devices = vec![device(1, "Van"), device(2, "Truck"), device(3, "Bike")];

        let trackers = merge_trackers(positions, &devices);

        assert_eq!(trackers.len(), 3);
        assert_eq!(trackers[0].position.id, 10);
        assert_eq!(trackers[1].position.id, 11);
        assert_eq!(trackers[2].position.id, 12);
    }

    #[test]
    fn test_merge_attaches_matching_device() {
        let trackers = merge_trackers(vec![position(1, 2)], &[device(2, "Truck")]);

        assert_eq!(
            trackers[0].device,
            Some(DeviceSummary {
                id: 2,
                name: "Truck".to_string()
            })
        );
    }

    #[test]
    fn test_merge_without_match_yields_null_device() {
        let trackers = merge_trackers(vec![position(1, 99)], &[device(2, "Truck")]);

        assert!(trackers[0].device.is_none());
    }

    #[test]
    fn test_merge_first_match_wins_under_duplicate_ids() {
        let devices = vec![device(5, "First"), device(5, "Second")];

        let trackers = merge_trackers(vec![position(1, 5)], &devices);

        assert_eq!(trackers[0].device.as_ref().unwrap().name, "First");
    }

    #[test]
    fn test_merge_omits_devices_without_positions() {
        let devices = vec![device(1, "Van"), device(2, "Truck")];

        let trackers = merge_trackers(vec![position(1, 1)], &devices);

        assert_eq!(trackers.len(), 1);
    }

    #[test]
    fn test_position_extra_fields_round_trip_verbatim() {
        let raw = json!({
            "id": 7,
            "deviceId": 3,
            "latitude": 48.85,
            "longitude": 2.35,
            "deviceTime": "2024-05-01T12:00:00Z",
            "speed": 42.5,
            "attributes": {"ignition": true}
        });

        let parsed: Position = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.extra["speed"], json!(42.5));

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_tracker_serializes_flattened_with_device() {
        let trackers = merge_trackers(vec![position(1, 2)], &[device(2, "Truck")]);

        let value = serde_json::to_value(&trackers[0]).unwrap();
        assert_eq!(value["deviceId"], json!(2));
        assert_eq!(value["device"], json!({"id": 2, "name": "Truck"}));
    }
}
