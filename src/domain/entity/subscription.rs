use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event types exposed by the AMF Namf_EventExposure service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmfEventType {
    LocationReport,
    PresenceInAoiReport,
    TimezoneReport,
    AccessTypeReport,
    RegistrationStateReport,
    ConnectivityStateReport,
    ReachabilityReport,
    CommunicationFailureReport,
    UesInAreaReport,
    SubscriptionIdChange,
    SubscriptionIdAddition,
    LossOfConnectivity,
}

impl AmfEventType {
    /// Every event type the AMF exposes, in wire order.
    pub fn all() -> Vec<AmfEventType> {
        vec![
            AmfEventType::LocationReport,
            AmfEventType::PresenceInAoiReport,
            AmfEventType::TimezoneReport,
            AmfEventType::AccessTypeReport,
            AmfEventType::RegistrationStateReport,
            AmfEventType::ConnectivityStateReport,
            AmfEventType::ReachabilityReport,
            AmfEventType::CommunicationFailureReport,
            AmfEventType::UesInAreaReport,
            AmfEventType::SubscriptionIdChange,
            AmfEventType::SubscriptionIdAddition,
            AmfEventType::LossOfConnectivity,
        ]
    }
}

/// One entry of the subscription's event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmfEvent {
    #[serde(rename = "type")]
    pub event_type: AmfEventType,
}

/// The subscription record sent to the AMF. Built once at process start
/// from configuration; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubscription {
    pub event_list: Vec<AmfEvent>,
    pub event_notify_uri: String,
    pub notify_correlation_id: String,
    pub nf_id: Uuid,
}

impl EventSubscription {
    pub fn new(
        event_types: &[AmfEventType],
        event_notify_uri: String,
        notify_correlation_id: String,
        nf_id: Uuid,
    ) -> Self {
        Self {
            event_list: event_types
                .iter()
                .map(|&event_type| AmfEvent { event_type })
                .collect(),
            event_notify_uri,
            notify_correlation_id,
            nf_id,
        }
    }
}

/// Request body of POST {amf}/namf-evts/v1/subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub subscription: EventSubscription,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_subscription() -> EventSubscription {
        EventSubscription::new(
            &AmfEventType::all(),
            "http://127.0.0.1:4040/notify".to_string(),
            "notif-001".to_string(),
            Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap(),
        )
    }

    #[test]
    fn test_all_event_types_count() {
        assert_eq!(AmfEventType::all().len(), 12);
    }

    #[test]
    fn test_event_type_wire_names() {
        let value = serde_json::to_value(AmfEventType::PresenceInAoiReport).unwrap();
        assert_eq!(value, json!("PRESENCE_IN_AOI_REPORT"));
        let value = serde_json::to_value(AmfEventType::UesInAreaReport).unwrap();
        assert_eq!(value, json!("UES_IN_AREA_REPORT"));
        let value = serde_json::to_value(AmfEventType::LossOfConnectivity).unwrap();
        assert_eq!(value, json!("LOSS_OF_CONNECTIVITY"));
    }

    #[test]
    fn test_request_matches_wire_shape() {
        let request = CreateSubscriptionRequest {
            subscription: test_subscription(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "subscription": {
                    "eventList": [
                        {"type": "LOCATION_REPORT"},
                        {"type": "PRESENCE_IN_AOI_REPORT"},
                        {"type": "TIMEZONE_REPORT"},
                        {"type": "ACCESS_TYPE_REPORT"},
                        {"type": "REGISTRATION_STATE_REPORT"},
                        {"type": "CONNECTIVITY_STATE_REPORT"},
                        {"type": "REACHABILITY_REPORT"},
                        {"type": "COMMUNICATION_FAILURE_REPORT"},
                        {"type": "UES_IN_AREA_REPORT"},
                        {"type": "SUBSCRIPTION_ID_CHANGE"},
                        {"type": "SUBSCRIPTION_ID_ADDITION"},
                        {"type": "LOSS_OF_CONNECTIVITY"}
                    ],
                    "eventNotifyUri": "http://127.0.0.1:4040/notify",
                    "notifyCorrelationId": "notif-001",
                    "nfId": "123e4567-e89b-12d3-a456-426614174000"
                }
            })
        );
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let request = CreateSubscriptionRequest {
            subscription: test_subscription(),
        };
        let json_str = serde_json::to_string(&request).unwrap();
        let deserialized: CreateSubscriptionRequest = serde_json::from_str(&json_str).unwrap();
        assert_eq!(deserialized.subscription.event_list.len(), 12);
        assert_eq!(
            deserialized.subscription.notify_correlation_id,
            "notif-001"
        );
        assert_eq!(
            deserialized.subscription.event_notify_uri,
            "http://127.0.0.1:4040/notify"
        );
    }
}
