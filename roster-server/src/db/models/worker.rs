//! Worker Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use utoipa::ToSchema;

use super::serde_helpers;

/// Worker ID type
pub type WorkerId = RecordId;

/// Worker roster record matching the store schema.
///
/// Field names on the wire follow the roster convention (`phoneNumber`,
/// `RMPaid`, ...); absent fields are omitted from JSON and from the stored
/// document alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Worker {
    /// Store-assigned record id, serialized as "worker:<key>". Immutable.
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "worker:0vklxl0ruhnjlr3lng0m")]
    pub id: Option<WorkerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Free-form roster status, e.g. "active" / "inactive"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "passportNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub passport_number: Option<String>,
    /// Work-permit / visa expiry date (ISO-8601 calendar date)
    #[serde(
        default,
        rename = "permitVisaExpiry",
        skip_serializing_if = "Option::is_none"
    )]
    pub permit_visa_expiry: Option<NaiveDate>,
    /// Amount paid, in Ringgit
    #[serde(default, rename = "RMPaid", skip_serializing_if = "Option::is_none")]
    pub rm_paid: Option<f64>,
}

/// Worker for creation (without id). Every field is optional; a bad date or
/// a non-numeric amount fails deserialization before any store call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WorkerCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "passportNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub passport_number: Option<String>,
    #[serde(
        default,
        rename = "permitVisaExpiry",
        skip_serializing_if = "Option::is_none"
    )]
    pub permit_visa_expiry: Option<NaiveDate>,
    #[serde(default, rename = "RMPaid", skip_serializing_if = "Option::is_none")]
    pub rm_paid: Option<f64>,
}

/// Worker for update (all optional). Only provided fields are merged into
/// the stored record; the id is never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WorkerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "passportNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub passport_number: Option<String>,
    #[serde(
        default,
        rename = "permitVisaExpiry",
        skip_serializing_if = "Option::is_none"
    )]
    pub permit_visa_expiry: Option<NaiveDate>,
    #[serde(default, rename = "RMPaid", skip_serializing_if = "Option::is_none")]
    pub rm_paid: Option<f64>,
}

/// Payload for the dedicated paid-amount update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RmPaidUpdate {
    #[serde(rename = "RMPaid")]
    pub rm_paid: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_parses_iso_date() {
        let payload: WorkerCreate = serde_json::from_value(json!({
            "name": "Ana",
            "permitVisaExpiry": "2027-03-15"
        }))
        .unwrap();
        assert_eq!(
            payload.permit_visa_expiry,
            NaiveDate::from_ymd_opt(2027, 3, 15)
        );
    }

    #[test]
    fn create_rejects_bad_date() {
        let result = serde_json::from_value::<WorkerCreate>(json!({
            "permitVisaExpiry": "not-a-date"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_non_numeric_amount() {
        let result = serde_json::from_value::<WorkerCreate>(json!({
            "RMPaid": "one hundred"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rm_paid_update_requires_the_field() {
        assert!(serde_json::from_value::<RmPaidUpdate>(json!({})).is_err());
        let payload: RmPaidUpdate = serde_json::from_value(json!({"RMPaid": 150})).unwrap();
        assert_eq!(payload.rm_paid, 150.0);
    }

    #[test]
    fn id_round_trips_as_record_pointer_string() {
        let worker = Worker {
            id: Some(RecordId::from_table_key("worker", "abc")),
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&worker).unwrap();
        assert_eq!(value["id"], json!("worker:abc"));

        let parsed: Worker = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.id, Some(RecordId::from_table_key("worker", "abc")));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let worker = Worker {
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&worker).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("name"));
    }

    #[test]
    fn update_serializes_only_provided_fields() {
        let update = WorkerUpdate {
            status: Some("inactive".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"status": "inactive"}));
    }
}
