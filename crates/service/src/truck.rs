use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FieldError, ServiceError};

pub const LOCATION_ID_MSG: &str = "Location ID must be an integer";
pub const LOCATION_ID_IMMUTABLE_MSG: &str = "Location ID cannot be changed";

/// A single mobile-food-permit record.
///
/// `locationid` is the unique key; the rest of the record is an open-ended
/// set of JSON fields carried through untouched (permit numbers, addresses,
/// coordinates, schedules, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodTruck {
    pub locationid: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl FoodTruck {
    /// Shallow merge: every key present in `patch` overwrites the stored
    /// value, explicit nulls included; absent keys are preserved.
    /// `locationid` is skipped here — validation has already pinned it to
    /// the existing key.
    pub fn merge(&self, patch: &Map<String, Value>) -> FoodTruck {
        let mut merged = self.clone();
        for (key, value) in patch {
            if key == "locationid" {
                continue;
            }
            merged.fields.insert(key.clone(), value.clone());
        }
        merged
    }
}

const REQUIRED_TEXT_FIELDS: [&str; 2] = ["Applicant", "FacilityType"];

fn non_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.trim().is_empty())
}

fn require_object(body: &Value) -> Result<&Map<String, Value>, ServiceError> {
    body.as_object()
        .ok_or_else(|| ServiceError::single("body", "request body must be a JSON object"))
}

/// Validate a creation payload into a record.
///
/// Collects every rule violation so the response can name all offending
/// fields at once rather than the first one hit.
pub fn validate_create(body: &Value) -> Result<FoodTruck, ServiceError> {
    let obj = require_object(body)?;
    let mut errors = Vec::new();

    let locationid = obj.get("locationid").and_then(Value::as_i64);
    if locationid.is_none() {
        errors.push(FieldError::new("locationid", LOCATION_ID_MSG));
    }

    for field in REQUIRED_TEXT_FIELDS {
        match obj.get(field) {
            Some(v) if non_empty_string(v) => {}
            _ => errors.push(FieldError::new(field, format!("{field} must be a non-empty string"))),
        }
    }

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let mut fields = obj.clone();
    fields.remove("locationid");
    Ok(FoodTruck {
        // checked above
        locationid: locationid.unwrap_or_default(),
        fields,
    })
}

/// Validate an update payload against the path id and return the patch map.
///
/// `Applicant`/`FacilityType` only need to be valid when present; a
/// `locationid` in the body must equal the path id — re-keying is rejected.
pub fn validate_patch(body: &Value, path_id: i64) -> Result<Map<String, Value>, ServiceError> {
    let obj = require_object(body)?;
    let mut errors = Vec::new();

    if let Some(value) = obj.get("locationid") {
        match value.as_i64() {
            Some(id) if id == path_id => {}
            Some(_) => errors.push(FieldError::new("locationid", LOCATION_ID_IMMUTABLE_MSG)),
            None => errors.push(FieldError::new("locationid", LOCATION_ID_MSG)),
        }
    }

    for field in REQUIRED_TEXT_FIELDS {
        if let Some(v) = obj.get(field) {
            if !non_empty_string(v) {
                errors.push(FieldError::new(field, format!("{field} must be a non-empty string")));
            }
        }
    }

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }
    Ok(obj.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_create_accepts_full_record() {
        let body = json!({
            "locationid": 9999999,
            "Applicant": "Test Food Truck",
            "FacilityType": "Truck",
            "FoodItems": "Tacos"
        });
        let truck = validate_create(&body).unwrap();
        assert_eq!(truck.locationid, 9999999);
        assert_eq!(truck.fields["Applicant"], "Test Food Truck");
        assert_eq!(truck.fields["FoodItems"], "Tacos");
        assert!(!truck.fields.contains_key("locationid"));
    }

    #[test]
    fn validate_create_collects_all_field_errors() {
        let err = validate_create(&json!({})).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[0].field, "locationid");
                assert_eq!(errors[0].msg, LOCATION_ID_MSG);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn validate_create_rejects_blank_applicant() {
        let body = json!({"locationid": 1, "Applicant": "  ", "FacilityType": "Truck"});
        let err = validate_create(&body).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "Applicant");
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn validate_create_rejects_non_object_body() {
        assert!(validate_create(&json!([1, 2, 3])).is_err());
        assert!(validate_create(&json!("truck")).is_err());
    }

    #[test]
    fn validate_patch_allows_matching_locationid() {
        let patch = validate_patch(&json!({"locationid": 42, "Applicant": "New"}), 42).unwrap();
        assert_eq!(patch["Applicant"], "New");
    }

    #[test]
    fn validate_patch_rejects_rekeying() {
        let err = validate_patch(&json!({"locationid": 43}), 42).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors[0].msg, LOCATION_ID_IMMUTABLE_MSG);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn validate_patch_rejects_non_integer_locationid() {
        let err = validate_patch(&json!({"locationid": "abc"}), 42).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors[0].msg, LOCATION_ID_MSG);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn validate_patch_rejects_present_but_empty_required_text() {
        let err = validate_patch(&json!({"FacilityType": ""}), 42).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors[0].field, "FacilityType");
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn merge_overwrites_named_keys_and_keeps_the_rest() {
        let truck: FoodTruck = serde_json::from_value(json!({
            "locationid": 7,
            "Applicant": "Original",
            "FacilityType": "Truck",
            "FoodItems": "Burritos"
        }))
        .unwrap();
        let patch = json!({"Applicant": "Updated", "NOISent": null})
            .as_object()
            .cloned()
            .unwrap();
        let merged = truck.merge(&patch);
        assert_eq!(merged.locationid, 7);
        assert_eq!(merged.fields["Applicant"], "Updated");
        assert_eq!(merged.fields["FoodItems"], "Burritos");
        // explicit null still overwrites
        assert!(merged.fields["NOISent"].is_null());
    }
}
