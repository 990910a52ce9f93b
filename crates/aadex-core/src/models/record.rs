//! Aadhaar card data model.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from an Aadhaar card.
///
/// Every field is optional on the source document. Absent fields hold an
/// empty string so the record always serializes with the same shape and
/// callers never have to distinguish "not present" from "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AadhaarRecord {
    /// 16-digit Virtual ID, grouped 4-4-4-4.
    pub vid: String,

    /// 12-digit Aadhaar number, grouped 4-4-4.
    pub aadhaar_number: String,

    /// Cardholder name in the local Indic script.
    pub name_local: String,

    /// Cardholder name in Latin script, after cleanup.
    pub name: String,

    /// Guardian name following an S/O, C/O, D/O or W/O prefix.
    pub guardian_name: String,

    /// Date of birth, dd/mm/yyyy.
    pub dob: String,

    /// Gender: Male, Female, Transgender or a single-letter form.
    pub gender: String,

    /// Free-text address block.
    pub address: String,

    /// Village / Town / City.
    pub vtc: String,

    /// Post office.
    pub po: String,

    /// Sub-district.
    pub sub_district: String,

    /// District.
    pub district: String,

    /// State.
    pub state: String,

    /// 6-digit postal code.
    pub pincode: String,

    /// 10-digit mobile number.
    pub phone: String,
}

impl AadhaarRecord {
    /// Field names in serialization order.
    pub const FIELD_NAMES: [&'static str; 15] = [
        "vid",
        "aadhaar_number",
        "name_local",
        "name",
        "guardian_name",
        "dob",
        "gender",
        "address",
        "vtc",
        "po",
        "sub_district",
        "district",
        "state",
        "pincode",
        "phone",
    ];

    /// Field values in serialization order.
    pub fn field_values(&self) -> [&str; 15] {
        [
            &self.vid,
            &self.aadhaar_number,
            &self.name_local,
            &self.name,
            &self.guardian_name,
            &self.dob,
            &self.gender,
            &self.address,
            &self.vtc,
            &self.po,
            &self.sub_district,
            &self.district,
            &self.state,
            &self.pincode,
            &self.phone,
        ]
    }

    /// Names of fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .iter()
            .zip(self.field_values())
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.field_values().iter().all(|value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = AadhaarRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.missing_fields().len(), AadhaarRecord::FIELD_NAMES.len());
    }

    #[test]
    fn test_missing_fields_tracks_populated() {
        let record = AadhaarRecord {
            name: "Ram Kumar".to_string(),
            pincode: "560001".to_string(),
            ..Default::default()
        };

        let missing = record.missing_fields();
        assert!(!record.is_empty());
        assert!(!missing.contains(&"name"));
        assert!(!missing.contains(&"pincode"));
        assert!(missing.contains(&"aadhaar_number"));
        assert_eq!(missing.len(), 13);
    }

    #[test]
    fn test_serialization_shape_is_stable() {
        let record = AadhaarRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), AadhaarRecord::FIELD_NAMES.len());
        for name in AadhaarRecord::FIELD_NAMES {
            assert_eq!(object[name], "");
        }
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let record: AadhaarRecord =
            serde_json::from_str(r#"{"name": "Ram Kumar", "gender": "Male"}"#).unwrap();

        assert_eq!(record.name, "Ram Kumar");
        assert_eq!(record.gender, "Male");
        assert_eq!(record.aadhaar_number, "");
    }
}
