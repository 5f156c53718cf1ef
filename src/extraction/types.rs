use serde::{Deserialize, Serialize};

use super::keywords::NO_MEDICINES_DETECTED;

/// One structured medicine record derived from a single prescription line.
///
/// Real entries carry all four fields (sentinels included). The placeholder
/// entry carries only `name`; the optional fields stay absent in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl MedicineEntry {
    pub fn new(name: String, dosage: String, timing: String, duration: String) -> Self {
        Self {
            name,
            dosage: Some(dosage),
            timing: Some(timing),
            duration: Some(duration),
        }
    }

    /// The synthetic record substituted when no line classifies as a
    /// medicine. Never mixed with real entries.
    pub fn placeholder() -> Self {
        Self {
            name: NO_MEDICINES_DETECTED.to_string(),
            dosage: None,
            timing: None,
            duration: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == NO_MEDICINES_DETECTED && self.dosage.is_none()
    }
}

/// Output of one pipeline run: medicine records in original line order plus
/// the prescriber line (or its fallback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub medicines: Vec<MedicineEntry>,
    pub doctor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_serializes_name_only() {
        let json = serde_json::to_value(MedicineEntry::placeholder()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "No clear medicines detected" })
        );
    }

    #[test]
    fn real_entry_serializes_all_fields() {
        let entry = MedicineEntry::new(
            "Paracetamol".into(),
            "500mg".into(),
            "Twice Daily".into(),
            "5 days".into(),
        );
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["dosage"], "500mg");
        assert_eq!(json["timing"], "Twice Daily");
        assert_eq!(json["duration"], "5 days");
    }

    #[test]
    fn placeholder_detection() {
        assert!(MedicineEntry::placeholder().is_placeholder());
        let real = MedicineEntry::new(
            "No clear medicines detected".into(),
            "Not specified".into(),
            "Follow doctor instructions".into(),
            "As prescribed".into(),
        );
        // A real line that happens to read like the placeholder still carries
        // its fields and is not mistaken for it
        assert!(!real.is_placeholder());
    }
}
