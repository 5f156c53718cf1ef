//! Pipeline orchestration: raw OCR text in, `ExtractionResult` out.

use super::classify::is_medicine_line;
use super::doctor::locate_doctor;
use super::fields::{extract_dosage, extract_duration, extract_timing, normalize_name};
use super::types::{ExtractionResult, MedicineEntry};

/// Run the full extraction pipeline over one block of OCR text.
///
/// Splits into lines, classifies each line in original order, and builds one
/// [`MedicineEntry`] per accepted line. Classification and extraction are
/// line-local, so output order equals input line order and entries are never
/// deduplicated. When nothing classifies as a medicine the result holds the
/// single placeholder entry instead.
///
/// Total over all string input, including `""`, and idempotent — there is no
/// hidden state anywhere in the pipeline.
pub fn extract(raw_text: &str) -> ExtractionResult {
    let mut medicines: Vec<MedicineEntry> = Vec::new();

    for line in raw_text.lines() {
        if !is_medicine_line(line) {
            continue;
        }
        medicines.push(MedicineEntry::new(
            normalize_name(line),
            extract_dosage(line),
            extract_timing(line),
            extract_duration(line),
        ));
    }

    if medicines.is_empty() {
        medicines.push(MedicineEntry::placeholder());
    }

    let doctor = locate_doctor(raw_text.lines());

    ExtractionResult { medicines, doctor }
}
