use super::keywords::DOSE_FORM_KEYWORDS;

/// Decide whether one line of OCR text plausibly names a medicine.
///
/// A line is accepted when it contains at least one decimal digit AND its
/// lowercased form contains one of the dosage-form/unit keywords. The digit
/// requirement rejects letterhead and doctor lines that mention units without
/// a dose; the keyword requirement rejects narrative lines.
///
/// This is a recall-oriented heuristic over noisy OCR text. False positives
/// and negatives are expected; tightening the rules trades recall away and is
/// not an improvement.
pub fn is_medicine_line(line: &str) -> bool {
    if !line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let lower = line.to_lowercase();
    DOSE_FORM_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
