//! Field extractors for an accepted medicine line.
//!
//! Three independent total functions (dosage, timing, duration) plus the name
//! normalizer. Each depends only on its line argument; none can fail.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{
    DOSAGE_NOT_SPECIFIED, DURATION_AS_PRESCRIBED, TIMING_FALLBACK, TIMING_RULES,
};

/// Quantity + unit token: digits, optional whitespace, mg or ml.
static DOSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(?:mg|ml)").expect("dosage pattern is valid"));

/// Duration token: digits, optional whitespace, days or weeks.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(?:days|weeks)").expect("duration pattern is valid"));

/// First dosage token in the line, verbatim (original casing preserved),
/// or `"Not specified"`. A line with several dose-like tokens yields only the
/// earliest one; multi-dose parsing is out of scope.
pub fn extract_dosage(line: &str) -> String {
    DOSAGE_RE
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DOSAGE_NOT_SPECIFIED.to_string())
}

/// Map frequency keywords to a fixed label, first matching rule wins.
///
/// Rules are tested in the order of [`TIMING_RULES`], so a line containing
/// both "bd" and "od" resolves to "Twice Daily".
pub fn extract_timing(line: &str) -> String {
    let lower = line.to_lowercase();
    for rule in TIMING_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            return rule.label.to_string();
        }
    }
    TIMING_FALLBACK.to_string()
}

/// First duration token in the line, verbatim, or `"As prescribed"`.
pub fn extract_duration(line: &str) -> String {
    DURATION_RE
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DURATION_AS_PRESCRIBED.to_string())
}

/// Isolate the medicine's name by truncating at the first dosage token and
/// trimming. Without a dosage token the trimmed full line comes back
/// unchanged. The result may be empty when the line is nothing but a dose;
/// callers treat that as "name not determined", not as an error.
pub fn normalize_name(line: &str) -> String {
    match DOSAGE_RE.find(line) {
        Some(m) => line[..m.start()].trim().to_string(),
        None => line.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dosage_first_match_verbatim() {
        assert_eq!(extract_dosage("Paracetamol 500mg bd 5 days"), "500mg");
        assert_eq!(extract_dosage("Amoxicillin 250 mg tds"), "250 mg");
        // Casing of the match is preserved
        assert_eq!(extract_dosage("IBUPROFEN 400MG"), "400MG");
    }

    #[test]
    fn dosage_earliest_of_several() {
        assert_eq!(extract_dosage("Combiflam 325mg + 400mg"), "325mg");
    }

    #[test]
    fn dosage_sentinel_without_token() {
        assert_eq!(extract_dosage("Take with warm water"), "Not specified");
        assert_eq!(extract_dosage(""), "Not specified");
    }

    #[test]
    fn dosage_matches_ml() {
        assert_eq!(extract_dosage("Cough syrup 10ml od"), "10ml");
    }

    #[test]
    fn timing_bd_wins_over_od() {
        // Precedence: the bd rule runs before the od rule
        assert_eq!(extract_timing("Amoxicillin 250mg bd od"), "Twice Daily");
    }

    #[test]
    fn timing_labels() {
        assert_eq!(extract_timing("x 500mg bd"), "Twice Daily");
        assert_eq!(extract_timing("x twice a day"), "Twice Daily");
        assert_eq!(extract_timing("x 500mg tds"), "Three Times Daily");
        assert_eq!(extract_timing("x thrice daily"), "Three Times Daily");
        assert_eq!(extract_timing("x 500mg od"), "Once Daily");
        assert_eq!(extract_timing("x 500mg qd"), "Once Daily");
        assert_eq!(extract_timing("x once at night"), "Once Daily");
    }

    #[test]
    fn timing_is_case_insensitive() {
        assert_eq!(extract_timing("PARACETAMOL 500MG BD"), "Twice Daily");
    }

    #[test]
    fn timing_fallback() {
        assert_eq!(
            extract_timing("Paracetamol 500mg"),
            "Follow doctor instructions"
        );
    }

    #[test]
    fn duration_verbatim_or_sentinel() {
        assert_eq!(extract_duration("Azithromycin 500mg od 3 days"), "3 days");
        assert_eq!(extract_duration("Vitamin D 1 tab 8weeks"), "8weeks");
        assert_eq!(extract_duration("Paracetamol 500mg bd"), "As prescribed");
    }

    #[test]
    fn name_truncates_at_dosage() {
        assert_eq!(normalize_name("Paracetamol 500mg bd 5 days"), "Paracetamol");
        assert_eq!(normalize_name("  Amoxicillin  250 mg tds"), "Amoxicillin");
    }

    #[test]
    fn name_without_dosage_is_trimmed_line() {
        assert_eq!(normalize_name("  Multivitamin 1 tab od "), "Multivitamin 1 tab od");
    }

    #[test]
    fn name_may_be_empty() {
        assert_eq!(normalize_name("500mg bd"), "");
    }
}
