//! Keyword tables for the prescription heuristics.
//!
//! Kept as enumerated constants rather than inline literals so the matching
//! policy and its precedence are visible and testable in one place.

/// A frequency rule: any of `keywords` (substring, lowercased input) maps to
/// `label`.
pub struct TimingRule {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

/// Dosage-form and unit keywords that mark a line as a medicine candidate.
/// Abbreviations first, then natural-language synonyms.
pub const DOSE_FORM_KEYWORDS: &[&str] = &[
    "mg", "ml", "tab", "cap", "bd", "td", "tds", "qd", "od", "tablet", "capsule", "syrup",
];

/// Frequency rules in precedence order. The abbreviations overlap in
/// character content (a line can contain both "bd" and "od"), so the first
/// matching rule wins and the order here is load-bearing.
pub const TIMING_RULES: &[TimingRule] = &[
    TimingRule {
        keywords: &["bd", "twice"],
        label: "Twice Daily",
    },
    TimingRule {
        keywords: &["tds", "td", "thrice"],
        label: "Three Times Daily",
    },
    TimingRule {
        keywords: &["qd", "od", "once"],
        label: "Once Daily",
    },
];

/// Frequency label when no rule matches.
pub const TIMING_FALLBACK: &str = "Follow doctor instructions";

/// Dosage sentinel when no quantity+unit token is found.
pub const DOSAGE_NOT_SPECIFIED: &str = "Not specified";

/// Duration sentinel when no duration token is found.
pub const DURATION_AS_PRESCRIBED: &str = "As prescribed";

/// Doctor fallback when no prescriber line is found.
pub const DOCTOR_NOT_DETECTED: &str = "Doctor name not detected";

/// Synthetic entry name when no line classifies as a medicine.
pub const NO_MEDICINES_DETECTED: &str = "No clear medicines detected";
