use super::keywords::DOCTOR_NOT_DETECTED;

/// Find the prescriber line: the first line whose lowercased form contains
/// "dr", trimmed. No word-boundary check — an unrelated word containing "dr"
/// ("hydrate") is a known false positive. The scan stops at the first hit
/// rather than hunting for a better candidate.
pub fn locate_doctor<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        if line.to_lowercase().contains("dr") {
            return line.trim().to_string();
        }
    }
    DOCTOR_NOT_DETECTED.to_string()
}
