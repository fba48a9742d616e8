use crate::model::ParsedLabels;
use regex::Regex;

/// Extracts the `Severity:` / `Category:` labels from the model's free-text
/// report. The completion service is not guaranteed to honor the template,
/// so extraction is tolerant and field-independent: an absent or malformed
/// label yields `None` for that field only and is never an error.
pub fn parse_labels(text: &str) -> ParsedLabels {
    ParsedLabels {
        severity: capture_label(text, "Severity"),
        category: capture_label(text, "Category"),
    }
}

// `\s*` deliberately spans newlines so "Severity:\nminor" still parses.
fn capture_label(text: &str, label: &str) -> Option<String> {
    let re = Regex::new(&format!(r"(?i){}:\s*(\w+)", label)).ok()?;
    re.captures(text).map(|c| c[1].to_lowercase())
}
