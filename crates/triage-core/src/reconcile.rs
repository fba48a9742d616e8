use crate::model::{Classification, ParsedLabels, RuleVerdict};

/// Merges the rule verdict with the AI-extracted labels. A confident rule
/// verdict is authoritative and the AI labels are ignored (the narrative
/// still becomes the stored summary). Otherwise each field is overridden
/// independently, so a partially compliant response still contributes the
/// fields it did provide; the literal token `unknown` never overrides.
pub fn reconcile(rule: &RuleVerdict, ai: &ParsedLabels) -> Classification {
    let mut severity = rule.severity.clone();
    let mut category = rule.category.clone();
    if !rule.confident {
        if let Some(s) = &ai.severity {
            if s != "unknown" {
                severity = s.clone();
            }
        }
        if let Some(c) = &ai.category {
            if c != "unknown" {
                category = c.clone();
            }
        }
    }
    Classification { severity, category }
}
