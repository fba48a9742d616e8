use crate::model::RuleVerdict;

/// Ordered keyword groups. The first matching group wins; the order is the
/// designed tie-break, not a severity ranking.
const GROUPS: &[(&[&str], &str, &str)] = &[
    (&["warning", "flaky"], "minor", "test"),
    (&["timeout", "slow"], "major", "performance"),
    (&["maven", "dependency"], "major", "build"),
    (&["database", "connection refused"], "blocker", "infra"),
    (&["disk", "no space"], "blocker", "infra"),
];

/// Pure, case-insensitive keyword scan over the bounded log text. Falls
/// through to major/build with `confident = false` when nothing matches.
pub fn classify(text: &str) -> RuleVerdict {
    let text = text.to_lowercase();
    for (keywords, severity, category) in GROUPS {
        if keywords.iter().any(|k| text.contains(k)) {
            return RuleVerdict {
                severity: (*severity).to_string(),
                category: (*category).to_string(),
                confident: true,
            };
        }
    }
    RuleVerdict {
        severity: "major".to_string(),
        category: "build".to_string(),
        confident: false,
    }
}
