use crate::engine::pipeline::TriageOutcome;
use crate::model::{is_known_category, is_known_severity};

/// Prints the final analysis to stdout; operator-facing notes go to stderr.
pub fn print_report(outcome: &TriageOutcome) {
    let rec = &outcome.record;
    println!("\n🔍 AI BUILD FAILURE ANALYSIS\n");
    println!(
        "Severity: {}{}",
        rec.severity.to_uppercase(),
        vocab_marker(is_known_severity(&rec.severity))
    );
    println!(
        "Category: {}{}",
        rec.category.to_uppercase(),
        vocab_marker(is_known_category(&rec.category))
    );
    println!();
    println!("{}", rec.summary);

    if outcome.rule.confident {
        eprintln!("note: rule classifier matched; severity/category are rule-derived");
    }
}

fn vocab_marker(known: bool) -> &'static str {
    if known {
        ""
    } else {
        " (unrecognized)"
    }
}
