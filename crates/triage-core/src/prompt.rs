/// Fixed analysis prompt. The headings are part of the output contract and
/// the response parser depends on the `Severity:` / `Category:` label lines.
pub fn build_analysis_prompt(log_text: &str) -> String {
    format!(
        r#"You are a senior Software Reliability Engineer.

TASK:
Analyze the Jenkins build log provided below.

STRICT RULES:
- Base your analysis ONLY on information explicitly present in the log.
- Do NOT assume the technology (Git, database, API, etc.) unless it is clearly mentioned in the log.
- Do NOT guess the system, service, or component.
- Do NOT introduce entities, tools, or technologies not present in the log.
- If the log is ambiguous, explicitly state: "Insufficient information in log".
- If a component is not explicitly named, describe it generically
  (e.g., "a remote service", "a network endpoint", "a build dependency").

OUTPUT FORMAT (DO NOT CHANGE HEADINGS):

BUILD FAILURE ANALYSIS
----------------------
Severity: <minor|major|blocker|unknown>
Category: <build|test|infra|performance|unknown>

Failure Reason:
<Describe only what is explicitly visible in the log>

Root Cause (Evidence-Based):
- State only what can be directly concluded from the log.
- If the log does not identify the component, explicitly say so.
- Do NOT name systems or tools unless explicitly mentioned.

Suggested Fix:
<Provide a generic next step without naming specific systems or technologies>

Next Debugging Steps:
- Step 1
- Step 2
- Step 3

Log:
{log_text}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_log_verbatim() {
        let p = build_analysis_prompt("mvn: dependency not found");
        assert!(p.contains("mvn: dependency not found"));
        assert!(p.contains("BUILD FAILURE ANALYSIS"));
        assert!(p.contains("Severity:"));
        assert!(p.contains("Category:"));
    }
}
