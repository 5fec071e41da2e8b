//! JUnit XML format report generation
//!
//! Every break plan becomes a test case. MANUAL plans fail, since no
//! automated transformation exists for them, and a truncated enumeration
//! fails the `cycle-enumeration` case.

use std::fmt::Write;

use super::ReportGenerator;
use crate::constants::output::JUNIT_SUITE_NAME;
use crate::error::CycleBreakerError;
use crate::planner::PlanningOutcome;

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let mut output = String::new();

        let tests = outcome.plans().len() + 1;
        let failures = outcome.manual_count() + usize::from(outcome.is_truncated());

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="cycle-breaker" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="{JUNIT_SUITE_NAME}" tests="{tests}" failures="{failures}">"#
        )?;

        if outcome.is_truncated() {
            writeln!(
                output,
                r#"    <testcase name="cycle-enumeration" classname="cycle-breaker">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Cycle enumeration budget exhausted">"#
            )?;
            for truncation in outcome.truncations() {
                writeln!(
                    output,
                    "Stopped after {} cycles in SCC {{{}}}",
                    truncation.budget,
                    xml_escape(&truncation.scc.join(", "))
                )?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        } else {
            writeln!(
                output,
                r#"    <testcase name="cycle-enumeration" classname="cycle-breaker" />"#
            )?;
        }

        for plan in outcome.plans() {
            let name = xml_escape(&plan.cycle().to_string());
            let classname = plan.strategy();

            if plan.is_manual() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="{classname}">"#
                )?;
                writeln!(
                    output,
                    r#"      <failure message="Cycle requires manual review">{}</failure>"#,
                    xml_escape(plan.rationale())
                )?;
                writeln!(output, r#"    </testcase>"#)?;
            } else {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="{classname}">"#
                )?;
                writeln!(
                    output,
                    r#"      <system-out>{}</system-out>"#,
                    xml_escape(plan.rationale())
                )?;
                writeln!(output, r#"    </testcase>"#)?;
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_manual_plans_fail() {
        let report = JunitReportGenerator::new()
            .generate_report(&fixtures::mixed_outcome())
            .unwrap();

        assert!(report.contains(r#"<testsuites name="cycle-breaker" tests="3" failures="1">"#));
        assert!(report.contains(r#"<testcase name="[A -&gt; B]" classname="LAZY_INJECTION">"#));
        assert!(report.contains(r#"<testcase name="[C]" classname="MANUAL">"#));
        assert!(report.contains(r#"<failure message="Cycle requires manual review">"#));
        assert!(report.contains(r#"<testcase name="cycle-enumeration" classname="cycle-breaker" />"#));
    }

    #[test]
    fn test_truncation_fails_enumeration_case() {
        let report = JunitReportGenerator::new()
            .generate_report(&fixtures::truncated_outcome())
            .unwrap();

        assert!(report.contains(r#"<failure message="Cycle enumeration budget exhausted">"#));
        assert!(report.contains("Stopped after 2 cycles in SCC {A, B, C, D}"));
    }

    #[test]
    fn test_zero_budget_fails() {
        let report = JunitReportGenerator::new()
            .generate_report(&fixtures::zero_budget_outcome())
            .unwrap();

        assert!(report.contains(r#"tests="1" failures="1""#));
        assert!(report.contains("Stopped after 0 cycles in SCC {A, B}"));
    }

    #[test]
    fn test_no_cycles_passes() {
        let report = JunitReportGenerator::new()
            .generate_report(&fixtures::acyclic_outcome())
            .unwrap();

        assert!(report.contains(r#"tests="1" failures="0""#));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("Repo<T> & \"x\""), "Repo&lt;T&gt; &amp; &quot;x&quot;");
    }
}
