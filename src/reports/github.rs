//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::CycleBreakerError;
use crate::planner::PlanningOutcome;
use crate::utils::string::pluralize;

/// Escape a workflow command message
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property such as `title`
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let mut output = String::new();

        if !outcome.has_cycles() {
            writeln!(
                output,
                "::notice title=Dependency Check::No dependency injection cycles detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Dependency Cycles::Found {} dependency {}{} needing {} break {}",
            outcome.cycle_count(),
            pluralize("cycle", outcome.cycle_count()),
            if outcome.is_truncated() {
                " (enumeration truncated)"
            } else {
                ""
            },
            outcome.plans().len(),
            pluralize("plan", outcome.plans().len())
        )?;

        for (i, plan) in outcome.plans().iter().enumerate() {
            let level = if plan.is_manual() { "error" } else { "warning" };
            let title = escape_property(&format!("Plan {} ({})", i + 1, plan.strategy()));
            writeln!(
                output,
                "::{level} title={title}::{}",
                escape_data(plan.rationale())
            )?;
        }

        for truncation in outcome.truncations() {
            writeln!(
                output,
                "::warning title=Enumeration Truncated::Stopped after {} cycles in SCC {}",
                truncation.budget,
                escape_data(&truncation.scc.join(", "))
            )?;
        }

        Ok(output)
    }
}
