//! SCC and cycle listing for the `cycles` command

use std::fmt::Write;

use console::style;
use serde_json::json;

use super::ReportGenerator;
use crate::error::CycleBreakerError;
use crate::planner::PlanningOutcome;
use crate::utils::string::pluralize;

/// Lists non-trivial SCCs with the elementary cycles found inside each
pub struct CycleListReportGenerator {
    json: bool,
}

impl CycleListReportGenerator {
    pub fn human() -> Self {
        Self { json: false }
    }

    pub fn json() -> Self {
        Self { json: true }
    }

    fn generate_json(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let sccs: Vec<_> = outcome
            .non_trivial_sccs()
            .map(|scc| {
                let cycles: Vec<_> = outcome
                    .cycles()
                    .iter()
                    .filter(|cycle| cycle.components().iter().all(|id| scc.contains(id)))
                    .collect();
                let truncated = outcome
                    .truncations()
                    .iter()
                    .any(|t| t.scc.as_slice() == scc.members());

                json!({
                    "members": scc.members(),
                    "self_loop": scc.has_self_loop(),
                    "truncated": truncated,
                    "cycles": cycles,
                })
            })
            .collect();

        let report = json!({
            "component_count": outcome.component_count(),
            "scc_count": sccs.len(),
            "cycle_count": outcome.cycle_count(),
            "truncated": outcome.is_truncated(),
            "sccs": sccs,
        });

        serde_json::to_string_pretty(&report).map_err(CycleBreakerError::Json)
    }

    fn generate_human(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let mut output = String::new();

        let sccs: Vec<_> = outcome.non_trivial_sccs().collect();
        if sccs.is_empty() {
            writeln!(
                output,
                "\n{} The component graph is acyclic.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} {} strongly connected {} with {} elementary {}:\n",
            style("🔄").yellow(),
            style(sccs.len()).yellow().bold(),
            pluralize("component", sccs.len()),
            style(outcome.cycle_count()).red().bold(),
            pluralize("cycle", outcome.cycle_count())
        )?;

        for (i, scc) in sccs.iter().enumerate() {
            writeln!(
                output,
                "{} SCC #{} ({} {})",
                style("📦").blue(),
                i + 1,
                scc.len(),
                pluralize("member", scc.len())
            )?;
            for member in scc.members() {
                writeln!(output, "    {} {}", style("•").dim(), style(member).bold())?;
            }

            for cycle in outcome
                .cycles()
                .iter()
                .filter(|cycle| cycle.components().iter().all(|id| scc.contains(id)))
            {
                writeln!(output, "  {} {}", style("→").dim(), cycle)?;
            }

            if let Some(truncation) = outcome
                .truncations()
                .iter()
                .find(|t| t.scc.as_slice() == scc.members())
            {
                writeln!(
                    output,
                    "  {} enumeration stopped at {} cycles",
                    style("⚠").yellow().bold(),
                    truncation.budget
                )?;
            }
            writeln!(output)?;
        }

        Ok(output)
    }
}

impl ReportGenerator for CycleListReportGenerator {
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        if self.json {
            self.generate_json(outcome)
        } else {
            self.generate_human(outcome)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_json_groups_cycles_by_scc() {
        let report = CycleListReportGenerator::json()
            .generate_report(&fixtures::mixed_outcome())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(
            json["sccs"],
            json!([
                {"members": ["A", "B"], "self_loop": false, "truncated": false, "cycles": [["A", "B"]]},
                {"members": ["C"], "self_loop": true, "truncated": false, "cycles": [["C"]]}
            ])
        );
    }

    #[test]
    fn test_human_listing() {
        let report = CycleListReportGenerator::human()
            .generate_report(&fixtures::truncated_outcome())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("1 strongly connected component with 2 elementary cycles"));
        assert!(report.contains("enumeration stopped at 2 cycles"));
    }

    #[test]
    fn test_acyclic_listing() {
        let report = CycleListReportGenerator::human()
            .generate_report(&fixtures::acyclic_outcome())
            .unwrap();

        assert!(report.contains("acyclic"));
    }
}
