//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::BreakStrategy;
use crate::error::CycleBreakerError;
use crate::planner::{BreakPlan, PlanningOutcome};
use crate::utils::string::{join_limited, pluralize};

/// Number of merged cycles listed under a plan before eliding the rest
const ALSO_RESOLVES_SHOWN: usize = 3;

pub struct HumanReportGenerator {
    max_plans: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_plans: Option<usize>) -> Self {
        Self { max_plans }
    }

    fn write_plan(
        &self,
        output: &mut String,
        index: usize,
        plan: &BreakPlan,
    ) -> Result<(), CycleBreakerError> {
        let badge = match plan.strategy() {
            BreakStrategy::Manual => style(plan.strategy().to_string()).red().bold(),
            _ => style(plan.strategy().to_string()).green().bold(),
        };
        writeln!(output, "{} Plan #{}: {}", style("✂").cyan(), index + 1, badge)?;

        match plan.broken_edge() {
            Some(edge) => writeln!(
                output,
                "  {} Break: {} → {} ({})",
                style("🔗").cyan(),
                style(&edge.from).yellow(),
                style(&edge.to).yellow(),
                style(edge.injection_kind).dim()
            )?,
            None => writeln!(
                output,
                "  {} Break: no edge can be cut automatically",
                style("🔗").cyan()
            )?,
        }

        writeln!(output, "  {} Cycle: {}", style("🔄").yellow(), plan.cycle())?;
        if !plan.also_resolves().is_empty() {
            writeln!(
                output,
                "  {} Also resolves: {}",
                style("➕").dim(),
                join_limited(plan.also_resolves(), ALSO_RESOLVES_SHOWN)
            )?;
        }
        writeln!(
            output,
            "  {} {}\n",
            style("💬").dim(),
            style(plan.rationale()).dim()
        )?;

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let mut output = String::new();

        if !outcome.has_cycles() {
            write!(
                output,
                "\n{} No dependency cycles detected among {} {}.\n",
                style("✅").green().bold(),
                outcome.component_count(),
                pluralize("component", outcome.component_count())
            )?;
            return Ok(output);
        }

        let scc_count = outcome.non_trivial_sccs().count();
        let plan_count = outcome.plans().len();
        let qualifier = if outcome.is_truncated() {
            " (enumeration truncated)"
        } else {
            ""
        };
        write!(
            output,
            "\n{} Found {} dependency {}{} in {} strongly connected {}, {} break {}:\n\n",
            style("❌").red().bold(),
            style(outcome.cycle_count()).red().bold(),
            pluralize("cycle", outcome.cycle_count()),
            qualifier,
            style(scc_count).yellow().bold(),
            pluralize("component", scc_count),
            style(plan_count).cyan().bold(),
            pluralize("plan", plan_count)
        )?;

        let shown = self.max_plans.unwrap_or(plan_count).min(plan_count);
        for (i, plan) in outcome.plans().iter().take(shown).enumerate() {
            self.write_plan(&mut output, i, plan)?;
        }

        if shown < plan_count {
            writeln!(
                output,
                "{} Showing {} of {} plans. Use --max-plans to see more.\n",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(plan_count).yellow()
            )?;
        }

        for truncation in outcome.truncations() {
            writeln!(
                output,
                "{} Cycle enumeration stopped at {} {} in SCC {{{}}}. Plans cover only the \
                 enumerated cycles; raise --max-cycles to see more.",
                style("⚠").yellow().bold(),
                truncation.budget,
                pluralize("cycle", truncation.budget),
                truncation.scc.join(", ")
            )?;
        }

        let manual = outcome.manual_count();
        if manual > 0 {
            writeln!(
                output,
                "{} {} {} no automated strategy can break and {} manual review.",
                style("💡").yellow(),
                style(manual).red().bold(),
                pluralize("cycle", manual),
                if manual == 1 { "needs" } else { "need" }
            )?;
        }
        writeln!(
            output,
            "{} Apply the plans in order: lazy injection first, manual review last.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
