//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::CycleBreakerError;
use crate::planner::PlanningOutcome;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError> {
        let report = json!({
            "has_cycles": outcome.has_cycles(),
            "component_count": outcome.component_count(),
            "scc_count": outcome.non_trivial_sccs().count(),
            "cycle_count": outcome.cycle_count(),
            "manual_count": outcome.manual_count(),
            "truncated": outcome.is_truncated(),
            "truncations": outcome.truncations(),
            "plans": outcome.plans(),
        });

        serde_json::to_string_pretty(&report).map_err(CycleBreakerError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_json_report_no_cycles() {
        let report = JsonReportGenerator::new()
            .generate_report(&fixtures::acyclic_outcome())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["plans"].as_array().unwrap().len(), 0);
        assert_eq!(json["truncated"], false);
    }

    #[test]
    fn test_json_report_plan_structure() {
        let report = JsonReportGenerator::new()
            .generate_report(&fixtures::mixed_outcome())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["scc_count"], 2);
        assert_eq!(json["manual_count"], 1);

        let lazy = &json["plans"][0];
        assert_eq!(lazy["strategy"], "LAZY_INJECTION");
        assert_eq!(lazy["cycle"], json!(["A", "B"]));
        assert_eq!(
            lazy["broken_edge"],
            json!({"from": "B", "to": "A", "injection_kind": "FIELD", "mutable": true})
        );
        assert_eq!(lazy["also_resolves"], json!([]));

        let manual = &json["plans"][1];
        assert_eq!(manual["strategy"], "MANUAL");
        assert_eq!(manual["broken_edge"], Value::Null);
    }

    #[test]
    fn test_json_report_truncations() {
        let report = JsonReportGenerator::new()
            .generate_report(&fixtures::truncated_outcome())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["truncated"], true);
        assert_eq!(
            json["truncations"],
            json!([{"scc": ["A", "B", "C", "D"], "budget": 2, "cycles_found": 2}])
        );
    }

    #[test]
    fn test_json_report_zero_budget() {
        let report = JsonReportGenerator::new()
            .generate_report(&fixtures::zero_budget_outcome())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["truncated"], true);
        assert_eq!(
            json["truncations"],
            json!([{"scc": ["A", "B"], "budget": 0, "cycles_found": 0}])
        );
    }

    #[test]
    fn test_json_report_is_deterministic() {
        let first = JsonReportGenerator::new()
            .generate_report(&fixtures::mixed_outcome())
            .unwrap();
        let second = JsonReportGenerator
            .generate_report(&fixtures::mixed_outcome())
            .unwrap();

        assert_eq!(first, second);
    }
}
