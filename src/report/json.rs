use crate::types::report::CalculationReport;

pub fn to_json(report: &CalculationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use crate::types::degree::DegreeProgram;

    #[test]
    fn json_report_contains_cgpa_and_counts() {
        let scores = [9.0, 9.0, 8.0, 8.0, 7.0, 7.0].map(Some);
        let report =
            CalculationReport::from_result(&calculate(DegreeProgram::LateralEntry, &scores));

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"cgpa\": 7.875"));
        assert!(rendered.contains("\"program\": \"lateral-entry\""));
        assert!(rendered.contains("\"filled_count\": 6"));
        assert!(rendered.contains("\"band\": \"very-good\""));
        assert!(rendered.contains("\"calculated_at\""));
    }

    #[test]
    fn json_report_uses_null_for_missing_cgpa() {
        let report = CalculationReport::from_result(&calculate(DegreeProgram::ThreeYear, &[]));
        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"cgpa\": null"));
        assert!(rendered.contains("\"filled_count\": 0"));
    }
}
