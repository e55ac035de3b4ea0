use crate::types::report::CalculationReport;

pub fn to_markdown(report: &CalculationReport, decimals: usize) -> String {
    let mut output = String::new();
    output.push_str("# CGPA Report\n\n");
    output.push_str(&format!(
        "Program: {} ({})\n",
        report.program_label, report.program
    ));
    output.push_str(&format!("Formula: {}\n\n", report.formula));

    let Some(cgpa) = report.cgpa else {
        output.push_str("No semester results entered.\n");
        return output;
    };

    output.push_str(&format!("CGPA: {cgpa:.decimals$}"));
    if let Some(percentage) = report.percentage {
        output.push_str(&format!(" ({percentage:.1}%)"));
    }
    output.push('\n');
    if let Some(band) = report.band {
        output.push_str(&format!("Performance: {}\n", band.label()));
    }
    output.push_str(&format!(
        "Semesters used: {} of {}\n\n",
        report.filled_count, report.total_semesters
    ));

    output.push_str("## Year Averages\n\n");
    output.push_str("| Year | Weight | YGPA |\n|---|---|---|\n");
    for row in &report.years {
        let average = row
            .average
            .map(|average| format!("{average:.decimals$}"))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("| {} | {} | {} |\n", row.year, row.weight, average));
    }
    output.push('\n');
    output.push_str(report.status);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use crate::types::degree::DegreeProgram;

    #[test]
    fn markdown_report_contains_sections() {
        let scores = [8.0, 9.0, 7.0, 8.0, 9.0, 8.0, 9.0, 9.0].map(Some);
        let report = CalculationReport::from_result(&calculate(DegreeProgram::FourYear, &scores));

        let rendered = to_markdown(&report, 2);
        assert!(rendered.contains("# CGPA Report"));
        assert!(rendered.contains("CGPA: 8.45 (84.5%)"));
        assert!(rendered.contains("Performance: Excellent"));
        assert!(rendered.contains("Semesters used: 8 of 8"));
        assert!(rendered.contains("| 3 | 1.5 | 8.50 |"));
        assert!(rendered.contains("CGPA calculated using all semester results."));
    }

    #[test]
    fn markdown_marks_missing_years_and_partial_status() {
        let report = CalculationReport::from_result(&calculate(
            DegreeProgram::TwoYear,
            &[Some(7.0), Some(8.0)],
        ));

        let rendered = to_markdown(&report, 3);
        assert!(rendered.contains("CGPA: 7.500"));
        assert!(rendered.contains("| 2 | 1 | - |"));
        assert!(rendered.contains("Final CGPA may change after remaining semesters are added."));
    }

    #[test]
    fn markdown_without_scores_says_so() {
        let report = CalculationReport::from_result(&calculate(DegreeProgram::OneYear, &[]));
        let rendered = to_markdown(&report, 2);
        assert!(rendered.contains("No semester results entered."));
        assert!(!rendered.contains("## Year Averages"));
    }
}
