use crate::types::degree::DegreeProgram;
use crate::types::result::{CgpaResult, PerformanceBand};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub calculated_at: DateTime<Utc>,
    pub program: DegreeProgram,
    pub program_label: &'static str,
    pub formula: String,
    pub cgpa: Option<f64>,
    pub percentage: Option<f64>,
    pub band: Option<PerformanceBand>,
    pub filled_count: usize,
    pub total_semesters: usize,
    pub complete: bool,
    pub status: &'static str,
    pub years: Vec<YearRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearRow {
    pub year: usize,
    pub weight: f64,
    pub average: Option<f64>,
}

impl CalculationReport {
    pub fn from_result(result: &CgpaResult) -> Self {
        let program = result.program;
        let years = result
            .year_averages
            .iter()
            .enumerate()
            .map(|(index, average)| YearRow {
                year: program.year_label(index),
                weight: program.weight_of(index).unwrap_or(0.0),
                average: *average,
            })
            .collect();

        Self {
            calculated_at: Utc::now(),
            program,
            program_label: program.info().label,
            formula: program.formula(),
            cgpa: result.cgpa,
            percentage: result.percentage(),
            band: result.band(),
            filled_count: result.filled_count,
            total_semesters: result.total_semesters,
            complete: result.is_complete(),
            status: result.status_message(),
            years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;

    #[test]
    fn lateral_rows_are_labelled_from_year_two() {
        let result = calculate(DegreeProgram::LateralEntry, &[Some(9.0), Some(9.0)]);
        let report = CalculationReport::from_result(&result);

        let labels: Vec<(usize, f64)> = report.years.iter().map(|row| (row.year, row.weight)).collect();
        assert_eq!(labels, vec![(2, 1.0), (3, 1.5), (4, 1.5)]);
        assert_eq!(report.years[0].average, Some(9.0));
        assert_eq!(report.band, Some(PerformanceBand::Outstanding));
        assert!(!report.complete);
    }
}
