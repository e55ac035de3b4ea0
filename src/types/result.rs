use crate::types::degree::DegreeProgram;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaResult {
    pub program: DegreeProgram,
    pub cgpa: Option<f64>,
    pub filled_count: usize,
    pub total_semesters: usize,
    pub year_averages: Vec<Option<f64>>,
}

impl CgpaResult {
    pub fn empty(program: DegreeProgram) -> Self {
        Self {
            program,
            cgpa: None,
            filled_count: 0,
            total_semesters: program.semester_count(),
            year_averages: vec![None; program.year_count()],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count == self.total_semesters
    }

    /// CGPA as a share of the 10-point scale.
    pub fn percentage(&self) -> Option<f64> {
        self.cgpa.map(|cgpa| cgpa * 10.0)
    }

    pub fn band(&self) -> Option<PerformanceBand> {
        self.cgpa.map(PerformanceBand::from_cgpa)
    }

    pub fn status_message(&self) -> &'static str {
        if self.is_complete() {
            "CGPA calculated using all semester results."
        } else {
            "Final CGPA may change after remaining semesters are added."
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceBand {
    Outstanding,
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
}

impl PerformanceBand {
    pub fn from_cgpa(cgpa: f64) -> Self {
        match cgpa {
            c if c >= 9.0 => PerformanceBand::Outstanding,
            c if c >= 8.0 => PerformanceBand::Excellent,
            c if c >= 7.0 => PerformanceBand::VeryGood,
            c if c >= 6.0 => PerformanceBand::Good,
            c if c >= 5.0 => PerformanceBand::Average,
            _ => PerformanceBand::BelowAverage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Outstanding => "Outstanding",
            PerformanceBand::Excellent => "Excellent",
            PerformanceBand::VeryGood => "Very Good",
            PerformanceBand::Good => "Good",
            PerformanceBand::Average => "Average",
            PerformanceBand::BelowAverage => "Below Average",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_use_lower_inclusive_thresholds() {
        assert_eq!(PerformanceBand::from_cgpa(10.0), PerformanceBand::Outstanding);
        assert_eq!(PerformanceBand::from_cgpa(9.0), PerformanceBand::Outstanding);
        assert_eq!(PerformanceBand::from_cgpa(8.99), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_cgpa(7.0), PerformanceBand::VeryGood);
        assert_eq!(PerformanceBand::from_cgpa(6.5), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_cgpa(5.0), PerformanceBand::Average);
        assert_eq!(PerformanceBand::from_cgpa(4.99), PerformanceBand::BelowAverage);
        assert_eq!(PerformanceBand::VeryGood.label(), "Very Good");
    }

    #[test]
    fn empty_result_has_no_cgpa_and_partial_status() {
        let result = CgpaResult::empty(DegreeProgram::TwoYear);
        assert_eq!(result.cgpa, None);
        assert_eq!(result.total_semesters, 4);
        assert_eq!(result.year_averages, vec![None, None]);
        assert_eq!(result.percentage(), None);
        assert_eq!(result.band(), None);
        assert!(!result.is_complete());
    }

    #[test]
    fn complete_result_reports_full_status() {
        let result = CgpaResult {
            program: DegreeProgram::OneYear,
            cgpa: Some(8.0),
            filled_count: 2,
            total_semesters: 2,
            year_averages: vec![Some(8.0)],
        };
        assert!(result.is_complete());
        assert_eq!(result.percentage(), Some(80.0));
        assert_eq!(result.band(), Some(PerformanceBand::Excellent));
        assert_eq!(
            result.status_message(),
            "CGPA calculated using all semester results."
        );
    }
}
