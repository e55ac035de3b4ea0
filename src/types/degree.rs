use crate::error::CgpaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Degree programs with a fixed semester structure and YGPA weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeProgram {
    #[serde(rename = "4-year")]
    FourYear,
    #[serde(rename = "3-year")]
    ThreeYear,
    #[serde(rename = "2-year")]
    TwoYear,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "lateral-entry")]
    LateralEntry,
}

/// Weight of one year average, addressed by its position in the program's year sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearWeight {
    pub year: usize,
    pub weight: f64,
}

const fn year(year: usize, weight: f64) -> YearWeight {
    YearWeight { year, weight }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub semester_count: usize,
    /// Academic year the first entered semester belongs to.
    pub first_year: usize,
    pub weights: &'static [YearWeight],
}

const FOUR_YEAR: DegreeInfo = DegreeInfo {
    id: "4-year",
    label: "4 Year Degree (B.Tech, B.Arch)",
    description: "Standard 4-year engineering/architecture program",
    semester_count: 8,
    first_year: 1,
    weights: &[year(0, 1.0), year(1, 1.0), year(2, 1.5), year(3, 1.5)],
};

const THREE_YEAR: DegreeInfo = DegreeInfo {
    id: "3-year",
    label: "3 Year Degree (BCA, B.Sc)",
    description: "Standard 3-year undergraduate program",
    semester_count: 6,
    first_year: 1,
    weights: &[year(0, 1.0), year(1, 1.0), year(2, 1.0)],
};

const TWO_YEAR: DegreeInfo = DegreeInfo {
    id: "2-year",
    label: "2 Year Degree (M.Tech, MCA)",
    description: "Standard 2-year postgraduate program",
    semester_count: 4,
    first_year: 1,
    weights: &[year(0, 1.0), year(1, 1.0)],
};

const ONE_YEAR: DegreeInfo = DegreeInfo {
    id: "1-year",
    label: "1 Year Degree (MBA, M.Sc)",
    description: "1-year postgraduate program",
    semester_count: 2,
    first_year: 1,
    weights: &[year(0, 1.0)],
};

// Lateral entrants join in the second year: their three year averages are years 2-4 of
// the four-year structure.
const LATERAL_ENTRY: DegreeInfo = DegreeInfo {
    id: "lateral-entry",
    label: "Lateral Entry (4 Year)",
    description: "Diploma holders entering 2nd year directly",
    semester_count: 6,
    first_year: 2,
    weights: &[year(0, 1.0), year(1, 1.5), year(2, 1.5)],
};

impl DegreeProgram {
    pub const ALL: [DegreeProgram; 5] = [
        DegreeProgram::FourYear,
        DegreeProgram::ThreeYear,
        DegreeProgram::TwoYear,
        DegreeProgram::OneYear,
        DegreeProgram::LateralEntry,
    ];

    pub fn info(self) -> &'static DegreeInfo {
        match self {
            DegreeProgram::FourYear => &FOUR_YEAR,
            DegreeProgram::ThreeYear => &THREE_YEAR,
            DegreeProgram::TwoYear => &TWO_YEAR,
            DegreeProgram::OneYear => &ONE_YEAR,
            DegreeProgram::LateralEntry => &LATERAL_ENTRY,
        }
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn semester_count(self) -> usize {
        self.info().semester_count
    }

    pub fn year_count(self) -> usize {
        self.semester_count() / 2
    }

    /// 1-based semester number shown to the student for a 0-based input index.
    pub fn semester_label(self, index: usize) -> usize {
        (self.info().first_year - 1) * 2 + index + 1
    }

    /// 1-based academic year for a 0-based year-average index.
    pub fn year_label(self, index: usize) -> usize {
        self.info().first_year + index
    }

    pub fn weight_of(self, year_index: usize) -> Option<f64> {
        self.info()
            .weights
            .iter()
            .find(|entry| entry.year == year_index)
            .map(|entry| entry.weight)
    }

    /// Human-readable CGPA formula derived from the weighting table.
    pub fn formula(self) -> String {
        let weights = self.info().weights;
        let terms: Vec<String> = weights
            .iter()
            .map(|entry| {
                let name = format!("YGPA{}", self.year_label(entry.year));
                if entry.weight == 1.0 {
                    name
                } else {
                    format!("{}×{}", entry.weight, name)
                }
            })
            .collect();

        match weights {
            [single] if single.weight == 1.0 => format!("CGPA = {}", terms[0]),
            _ => {
                let total: f64 = weights.iter().map(|entry| entry.weight).sum();
                format!("CGPA = ({}) / {}", terms.join(" + "), total)
            }
        }
    }
}

impl fmt::Display for DegreeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DegreeProgram {
    type Err = CgpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DegreeProgram::ALL
            .into_iter()
            .find(|program| program.id() == wanted)
            .ok_or_else(|| CgpaError::UnknownProgram(s.to_string()))
    }
}
