use crate::engine::validate::check_score;
use crate::engine::year::year_averages;
use crate::types::degree::{DegreeProgram, YearWeight};
use crate::types::result::CgpaResult;
use tracing::{debug, warn};

/// Folds per-semester SGPAs into year averages and then into the program's CGPA.
///
/// Only years that have at least one present semester take part: their weights form the
/// denominator, so a partially filled transcript yields the CGPA of the years completed so
/// far. Entries past the program's semester count are ignored, as are values that are not
/// finite or lie outside `[0, 10]`.
pub fn calculate(program: DegreeProgram, scores: &[Option<f64>]) -> CgpaResult {
    let total_semesters = program.semester_count();
    if scores.len() > total_semesters {
        warn!(
            program = %program,
            given = scores.len(),
            max = total_semesters,
            "ignoring semester scores past the end of the program"
        );
    }

    let usable: Vec<Option<f64>> = scores
        .iter()
        .take(total_semesters)
        .enumerate()
        .map(|(index, score)| usable_score(program, index, *score))
        .collect();

    let filled_count = usable.iter().flatten().count();
    if filled_count == 0 {
        debug!(program = %program, "no semester scores present");
        return CgpaResult::empty(program);
    }

    let years = year_averages(&usable, total_semesters);
    let cgpa = weighted_mean(&years, program.info().weights);
    debug!(program = %program, ?years, ?cgpa, filled_count, "cgpa calculated");

    CgpaResult {
        program,
        cgpa,
        filled_count,
        total_semesters,
        year_averages: years,
    }
}

fn usable_score(program: DegreeProgram, index: usize, score: Option<f64>) -> Option<f64> {
    let value = score?;
    match check_score(value) {
        Ok(value) => Some(value),
        Err(reason) => {
            warn!(
                semester = program.semester_label(index),
                value,
                reason = reason.code(),
                "treating unusable semester score as absent"
            );
            None
        }
    }
}

fn weighted_mean(years: &[Option<f64>], weights: &[YearWeight]) -> Option<f64> {
    let (weighted_sum, total_weight) = weights
        .iter()
        .filter_map(|entry| {
            years
                .get(entry.year)
                .copied()
                .flatten()
                .map(|average| (average * entry.weight, entry.weight))
        })
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value, total + weight)
        });

    if total_weight > 0.0 {
        // keep float drift from escaping the 10-point scale
        Some((weighted_sum / total_weight).clamp(0.0, 10.0))
    } else {
        None
    }
}
