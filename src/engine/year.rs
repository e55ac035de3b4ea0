/// YGPA for one academic year: the simple mean of whichever of its two semesters are present.
pub fn year_average(odd: Option<f64>, even: Option<f64>) -> Option<f64> {
    match (odd, even) {
        (Some(odd), Some(even)) => Some((odd + even) / 2.0),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Pairs semesters (0,1), (2,3), ... up to `semester_count`. Missing trailing entries are absent.
pub fn year_averages(scores: &[Option<f64>], semester_count: usize) -> Vec<Option<f64>> {
    (0..semester_count)
        .step_by(2)
        .map(|odd| year_average(score_at(scores, odd), score_at(scores, odd + 1)))
        .collect()
}

fn score_at(scores: &[Option<f64>], index: usize) -> Option<f64> {
    scores.get(index).copied().flatten()
}
