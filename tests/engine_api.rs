use cgpa::{calculate, validate, DegreeProgram, InvalidReason};
use std::thread;

#[test]
fn validate_and_calculate_from_raw_form_values() {
    let raw = ["8", "9", "", "7.5"];
    assert!(raw.iter().all(|value| validate(Some(*value)).valid));

    let scores: Vec<Option<f64>> = raw
        .iter()
        .map(|value| cgpa::parse_score(value).expect("value should parse"))
        .collect();
    let result = calculate(DegreeProgram::TwoYear, &scores);

    assert_eq!(result.filled_count, 3);
    assert_eq!(result.year_averages, vec![Some(8.5), Some(7.5)]);
    assert_eq!(result.cgpa, Some(8.0));
}

#[test]
fn invalid_candidates_carry_reasons() {
    assert_eq!(validate(Some("11")).reason, Some(InvalidReason::OutOfRange));
    assert_eq!(validate(Some("abc")).reason, Some(InvalidReason::NotANumber));
    assert!(validate(None).valid);
}

#[test]
fn concurrent_callers_get_independent_results() {
    let handles: Vec<_> = DegreeProgram::ALL
        .into_iter()
        .map(|program| {
            thread::spawn(move || {
                let scores = vec![Some(6.0); program.semester_count()];
                calculate(program, &scores)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("calculation thread should finish");
        assert_eq!(result.cgpa, Some(6.0));
        assert!(result.is_complete());
    }
}
