//! Integration tests for the target-GPA solver

use cgpa_analytics::core::gpa::{aggregate, completed_terms};
use cgpa_analytics::core::parser::parse_course_data;
use cgpa_analytics::core::target::{required_gpa, DEFAULT_TOTAL_TERMS};

const TOL: f32 = 1e-3;

#[test]
fn test_midway_standing_solves_above_four() {
    // 3.5 CGPA over 60 credits, 4 of 8 terms done, target 3.8:
    // estimated remaining credits (60/4)*4 = 60,
    // required = (3.8*120 - 3.5*60) / 60 = 4.1.
    let outcome = required_gpa(3.5, 60.0, 4, 3.8, DEFAULT_TOTAL_TERMS);

    assert!(outcome.is_valid);
    assert!((outcome.required_gpa - 4.1).abs() < TOL);
}

#[test]
fn test_program_already_finished() {
    let outcome = required_gpa(3.5, 120.0, DEFAULT_TOTAL_TERMS, 3.8, DEFAULT_TOTAL_TERMS);
    assert!(!outcome.is_valid);
}

#[test]
fn test_driven_by_parsed_transcript() {
    let raw = std::fs::read_to_string("samples/sample_transcript.txt")
        .expect("read sample transcript");
    let courses = parse_course_data(&raw).expect("parse sample transcript");

    let summary = aggregate(&courses);
    let terms_done = completed_terms(&courses);
    assert_eq!(terms_done, 2);

    let outcome = required_gpa(
        summary.cgpa,
        summary.total_credits,
        terms_done,
        3.8,
        DEFAULT_TOTAL_TERMS,
    );
    assert!(outcome.is_valid);

    // Cross-check against the closed form: six remaining terms at the
    // average load of the two completed ones.
    let remaining_credits = (summary.total_credits / 2.0) * 6.0;
    let expected = (3.8 * (summary.total_credits + remaining_credits)
        - summary.cgpa * summary.total_credits)
        / remaining_credits;
    assert!((outcome.required_gpa - expected).abs() < TOL);
}

#[test]
fn test_custom_program_length() {
    // 12-term program: 4 done, 8 remaining at 15 credits average.
    let outcome = required_gpa(3.0, 60.0, 4, 3.5, 12);
    assert!(outcome.is_valid);
    // (3.5*180 - 3.0*60) / 120 = (630-180)/120 = 3.75
    assert!((outcome.required_gpa - 3.75).abs() < TOL);
}

#[test]
fn test_unreachable_and_exceeded_targets_are_not_clamped() {
    let unreachable = required_gpa(2.0, 90.0, 6, 3.9, DEFAULT_TOTAL_TERMS);
    assert!(unreachable.is_valid);
    assert!(unreachable.required_gpa > 4.0);

    // (1.5*120 - 3.95*60) / 60 = -0.95: the standing already beats the target.
    let exceeded = required_gpa(3.95, 60.0, 4, 1.5, DEFAULT_TOTAL_TERMS);
    assert!(exceeded.is_valid);
    assert!((exceeded.required_gpa - -0.95).abs() < TOL);
    assert!(exceeded.required_gpa < 0.0);

    // A modest target just below the current CGPA still needs positive
    // future work because the remaining credits dilute the standing.
    let diluted = required_gpa(3.95, 60.0, 4, 2.0, DEFAULT_TOTAL_TERMS);
    assert!(diluted.is_valid);
    assert!((diluted.required_gpa - 0.05).abs() < TOL);
}
