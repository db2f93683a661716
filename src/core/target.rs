//! Target-CGPA solver
//!
//! Inverse of the aggregation rule: given the current aggregate state and a
//! desired final CGPA, solve for the average GPA required over the estimated
//! remaining terms. Future terms are assumed to carry the same average credit
//! load as the terms completed so far.

use serde::Serialize;

/// Planned program length in terms (4 years, 2 terms per year).
pub const DEFAULT_TOTAL_TERMS: usize = 8;

/// Result of a target-GPA computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetOutcome {
    /// Average GPA required across the remaining terms; raw and unclamped, so
    /// it may be negative (target already exceeded) or above 4.0 (unreachable)
    pub required_gpa: f32,
    /// False when the inputs admit no answer (no remaining credits, or a
    /// non-positive target); callers must not display `required_gpa` then
    pub is_valid: bool,
}

/// Terms left in the program, never negative.
#[must_use]
pub fn remaining_terms(completed_terms: usize, total_planned_terms: usize) -> usize {
    total_planned_terms.saturating_sub(completed_terms)
}

/// Estimated credits over the remaining terms, extrapolating the average
/// credit load of the completed ones. Zero when nothing is completed yet or
/// nothing remains.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimated_remaining_credits(
    completed_credits: f32,
    completed_terms: usize,
    total_planned_terms: usize,
) -> f32 {
    let remaining = remaining_terms(completed_terms, total_planned_terms);
    if completed_terms == 0 || remaining == 0 {
        return 0.0;
    }
    (completed_credits / completed_terms as f32) * remaining as f32
}

/// Solve for the average GPA needed over the remaining terms to land on
/// `target_cgpa`.
///
/// The result is deliberately unclamped: values above 4.0 mean the target is
/// unreachable and negative values mean it is already exceeded. Labeling
/// those cases is presentation-layer work; the solver just reports the
/// number whenever the inputs admit one.
#[must_use]
pub fn required_gpa(
    current_cgpa: f32,
    completed_credits: f32,
    completed_terms: usize,
    target_cgpa: f32,
    total_planned_terms: usize,
) -> TargetOutcome {
    let remaining_credits =
        estimated_remaining_credits(completed_credits, completed_terms, total_planned_terms);

    if !target_cgpa.is_finite() || target_cgpa <= 0.0 || remaining_credits <= 0.0 {
        return TargetOutcome {
            required_gpa: 0.0,
            is_valid: false,
        };
    }

    let required_total_points = target_cgpa * (completed_credits + remaining_credits);
    let current_total_points = current_cgpa * completed_credits;

    TargetOutcome {
        required_gpa: (required_total_points - current_total_points) / remaining_credits,
        is_valid: true,
    }
}
