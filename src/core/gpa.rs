//! Grade-point aggregation and what-if simulation
//!
//! Pure functions over a caller-held course list: CGPA aggregates, per-term
//! SGPA breakdowns, and copy-on-write grade edits. Nothing here holds state,
//! so repeated calls on an unmodified list always agree.

use crate::core::grades::Grade;
use crate::core::models::Course;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Grouping label for courses whose level-term cell was empty.
pub const UNCATEGORIZED_TERM: &str = "Uncategorized";

/// Weighted grade-point totals over a course list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaSummary {
    /// Sum of credits over contributing courses
    pub total_credits: f32,
    /// Sum of credit × grade-point over contributing courses
    pub total_grade_points: f32,
    /// `total_grade_points / total_credits`, or 0 with no contributing credits
    pub cgpa: f32,
}

/// Count of one grade within a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeCount {
    /// The grade
    pub grade: Grade,
    /// How many positive-credit courses in the term carry it
    pub count: usize,
}

/// Per-term aggregate: SGPA plus the term's grade distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermSummary {
    /// The level-term label the group was keyed on
    pub term: String,
    /// Term-local GPA, by the same rule as the overall CGPA
    pub sgpa: f32,
    /// Grade distribution in grade-table order
    pub grade_counts: Vec<GradeCount>,
}

/// Compute weighted grade-point totals over the course list.
///
/// Only courses with positive credit contribute; everything else stays in the
/// list but is left out of the sums. Linear in the input, no side effects.
#[must_use]
pub fn aggregate(courses: &[Course]) -> GpaSummary {
    let mut total_credits = 0.0f32;
    let mut total_grade_points = 0.0f32;

    for course in courses {
        if course.counts_toward_gpa() {
            total_credits += course.credit;
            total_grade_points += course.credit * course.grade.point();
        }
    }

    let cgpa = if total_credits > 0.0 {
        total_grade_points / total_credits
    } else {
        0.0
    };

    GpaSummary {
        total_credits,
        total_grade_points,
        cgpa,
    }
}

/// Group the course list by level-term and aggregate each group.
///
/// Courses with an empty term label group under [`UNCATEGORIZED_TERM`]. The
/// returned terms are sorted lexically by label; that ordering is for display
/// and carries no other meaning.
#[must_use]
pub fn term_breakdown(courses: &[Course]) -> Vec<TermSummary> {
    let mut grouped: HashMap<&str, Vec<&Course>> = HashMap::new();
    for course in courses {
        let term = if course.level_term.is_empty() {
            UNCATEGORIZED_TERM
        } else {
            course.level_term.as_str()
        };
        grouped.entry(term).or_default().push(course);
    }

    let mut terms: Vec<TermSummary> = grouped
        .into_iter()
        .map(|(term, term_courses)| summarize_term(term, &term_courses))
        .collect();

    terms.sort_by(|a, b| a.term.cmp(&b.term));
    terms
}

/// Aggregate a single term group: SGPA plus grade counts in table order.
fn summarize_term(term: &str, term_courses: &[&Course]) -> TermSummary {
    let mut total_credits = 0.0f32;
    let mut total_points = 0.0f32;
    let mut counts: HashMap<Grade, usize> = HashMap::new();

    for course in term_courses {
        if course.counts_toward_gpa() {
            total_credits += course.credit;
            total_points += course.credit * course.grade.point();
            *counts.entry(course.grade).or_insert(0) += 1;
        }
    }

    let sgpa = if total_credits > 0.0 {
        total_points / total_credits
    } else {
        0.0
    };

    let grade_counts = Grade::ALL
        .iter()
        .filter_map(|grade| {
            counts.get(grade).map(|&count| GradeCount {
                grade: *grade,
                count,
            })
        })
        .collect();

    TermSummary {
        term: term.to_string(),
        sgpa,
        grade_counts,
    }
}

/// Return a new course list with the matching course's grade replaced.
///
/// The grade type already constrains the new value to the grade table, so no
/// further validation happens here. `original_grade` is untouched. When no
/// course matches the id the list comes back unchanged; that is not an error.
#[must_use]
pub fn set_grade(courses: &[Course], course_id: Uuid, new_grade: Grade) -> Vec<Course> {
    courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if course.id == course_id {
                course.grade = new_grade;
            }
            course
        })
        .collect()
}

/// Return a new course list with the matching course's grade restored to the
/// grade it was parsed with. No-op (an unchanged copy) when no course matches.
#[must_use]
pub fn reset_grade(courses: &[Course], course_id: Uuid) -> Vec<Course> {
    courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if course.id == course_id {
                course.grade = course.original_grade;
            }
            course
        })
        .collect()
}

/// Whether any course carries a simulated (modified) grade.
#[must_use]
pub fn has_changes(courses: &[Course]) -> bool {
    courses.iter().any(Course::is_modified)
}

/// Number of distinct level-term labels in the list.
///
/// Used as "terms completed so far" by the target-GPA solver; counts every
/// label as-is, including `"N/A"` from data without a level-term column.
#[must_use]
pub fn completed_terms(courses: &[Course]) -> usize {
    courses
        .iter()
        .map(|course| course.level_term.as_str())
        .collect::<HashSet<_>>()
        .len()
}
