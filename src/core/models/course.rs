//! Course model

use crate::core::grades::Grade;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One academic course result, as extracted from a pasted portal table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque unique identifier, generated at parse time (stable for the session)
    pub id: Uuid,

    /// Course code (e.g., "CSE101"); "N/A" when the column or cell is missing
    pub code: String,

    /// Credit hours (can be fractional; non-positive values are kept in the
    /// list but excluded from aggregate math)
    pub credit: f32,

    /// Free-text level/term label (e.g., "L-2/T-1"); grouping key for the
    /// per-term breakdown
    pub level_term: String,

    /// Whether the course is a sessional (lab/project) course
    pub sessional: bool,

    /// Current letter grade; the only field grade simulation may change
    pub grade: Grade,

    /// The grade as originally parsed; never modified after construction
    pub original_grade: Grade,

    /// Free-text course type label, informational only
    pub course_type: String,
}

impl Course {
    /// Create a new course with a fresh id.
    ///
    /// Both `grade` and `original_grade` start at the parsed grade; only the
    /// former may diverge later via simulation.
    #[must_use]
    pub fn new(
        code: String,
        credit: f32,
        level_term: String,
        sessional: bool,
        grade: Grade,
        course_type: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            credit,
            level_term,
            sessional,
            grade,
            original_grade: grade,
            course_type,
        }
    }

    /// Whether this course counts toward grade-point aggregates.
    #[must_use]
    pub fn counts_toward_gpa(&self) -> bool {
        self.credit > 0.0
    }

    /// Whether the grade has been modified since parsing.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.grade != self.original_grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CSE101".to_string(),
            3.0,
            "L-1/T-1".to_string(),
            false,
            Grade::A,
            "Theory".to_string(),
        );

        assert_eq!(course.code, "CSE101");
        assert!((course.credit - 3.0).abs() < f32::EPSILON);
        assert_eq!(course.level_term, "L-1/T-1");
        assert!(!course.sessional);
        assert_eq!(course.grade, Grade::A);
        assert_eq!(course.original_grade, Grade::A);
        assert_eq!(course.course_type, "Theory");
        assert!(!course.is_modified());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Course::new(
            "CSE101".to_string(),
            3.0,
            "L-1/T-1".to_string(),
            false,
            Grade::A,
            "N/A".to_string(),
        );
        let b = Course::new(
            "CSE101".to_string(),
            3.0,
            "L-1/T-1".to_string(),
            false,
            Grade::A,
            "N/A".to_string(),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_zero_credit_excluded_from_gpa() {
        let mut course = Course::new(
            "CSE100".to_string(),
            0.0,
            "L-1/T-1".to_string(),
            true,
            Grade::APlus,
            "Sessional".to_string(),
        );
        assert!(!course.counts_toward_gpa());

        course.credit = 0.75;
        assert!(course.counts_toward_gpa());
    }

    #[test]
    fn test_is_modified_tracks_grade_only() {
        let mut course = Course::new(
            "CSE101".to_string(),
            3.0,
            "L-1/T-1".to_string(),
            false,
            Grade::B,
            "N/A".to_string(),
        );

        course.grade = Grade::APlus;
        assert!(course.is_modified());
        assert_eq!(course.original_grade, Grade::B);

        course.grade = course.original_grade;
        assert!(!course.is_modified());
    }
}
