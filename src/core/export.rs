//! Markdown export of a CGPA analysis
//!
//! Renders the aggregate, the per-term breakdown, and the course list into a
//! Markdown document via template substitution. The output renders well in
//! GitHub and VS Code.

use crate::core::gpa::{self, TermSummary};
use crate::core::models::Course;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Embedded Markdown summary template
const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.md");

/// Render a course list into a Markdown summary document.
#[must_use]
pub fn render_summary(courses: &[Course]) -> String {
    let summary = gpa::aggregate(courses);
    let terms = gpa::term_breakdown(courses);

    let simulation_note = if gpa::has_changes(courses) {
        "\n> Simulation mode: one or more grades differ from the parsed originals.\n"
    } else {
        ""
    };

    let mut output = SUMMARY_TEMPLATE.to_string();
    output = output.replace("{{simulation_note}}", simulation_note);
    output = output.replace("{{cgpa}}", &format!("{:.2}", summary.cgpa));
    output = output.replace("{{total_credits}}", &format!("{:.2}", summary.total_credits));
    output = output.replace(
        "{{total_grade_points}}",
        &format!("{:.2}", summary.total_grade_points),
    );
    output = output.replace("{{course_count}}", &courses.len().to_string());
    output = output.replace("{{term_table}}", &term_table(&terms));
    output = output.replace("{{course_table}}", &course_table(courses));
    output
}

/// Render and write the summary to `output_path`.
///
/// # Errors
/// Returns an error message when the file cannot be written.
pub fn write_summary(courses: &[Course], output_path: &Path) -> Result<(), String> {
    let content = render_summary(courses);
    fs::write(output_path, content)
        .map_err(|e| format!("Failed to write summary to {}: {e}", output_path.display()))
}

/// Build the per-term SGPA table.
fn term_table(terms: &[TermSummary]) -> String {
    if terms.is_empty() {
        return "_No terms to report._".to_string();
    }

    let mut table = String::from("| Term | SGPA | Grades |\n|---|---|---|\n");
    for term in terms {
        let grades: Vec<String> = term
            .grade_counts
            .iter()
            .map(|gc| format!("{} ×{}", gc.grade, gc.count))
            .collect();
        let _ = writeln!(
            table,
            "| {} | {:.2} | {} |",
            term.term,
            term.sgpa,
            grades.join(", ")
        );
    }
    table
}

/// Build the full course table, flagging simulated grades.
fn course_table(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "_No courses parsed._".to_string();
    }

    let mut table = String::from(
        "| Code | Credit | Level-Term | Sessional | Grade | Type |\n|---|---|---|---|---|---|\n",
    );
    for course in courses {
        let grade = if course.is_modified() {
            format!("{} (was {})", course.grade, course.original_grade)
        } else {
            course.grade.to_string()
        };
        let _ = writeln!(
            table,
            "| {} | {:.2} | {} | {} | {} | {} |",
            course.code,
            course.credit,
            course.level_term,
            if course.sessional { "Yes" } else { "No" },
            grade,
            course.course_type
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::Grade;

    fn course(code: &str, credit: f32, term: &str, grade: Grade) -> Course {
        Course::new(
            code.to_string(),
            credit,
            term.to_string(),
            false,
            grade,
            "Theory".to_string(),
        )
    }

    #[test]
    fn renders_aggregate_and_tables() {
        let courses = vec![
            course("CSE101", 3.0, "L-1/T-1", Grade::APlus),
            course("CSE102", 2.0, "L-1/T-1", Grade::B),
        ];

        let output = render_summary(&courses);
        assert!(output.contains("**CGPA:** 3.60"));
        assert!(output.contains("**Total Credits:** 5.00"));
        assert!(output.contains("| L-1/T-1 | 3.60 |"));
        assert!(output.contains("| CSE101 | 3.00 |"));
        assert!(!output.contains("Simulation mode"));
        assert!(!output.contains("{{"), "all placeholders substituted");
    }

    #[test]
    fn flags_simulated_grades() {
        let courses = vec![course("CSE101", 3.0, "L-1/T-1", Grade::B)];
        let id = courses[0].id;
        let simulated = crate::core::gpa::set_grade(&courses, id, Grade::APlus);

        let output = render_summary(&simulated);
        assert!(output.contains("Simulation mode"));
        assert!(output.contains("A+ (was B)"));
    }

    #[test]
    fn empty_list_renders_placeholders() {
        let output = render_summary(&[]);
        assert!(output.contains("_No courses parsed._"));
        assert!(output.contains("_No terms to report._"));
        assert!(output.contains("**CGPA:** 0.00"));
    }
}
