//! Tabular course parser for pasted portal result data
//!
//! Input is tab-separated text copied straight out of the university portal.
//! When a header row is present, columns are located by name so their order
//! does not matter; without one, a fixed positional layout is assumed.
//!
//! Malformed rows are dropped silently. This is deliberate: pasted tables
//! carry stray lines (page headers, totals, blank rows) and the parser favors
//! best-effort extraction over all-or-nothing validation. The only hard
//! failure is a header row that lacks one of the mandatory columns.

use crate::core::grades::Grade;
use crate::core::models::Course;

/// Header tokens for the three mandatory columns.
const COL_CODE: &str = "course code";
const COL_CREDIT: &str = "course credit";
const COL_RESULT: &str = "result";
/// Header tokens for the optional columns.
const COL_LEVEL_TERM: &str = "level-term";
const COL_SESSIONAL: &str = "sessional";
const COL_TYPE: &str = "course type";

/// Column positions resolved from a header row. Optional columns are `None`
/// when the header does not carry them.
#[derive(Debug, Clone)]
struct ColumnMap {
    code: usize,
    credit: usize,
    result: usize,
    level_term: Option<usize>,
    sessional: Option<usize>,
    course_type: Option<usize>,
}

/// Parse raw pasted portal text into a list of course records.
///
/// Rows are accepted only when their result value is a recognized grade and
/// their credit value parses as a finite number; everything else is skipped
/// without error. Zero accepted rows is a valid, empty result; deciding
/// whether that is worth reporting is the caller's concern.
///
/// # Errors
///
/// Fails only when a header row is present but one of the mandatory columns
/// (`Course Code`, `Course Credit`, `Result`) cannot be located in it.
pub fn parse_course_data(raw: &str) -> Result<Vec<Course>, String> {
    let lines: Vec<&str> = raw.split('\n').collect();

    // Header detection: the first line mentioning both mandatory column names.
    let header_pos = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        lower.contains(COL_CODE) && lower.contains(COL_CREDIT)
    });

    let Some(header_pos) = header_pos else {
        return Ok(parse_without_header(&lines));
    };

    let columns = resolve_columns(lines[header_pos])?;

    let mut courses = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx == header_pos {
            continue;
        }
        if let Some(course) = parse_header_row(line, &columns) {
            courses.push(course);
        }
    }

    Ok(courses)
}

/// Locate column positions by name in the header row.
///
/// Header cells are matched case-insensitively by substring, so portals that
/// decorate column titles (e.g. "Course Credit Hours") still resolve.
fn resolve_columns(header_line: &str) -> Result<ColumnMap, String> {
    let cells: Vec<String> = header_line
        .split('\t')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let find = |name: &str| cells.iter().position(|cell| cell.contains(name));

    let (Some(code), Some(credit), Some(result)) =
        (find(COL_CODE), find(COL_CREDIT), find(COL_RESULT))
    else {
        return Err(
            "Required columns 'Course Code', 'Course Credit', or 'Result' not found".to_string(),
        );
    };

    Ok(ColumnMap {
        code,
        credit,
        result,
        level_term: find(COL_LEVEL_TERM),
        sessional: find(COL_SESSIONAL),
        course_type: find(COL_TYPE),
    })
}

/// Parse one data row in header-driven mode. Returns `None` for rows that
/// fail the validity rule (unknown grade, non-numeric credit, short row).
fn parse_header_row(line: &str, columns: &ColumnMap) -> Option<Course> {
    let cells: Vec<&str> = line.split('\t').collect();

    // The row must at least reach the mandatory columns.
    let needed = columns.code.max(columns.credit).max(columns.result);
    if cells.len() <= needed {
        return None;
    }

    let grade = Grade::from_symbol(&cells[columns.result].trim().to_uppercase())?;
    let credit = parse_credit(cells[columns.credit])?;

    let cell =
        |idx: Option<usize>| -> Option<&str> { idx.and_then(|i| cells.get(i)).copied().map(str::trim) };

    Some(Course::new(
        non_empty_or_na(cells[columns.code].trim()),
        credit,
        cell(columns.level_term).map_or_else(|| "N/A".to_string(), ToString::to_string),
        cell(columns.sessional).is_some_and(is_sessional),
        grade,
        cell(columns.course_type).map_or_else(|| "N/A".to_string(), ToString::to_string),
    ))
}

/// Positional fallback for data pasted without its header row.
///
/// Assumes the portal's fixed column order: code, credit, level-term,
/// sessional, result, course type. Nothing verifies that column 1 really is
/// a credit column; this mirrors the portal format as-is and is a known
/// fragility of the fallback, kept for compatibility.
fn parse_without_header(lines: &[&str]) -> Vec<Course> {
    let mut courses = Vec::new();

    for line in lines {
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() < 5 {
            continue;
        }

        let Some(grade) = Grade::from_symbol(&cells[4].trim().to_uppercase()) else {
            continue;
        };
        let Some(credit) = parse_credit(cells[1]) else {
            continue;
        };

        courses.push(Course::new(
            non_empty_or_na(cells[0].trim()),
            credit,
            non_empty_or_na(cells[2].trim()),
            is_sessional(cells[3].trim()),
            grade,
            non_empty_or_na(cells.get(5).map_or("", |c| c.trim())),
        ));
    }

    courses
}

/// Parse a credit cell; any non-finite or unparseable value rejects the row.
fn parse_credit(cell: &str) -> Option<f32> {
    cell.trim().parse::<f32>().ok().filter(|c| c.is_finite())
}

/// The sessional flag is set only by a literal "yes", case-insensitively.
fn is_sessional(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("yes")
}

fn non_empty_or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Course Code\tCourse Credit\tLevel-Term\tSessional\tResult\tCourse Type";

    #[test]
    fn parses_single_header_row() {
        let input = "Course Code\tCourse Credit\tLevel-Term\tSessional\tResult\nCSE101\t3.0\tL-1/T-1\tNo\tA\n";
        let courses = parse_course_data(input).expect("parse");

        assert_eq!(courses.len(), 1);
        let c = &courses[0];
        assert_eq!(c.code, "CSE101");
        assert!((c.credit - 3.0).abs() < f32::EPSILON);
        assert_eq!(c.grade, Grade::A);
        assert_eq!(c.level_term, "L-1/T-1");
        assert!(!c.sessional);
        assert_eq!(c.course_type, "N/A"); // column absent entirely
    }

    #[test]
    fn drops_rows_with_unknown_grades() {
        let input = format!("{HEADER}\nCSE101\t3.0\tL-1/T-1\tNo\tA\tTheory\nCSE102\t3.0\tL-1/T-1\tNo\tZ\tTheory\n");
        let courses = parse_course_data(&input).expect("parse");

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CSE101");
    }

    #[test]
    fn drops_rows_with_unparseable_credit() {
        let input = format!("{HEADER}\nCSE101\tthree\tL-1/T-1\tNo\tA\tTheory\n");
        let courses = parse_course_data(&input).expect("parse");
        assert!(courses.is_empty());
    }

    #[test]
    fn keeps_non_positive_credit_rows() {
        let input = format!("{HEADER}\nCSE100\t0\tL-1/T-1\tYes\tA+\tSessional\n");
        let courses = parse_course_data(&input).expect("parse");

        assert_eq!(courses.len(), 1);
        assert!((courses[0].credit - 0.0).abs() < f32::EPSILON);
        assert!(courses[0].sessional);
    }

    #[test]
    fn fails_when_mandatory_column_missing() {
        // "Result" column absent while the header is still recognizable.
        let input = "Course Code\tCourse Credit\tLevel-Term\nCSE101\t3.0\tL-1/T-1\n";
        let err = parse_course_data(input).expect_err("should fail");
        assert!(err.contains("Result"));
    }

    #[test]
    fn column_order_does_not_matter() {
        let permuted = "Result\tCourse Type\tCourse Code\tSessional\tCourse Credit\tLevel-Term\nB+\tTheory\tCSE103\tno\t2.0\tL-1/T-2\n";
        let courses = parse_course_data(permuted).expect("parse");

        assert_eq!(courses.len(), 1);
        let c = &courses[0];
        assert_eq!(c.code, "CSE103");
        assert!((c.credit - 2.0).abs() < f32::EPSILON);
        assert_eq!(c.grade, Grade::BPlus);
        assert_eq!(c.level_term, "L-1/T-2");
        assert_eq!(c.course_type, "Theory");
    }

    #[test]
    fn headerless_fallback_uses_positional_layout() {
        let input = "CSE101\t3.0\tL-1/T-1\tNo\tA\tTheory\nCSE102\t1.5\tL-1/T-1\tYes\tA-\n";
        let courses = parse_course_data(input).expect("parse");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].grade, Grade::A);
        assert_eq!(courses[1].grade, Grade::AMinus);
        assert!(courses[1].sessional);
        assert_eq!(courses[1].course_type, "N/A"); // sixth column missing
    }

    #[test]
    fn headerless_rows_need_five_columns() {
        let input = "CSE101\t3.0\tL-1/T-1\tNo\n";
        let courses = parse_course_data(input).expect("parse");
        assert!(courses.is_empty());
    }

    #[test]
    fn empty_input_is_a_valid_empty_result() {
        assert!(parse_course_data("").expect("parse").is_empty());
        assert!(parse_course_data("\n\n").expect("parse").is_empty());
    }

    #[test]
    fn result_matching_is_case_insensitive_and_trimmed() {
        let input = format!("{HEADER}\nCSE101\t3.0\tL-1/T-1\tNo\t a+ \tTheory\n");
        let courses = parse_course_data(&input).expect("parse");
        assert_eq!(courses[0].grade, Grade::APlus);
    }

    #[test]
    fn sessional_requires_literal_yes() {
        let input = format!(
            "{HEADER}\nCSE101\t3.0\tL-1/T-1\tYES\tA\tTheory\nCSE102\t3.0\tL-1/T-1\ttrue\tA\tTheory\n"
        );
        let courses = parse_course_data(&input).expect("parse");
        assert!(courses[0].sessional);
        assert!(!courses[1].sessional);
    }

    #[test]
    fn empty_code_cell_becomes_na() {
        let input = format!("{HEADER}\n\t3.0\tL-1/T-1\tNo\tA\tTheory\n");
        let courses = parse_course_data(&input).expect("parse");
        assert_eq!(courses[0].code, "N/A");
    }

    #[test]
    fn optional_cells_are_trimmed_and_short_rows_default_them() {
        // Optional columns sit past the mandatory ones here, so a row may
        // stop short of them and still be valid.
        let input = "Course Code\tCourse Credit\tResult\tLevel-Term\tCourse Type\n\
                     CSE101\t3.0\tA\t L-1/T-1 \t Theory \n\
                     CSE102\t3.0\tB+\n";
        let courses = parse_course_data(input).expect("parse");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].level_term, "L-1/T-1");
        assert_eq!(courses[0].course_type, "Theory");
        assert_eq!(courses[1].level_term, "N/A");
        assert_eq!(courses[1].course_type, "N/A");
    }

    #[test]
    fn windows_line_endings_are_tolerated() {
        let input = "Course Code\tCourse Credit\tResult\r\nCSE101\t3.0\tA\r\n";
        let courses = parse_course_data(input).expect("parse");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].grade, Grade::A);
        assert_eq!(courses[0].level_term, "N/A");
    }
}
