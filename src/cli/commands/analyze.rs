//! Analyze command handler
//!
//! Parses pasted transcript files, optionally applies what-if grade
//! simulations, and reports CGPA plus a per-term breakdown.

use cgpa_analytics::config::Config;
use cgpa_analytics::core::{
    export, gpa,
    grades::Grade,
    models::Course,
    parser::parse_course_data,
};
use logger::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the analyze command for one or more input files.
///
/// # Arguments
/// * `input_files` - Paths to transcript text files
/// * `output_files` - Optional summary output paths; must match inputs 1:1 when provided
/// * `what_if` - Grade simulations to apply, as `CODE=GRADE` specs
/// * `export_summary` - Whether to write a Markdown summary file
/// * `config` - Configuration containing the default output directory
/// * `verbose` - Whether to show the full course listing
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    what_if: &[String],
    export_summary: bool,
    config: &Config,
    verbose: bool,
) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) =
            analyze_single(input_file, output_file, what_if, export_summary, config, verbose)
        {
            error!("Analysis failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn analyze_single(
    input_file: &Path,
    output_file: Option<&Path>,
    what_if: &[String],
    export_summary: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let raw = fs::read_to_string(input_file)
        .map_err(|e| format!("✗ Failed to read {}: {e}", input_file.display()))?;

    let mut courses = parse_course_data(&raw).map_err(|e| {
        error!("Failed to parse {}: {e}", input_file.display());
        format!("✗ Failed to parse {}: {e}", input_file.display())
    })?;

    // An empty parse is a valid result for the core, but a dead end for the
    // user, so it is surfaced here.
    if courses.is_empty() {
        return Err(format!(
            "✗ No valid course data found in {}. Please check the format.",
            input_file.display()
        ));
    }

    info!(
        "Parsed {} courses from {}",
        courses.len(),
        input_file.display()
    );

    for spec in what_if {
        courses = apply_what_if(courses, spec);
    }

    let summary = gpa::aggregate(&courses);
    let terms = gpa::term_breakdown(&courses);

    println!(
        "✓ {}: {} courses parsed",
        input_file.display(),
        courses.len()
    );
    if gpa::has_changes(&courses) {
        println!("  (simulation mode: one or more grades modified)");
    }
    println!(
        "  CGPA: {:.2}  |  Credits: {:.2}  |  Grade Points: {:.2}",
        summary.cgpa, summary.total_credits, summary.total_grade_points
    );

    println!("\n=== Term Breakdown ===");
    for term in &terms {
        let grades: Vec<String> = term
            .grade_counts
            .iter()
            .map(|gc| format!("{} ×{}", gc.grade, gc.count))
            .collect();
        println!("  {}  SGPA {:.2}  [{}]", term.term, term.sgpa, grades.join(", "));
    }

    if verbose {
        println!("\n=== Courses ===");
        for course in &courses {
            let marker = if course.is_modified() { "*" } else { " " };
            println!(
                " {marker}{}  {:.2} cr  {}  {}",
                course.code, course.credit, course.level_term, course.grade
            );
        }
    }

    if export_summary {
        let output_path = resolve_output_path(input_file, output_file, config)?;
        export::write_summary(&courses, &output_path).map_err(|e| format!("✗ {e}"))?;
        println!("✓ Summary exported to: {}", output_path.display());
        info!("Summary exported to: {}", output_path.display());
    }

    Ok(())
}

/// Apply one `CODE=GRADE` simulation spec, matching the first course with
/// that code. Bad specs are skipped with a warning, never fatal.
fn apply_what_if(courses: Vec<Course>, spec: &str) -> Vec<Course> {
    let Some((code, grade_str)) = spec.split_once('=') else {
        warn!("Ignoring what-if '{spec}': expected CODE=GRADE");
        eprintln!("✗ Ignoring what-if '{spec}': expected CODE=GRADE");
        return courses;
    };

    let Some(grade) = Grade::from_symbol(&grade_str.trim().to_uppercase()) else {
        warn!("Ignoring what-if '{spec}': unknown grade '{grade_str}'");
        eprintln!("✗ Ignoring what-if '{spec}': unknown grade '{grade_str}'");
        return courses;
    };

    let code = code.trim();
    let Some(course_id) = courses
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .map(|c| c.id)
    else {
        warn!("Ignoring what-if '{spec}': no course with code '{code}'");
        eprintln!("✗ Ignoring what-if '{spec}': no course with code '{code}'");
        return courses;
    };

    gpa::set_grade(&courses, course_id, grade)
}

/// Pick the summary output path: explicit path, or `<stem>_summary.md` in the
/// configured output directory.
fn resolve_output_path(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript")
        .to_string();
    Ok(out_dir.join(format!("{filename}_summary.md")))
}
