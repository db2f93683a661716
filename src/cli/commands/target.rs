//! Target command handler
//!
//! Solves for the average GPA required over the remaining terms to reach a
//! target CGPA. Current standing comes from a transcript file, from explicit
//! flags, or a mix (flags win).

use cgpa_analytics::config::Config;
use cgpa_analytics::core::{
    gpa,
    parser::parse_course_data,
    target::{estimated_remaining_credits, remaining_terms, required_gpa},
};
use logger::{error, info};
use std::fs;
use std::path::Path;

/// Run the target command.
#[allow(clippy::similar_names)]
pub fn run(
    input_file: Option<&Path>,
    goal: f32,
    cgpa_flag: Option<f32>,
    credits_flag: Option<f32>,
    completed_terms_flag: Option<usize>,
    config: &Config,
) {
    if let Err(err) = solve(
        input_file,
        goal,
        cgpa_flag,
        credits_flag,
        completed_terms_flag,
        config,
    ) {
        if let Some(file) = input_file {
            error!("Target computation failed for {}: {err}", file.display());
        }
        eprintln!("{err}");
    }
}

/// Current academic standing fed into the solver
struct Standing {
    cgpa: f32,
    credits: f32,
    completed_terms: usize,
}

fn solve(
    input_file: Option<&Path>,
    goal: f32,
    cgpa_flag: Option<f32>,
    credits_flag: Option<f32>,
    completed_terms_flag: Option<usize>,
    config: &Config,
) -> Result<(), String> {
    let standing = resolve_standing(input_file, cgpa_flag, credits_flag, completed_terms_flag)?;
    let total_terms = config.academic.total_terms;

    let remaining = remaining_terms(standing.completed_terms, total_terms);
    let remaining_credits =
        estimated_remaining_credits(standing.credits, standing.completed_terms, total_terms);

    println!(
        "You have {} of {} terms completed ({:.2} credits, CGPA {:.2}).",
        standing.completed_terms, total_terms, standing.credits, standing.cgpa
    );

    let outcome = required_gpa(
        standing.cgpa,
        standing.credits,
        standing.completed_terms,
        goal,
        total_terms,
    );

    if !outcome.is_valid {
        return Err(format!(
            "✗ Cannot compute a required GPA for target {goal:.2}: the target must be positive and at least one term with credits must remain."
        ));
    }

    println!("\nRequired GPA over the remaining {remaining} terms: {:.2}", outcome.required_gpa);
    // The solver never clamps; labeling the out-of-range cases is on us.
    if outcome.required_gpa > 4.0 {
        println!("⚠ Target {goal:.2} is unachievable (required GPA exceeds 4.00).");
    } else if outcome.required_gpa < 0.0 {
        println!("✓ Target {goal:.2} is already exceeded.");
    }
    println!(
        "ℹ Based on an estimated {remaining_credits:.2} credits over the remaining {remaining} terms."
    );

    info!(
        "Target {goal:.2}: required GPA {:.2} over {remaining} terms",
        outcome.required_gpa
    );

    Ok(())
}

/// Derive current standing from the transcript (when given) and let explicit
/// flags override individual values.
fn resolve_standing(
    input_file: Option<&Path>,
    cgpa_flag: Option<f32>,
    credits_flag: Option<f32>,
    completed_terms_flag: Option<usize>,
) -> Result<Standing, String> {
    let parsed = match input_file {
        Some(file) => {
            let raw = fs::read_to_string(file)
                .map_err(|e| format!("✗ Failed to read {}: {e}", file.display()))?;
            let courses = parse_course_data(&raw)
                .map_err(|e| format!("✗ Failed to parse {}: {e}", file.display()))?;
            if courses.is_empty() {
                return Err(format!(
                    "✗ No valid course data found in {}. Please check the format.",
                    file.display()
                ));
            }
            let summary = gpa::aggregate(&courses);
            Some(Standing {
                cgpa: summary.cgpa,
                credits: summary.total_credits,
                completed_terms: gpa::completed_terms(&courses),
            })
        }
        None => None,
    };

    match (parsed, cgpa_flag, credits_flag, completed_terms_flag) {
        (Some(standing), cgpa, credits, terms) => Ok(Standing {
            cgpa: cgpa.unwrap_or(standing.cgpa),
            credits: credits.unwrap_or(standing.credits),
            completed_terms: terms.unwrap_or(standing.completed_terms),
        }),
        (None, Some(cgpa), Some(credits), Some(terms)) => Ok(Standing {
            cgpa,
            credits,
            completed_terms: terms,
        }),
        (None, ..) => Err(
            "✗ Provide a transcript file, or all of --cgpa, --credits, and --completed-terms."
                .to_string(),
        ),
    }
}
