//! Console output formatting for collaboration results

use bounce_domain::CollaborationResult;
use colored::Colorize;

/// Formats collaboration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full transcript: every step plus the final response
    pub fn format(result: &CollaborationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            "=== Wall-Bounce Results ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Query:".cyan().bold(),
            result.original_query
        ));
        output.push_str(&format!(
            "{} {} bounces, {} succeeded, {} failed, {}ms\n",
            "Chain:".cyan().bold(),
            result.wall_bounce_count,
            result.metadata.successful_models.len(),
            result.metadata.failed_models.len(),
            result.metadata.processing_time_ms
        ));

        for step in &result.collaboration_history {
            let header = format!("── step {} · {} ({}) ──", step.step_number, step.actor, step.role);
            match &step.error {
                None => {
                    output.push_str(&format!("\n{}\n{}\n", header.yellow().bold(), step.output));
                }
                Some(error) => {
                    output.push_str(&format!(
                        "\n{}\nError: {}\n",
                        header.red().bold(),
                        error
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{}\n{}\n",
            "=== Final Response ===".cyan().bold(),
            result.final_response
        ));
        output
    }

    /// Only the final response
    pub fn format_final_only(result: &CollaborationResult) -> String {
        result.final_response.clone()
    }

    /// Format as JSON
    pub fn format_json(result: &CollaborationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }
}
