//! Execution plan display

use colored::Colorize;

use crate::planner::ExecutionPlan;

use super::heading;

pub fn render_plan(plan: &ExecutionPlan) -> String {
    let mut output = heading("Execution Plan");

    if plan.phases.is_empty() {
        output.push_str("(no stories to plan)\n");
    }

    for phase in &plan.phases {
        let marker = if phase.can_parallelize {
            "∥".cyan()
        } else {
            "→".normal()
        };
        output.push_str(&format!(
            "{marker} Phase {}: {}\n    {}\n",
            phase.phase_number,
            phase.stories.join(", "),
            phase.rationale.dimmed()
        ));
    }

    if !plan.critical_path.is_empty() {
        output.push_str(&format!(
            "\nCritical path (length {}): {}\n",
            plan.critical_path_length,
            plan.critical_path.join(" → ").bold()
        ));
    }

    if !plan.parallelization_opportunities.is_empty() {
        output.push_str("\nParallel groups:\n");
        for group in &plan.parallelization_opportunities {
            output.push_str(&format!("  [{}]\n", group.join(", ")));
        }
    }

    if !plan.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for recommendation in &plan.recommendations {
            output.push_str(&format!("  • {recommendation}\n"));
        }
    }

    output
}
