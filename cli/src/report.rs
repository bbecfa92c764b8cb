//! Plain-text rendering of scenarios and evaluation results.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Write as _;

use contract::present::{self, ResultSummary, Urgency};
use contract::{ResultsLookup, Scenario, SimulationResult, TrainingResource};

/// Requirements listed per scenario in the selection list.
const REQUIREMENT_PREVIEW: usize = 2;

pub fn render_scenarios(scenarios: &[Scenario]) -> String {
    let mut out = String::new();
    for (index, scenario) in scenarios.iter().enumerate() {
        let _ = writeln!(out, "{}. {} [{} / {}]", index + 1, scenario.title, scenario.role, scenario.difficulty);
        if !scenario.task.is_empty() {
            let _ = writeln!(out, "   {}", scenario.task);
        }
        let (shown, hidden) = present::requirements_preview(&scenario.requirements, REQUIREMENT_PREVIEW);
        for req in shown {
            let _ = writeln!(out, "   - {req}");
        }
        if hidden > 0 {
            let _ = writeln!(out, "   +{hidden} more...");
        }
        let _ = writeln!(out, "   id: {}", scenario.id);
    }
    out
}

pub fn render_lookup(lookup: &ResultsLookup) -> String {
    match lookup {
        ResultsLookup::Completed(result) => render_result(result),
        ResultsLookup::Pending { simulation_id, message } => format!("Simulation {simulation_id}: {message}\n"),
    }
}

/// Text dashboard mirroring the web results view.
pub fn render_result(result: &SimulationResult) -> String {
    let mut out = String::new();
    if result.is_failed() {
        let _ = writeln!(out, "Evaluation Failed");
        let _ = writeln!(out, "{}", result.failure_message());
        return out;
    }

    let eval = &result.evaluation;
    let title = result.scenario.as_ref().map_or("", |s| s.title.as_str());
    let _ = writeln!(out, "Assessment Results: {} • {title}", result.student.name);
    if let Some(id) = &result.simulation_id {
        let _ = writeln!(out, "Simulation: {id}");
    }

    section(&mut out, "Overall Performance");
    let _ = writeln!(
        out,
        "Score: {}/100 ({:.1}%)  Grade: {} [{}]",
        present::format_points(eval.total_score),
        eval.percentage(),
        eval.grade,
        present::grade_tone(&eval.grade).as_str()
    );
    for (criterion, score) in present::ordered_criteria(&eval.scores) {
        let _ = writeln!(
            out,
            "  {:<14} {:>4}/25  {:>3.0}%  [{}]",
            present::criterion_label(criterion),
            present::format_points(*score),
            present::criterion_percent(*score),
            present::score_tone(*score, present::CRITERION_MAX_SCORE).as_str()
        );
    }

    if !eval.feedback.is_empty() {
        section(&mut out, "Detailed Feedback");
        for (criterion, text) in present::ordered_criteria(&eval.feedback) {
            let _ = writeln!(out, "{}:", present::criterion_label(criterion));
            for line in text.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
    }

    let gaps = &result.gap_analysis;
    section(&mut out, "Skills Gap Analysis");
    let urgency = Urgency::classify(&gaps.improvement_urgency);
    let _ = writeln!(out, "Improvement Priority: {} [{}]", gaps.improvement_urgency, urgency.as_str());
    bullet_list(&mut out, "Priority Focus Areas", &gaps.priority_areas);
    bullet_list(&mut out, "Technical Skills", &gaps.technical_gaps);
    bullet_list(&mut out, "Conceptual Understanding", &gaps.conceptual_gaps);
    bullet_list(&mut out, "Process & Methodology", &gaps.process_gaps);
    if gaps.total_gaps == 0 {
        let _ = writeln!(out, "No significant skill gaps identified. Great job!");
    }

    let recs = &result.training_recommendations;
    section(&mut out, "Personalized Learning Path");
    let _ = writeln!(out, "Estimated Duration: {}", recs.estimated_duration);
    if !recs.urgency.is_empty() {
        let _ = writeln!(out, "{}", recs.urgency);
    }
    if let Some(note) = &recs.note {
        let _ = writeln!(out, "{note}");
    }
    for phase in &recs.learning_path {
        let _ = writeln!(out, "Phase {}: {} ({})", phase.phase, phase.title, phase.duration);
        if !phase.goal.is_empty() {
            let _ = writeln!(out, "  Goal: {}", phase.goal);
        }
        if phase.resources.is_empty() {
            let _ = writeln!(out, "  No specific resources available for this phase.");
        }
        for resource in &phase.resources {
            resource_line(&mut out, resource);
        }
    }
    let categories = present::ordered_categories(&recs.recommendations);
    for (category, resources) in categories.into_iter().filter(|(_, r)| !r.is_empty()) {
        let _ = writeln!(out, "{} Resources:", present::criterion_label(category));
        for resource in resources {
            resource_line(&mut out, resource);
        }
    }

    let summary = ResultSummary::of(result);
    section(&mut out, "Summary");
    let _ = writeln!(
        out,
        "Total Gaps Identified: {}  Learning Phases: {}  Recommended Resources: {}",
        summary.total_gaps, summary.learning_phases, summary.resources
    );
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {title} ==");
}

fn bullet_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

fn resource_line(out: &mut String, resource: &TrainingResource) {
    let _ = write!(out, "  * {} ({})", resource.title, resource.kind);
    if !resource.skills.trim().is_empty() {
        let _ = write!(out, " skills: {}", present::format_skills(&resource.skills));
    }
    if present::is_linkable(&resource.url) {
        let _ = write!(out, " <{}>", resource.url);
    }
    out.push('\n');
}
