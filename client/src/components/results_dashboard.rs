//! Step 3: evaluation, gap analysis, and learning path for one submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the simulator after a submission and by the `/results/:id` page.
//! All numbers come from the backend; this module only arranges them, using
//! the shared thresholds in `contract::present`.

use leptos::prelude::*;

use contract::present::{self, ResultSummary, Urgency};

use crate::net::types::{GapAnalysis, LearningPhase, SimulationResult, TrainingRecommendations, TrainingResource};
use crate::util::markdown::render_markdown_html;

const EMPTY_PHASE_NOTE: &str =
    "No specific resources available for this phase. Please check with your instructor for recommendations.";

#[component]
pub fn ResultsDashboard(
    result: SimulationResult,
    #[prop(optional, into)] on_start_new: Option<Callback<()>>,
) -> impl IntoView {
    if result.is_failed() {
        let message = result.failure_message().to_owned();
        return view! {
            <div class="card results-failed">
                <h3>"Evaluation Failed"</h3>
                <p>{message}</p>
                <StartNewButton on_start_new=on_start_new />
            </div>
        }
        .into_any();
    }

    let summary = ResultSummary::of(&result);
    let scenario_title = result.scenario.as_ref().map(|s| s.title.clone()).unwrap_or_default();
    let SimulationResult { student, evaluation, gap_analysis, training_recommendations, .. } = result;

    let grade_class = format!("grade-badge grade-badge--{}", present::grade_tone(&evaluation.grade).as_str());
    let criteria = present::ordered_criteria(&evaluation.scores)
        .into_iter()
        .map(|(key, score)| (key.to_owned(), *score))
        .collect::<Vec<_>>();
    let feedback = present::ordered_criteria(&evaluation.feedback)
        .into_iter()
        .map(|(key, text)| (present::criterion_label(key), render_markdown_html(text)))
        .collect::<Vec<_>>();
    let priority_areas = gap_analysis.priority_areas.clone();

    view! {
        <div class="results">
            <div class="results__header">
                <div>
                    <h2>"Assessment Results"</h2>
                    <p class="muted">{format!("{} • {}", student.name, scenario_title)}</p>
                </div>
                <StartNewButton on_start_new=on_start_new />
            </div>

            <div class="card">
                <h3 class="card__title">"Overall Performance"</h3>
                <div class="results__overall">
                    <div>
                        <div class="results__total">
                            {format!("{}/100", present::format_points(evaluation.total_score))}
                        </div>
                        <div class="muted">{format!("{:.1}%", evaluation.percentage())}</div>
                    </div>
                    <div class=grade_class>{evaluation.grade.clone()}</div>
                </div>
                <div class="criteria-grid">
                    {criteria
                        .into_iter()
                        .map(|(key, score)| view! { <CriterionBar criterion=key score=score /> })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Detailed Feedback"</h3>
                {feedback
                    .into_iter()
                    .map(|(label, html)| {
                        view! {
                            <div class="feedback">
                                <h4 class="feedback__criterion">{label}</h4>
                                <div class="feedback__body" inner_html=html></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <GapAnalysisCard gaps=gap_analysis />
            <LearningPathCard recommendations=training_recommendations priority_areas=priority_areas summary=summary />
        </div>
    }
    .into_any()
}

/// Reset button when the host supports it, otherwise a link to a fresh simulator.
#[component]
fn StartNewButton(on_start_new: Option<Callback<()>>) -> impl IntoView {
    match on_start_new {
        Some(callback) => view! {
            <button class="button button--outline" on:click=move |_| callback.run(())>
                "Start New Assessment"
            </button>
        }
        .into_any(),
        None => view! {
            <a class="button button--outline" href="/simulator">
                "Start New Assessment"
            </a>
        }
        .into_any(),
    }
}

#[component]
fn CriterionBar(criterion: String, score: f64) -> impl IntoView {
    let percent = present::criterion_percent(score);
    let tone = present::score_tone(score, present::CRITERION_MAX_SCORE);

    view! {
        <div class="criterion">
            <div class="criterion__score">{format!("{}/25", present::format_points(score))}</div>
            <div class="criterion__label">{present::criterion_label(&criterion)}</div>
            <div class="criterion__track">
                <div
                    class=format!("criterion__fill criterion__fill--{}", tone.as_str())
                    style:width=format!("{:.0}%", percent.clamp(0.0, 100.0))
                ></div>
            </div>
            <div class="criterion__percent">{format!("{percent:.0}%")}</div>
        </div>
    }
}

#[component]
fn GapAnalysisCard(gaps: GapAnalysis) -> impl IntoView {
    let urgency = Urgency::classify(&gaps.improvement_urgency);
    let no_gaps = gaps.total_gaps == 0;

    view! {
        <div class="card">
            <h3 class="card__title">"Skills Gap Analysis"</h3>
            <p class="card__description">"Areas identified for improvement"</p>
            <div class="gap-analysis__priority">
                <span>"Improvement Priority:"</span>
                <span class=format!("badge badge--urgency-{}", urgency.as_str())>{gaps.improvement_urgency}</span>
            </div>
            <GapList title="Priority Focus Areas" modifier="priority" items=gaps.priority_areas />
            <GapList title="Technical Skills" modifier="technical" items=gaps.technical_gaps />
            <GapList title="Conceptual Understanding" modifier="conceptual" items=gaps.conceptual_gaps />
            <GapList title="Process & Methodology" modifier="process" items=gaps.process_gaps />
            {no_gaps
                .then(|| {
                    view! {
                        <div class="status status--success">"No significant skill gaps identified. Great job!"</div>
                    }
                })}
        </div>
    }
}

#[component]
fn GapList(title: &'static str, modifier: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=format!("gap-list gap-list--{modifier}")>
                <h4>{title}</h4>
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

#[component]
fn LearningPathCard(
    recommendations: TrainingRecommendations,
    priority_areas: Vec<String>,
    summary: ResultSummary,
) -> impl IntoView {
    let TrainingRecommendations { recommendations: categories, learning_path, estimated_duration, urgency, note, .. } =
        recommendations;

    view! {
        <div class="card">
            <h3 class="card__title">"Personalized Learning Path"</h3>
            <p class="card__description">"Recommended resources to improve your skills"</p>

            <div class="learning-path__overview">
                <div>{format!("Estimated Duration: {estimated_duration}")}</div>
                <div class="muted">{urgency}</div>
                {note.map(|note| view! { <div class="muted">{note}</div> })}
            </div>

            {learning_path.into_iter().map(|phase| view! { <PhaseCard phase=phase /> }).collect_view()}

            {present::ordered_categories(&categories)
                .into_iter()
                .filter(|(_, resources)| !resources.is_empty())
                .map(|(category, resources)| {
                    view! {
                        <div class="recommendations">
                            <h4>{format!("{} Resources", present::criterion_label(category))}</h4>
                            {resources
                                .iter()
                                .cloned()
                                .map(|resource| view! { <ResourceRow resource=resource /> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}

            {(!priority_areas.is_empty())
                .then(|| {
                    view! {
                        <div class="next-steps">
                            <h4>"Next Steps:"</h4>
                            <ul>{priority_areas.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}</ul>
                        </div>
                    }
                })}

            <div class="summary-stats">
                <Stat value=summary.total_gaps label="Total Gaps Identified" />
                <Stat value=summary.learning_phases label="Learning Phases" />
                <Stat value=summary.resources label="Recommended Resources" />
            </div>
        </div>
    }
}

#[component]
fn PhaseCard(phase: LearningPhase) -> impl IntoView {
    let LearningPhase { phase: number, title, duration, goal, description, resources } = phase;
    let empty = resources.is_empty();

    view! {
        <div class="phase">
            <div class="phase__header">
                <span class="phase__number">{number}</span>
                <div class="phase__heading">
                    <h4>{title}</h4>
                    <p class="muted">{goal}</p>
                    {description.map(|d| view! { <p class="phase__description">{d}</p> })}
                </div>
                <span class="badge badge--outline">{duration}</span>
            </div>
            {resources.into_iter().map(|resource| view! { <ResourceRow resource=resource /> }).collect_view()}
            {empty.then(|| view! { <div class="phase__empty">{EMPTY_PHASE_NOTE}</div> })}
        </div>
    }
}

#[component]
fn ResourceRow(resource: TrainingResource) -> impl IntoView {
    let skills = (!resource.skills.trim().is_empty()).then(|| present::format_skills(&resource.skills));
    let link = present::is_linkable(&resource.url).then_some(resource.url);

    view! {
        <div class="resource">
            <div class="resource__body">
                <div class="resource__title">{resource.title}</div>
                <div class="resource__description">{resource.description}</div>
                {skills.map(|s| view! { <div class="resource__skills">{format!("Skills: {s}")}</div> })}
            </div>
            <span class="badge badge--secondary">{resource.kind}</span>
            {link
                .map(|url| {
                    view! {
                        <a class="resource__link" href=url target="_blank" rel="noopener noreferrer" title="Open resource">
                            "Open"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn Stat(value: usize, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat__value">{value}</div>
            <div class="stat__label">{label}</div>
        </div>
    }
}
