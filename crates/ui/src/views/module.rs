use std::sync::Arc;

use dioxus::prelude::*;

use track_core::model::{Module, ModuleId};
use track_core::viewer::TopicViewer;

use crate::context::AppContext;
use crate::views::QuizPanel;
use crate::vm::{QuizVm, markdown_to_html};

#[component]
pub fn ModuleView(module_id: ModuleId) -> Element {
    let ctx = use_context::<AppContext>();
    let Some(module) = ctx.modules().module(module_id) else {
        return rsx! {
            section { class: "page",
                h1 { "Module not found" }
                p { "This module does not exist." }
            }
        };
    };

    rsx! {
        ModuleBody { module }
    }
}

fn topics_for(module: &Module) -> Option<TopicViewer> {
    TopicViewer::with_selected(module.topics().len(), module.initial_topic()).ok()
}

fn scenarios_for(module: &Module) -> Option<TopicViewer> {
    module
        .scenarios()
        .and_then(|panel| TopicViewer::new(panel.scenarios.len()).ok())
}

#[component]
fn ModuleBody(module: Arc<Module>) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quizzes();

    let initial_module = module.clone();
    let quizzes_for_init = quizzes.clone();
    let mut topics = use_signal(move || topics_for(&initial_module));
    let mut scenarios = use_signal({
        let module = module.clone();
        move || scenarios_for(&module)
    });
    let mut technical = use_signal(|| false);
    let mut choice = use_signal(|| None::<usize>);
    let mut choice_feedback = use_signal(|| None::<String>);
    let mut quiz = use_signal({
        let id = module.id();
        move || quizzes_for_init.start_quiz(id).ok().map(QuizVm::new)
    });
    let mut bound_module = use_signal({
        let id = module.id();
        move || id
    });

    // Route changes reuse this component instance; rebind all view
    // state when the displayed module changes.
    if bound_module() != module.id() {
        bound_module.set(module.id());
        topics.set(topics_for(&module));
        scenarios.set(scenarios_for(&module));
        technical.set(false);
        choice.set(None);
        choice_feedback.set(None);
        quiz.set(quizzes.start_quiz(module.id()).ok().map(QuizVm::new));
    }

    let hero = module.hero();
    let hero_lead = markdown_to_html(&hero.lead);

    let selected_topic = topics().map_or(0, |viewer| viewer.selected());
    let topic = &module.topics()[selected_topic.min(module.topics().len() - 1)];
    let topic_body = if technical() {
        topic.technical.as_deref().unwrap_or(&topic.summary)
    } else {
        &topic.summary
    };
    let topic_html = markdown_to_html(topic_body);
    let topic_note_html = topic.note.as_deref().map(markdown_to_html);
    let module_note_html = module.topics_note().map(markdown_to_html);
    let toggle_label = if technical() {
        "Technical view"
    } else {
        "Student-friendly view"
    };

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "{module.title()}" }
                p { "{module.summary()}" }
            }

            section { class: "module-hero",
                div { class: "module-hero-tag", "{hero.tag}" }
                h2 { "{hero.heading}" }
                div { class: "module-hero-lead", dangerous_inner_html: "{hero_lead}" }
                ul { class: "module-hero-list",
                    for (idx, point) in hero.points.iter().enumerate() {
                        li { key: "{idx}", "{point}" }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel-header-row",
                    h2 { "{module.topics_heading()}" }
                    if module.has_technical_view() {
                        label { class: "toggle",
                            input {
                                r#type: "checkbox",
                                checked: technical(),
                                onchange: move |_| {
                                    let current = technical();
                                    technical.set(!current);
                                },
                            }
                            span { class: "toggle-label", "{toggle_label}" }
                        }
                    }
                }
                p { class: "panel-subtitle", "{module.topics_subtitle()}" }

                div { class: "panel-body panel-body-split",
                    div { class: "step-list",
                        for (idx, item) in module.topics().iter().enumerate() {
                            button {
                                key: "{idx}",
                                class: "step",
                                class: if selected_topic == idx { "step-active" },
                                onclick: move |_| {
                                    if let Some(viewer) = topics.write().as_mut() {
                                        viewer.select(idx);
                                    }
                                },
                                span { class: "step-number", "{idx + 1}" }
                                div { class: "step-text",
                                    div { class: "step-title", "{item.title}" }
                                    if let Some(label) = &item.label {
                                        div { class: "step-layer", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "step-detail",
                        h3 { "{selected_topic + 1}. {topic.title}" }
                        div { class: "step-body", dangerous_inner_html: "{topic_html}" }
                        if let Some(note) = topic_note_html {
                            div { class: "chip-row",
                                span { class: "chip", dangerous_inner_html: "{note}" }
                            }
                        }
                        if let Some(note) = module_note_html {
                            div { class: "note", dangerous_inner_html: "{note}" }
                        }
                    }
                }
            }

            if let Some(check) = module.choice_check() {
                section { class: "panel",
                    h2 { "{check.heading}" }
                    p { class: "panel-subtitle", "{check.subtitle}" }
                    div { class: "card-grid",
                        for (idx, card) in check.cards.iter().enumerate() {
                            button {
                                key: "{idx}",
                                class: "card selectable-card",
                                class: if choice() == Some(idx) { "selectable-card-active" },
                                onclick: move |_| choice.set(Some(idx)),
                                h3 { "{card.label}" }
                                p { class: "domain", "{card.domain}" }
                                p { class: "muted", "{card.browser}" }
                                p { class: "truth",
                                    strong { "Behind the scenes: " }
                                    "{card.truth}"
                                }
                                p { class: "takeaway",
                                    strong { "Takeaway: " }
                                    "{card.takeaway}"
                                }
                            }
                        }
                    }
                    button {
                        class: "btn small",
                        id: "choice-check",
                        onclick: {
                            let module = module.clone();
                            move |_| {
                                let Some(index) = choice() else { return };
                                let feedback = module
                                    .choice_check()
                                    .and_then(|check| check.cards.get(index))
                                    .map(|card| card.feedback.clone());
                                choice_feedback.set(feedback);
                            }
                        },
                        "Check my choice"
                    }
                    if let Some(feedback) = choice_feedback() {
                        p { class: "quiz-feedback", "{feedback}" }
                    }
                }
            }

            QuizPanel {
                heading: module.quiz_heading().to_string(),
                subtitle: module.quiz_subtitle().to_string(),
                quiz,
            }

            if let Some(panel) = module.scenarios() {
                section { class: "panel",
                    h2 { "{panel.heading}" }
                    p { class: "panel-subtitle", "{panel.subtitle}" }
                    select {
                        class: "scenario-select",
                        onchange: move |evt| {
                            if let Ok(index) = evt.value().parse::<usize>() {
                                if let Some(viewer) = scenarios.write().as_mut() {
                                    viewer.select(index);
                                }
                            }
                        },
                        for (idx, scenario) in panel.scenarios.iter().enumerate() {
                            option {
                                key: "{idx}",
                                value: "{idx}",
                                selected: scenarios().map(|viewer| viewer.selected()) == Some(idx),
                                "{scenario.label}"
                            }
                        }
                    }
                    {scenario_recommendation(&module, scenarios().map_or(0, |viewer| viewer.selected()))}
                }
            }
        }
    }
}

fn scenario_recommendation(module: &Module, selected: usize) -> Element {
    let Some(panel) = module.scenarios() else {
        return rsx! {};
    };
    let Some(scenario) = panel.scenarios.get(selected) else {
        return rsx! {};
    };
    let Some(recommended) = module.topics().get(scenario.recommended) else {
        return rsx! {};
    };

    rsx! {
        p { class: "quiz-feedback",
            strong { "Recommended: " }
            "{recommended.title}"
        }
        p { class: "note", "{scenario.explanation}" }
    }
}
