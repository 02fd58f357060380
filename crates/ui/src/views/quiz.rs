use dioxus::prelude::*;

use crate::vm::{QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The quiz panel shared by all four modules: one question at a time,
/// gated forward navigation, free backward navigation.
#[component]
pub fn QuizPanel(heading: String, subtitle: String, quiz: Signal<Option<QuizVm>>) -> Element {
    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut quiz = quiz;
        if let Some(vm) = quiz.write().as_mut() {
            vm.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, quiz);
            }
        }
    }

    let guard = quiz.read();
    let Some(vm) = guard.as_ref() else {
        return rsx! {
            section { class: "panel quiz-panel",
                h2 { "{heading}" }
                p { "Quiz unavailable." }
            }
        };
    };

    let prompt = vm.question().prompt().to_string();
    let options: Vec<String> = vm.question().options().to_vec();
    let selected = vm.selected_option();
    let question_label = vm.question_label();
    let unlocked_label = vm.unlocked_label();
    let feedback = vm.feedback_line();
    let warning = vm.warning();
    let at_first = vm.at_first();
    let at_last = vm.at_last();

    rsx! {
        section { class: "panel quiz-panel",
            div { class: "quiz-header-line",
                h2 { "{heading}" }
                div { class: "quiz-progress", "{question_label}" }
            }
            p { class: "panel-subtitle", "{subtitle}" }

            p { class: "quiz-prompt", "{prompt}" }
            div { class: "quiz-options",
                for (idx, option) in options.into_iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: "quiz-option",
                        class: if selected == Some(idx) { "quiz-option-active" },
                        onclick: move |_| dispatch.call(QuizIntent::SelectOption(idx)),
                        "{option}"
                    }
                }
            }
            button {
                class: "btn small",
                id: "quiz-check",
                onclick: move |_| dispatch.call(QuizIntent::CheckAnswer),
                "Check my answer"
            }
            if let Some(feedback) = feedback {
                p { class: "quiz-feedback", "{feedback}" }
            }
            if let Some(warning) = warning {
                p { class: "quiz-warning", "{warning}" }
            }

            div { class: "quiz-nav",
                div { class: "quiz-progress", "{unlocked_label}" }
                div { class: "quiz-nav-buttons",
                    button {
                        class: "btn small",
                        id: "quiz-previous",
                        disabled: at_first,
                        onclick: move |_| dispatch.call(QuizIntent::GoPrevious),
                        "◀ Previous"
                    }
                    button {
                        class: "btn small",
                        id: "quiz-next",
                        disabled: at_last,
                        onclick: move |_| dispatch.call(QuizIntent::GoNext),
                        "Next ▶"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    quiz: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, quiz: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<Option<QuizVm>> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }
}
