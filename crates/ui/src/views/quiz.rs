use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizVm, start_quiz};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || start_quiz(ctx.roster().as_ref(), ctx.feedback_delay()).ok());

    let state = vm.read();
    let Some(quiz) = state.as_ref() else {
        return rsx! {
            div { class: "quiz-empty",
                h2 { "No questions available" }
                p { "The roster is empty, so there is nothing to drill." }
            }
        };
    };

    let prompt = quiz.prompt().to_string();
    let slots: Vec<String> = quiz.slots().to_vec();
    let percent = quiz.percent();
    let position_label = quiz.position_label();
    let feedback = quiz.feedback();
    let completed = quiz.is_complete();
    let slot_count = slots.len();
    drop(state);

    let inputs = slots.into_iter().enumerate().map(|(index, value)| {
        rsx! {
            input {
                id: "answer-{index}",
                class: "quiz-answer-input",
                r#type: "text",
                autocomplete: "off",
                value: "{value}",
                oninput: move |evt| {
                    let mut vm = vm;
                    vm.with_mut(|quiz| {
                        if let Some(quiz) = quiz.as_mut() {
                            quiz.set_answer(index, evt.value());
                        }
                    });
                },
                onkeydown: move |evt| {
                    if evt.key() != Key::Enter {
                        return;
                    }
                    if index + 1 == slot_count {
                        submit_and_schedule(vm);
                    } else {
                        focus_slot(index + 1);
                    }
                },
            }
        }
    });

    let feedback_banner = feedback.map(|feedback| {
        let class = if feedback.correct {
            "quiz-feedback quiz-feedback--correct"
        } else {
            "quiz-feedback quiz-feedback--incorrect"
        };
        rsx! {
            div { class: "{class}", "{feedback.message()}" }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            div { class: "quiz-progress",
                div { class: "quiz-progress-track",
                    div { class: "quiz-progress-fill", style: "width: {percent}%" }
                }
                span { class: "quiz-progress-label", "{position_label}" }
            }
            div { class: "quiz-card",
                h2 { class: "quiz-prompt", "{prompt}" }
                {inputs}
                {feedback_banner}
                div { class: "quiz-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| submit_and_schedule(vm),
                        "Submit"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut vm = vm;
                            vm.with_mut(|quiz| {
                                if let Some(quiz) = quiz.as_mut() {
                                    quiz.shuffle();
                                }
                            });
                        },
                        "Shuffle"
                    }
                }
                if completed {
                    button {
                        class: "btn btn-secondary quiz-restart",
                        r#type: "button",
                        onclick: move |_| {
                            let mut vm = vm;
                            vm.with_mut(|quiz| {
                                if let Some(quiz) = quiz.as_mut() {
                                    quiz.reset();
                                }
                            });
                        },
                        "Start Over"
                    }
                }
            }
        }
    }
}

/// Grade the buffer, then schedule the deferred advance. The submission's
/// epoch makes the sleep harmless if the session was shuffled or reset (or
/// already advanced) before it fires.
fn submit_and_schedule(mut vm: Signal<Option<QuizVm>>) {
    let Some(submission) = vm.with_mut(|quiz| quiz.as_mut().and_then(QuizVm::submit)) else {
        return;
    };

    spawn(async move {
        tokio::time::sleep(submission.delay).await;
        let mut vm = vm;
        vm.with_mut(|quiz| {
            if let Some(quiz) = quiz.as_mut() {
                quiz.finish_feedback(submission.epoch);
            }
        });
    });
}

fn focus_slot(index: usize) {
    let _ = eval(&format!(
        r#"const input = document.getElementById("answer-{index}"); if (input) input.focus();"#
    ));
}
