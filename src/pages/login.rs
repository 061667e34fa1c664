//! Login page - email and password sign-in.
//!
//! Any well-formed input is accepted; after the simulated request the
//! success notice is shown and dismissing it returns to Home.

use dioxus::prelude::*;
use storefront_core::{FieldName, LoginForm, SubmitOutcome, UiText};
use storefront_ui::{Button, ButtonSize, Checkbox, FormInput};

use crate::app::Route;
use crate::components::{NavHeader, NavLocation, NoticeModal, PendingNotice, SiteFooter};
use crate::context::use_config;

#[component]
pub fn Login() -> Element {
    let config = use_config();
    let locale = config.locale;
    let delay = config.submit_delay();
    let mut form = use_signal(|| LoginForm::new(&config.policy, locale));
    let mut notice = use_signal(|| Option::<PendingNotice>::None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let outcome = form.write().submit();
        if let SubmitOutcome::Success(success) = outcome {
            spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                form.write().finish_submit();
                let message = locale.notice(&success.notice());
                notice.set(Some(PendingNotice::then(message, Route::Home {})));
            });
        }
    };

    let toggle_labels = (
        locale.text(UiText::ShowPassword).to_string(),
        locale.text(UiText::HidePassword).to_string(),
    );
    let state = form.read();
    let submitting = state.state().is_submitting();

    rsx! {
        NavHeader { current: NavLocation::Login, locale }

        main { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-header",
                    h1 { "{locale.text(UiText::LoginTitle)}" }
                    p { "{locale.text(UiText::LoginSubtitle)}" }
                }

                form { class: "auth-form", novalidate: true, onsubmit: on_submit,
                    for field in [FieldName::Email, FieldName::Password] {
                        FormInput {
                            key: "{field}",
                            name: field.id().to_string(),
                            label: locale.label(field).to_string(),
                            input_type: field.input_type().to_string(),
                            value: state.state().value(field).to_string(),
                            error: state.state().error(field).map(str::to_string),
                            placeholder: locale.placeholder(field).to_string(),
                            required: true,
                            disabled: submitting,
                            toggle_labels: toggle_labels.clone(),
                            oninput: move |v: String| form.write().input(field, v),
                            onblur: move |_| form.write().blur(field),
                        }
                    }

                    div { class: "form-options",
                        Checkbox {
                            name: "remember".to_string(),
                            checked: state.remember_me(),
                            onchange: move |checked| form.write().set_remember_me(checked),
                            "{locale.text(UiText::RememberMe)}"
                        }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Block,
                        disabled: submitting,
                        if submitting {
                            "{locale.text(UiText::LoginBusy)}"
                        } else {
                            "{locale.text(UiText::LoginSubmit)}"
                        }
                    }
                }

                div { class: "auth-footer",
                    p {
                        "{locale.text(UiText::NoAccount)} "
                        Link { to: Route::Register {}, class: "auth-link",
                            "{locale.text(UiText::NavRegister)}"
                        }
                    }
                }
            }
        }

        SiteFooter { locale }

        NoticeModal { notice, dismiss_label: locale.text(UiText::Dismiss).to_string() }
    }
}
