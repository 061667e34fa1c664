//! Register page - account creation.
//!
//! Field errors appear under their inputs; an unchecked terms box is
//! reported through the notice modal instead. After the simulated request
//! the welcome notice is shown and dismissing it moves on to Login.

use dioxus::prelude::*;
use storefront_core::{FieldName, RegisterForm, SubmitOutcome, UiText};
use storefront_ui::{Button, ButtonSize, Checkbox, FormInput};

use crate::app::Route;
use crate::components::{NavHeader, NavLocation, NoticeModal, PendingNotice, SiteFooter};
use crate::context::use_config;

const NAME_ROW: [FieldName; 2] = [FieldName::FirstName, FieldName::LastName];
const CREDENTIALS: [FieldName; 3] = [
    FieldName::Email,
    FieldName::Password,
    FieldName::ConfirmPassword,
];

#[component]
pub fn Register() -> Element {
    let config = use_config();
    let locale = config.locale;
    let delay = config.submit_delay();
    let mut form = use_signal(|| RegisterForm::new(&config.policy, locale));
    let mut notice = use_signal(|| Option::<PendingNotice>::None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let outcome = form.write().submit();
        let blocking = outcome
            .blocking_errors()
            .first()
            .map(|err| err.message(locale));
        match outcome {
            SubmitOutcome::Success(success) => {
                spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    form.write().finish_submit();
                    let message = locale.notice(&success.notice());
                    notice.set(Some(PendingNotice::then(message, Route::Login {})));
                });
            }
            SubmitOutcome::ValidationFailed(_) => {
                if let Some(message) = blocking {
                    notice.set(Some(PendingNotice::stay(message)));
                }
            }
            SubmitOutcome::AlreadySubmitting => {}
        }
    };

    let toggle_labels = (
        locale.text(UiText::ShowPassword).to_string(),
        locale.text(UiText::HidePassword).to_string(),
    );
    let current = form.read();
    let submitting = current.state().is_submitting();

    let field_input = |field: FieldName| {
        let placeholder = match field {
            FieldName::Password => locale.text(UiText::NewPasswordPlaceholder),
            _ => locale.placeholder(field),
        };
        rsx! {
            FormInput {
                key: "{field}",
                name: field.id().to_string(),
                label: locale.label(field).to_string(),
                input_type: field.input_type().to_string(),
                value: current.state().value(field).to_string(),
                error: current.state().error(field).map(str::to_string),
                placeholder: placeholder.to_string(),
                required: true,
                disabled: submitting,
                toggle_labels: toggle_labels.clone(),
                oninput: move |v: String| form.write().input(field, v),
                onblur: move |_| form.write().blur(field),
            }
        }
    };

    rsx! {
        NavHeader { current: NavLocation::Register, locale }

        main { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-header",
                    h1 { "{locale.text(UiText::RegisterTitle)}" }
                    p { "{locale.text(UiText::RegisterSubtitle)}" }
                }

                form { class: "auth-form", novalidate: true, onsubmit: on_submit,
                    div { class: "form-row",
                        for field in NAME_ROW {
                            {field_input(field)}
                        }
                    }
                    for field in CREDENTIALS {
                        {field_input(field)}
                    }

                    div { class: "form-options",
                        Checkbox {
                            name: FieldName::Terms.id().to_string(),
                            checked: current.terms_accepted(),
                            required: true,
                            onchange: move |checked| form.write().set_terms_accepted(checked),
                            "{locale.text(UiText::AgreeToTerms)}"
                        }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Block,
                        disabled: submitting,
                        if submitting {
                            "{locale.text(UiText::RegisterBusy)}"
                        } else {
                            "{locale.text(UiText::RegisterSubmit)}"
                        }
                    }
                }

                div { class: "auth-footer",
                    p {
                        "{locale.text(UiText::HaveAccount)} "
                        Link { to: Route::Login {}, class: "auth-link",
                            "{locale.text(UiText::NavLogin)}"
                        }
                    }
                }
            }
        }

        SiteFooter { locale }

        NoticeModal { notice, dismiss_label: locale.text(UiText::Dismiss).to_string() }
    }
}
