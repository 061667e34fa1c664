//! Form Input Component
//!
//! Labelled text input with an inline error region.
//! Features:
//! - `*` marker on required fields
//! - `error` class on the group while a message is shown
//! - Show/hide toggle for password inputs

use dioxus::prelude::*;

/// Class list for the wrapper around label, input and message.
pub fn group_class(has_error: bool, focused: bool) -> String {
    let mut class = String::from("form-input-group");
    if has_error {
        class.push_str(" error");
    }
    if focused {
        class.push_str(" focused");
    }
    class
}

/// Rendered `type` attribute: passwords turn into plain text while revealed.
pub fn effective_input_type(input_type: &str, reveal: bool) -> &str {
    if input_type == "password" && reveal {
        "text"
    } else {
        input_type
    }
}

/// Properties for the FormInput component
#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    /// Element id / name, also used for label association
    pub name: String,
    pub label: String,
    pub value: String,
    /// Message under the input; `None` or empty means valid
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible labels for the password toggle (reveal, conceal)
    #[props(default = ("Show password".to_string(), "Hide password".to_string()))]
    pub toggle_labels: (String, String),
    /// Called on every keystroke with the new value
    pub oninput: EventHandler<String>,
    /// Called when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
}

/// Labelled input bound to one form field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormInput {
///         name: "email".to_string(),
///         label: "Email Address".to_string(),
///         input_type: "email".to_string(),
///         value: form.read().state().value(FieldName::Email).to_string(),
///         error: form.read().state().error(FieldName::Email).map(str::to_string),
///         required: true,
///         oninput: move |v| form.write().input(FieldName::Email, v),
///         onblur: move |_| form.write().blur(FieldName::Email),
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let mut focused = use_signal(|| false);
    let mut reveal = use_signal(|| false);

    let message = props.error.clone().filter(|e| !e.is_empty());
    let class = group_class(message.is_some(), focused());
    let is_password = props.input_type == "password";
    let rendered_type = effective_input_type(&props.input_type, reveal()).to_string();
    let (reveal_label, conceal_label) = &props.toggle_labels;
    let toggle_label = if reveal() { conceal_label.clone() } else { reveal_label.clone() };
    let onblur = props.onblur;

    rsx! {
        div { class: "{class}",
            label {
                class: "form-label",
                r#for: "{props.name}",
                "{props.label}"
                if props.required {
                    span { class: "required", "*" }
                }
            }
            div { class: "input-wrapper",
                input {
                    id: "{props.name}",
                    name: "{props.name}",
                    class: "form-input",
                    r#type: "{rendered_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    required: props.required,
                    disabled: props.disabled,
                    "aria-invalid": if message.is_some() { "true" } else { "false" },
                    oninput: move |e| props.oninput.call(e.value()),
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| {
                        focused.set(false);
                        if let Some(handler) = &onblur {
                            handler.call(());
                        }
                    },
                }
                if is_password {
                    button {
                        class: "password-toggle",
                        r#type: "button",
                        "aria-label": "{toggle_label}",
                        onclick: move |_| {
                            let next = !reveal();
                            reveal.set(next);
                        },
                        if reveal() { "\u{1F648}" } else { "\u{1F441}" }
                    }
                }
            }
            if let Some(text) = &message {
                span { class: "error-message", role: "alert", "{text}" }
            }
        }
    }
}
