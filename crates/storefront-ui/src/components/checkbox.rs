//! Checkbox Component

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub name: String,
    pub checked: bool,
    /// Called with the new checked state
    pub onchange: EventHandler<bool>,
    #[props(default = false)]
    pub required: bool,
    /// Label content (text, links)
    pub children: Element,
}

/// Labelled checkbox, used for "remember me" and terms acceptance
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label { class: "checkbox-label",
            input {
                id: "{props.name}",
                name: "{props.name}",
                r#type: "checkbox",
                checked: props.checked,
                required: props.required,
                onchange: move |e| props.onchange.call(e.checked()),
            }
            span { {props.children} }
        }
    }
}
