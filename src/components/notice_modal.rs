//! Notice Modal - blocking notification
//!
//! Replaces the browser alert: the page stays covered until the user
//! dismisses the message, then optionally navigates on.

use dioxus::prelude::*;

use crate::app::Route;

/// A message waiting to be acknowledged
#[derive(Clone, PartialEq, Debug)]
pub struct PendingNotice {
    pub message: String,
    /// Where to go once dismissed; `None` stays on the page
    pub then: Option<Route>,
}

impl PendingNotice {
    /// Notice that keeps the user on the current page.
    pub fn stay(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            then: None,
        }
    }

    /// Notice followed by navigation.
    pub fn then(message: impl Into<String>, route: Route) -> Self {
        Self {
            message: message.into(),
            then: Some(route),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeModalProps {
    /// Signal holding the current notice; cleared on dismiss
    pub notice: Signal<Option<PendingNotice>>,
    /// Dismiss button label
    pub dismiss_label: String,
}

#[component]
pub fn NoticeModal(props: NoticeModalProps) -> Element {
    let navigator = use_navigator();
    let mut notice = props.notice;

    let Some(current) = notice() else {
        return rsx! {};
    };

    let on_dismiss = move |_: MouseEvent| {
        let next = notice.write().take().and_then(|n| n.then);
        if let Some(route) = next {
            navigator.push(route);
        }
    };

    rsx! {
        div { class: "notice-overlay",
            div {
                class: "notice-modal",
                role: "alertdialog",
                "aria-modal": "true",
                for line in current.message.lines() {
                    p { class: "notice-line", "{line}" }
                }
                button {
                    class: "btn btn-primary notice-dismiss",
                    autofocus: true,
                    onclick: on_dismiss,
                    "{props.dismiss_label}"
                }
            }
        }
    }
}
