use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    notice,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => queue.toasts.retain(|t| t.id != id),
        }
        queue.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
    notify: Callback<Notice>,
}

impl Toaster {
    pub fn notify(&self, notice: Notice) {
        self.notify.emit(notice);
    }
}

/// Handle for raising notices from anywhere under a `ToastProvider`.
/// Outside of one the notice only reaches the log.
#[hook]
pub fn use_toast() -> Toaster {
    match use_context::<Toaster>() {
        Some(toaster) => toaster,
        None => Toaster {
            notify: Callback::from(|notice: Notice| {
                info!("No toast provider, dropping notice: {}", notice.title);
            }),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let toaster = {
        let queue = queue.clone();
        Toaster {
            notify: Callback::from(move |notice: Notice| queue.dispatch(ToastAction::Push(notice))),
        }
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-host">
                {
                    queue.toasts().iter().map(|toast| html! {
                        <ToastView
                            key={toast.id}
                            id={toast.id}
                            notice={toast.notice.clone()}
                            on_dismiss={on_dismiss.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .toast-host {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                    }
                    .toast {
                        min-width: 280px;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 0.5rem;
                        background: #ffffff;
                        border: 1px solid #bae6fd;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.error {
                        background: #dc2626;
                        border-color: #b91c1c;
                        color: #ffffff;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.notice.severity {
        Severity::Success => "toast",
        Severity::Error => "toast error",
    };
    let role = match props.notice.severity {
        Severity::Success => "status",
        Severity::Error => "alert",
    };

    html! {
        <div class={class} role={role} onclick={onclick}>
            <div class="toast-title">{ props.notice.title.clone() }</div>
            <div class="toast-description">{ props.notice.description.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_then_dismiss() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Notice::success("Sent", "ok")))
            .reduce(ToastAction::Push(Notice::error("Error", "nope")));

        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);

        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notice.severity, Severity::Error);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Notice::success("a", "")))
            .reduce(ToastAction::Dismiss(0))
            .reduce(ToastAction::Push(Notice::success("b", "")));
        assert_eq!(queue.toasts()[0].id, 1);
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Notice::success("a", "")))
            .reduce(ToastAction::Dismiss(42));
        assert_eq!(queue.toasts().len(), 1);
    }
}
