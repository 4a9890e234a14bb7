use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::a11y::aria::{announce, Politeness};
use crate::components::motion::{use_entered, use_motion_config};
use crate::motion::Phase;

const TOAST_LIFETIME_MS: u32 = 5_000;
/// `Toaster::show` already speaks the toast through `announce`, so the visible card
/// is not a live region of its own.
const CARD_LIVE: &str = "off";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

impl ToastVariant {
    fn politeness(self) -> Politeness {
        match self {
            ToastVariant::Success => Politeness::Polite,
            ToastVariant::Destructive => Politeness::Assertive,
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastVariant::Success => "toast toast-success",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push {
                title,
                description,
                variant,
            } => {
                toasts.push(Toast {
                    id: next_id,
                    title,
                    description,
                    variant,
                });
                next_id += 1;
            }
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { next_id, toasts })
    }
}

/// Handed to pages through context to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl Toaster {
    /// Shows a toast and reads it out: success politely, errors interrupting.
    pub fn show(&self, title: &str, description: &str, variant: ToastVariant) {
        announce(&format!("{}. {}", title, description), variant.politeness());
        self.dispatcher.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let toaster = Toaster {
        dispatcher: list.dispatcher(),
    };
    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-viewport">
                { for list.toasts.iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let config = use_motion_config();
    let entered = use_entered();

    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let phase = if entered { Phase::Animate } else { Phase::Initial };
    let style = config.toast().style(phase, 0.0);
    html! {
        <div class={props.toast.variant.class()} style={style} aria-live={CARD_LIVE}>
            <div class="toast-body">
                <p class="toast-title">{&props.toast.title}</p>
                <p class="toast-description">{&props.toast.description}</p>
            </div>
            <button class="toast-close" aria-label="Fermer la notification" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push {
            title: "a".into(),
            description: String::new(),
            variant: ToastVariant::Success,
        });
        let list = list.reduce(ToastAction::Push {
            title: "b".into(),
            description: String::new(),
            variant: ToastVariant::Destructive,
        });
        assert_eq!(list.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title, "b");
        assert_eq!(ToastVariant::Destructive.politeness(), Politeness::Assertive);
    }

    #[test]
    fn toasts_are_spoken_once_through_the_announcer() {
        use crate::a11y::aria::LiveRegion;

        assert_eq!(CARD_LIVE, "off");
        for variant in [ToastVariant::Success, ToastVariant::Destructive] {
            let region = LiveRegion::new("Erreur. Réessayez.", variant.politeness());
            let live = region.attributes()[0];
            assert_eq!(live.0, "aria-live");
            assert_ne!(live.1, CARD_LIVE);
        }
    }
}
