//! Presentational wrappers that animate their children in with the variants from
//! `crate::motion`. They only read the `MotionConfig` context; nothing here owns state
//! beyond "has this element mounted yet" and hover/press flags.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::{MotionConfig, Phase, Variant};

const ENTER_TICK_MS: u32 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    Page,
    FadeIn,
    SlideUp,
    ScaleIn,
    #[default]
    StaggerItem,
    ScrollReveal,
    Backdrop,
    ModalPanel,
}

impl Animation {
    pub fn resolve(self, config: &MotionConfig) -> Variant {
        match self {
            Animation::Page => config.page(),
            Animation::FadeIn => config.fade_in(),
            Animation::SlideUp => config.slide_up(),
            Animation::ScaleIn => config.scale_in(),
            Animation::StaggerItem => config.stagger_item(),
            Animation::ScrollReveal => config.scroll_reveal(),
            Animation::Backdrop => config.backdrop(),
            Animation::ModalPanel => config.modal_panel(),
        }
    }
}

#[hook]
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// False on the first paint, true one frame later, so CSS transitions have a start
/// state to run from.
#[hook]
pub fn use_entered() -> bool {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ENTER_TICK_MS, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *entered
}

#[hook]
fn use_enter_style(animation: Animation, index: usize) -> String {
    let config = use_motion_config();
    let entered = use_entered();
    let variant = animation.resolve(&config);
    if entered {
        variant.style(Phase::Animate, config.stagger_delay(index, None))
    } else {
        variant.style(Phase::Initial, 0.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub animation: Animation,
    /// Position among staggered siblings.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub aria_labelledby: Option<AttrValue>,
}

#[function_component(MotionSection)]
pub fn motion_section(props: &MotionProps) -> Html {
    let style = use_enter_style(props.animation, props.index);
    html! {
        <section
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            aria-labelledby={props.aria_labelledby.clone()}
        >
            { for props.children.iter() }
        </section>
    }
}

#[function_component(MotionArticle)]
pub fn motion_article(props: &MotionProps) -> Html {
    let style = use_enter_style(props.animation, props.index);
    html! {
        <article
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            aria-labelledby={props.aria_labelledby.clone()}
        >
            { for props.children.iter() }
        </article>
    }
}

#[function_component(MotionDiv)]
pub fn motion_div(props: &MotionProps) -> Html {
    let style = use_enter_style(props.animation, props.index);
    html! {
        <div id={props.id.clone()} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub hoverable: bool,
}

#[function_component(MotionCard)]
pub fn motion_card(props: &MotionCardProps) -> Html {
    let config = use_motion_config();
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        let hoverable = props.hoverable;
        Callback::from(move |_: MouseEvent| {
            if hoverable {
                hovered.set(true);
            }
        })
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let phase = if *hovered { Phase::Animate } else { Phase::Exit };
    let style = config.card_hover().style(phase, 0.0);

    html! {
        <div
            class={classes!("card", props.class.clone())}
            style={style}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_pressed: Option<bool>,
}

#[function_component(MotionButton)]
pub fn motion_button(props: &MotionButtonProps) -> Html {
    let config = use_motion_config();
    let pressed = use_state(|| false);

    let press = |down: bool| {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(down))
    };

    let phase = if *pressed && !props.disabled { Phase::Animate } else { Phase::Exit };
    let style = config.button_press().style(phase, 0.0);

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("btn", props.class.clone())}
            style={style}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            aria-pressed={props.aria_pressed.map(|p| p.to_string())}
            onclick={props.onclick.clone()}
            onmousedown={press(true)}
            onmouseup={press(false)}
            onmouseleave={press(false)}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_animations_use_their_own_variants() {
        let config = MotionConfig::default();
        assert_eq!(Animation::Backdrop.resolve(&config), config.backdrop());
        assert_eq!(Animation::ModalPanel.resolve(&config), config.modal_panel());
        assert_eq!(Animation::default().resolve(&config), config.stagger_item());
    }
}
