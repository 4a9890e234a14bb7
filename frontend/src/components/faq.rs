use yew::prelude::*;
use web_sys::MouseEvent;

use crate::a11y::aria::generate_id;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);
    let answer_id = use_state(|| generate_id("faq"));

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
                aria-controls={(*answer_id).clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon" aria-hidden="true">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" id={(*answer_id).clone()} hidden={!*is_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [(&'static str, &'static str)],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.items.iter().map(|(question, answer)| html! {
                <FaqItem question={*question}>
                    <p>{*answer}</p>
                </FaqItem>
            }) }
        </div>
    }
}
