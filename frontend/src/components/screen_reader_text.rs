use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScreenReaderTextProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Text that is read out but not painted.
#[function_component(ScreenReaderText)]
pub fn screen_reader_text(props: &ScreenReaderTextProps) -> Html {
    html! {
        <span class="sr-only" id={props.id.clone()}>
            { for props.children.iter() }
        </span>
    }
}
