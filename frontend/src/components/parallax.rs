use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::parallax::project;
use crate::motion::ParallaxBinding;

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub binding: ParallaxBinding,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Shifts its children vertically as the window scrolls.
#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let offset = project(scroll_y, &props.binding);

    html! {
        <div
            id={props.id.clone()}
            class={props.class.clone()}
            style={format!("transform: translateY({offset:.2}px);")}
        >
            { for props.children.iter() }
        </div>
    }
}
