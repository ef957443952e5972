use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, DomIntersectionSensor};
use crate::motion::{Reveal as RevealMotion, RevealSpec, ViewportBinding};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub spec: RevealSpec,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children at `spec.initial` and plays the reveal once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visual = use_state_eq(|| props.spec.initial);

    {
        let node = node.clone();
        let setter = visual.setter();
        let spec = props.spec;
        use_effect_with_deps(
            move |_| {
                let binding = match node.cast::<Element>() {
                    Some(element) => Some(ViewportBinding::bind(
                        &dom::motion_context(),
                        &DomIntersectionSensor,
                        &element,
                        RevealMotion::new(spec),
                        move |state| setter.set(state),
                    )),
                    None => {
                        setter.set(spec.target);
                        None
                    }
                };
                move || {
                    if let Some(binding) = binding {
                        binding.dispose();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()} style={visual.to_css()}>
            { for props.children.iter() }
        </div>
    }
}
