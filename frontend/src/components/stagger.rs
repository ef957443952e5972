use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, DomIntersectionSensor};
use crate::motion::{stagger, RevealSpec, RevealTrigger, StaggerGroup, StaggerPlan, ViewportBinding};

#[derive(Properties, PartialEq)]
pub struct StaggerProps {
    /// Child `i` uses `specs[i % specs.len()]`; empty means fade-in-up.
    #[prop_or_default]
    pub specs: Vec<RevealSpec>,
    pub interval: f64,
    #[prop_or_default]
    pub base_delay: f64,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn plan(props: &StaggerProps) -> StaggerPlan {
    let count = props.children.len();
    let specs = (0..count).map(|i| match props.specs.len() {
        0 => RevealSpec::fade_in_up(),
        n => props.specs[i % n],
    });
    stagger(specs, props.interval).with_base_delay(props.base_delay)
}

/// Reveals its children one after another once the group is visible.
#[function_component(Stagger)]
pub fn stagger_group(props: &StaggerProps) -> Html {
    let node = use_node_ref();
    let plan = plan(props);
    let states = use_state_eq(|| plan.initial_states());

    {
        let node = node.clone();
        let setter = states.setter();
        let trigger = props.trigger;
        use_effect_with_deps(
            move |_| {
                let group = StaggerGroup::new(&plan).with_trigger(trigger);
                let binding = match node.cast::<Element>() {
                    Some(element) => Some(ViewportBinding::bind(
                        &dom::motion_context(),
                        &DomIntersectionSensor,
                        &element,
                        group,
                        move |frame| setter.set(frame),
                    )),
                    None => {
                        setter.set(plan.entries().iter().map(|e| e.spec.target).collect());
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
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(i, child)| html! {
                <div class={props.item_class.clone()} style={states.get(i).map(|s| s.to_css())}>
                    { child }
                </div>
            }) }
        </div>
    }
}
