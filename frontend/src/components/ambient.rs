use yew::prelude::*;

use crate::dom;
use crate::motion::{start_loop, AmbientMotionSpec};

#[derive(Properties, PartialEq)]
pub struct AmbientProps {
    pub spec: AmbientMotionSpec,
    /// Position among the loops sharing `spec`'s shape; sets the phase.
    pub instance: usize,
    #[prop_or_default]
    pub class: Classes,
    /// Static declarations kept in front of the animated ones.
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Loops `spec` from mount to unmount, advanced by the phase of `instance`.
#[function_component(Ambient)]
pub fn ambient(props: &AmbientProps) -> Html {
    let pose = use_state_eq(|| props.spec.rest_pose());

    {
        let setter = pose.setter();
        let spec = props.spec.clone().for_instance(props.instance);
        use_effect_with_deps(
            move |_| {
                let handle = start_loop(&dom::motion_context(), spec, move |p| setter.set(p));
                move || handle.stop()
            },
            (),
        );
    }

    html! {
        <div class={props.class.clone()} style={format!("{} {}", props.style, pose.to_css())}>
            { for props.children.iter() }
        </div>
    }
}
