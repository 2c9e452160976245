use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TransitionReplaceProps {
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Animates whichever child is currently mounted.
///
/// The wrapper stays in the tree; children carry their own `key` so a
/// replaced child remounts and replays the CSS enter animation.
#[f::function_component(TransitionReplace)]
pub fn transition_replace(props: &TransitionReplaceProps) -> f::Html {
    let mut class = f::class_list(&["transition-replace"], &props.class);
    if !props.children.is_empty() {
        class.push("transition-replace-entered");
    }
    f::html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}
