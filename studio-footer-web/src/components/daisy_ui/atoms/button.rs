use crate::components::daisy_ui::atoms::icon::{Icon, IconKind};
use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub outline: bool,
    /// Render as an anchor pointing here instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<f::AttrValue>,
    #[prop_or_default]
    pub icon_before: Option<IconKind>,
    #[prop_or_default]
    pub icon_after: Option<IconKind>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_expanded: Option<bool>,
    #[prop_or_default]
    pub test_id: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let mut classes = f::class_list(&["btn"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("btn"));
    }
    if props.outline {
        classes.push("btn-outline");
    }
    let aria_label = f::attr_value(&props.aria_label);
    let aria_expanded = props.aria_expanded.map(|open| f::AttrValue::from(open.to_string()));
    let test_id = f::attr_value(&props.test_id);
    let content = f::html! {
        <>
            { props.icon_before.map(|kind| f::html! { <Icon kind={kind} class="btn-icon-before" /> }).unwrap_or_default() }
            { if props.children.is_empty() {
                props.label.as_ref().map(|l| f::html!{ { l.clone() } }).unwrap_or_default()
            } else {
                props.children.iter().collect::<f::Html>()
            }}
            { props.icon_after.map(|kind| f::html! { <Icon kind={kind} class="btn-icon-after" /> }).unwrap_or_default() }
        </>
    };
    match props.href.clone() {
        Some(href) => f::html! {
            <a
                class={classes}
                href={href}
                role="button"
                aria-label={aria_label}
                data-testid={test_id}
            >
                { content }
            </a>
        },
        None => f::html! {
            <button
                type="button"
                class={classes}
                aria-label={aria_label}
                aria-expanded={aria_expanded}
                data-testid={test_id}
                onclick={props.onclick.clone()}
            >
                { content }
            </button>
        },
    }
}
