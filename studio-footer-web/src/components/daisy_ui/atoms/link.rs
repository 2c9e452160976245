use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct LinkProps {
    pub href: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub new_tab: bool,
    #[prop_or_default]
    pub test_id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Link)]
pub fn link(props: &LinkProps) -> f::Html {
    let class = f::class_list(&["link"], &props.class);
    let target: Option<f::AttrValue> = props.new_tab.then(|| "_blank".into());
    let rel: Option<f::AttrValue> = props.new_tab.then(|| "noopener noreferrer".into());
    let test_id = f::attr_value(&props.test_id);
    f::html! {
        <a class={class} href={props.href.clone()} target={target} rel={rel} data-testid={test_id}>
            { if props.children.is_empty() {
                props.label.clone().map(|l| f::html! { { l } }).unwrap_or_default()
            } else {
                props.children.iter().collect::<f::Html>()
            } }
        </a>
    }
}
