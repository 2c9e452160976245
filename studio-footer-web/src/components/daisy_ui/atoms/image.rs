use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct ImageProps {
    pub src: f::AttrValue,
    pub alt: f::AttrValue,
    #[prop_or_default]
    pub width: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Image)]
pub fn image(props: &ImageProps) -> f::Html {
    let class = f::class_list(&["img"], &props.class);
    f::html! {
        <img class={class} src={props.src.clone()} alt={props.alt.clone()} width={f::attr_value(&props.width)} />
    }
}
