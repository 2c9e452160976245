use crate::simple_component;

simple_component!(
    Footer,
    footer_component,
    footer,
    ["footer", "studio-footer"],
    Some("contentinfo")
);
