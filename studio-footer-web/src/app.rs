use crate::components::studio_footer::StudioFooter;
use std::rc::Rc;
use studio_footer_core::FooterConfig;
use yew::prelude::*;

/// Shared application context read by the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub config: Rc<FooterConfig>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<FooterConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// Page shell: provides [`AppContext`] and places the footer after the
/// host's content.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let context = AppContext {
        config: props.config.clone(),
    };
    html! {
        <ContextProvider<AppContext> context={context}>
            <main id="main" class="studio-main">
                { for props.children.iter() }
            </main>
            <StudioFooter />
        </ContextProvider<AppContext>>
    }
}
