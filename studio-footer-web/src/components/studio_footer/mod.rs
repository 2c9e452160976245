#[cfg(test)]
mod tests;
mod view;

use crate::app::AppContext;
use crate::i18n::Catalog;
use studio_footer_core::{FooterView, HelpPanel, current_year};
use yew::prelude::*;

pub use view::render_footer;

/// Studio page footer: help panel toggle, legal links and attribution.
///
/// Reads its configuration from the surrounding [`AppContext`].
#[function_component(StudioFooter)]
pub fn studio_footer() -> Html {
    let panel = use_state(HelpPanel::default);
    let Some(ctx) = use_context::<AppContext>() else {
        log::error!("StudioFooter rendered without an AppContext provider");
        return Html::default();
    };

    let on_toggle = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| {
            let next = panel.toggled();
            log::debug!(
                "help panel {}",
                if next.is_expanded() { "expanded" } else { "collapsed" }
            );
            panel.set(next);
        })
    };

    let view = FooterView::build(&ctx.config, &Catalog, *panel, current_year());
    render_footer(&view, &on_toggle)
}
