use crate::components::daisy_ui::{
    ActionRow, ActionRowSpacer, Button, Container, DaisyColor, Footer, IconKind, Image,
    Link, TransitionReplace,
};
use studio_footer_core::resources::test_ids;
use studio_footer_core::{FooterLink, FooterView, HelpRow, LegalRow, TrademarkRow};
use yew::prelude::*;

/// Draw a resolved [`FooterView`]; `on_toggle` is wired to the help button.
#[must_use]
pub fn render_footer(view: &FooterView, on_toggle: &Callback<MouseEvent>) -> Html {
    let expanded = view.toggle.expanded;
    let icon_after = if expanded {
        IconKind::ExpandLess
    } else {
        IconKind::ExpandMore
    };
    html! {
        <Footer>
            <div class="help-divider m-0 mt-6 row items-center justify-center">
                <div class="col border-top mr-2"></div>
                <Button
                    test_id={AttrValue::from(test_ids::HELP_TOGGLE_BUTTON)}
                    variant={DaisyColor::Primary}
                    outline=true
                    class="btn-sm"
                    icon_before={IconKind::Help}
                    icon_after={icon_after}
                    aria_expanded={expanded}
                    onclick={on_toggle.clone()}
                    label={AttrValue::from(view.toggle.label.clone())}
                />
                <div class="col border-top ml-2"></div>
            </div>
            <Container class="px-4">
                <TransitionReplace>
                    { for view.help_row.iter().map(render_help_row) }
                </TransitionReplace>
                { render_legal_row(&view.legal_row) }
                { render_trademark_row(&view.trademark_row) }
            </Container>
        </Footer>
    }
}

fn render_help_row(row: &HelpRow) -> Html {
    html! {
        <ActionRow
            key="help-link-button-row"
            class="help-row py-4"
            test_id={AttrValue::from(test_ids::HELP_BUTTON_ROW)}
        >
            <ActionRowSpacer />
            { for row.links.iter().map(render_resource_button) }
            <ActionRowSpacer />
        </ActionRow>
    }
}

fn render_resource_button(link: &FooterLink) -> Html {
    html! {
        <Button
            href={AttrValue::from(link.href.clone())}
            class="btn-sm"
            variant={DaisyColor::Neutral}
            test_id={link.test_id.map(AttrValue::from)}
            label={AttrValue::from(link.label.clone())}
        />
    }
}

fn render_link(link: &FooterLink, class: &'static str) -> Html {
    html! {
        <Link
            href={AttrValue::from(link.href.clone())}
            label={AttrValue::from(link.label.clone())}
            new_tab={link.new_tab}
            test_id={link.test_id.map(AttrValue::from)}
            class={classes!(class)}
        />
    }
}

fn render_legal_row(row: &LegalRow) -> Html {
    html! {
        <ActionRow class="legal-row pt-3 m-0 x-small">
            <span class="copyright">{ format!("© {}", row.year) }</span>
            { render_link(&row.site, "ml-2") }
            <ActionRowSpacer />
            { for row.links.iter().map(|link| render_link(link, "legal-link")) }
        </ActionRow>
    }
}

fn render_trademark_row(row: &TrademarkRow) -> Html {
    let badge = &row.badge;
    html! {
        <ActionRow class="trademark-row mt-3 pb-4 x-small">
            <span class="trademark">{ row.message.clone() }</span>
            { render_link(&row.attribution, "ml-1") }
            { "." }
            <ActionRowSpacer />
            <Link href={AttrValue::from(badge.href.clone())} class="float-right badge-link">
                <Image
                    src={AttrValue::from(badge.src.clone())}
                    alt={AttrValue::from(badge.alt.clone())}
                    width={AttrValue::from(badge.width.clone())}
                />
            </Link>
        </ActionRow>
    }
}
