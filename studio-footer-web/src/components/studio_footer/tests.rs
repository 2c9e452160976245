use super::*;
use crate::app::{App, AppProps};
use futures::executor::block_on;
use std::rc::Rc;
use studio_footer_core::{DefaultMessages, FooterConfig, HelpPanel};
use yew::LocalServerRenderer;

fn config() -> FooterConfig {
    FooterConfig {
        lms_base_url: "https://lms.example.org".into(),
        marketing_site_base_url: "https://example.org".into(),
        terms_of_service_url: Some("https://example.org/tos".into()),
        privacy_policy_url: Some("https://example.org/privacy".into()),
        support_email: Some("help@example.org".into()),
        site_name: "Example Studio".into(),
        studio_base_url: "https://studio.example.org".into(),
        show_accessibility_page: Some("true".into()),
    }
}

#[derive(Properties, PartialEq)]
struct HostProps {
    view: FooterView,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    render_footer(&props.view, &Callback::noop())
}

fn render_view(config: &FooterConfig, panel: HelpPanel) -> String {
    let view = FooterView::build(config, &DefaultMessages, panel, 2031);
    block_on(LocalServerRenderer::<Host>::with_props(HostProps { view }).render())
}

fn render_app(config: FooterConfig) -> String {
    crate::i18n::set_lang("en");
    let props = AppProps {
        config: Rc::new(config),
        children: Children::default(),
    };
    block_on(LocalServerRenderer::<App>::with_props(props).render())
}

#[test]
fn expanded_panel_renders_resource_buttons_and_contact_link() {
    let html = render_view(&config(), HelpPanel::expanded());
    assert!(html.contains(r#"data-testid="helpButtonRow""#), "{html}");
    assert!(html.contains(r#"data-testid="openEdXPortalButton""#));
    assert!(html.contains(r#"href="mailto:help@example.org""#), "{html}");
    assert!(html.contains("https://docs.edx.org/"));
    assert!(html.contains("Hide Studio help"));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("icon-expand-less"));
}

#[test]
fn expanded_panel_without_support_email_omits_contact() {
    let mut cfg = config();
    cfg.support_email = Some(String::new());
    let html = render_view(&cfg, HelpPanel::expanded());
    assert!(html.contains("helpButtonRow"));
    assert!(!html.contains("contactUsButton"), "{html}");
    assert!(!html.contains("mailto:"));
}

#[test]
fn collapsed_panel_hides_help_row() {
    let html = render_view(&config(), HelpPanel::collapsed());
    assert!(!html.contains("helpButtonRow"), "{html}");
    assert!(html.contains("Looking for help with Studio?"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("icon-expand-more"));
}

#[test]
fn legal_row_uses_supplied_year_and_site_link() {
    let html = render_view(&config(), HelpPanel::collapsed());
    assert!(html.contains("© 2031"), "{html}");
    assert!(html.contains(r#"href="https://example.org""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains("Example Studio"));
    assert!(html.contains(r#"href="https://lms.example.org""#));
}

#[test]
fn trademark_row_carries_attribution_and_badge() {
    let html = render_view(&config(), HelpPanel::collapsed());
    assert!(html.contains("https://www.antiersolutions.com/"));
    assert!(html.contains("Antier"), "{html}");
    assert!(html.contains(r#"alt="Powered by Open edX""#));
    assert!(html.contains(r#"width="120px""#));
    assert!(html.contains("data:image/jpeg;base64,"));
}

#[test]
fn app_renders_collapsed_footer_on_first_render() {
    let html = render_app(config());
    assert!(html.contains(r#"data-testid="helpToggleButton""#), "{html}");
    assert!(!html.contains("helpButtonRow"));
    assert!(html.contains("Looking for help with Studio?"));
    assert!(html.contains(r#"role="contentinfo""#));
}

#[test]
fn app_renders_current_year() {
    let html = render_app(config());
    let expected = format!("© {}", studio_footer_core::current_year());
    assert!(html.contains(&expected), "{html}");
}

#[test]
fn footer_without_context_renders_nothing() {
    let html = block_on(LocalServerRenderer::<StudioFooter>::new().render());
    assert!(!html.contains("helpToggleButton"), "{html}");
}

#[test]
fn toggle_and_resource_buttons_use_distinct_variants() {
    let html = render_view(&config(), HelpPanel::expanded());
    let toggle_start = html
        .find(r#"data-testid="helpToggleButton""#)
        .expect("toggle rendered");
    let toggle_tag = &html[html[..toggle_start].rfind('<').unwrap_or(0)..toggle_start];
    assert!(toggle_tag.contains("btn-primary"), "{toggle_tag}");
    assert!(toggle_tag.contains("btn-outline"), "{toggle_tag}");
    assert!(toggle_tag.contains("btn-sm"), "{toggle_tag}");
    assert!(html.contains("btn-neutral"), "{html}");
}
