use studio_footer_core::resources::test_ids;
use studio_footer_core::{
    DefaultMessages, FooterConfig, FooterView, HelpPanel, Message, current_year,
};

const FULL_CONFIG: &str = r#"{
    "LMS_BASE_URL": "https://lms.example.org",
    "MARKETING_SITE_BASE_URL": "https://example.org",
    "TERMS_OF_SERVICE_URL": "https://example.org/tos",
    "PRIVACY_POLICY_URL": "https://example.org/privacy",
    "SUPPORT_EMAIL": "help@example.org",
    "SITE_NAME": "Example Studio",
    "STUDIO_BASE_URL": "https://studio.example.org",
    "SHOW_ACCESSIBILITY_PAGE": "true"
}"#;

fn full_config() -> FooterConfig {
    FooterConfig::from_json(FULL_CONFIG).expect("fixture config should parse")
}

fn view(config: &FooterConfig, panel: HelpPanel) -> FooterView {
    FooterView::build(config, &DefaultMessages, panel, current_year())
}

#[test]
fn contact_link_uses_mailto_when_expanded() {
    let view = view(&full_config(), HelpPanel::expanded());
    let contact = view
        .link_by_test_id(test_ids::CONTACT_US_BUTTON)
        .expect("contact link should render");
    assert_eq!(contact.href, "mailto:help@example.org");
    assert_eq!(contact.label, "Contact us");
}

#[test]
fn empty_terms_url_hides_terms_but_keeps_privacy() {
    let mut config = full_config();
    config.terms_of_service_url = Some(String::new());
    config.privacy_policy_url = Some("https://example.org/privacy".into());
    let view = view(&config, HelpPanel::default());
    assert!(view.link_by_test_id(test_ids::TERMS_OF_SERVICE).is_none());
    let privacy = view
        .link_by_test_id(test_ids::PRIVACY_POLICY)
        .expect("privacy link should render");
    assert_eq!(privacy.href, "https://example.org/privacy");
}

#[test]
fn initial_render_is_collapsed_with_open_label() {
    let view = view(&full_config(), HelpPanel::default());
    assert!(view.help_row.is_none());
    assert!(!view.toggle.expanded);
    assert_eq!(view.toggle.label, Message::OpenHelpButtonLabel.default_message());
}

#[test]
fn toggle_label_follows_panel_state() {
    let config = full_config();
    let mut panel = HelpPanel::default();
    for clicks in 1..=4 {
        panel.toggle();
        let rendered = view(&config, panel);
        let expected = if clicks % 2 == 1 {
            Message::CloseHelpButtonLabel
        } else {
            Message::OpenHelpButtonLabel
        };
        assert_eq!(rendered.toggle.label, expected.default_message());
        assert_eq!(rendered.help_row.is_some(), clicks % 2 == 1);
    }
}

#[test]
fn each_optional_field_gates_only_its_own_link() {
    let cases: [(&str, fn(&mut FooterConfig)); 4] = [
        (test_ids::CONTACT_US_BUTTON, |c| c.support_email = None),
        (test_ids::TERMS_OF_SERVICE, |c| c.terms_of_service_url = None),
        (test_ids::PRIVACY_POLICY, |c| c.privacy_policy_url = None),
        (test_ids::ACCESSIBILITY_REQUEST, |c| {
            c.show_accessibility_page = Some("TRUE".into());
        }),
    ];
    for (removed, strip) in cases {
        let mut config = full_config();
        strip(&mut config);
        let view = view(&config, HelpPanel::expanded());
        for id in test_ids::CONDITIONAL_LINKS {
            assert_eq!(
                view.link_by_test_id(id).is_some(),
                id != removed,
                "{id} after removing {removed}"
            );
        }
    }
}

#[test]
fn present_optional_links_point_at_configured_values() {
    let config = full_config();
    let view = view(&config, HelpPanel::expanded());
    let href = |id: &str| view.link_by_test_id(id).map(|l| l.href.clone());
    assert_eq!(
        href(test_ids::TERMS_OF_SERVICE).as_deref(),
        Some("https://example.org/tos")
    );
    assert_eq!(
        href(test_ids::ACCESSIBILITY_REQUEST).as_deref(),
        Some("https://studio.example.org/accessibility")
    );
}

#[test]
fn copyright_year_is_taken_from_caller() {
    let config = full_config();
    assert_eq!(view(&config, HelpPanel::default()).legal_row.year, current_year());
    let fixed = FooterView::build(&config, &DefaultMessages, HelpPanel::default(), 1999);
    assert_eq!(fixed.legal_row.year, 1999);
}

#[test]
fn translator_is_consulted_for_every_label() {
    let config = full_config();
    let shout = |m: Message| format!("<{}>", m.key());
    let view = FooterView::build(&config, &shout, HelpPanel::expanded(), 2026);
    assert_eq!(view.toggle.label, "<footer.help.close>");
    assert_eq!(view.trademark_row.message, "<footer.trademark>");
    let help = view.help_row.expect("expanded");
    assert!(help.links.iter().all(|l| l.label.starts_with("<footer.")));
    // Site name and the LMS label are not translated.
    assert_eq!(view.legal_row.site.label, "Example Studio");
    assert_eq!(view.legal_row.links.last().map(|l| l.label.as_str()), Some("LMS"));
}

#[test]
fn missing_required_key_fails_fast() {
    let json = FULL_CONFIG.replace("\"STUDIO_BASE_URL\"", "\"UNRELATED\"");
    let err = FooterConfig::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("STUDIO_BASE_URL"), "{err}");
}

#[test]
fn non_string_accessibility_flag_hides_link_without_failing() {
    let json = FULL_CONFIG.replace(
        "\"SHOW_ACCESSIBILITY_PAGE\": \"true\"",
        "\"SHOW_ACCESSIBILITY_PAGE\": true",
    );
    let config = FooterConfig::from_json(&json).expect("declared keys are enough");
    let view = view(&config, HelpPanel::default());
    assert!(view.link_by_test_id(test_ids::ACCESSIBILITY_REQUEST).is_none());
    assert!(view.link_by_test_id(test_ids::PRIVACY_POLICY).is_some());
}

#[test]
fn null_site_name_renders_empty_site_link() {
    let json = FULL_CONFIG.replace("\"Example Studio\"", "null");
    let config = FooterConfig::from_json(&json).expect("declared keys are enough");
    let view = view(&config, HelpPanel::default());
    assert_eq!(view.legal_row.site.label, "");
    assert_eq!(view.legal_row.site.href, "https://example.org");
}
