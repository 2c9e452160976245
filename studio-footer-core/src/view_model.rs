use crate::config::FooterConfig;
use crate::help_panel::HelpPanel;
use crate::messages::{Message, Translate};
use crate::resources::{self, test_ids};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    pub test_id: Option<&'static str>,
    pub new_tab: bool,
}

impl FooterLink {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            test_id: None,
            new_tab: false,
        }
    }

    fn with_test_id(mut self, test_id: &'static str) -> Self {
        self.test_id = Some(test_id);
        self
    }

    fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpToggle {
    pub label: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalRow {
    pub year: i32,
    pub site: FooterLink,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub href: String,
    pub src: String,
    pub alt: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrademarkRow {
    pub message: String,
    pub attribution: FooterLink,
    pub badge: Badge,
}

/// Everything the footer draws, with strings resolved and optional
/// elements already filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub toggle: HelpToggle,
    pub help_row: Option<HelpRow>,
    pub legal_row: LegalRow,
    pub trademark_row: TrademarkRow,
}

impl FooterView {
    /// Resolve the footer for one render.
    #[must_use]
    pub fn build(
        config: &FooterConfig,
        translator: &impl Translate,
        panel: HelpPanel,
        year: i32,
    ) -> Self {
        let expanded = panel.is_expanded();
        let toggle_label = if expanded {
            Message::CloseHelpButtonLabel
        } else {
            Message::OpenHelpButtonLabel
        };
        Self {
            toggle: HelpToggle {
                label: translator.translate(toggle_label),
                expanded,
            },
            help_row: expanded.then(|| build_help_row(config, translator)),
            legal_row: build_legal_row(config, translator, year),
            trademark_row: build_trademark_row(translator),
        }
    }

    /// All links currently rendered, in document order.
    pub fn links(&self) -> impl Iterator<Item = &FooterLink> {
        self.help_row
            .iter()
            .flat_map(|row| row.links.iter())
            .chain(std::iter::once(&self.legal_row.site))
            .chain(self.legal_row.links.iter())
            .chain(std::iter::once(&self.trademark_row.attribution))
    }

    #[must_use]
    pub fn link_by_test_id(&self, test_id: &str) -> Option<&FooterLink> {
        self.links().find(|link| link.test_id == Some(test_id))
    }
}

fn build_help_row(config: &FooterConfig, t: &impl Translate) -> HelpRow {
    let mut links = vec![
        FooterLink::new(
            t.translate(Message::EdxDocumentationButtonLabel),
            resources::EDX_DOCUMENTATION_URL,
        ),
        FooterLink::new(
            t.translate(Message::OpenEdxPortalButtonLabel),
            resources::OPEN_EDX_PORTAL_URL,
        )
        .with_test_id(test_ids::OPEN_EDX_PORTAL_BUTTON),
        FooterLink::new(t.translate(Message::Edx101ButtonLabel), resources::EDX_101_URL),
        FooterLink::new(t.translate(Message::StudioXButtonLabel), resources::STUDIOX_URL),
    ];
    if let Some(email) = config.support_email() {
        links.push(
            FooterLink::new(
                t.translate(Message::ContactUsButtonLabel),
                format!("mailto:{email}"),
            )
            .with_test_id(test_ids::CONTACT_US_BUTTON),
        );
    }
    HelpRow { links }
}

fn build_legal_row(config: &FooterConfig, t: &impl Translate, year: i32) -> LegalRow {
    let site = FooterLink::new(config.site_name.clone(), config.marketing_site_base_url.clone())
        .in_new_tab();

    let mut links = Vec::with_capacity(4);
    if let Some(url) = config.terms_of_service_url() {
        links.push(
            FooterLink::new(t.translate(Message::TermsOfServiceLinkLabel), url)
                .with_test_id(test_ids::TERMS_OF_SERVICE),
        );
    }
    if let Some(url) = config.privacy_policy_url() {
        links.push(
            FooterLink::new(t.translate(Message::PrivacyPolicyLinkLabel), url)
                .with_test_id(test_ids::PRIVACY_POLICY),
        );
    }
    if config.accessibility_page_enabled() {
        links.push(
            FooterLink::new(
                t.translate(Message::AccessibilityRequestLinkLabel),
                config.accessibility_url(),
            )
            .with_test_id(test_ids::ACCESSIBILITY_REQUEST),
        );
    }
    links.push(FooterLink::new(
        resources::LMS_LINK_LABEL,
        config.lms_base_url.clone(),
    ));

    LegalRow { year, site, links }
}

fn build_trademark_row(t: &impl Translate) -> TrademarkRow {
    TrademarkRow {
        message: t.translate(Message::TrademarkMessage),
        attribution: FooterLink::new(resources::ATTRIBUTION_LABEL, resources::ATTRIBUTION_URL),
        badge: Badge {
            href: resources::ATTRIBUTION_URL.to_string(),
            src: resources::badge_data_uri(),
            alt: resources::BADGE_ALT.to_string(),
            width: resources::BADGE_WIDTH.to_string(),
        },
    }
}
