/// Translatable strings shown by the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Message {
    OpenHelpButtonLabel,
    CloseHelpButtonLabel,
    EdxDocumentationButtonLabel,
    OpenEdxPortalButtonLabel,
    Edx101ButtonLabel,
    StudioXButtonLabel,
    ContactUsButtonLabel,
    TermsOfServiceLinkLabel,
    PrivacyPolicyLinkLabel,
    AccessibilityRequestLinkLabel,
    TrademarkMessage,
}

impl Message {
    pub const ALL: [Self; 11] = [
        Self::OpenHelpButtonLabel,
        Self::CloseHelpButtonLabel,
        Self::EdxDocumentationButtonLabel,
        Self::OpenEdxPortalButtonLabel,
        Self::Edx101ButtonLabel,
        Self::StudioXButtonLabel,
        Self::ContactUsButtonLabel,
        Self::TermsOfServiceLinkLabel,
        Self::PrivacyPolicyLinkLabel,
        Self::AccessibilityRequestLinkLabel,
        Self::TrademarkMessage,
    ];

    /// Dotted catalog key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OpenHelpButtonLabel => "footer.help.open",
            Self::CloseHelpButtonLabel => "footer.help.close",
            Self::EdxDocumentationButtonLabel => "footer.resources.edx_documentation",
            Self::OpenEdxPortalButtonLabel => "footer.resources.open_edx_portal",
            Self::Edx101ButtonLabel => "footer.resources.edx_101",
            Self::StudioXButtonLabel => "footer.resources.studiox",
            Self::ContactUsButtonLabel => "footer.resources.contact_us",
            Self::TermsOfServiceLinkLabel => "footer.legal.terms_of_service",
            Self::PrivacyPolicyLinkLabel => "footer.legal.privacy_policy",
            Self::AccessibilityRequestLinkLabel => "footer.legal.accessibility_request",
            Self::TrademarkMessage => "footer.trademark",
        }
    }

    /// English text used when no catalog provides the key.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::OpenHelpButtonLabel => "Looking for help with Studio?",
            Self::CloseHelpButtonLabel => "Hide Studio help",
            Self::EdxDocumentationButtonLabel => "edX documentation",
            Self::OpenEdxPortalButtonLabel => "Open edX portal",
            Self::Edx101ButtonLabel => "Enroll in edX 101",
            Self::StudioXButtonLabel => "Enroll in StudioX",
            Self::ContactUsButtonLabel => "Contact us",
            Self::TermsOfServiceLinkLabel => "Terms of Service",
            Self::PrivacyPolicyLinkLabel => "Privacy Policy",
            Self::AccessibilityRequestLinkLabel => "Accessibility Accommodation Request",
            Self::TrademarkMessage => {
                "edX, Open edX and their respective logos are registered trademarks of edX Inc. Powered by"
            }
        }
    }
}

/// Translation capability handed to the view model builder.
pub trait Translate {
    fn translate(&self, message: Message) -> String;
}

/// Translator that always answers with the compiled-in English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Translate for DefaultMessages {
    fn translate(&self, message: Message) -> String {
        message.default_message().to_string()
    }
}

impl<F> Translate for F
where
    F: Fn(Message) -> String,
{
    fn translate(&self, message: Message) -> String {
        self(message)
    }
}
