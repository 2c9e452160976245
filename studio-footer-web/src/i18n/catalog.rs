use crate::i18n::render::lookup;
use studio_footer_core::{Message, Translate};

/// [`Translate`] backed by the active locale bundle.
///
/// Keys missing from every catalog fall back to the compiled-in English
/// message rather than echoing the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog;

impl Translate for Catalog {
    fn translate(&self, message: Message) -> String {
        lookup(message.key()).unwrap_or_else(|| message.default_message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_catalog_matches_default_messages() {
        crate::i18n::set_lang("en");
        for message in Message::ALL {
            assert_eq!(Catalog.translate(message), message.default_message());
        }
    }

    #[test]
    fn spanish_catalog_translates_toggle() {
        crate::i18n::set_lang("es");
        assert_eq!(
            Catalog.translate(Message::OpenHelpButtonLabel),
            "¿Buscas ayuda con Studio?"
        );
        crate::i18n::set_lang("en");
    }
}
