mod bundle;
mod catalog;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use catalog::Catalog;
pub use locales::{LocaleMeta, locales};
pub use render::lookup;
