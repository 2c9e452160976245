#![forbid(unsafe_code)]
//! Platform-agnostic pieces of the Studio footer.
//!
//! Nothing in this crate touches the DOM: configuration is asserted and
//! parsed here, messages are identified here, and [`FooterView`] resolves
//! everything the web crate needs to draw the footer.

pub mod clock;
pub mod config;
pub mod help_panel;
pub mod messages;
pub mod resources;
pub mod view_model;

pub use clock::current_year;
pub use config::{
    ConfigError, FOOTER_CONFIG_KEYS, FOOTER_REQUESTER, FooterConfig, RawConfig, ensure_config,
    merge_config,
};
pub use help_panel::HelpPanel;
pub use messages::{DefaultMessages, Message, Translate};
pub use view_model::{Badge, FooterLink, FooterView, HelpRow, HelpToggle, LegalRow, TrademarkRow};
