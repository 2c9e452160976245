mod probe;
mod session;

pub use probe::FooterProbe;
pub use session::{BrowserConfig, BrowserKind, new_session, parse_browser_kind};
