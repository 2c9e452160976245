pub mod action_row;
pub mod transition;

pub use action_row::{ActionRow, ActionRowSpacer, Container};
pub use transition::{TransitionReplace, TransitionReplaceProps};
