use crate::simple_component;

const NO_ROLE: Option<&str> = None;

simple_component!(
    ActionRow,
    action_row,
    div,
    ["action-row", "flex", "flex-wrap", "items-center", "gap-2"],
    NO_ROLE
);

simple_component!(
    ActionRowSpacer,
    action_row_spacer,
    span,
    ["action-row-spacer", "flex-1"],
    NO_ROLE
);

simple_component!(Container, container, div, ["container", "container-xl"], NO_ROLE);
