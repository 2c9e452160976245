use crate::components::daisy_ui::foundation as f;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Help,
    ExpandLess,
    ExpandMore,
}

impl IconKind {
    /// Material Design path data on a 24×24 grid.
    const fn path(self) -> &'static str {
        match self {
            Self::Help => {
                "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 17h-2v-2h2v2zm2.07-7.75l-.9.92C13.45 12.9 13 13.5 13 15h-2v-.5c0-1.1.45-2.1 1.17-2.83l1.24-1.26c.37-.36.59-.86.59-1.41 0-1.1-.9-2-2-2s-2 .9-2 2H8c0-2.21 1.79-4 4-4s4 1.79 4 4c0 .88-.36 1.68-.93 2.25z"
            }
            Self::ExpandLess => "M12 8l-6 6 1.41 1.41L12 10.83l4.59 4.58L18 14z",
            Self::ExpandMore => "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ExpandLess => "expand-less",
            Self::ExpandMore => "expand-more",
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Icon)]
pub fn icon(props: &IconProps) -> f::Html {
    let mut class = f::class_list(&["icon"], &props.class);
    class.push(format!("icon-{}", props.kind.name()));
    f::html! {
        <svg class={class} viewBox="0 0 24 24" width="1em" height="1em" aria-hidden="true" focusable="false">
            <path fill="currentColor" d={props.kind.path()} />
        </svg>
    }
}
