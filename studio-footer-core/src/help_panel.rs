/// Local expand/collapse state of the help row.
///
/// Starts collapsed. The only transition is [`HelpPanel::toggled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpPanel {
    expanded: bool,
}

impl HelpPanel {
    #[must_use]
    pub const fn collapsed() -> Self {
        Self { expanded: false }
    }

    #[must_use]
    pub const fn expanded() -> Self {
        Self { expanded: true }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub const fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_collapsed() {
        assert_eq!(HelpPanel::default(), HelpPanel::collapsed());
        assert!(!HelpPanel::default().is_expanded());
    }

    #[test]
    fn toggle_parity_determines_visibility() {
        for clicks in 0..7 {
            let mut panel = HelpPanel::default();
            for _ in 0..clicks {
                panel.toggle();
            }
            assert_eq!(panel.is_expanded(), clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn toggled_does_not_mutate_receiver() {
        let panel = HelpPanel::collapsed();
        let next = panel.toggled();
        assert!(!panel.is_expanded());
        assert!(next.is_expanded());
        assert_eq!(next.toggled(), panel);
    }
}
