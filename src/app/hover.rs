// Transient hover selection linking the event list to the chart overlay.
// Keyed by row index: a stable synthetic identity, so two events sharing a
// date never alias each other.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HoverState {
    active: Option<usize>,
}

impl HoverState {
    /// Pointer entered a row. Last enter wins.
    pub(crate) fn enter(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Pointer left a row. Only clears when that row is still the active
    /// one, so a stale leave cannot clobber a newer enter.
    pub(crate) fn leave(&mut self, index: usize) {
        if self.active == Some(index) {
            self.active = None;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave_clears() {
        let mut hover = HoverState::default();
        hover.enter(0);
        assert_eq!(hover.active(), Some(0));
        hover.leave(0);
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn stale_leave_does_not_clear_a_newer_selection() {
        let mut hover = HoverState::default();
        hover.enter(3);
        hover.enter(7);
        hover.leave(3); // late leave from the previously hovered row
        assert_eq!(hover.active(), Some(7));
    }

    #[test]
    fn leave_of_a_never_entered_row_is_a_no_op() {
        let mut hover = HoverState::default();
        hover.leave(5);
        assert_eq!(hover.active(), None);
        hover.enter(1);
        hover.leave(2);
        assert_eq!(hover.active(), Some(1));
    }

    #[test]
    fn clear_resets_regardless_of_history() {
        let mut hover = HoverState::default();
        hover.enter(4);
        hover.clear();
        assert_eq!(hover.active(), None);
    }
}
