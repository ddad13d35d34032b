/// Tracks which panel of a single-open accordion is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn start_open(index: usize) -> Self {
        Self { open: Some(index) }
    }

    /// Tapping the open panel closes it; tapping any other panel moves the
    /// open slot there.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_the_requested_panel_open() {
        let accordion = Accordion::start_open(0);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
        assert_eq!(accordion.open_index(), Some(0));
    }

    #[test]
    fn test_default_is_fully_collapsed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_index(), None);
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn test_toggling_the_open_panel_closes_it() {
        let mut accordion = Accordion::start_open(2);
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_toggling_another_panel_moves_the_open_slot() {
        let mut accordion = Accordion::start_open(0);
        accordion.toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(0));

        // never more than one open
        accordion.toggle(1);
        assert_eq!(accordion.open_index(), Some(1));
    }

    #[test]
    fn test_reopening_after_a_close_works() {
        let mut accordion = Accordion::start_open(1);
        accordion.toggle(1);
        accordion.toggle(1);
        assert!(accordion.is_open(1));
    }
}
