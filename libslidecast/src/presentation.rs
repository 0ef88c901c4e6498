//! Presentation controller
//!
//! Owns the current slide index and the single navigation primitive,
//! [`Presentation::go_to`]. Targets outside `0..total` are ignored rather than
//! rejected, so callers can pass `index - 1` at the first slide or
//! `index + 1` at the last without checking bounds first.

use std::fmt;

use tracing::trace;

/// Navigation request, expressed relative to the current index where needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    First,
    Last,
    /// Zero-based target; any value is accepted
    GoTo(i64),
}

impl Navigation {
    /// Go to a 1-based slide number, as typed by a user
    pub fn to_slide(number: i64) -> Self {
        Navigation::GoTo(number.saturating_sub(1))
    }
}

/// Current position within a deck of `total` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    index: usize,
    total: usize,
}

impl Presentation {
    /// Start at the first slide of a deck with `total` slides.
    ///
    /// A deck always has at least one slide; `total` of zero is treated as one.
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
        }
    }

    /// Move to `target` if it is a valid index.
    ///
    /// Out-of-range targets leave the index unchanged. Returns whether the
    /// index changed.
    pub fn go_to(&mut self, target: i64) -> bool {
        if target < 0 || target >= self.total as i64 {
            trace!(requested = target, total = self.total, "navigation target out of range");
            return false;
        }

        let target = target as usize;
        let changed = target != self.index;
        self.index = target;
        changed
    }

    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let current = self.index as i64;
        let target = match navigation {
            Navigation::Next => current + 1,
            Navigation::Previous => current - 1,
            Navigation::First => 0,
            Navigation::Last => self.total as i64 - 1,
            Navigation::GoTo(target) => target,
        };
        self.go_to(target)
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Navigation::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(Navigation::Previous)
    }

    pub fn first(&mut self) -> bool {
        self.navigate(Navigation::First)
    }

    pub fn last(&mut self) -> bool {
        self.navigate(Navigation::Last)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total - 1
    }

    /// 1-based position as a percentage of the deck, rounded half up
    pub fn progress(&self) -> u8 {
        let numerator = 200 * (self.index + 1) + self.total;
        (numerator / (2 * self.total)) as u8
    }

    pub fn position(&self) -> Position {
        Position {
            current: self.index + 1,
            total: self.total,
        }
    }
}

/// 1-based slide position, displayed as "Slide 3 / 11"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slide {} / {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_slide() {
        let presentation = Presentation::new(5);
        assert_eq!(presentation.index(), 0);
        assert!(presentation.is_first());
        assert!(!presentation.is_last());
    }

    #[test]
    fn test_go_to_valid_and_invalid_targets() {
        for start in 0..5i64 {
            for target in -3..8i64 {
                let mut presentation = Presentation::new(5);
                presentation.go_to(start);

                presentation.go_to(target);

                let expected = if (0..5).contains(&target) { target } else { start };
                assert_eq!(presentation.index() as i64, expected, "start={start} target={target}");
            }
        }
    }

    #[test]
    fn test_go_to_reports_change() {
        let mut presentation = Presentation::new(3);
        assert!(presentation.go_to(2));
        assert!(!presentation.go_to(2));
        assert!(!presentation.go_to(3));
        assert!(!presentation.go_to(-1));
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut presentation = Presentation::new(4);
        assert!(!presentation.previous());
        assert_eq!(presentation.index(), 0);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let mut presentation = Presentation::new(4);
        presentation.last();
        assert!(!presentation.next());
        assert_eq!(presentation.index(), 3);
        assert!(presentation.is_last());
    }

    #[test]
    fn test_progress_monotonic_and_ends_at_100() {
        for total in 1..=40 {
            let mut presentation = Presentation::new(total);
            let mut previous = presentation.progress();
            while presentation.next() {
                assert!(presentation.progress() >= previous);
                previous = presentation.progress();
            }
            assert_eq!(presentation.progress(), 100, "total={total}");
        }
    }

    #[test]
    fn test_progress_rounds_half_up() {
        let mut presentation = Presentation::new(8);
        // 1/8 = 12.5%
        assert_eq!(presentation.progress(), 13);

        presentation.go_to(2);
        // 3/8 = 37.5%
        assert_eq!(presentation.progress(), 38);

        let presentation = Presentation::new(3);
        assert_eq!(presentation.progress(), 33);
    }

    #[test]
    fn test_single_slide_deck() {
        let mut presentation = Presentation::new(1);
        assert!(presentation.is_first());
        assert!(presentation.is_last());
        assert_eq!(presentation.progress(), 100);
        assert!(!presentation.next());
        assert!(!presentation.previous());
    }

    #[test]
    fn test_position_display() {
        let mut presentation = Presentation::new(11);
        presentation.go_to(2);
        assert_eq!(presentation.position().to_string(), "Slide 3 / 11");
    }

    #[test]
    fn test_to_slide_is_one_based() {
        let mut presentation = Presentation::new(5);
        presentation.navigate(Navigation::to_slide(3));
        assert_eq!(presentation.index(), 2);

        presentation.navigate(Navigation::to_slide(0));
        assert_eq!(presentation.index(), 2);
    }

    #[test]
    fn test_to_slide_extreme_numbers_ignored() {
        assert_eq!(Navigation::to_slide(i64::MIN), Navigation::GoTo(i64::MIN));

        let mut presentation = Presentation::new(5);
        presentation.go_to(1);
        assert!(!presentation.navigate(Navigation::to_slide(i64::MIN)));
        assert!(!presentation.navigate(Navigation::to_slide(i64::MAX)));
        assert_eq!(presentation.index(), 1);
    }

    #[test]
    fn test_five_slide_walkthrough() {
        let mut presentation = Presentation::new(5);

        presentation.navigate(Navigation::Next);
        presentation.navigate(Navigation::Next);
        assert_eq!(presentation.index(), 2);
        assert_eq!(presentation.progress(), 60);

        presentation.navigate(Navigation::First);
        assert_eq!(presentation.index(), 0);

        presentation.navigate(Navigation::Last);
        assert_eq!(presentation.index(), 4);
        assert_eq!(presentation.progress(), 100);

        presentation.navigate(Navigation::Next);
        assert_eq!(presentation.index(), 4);
    }
}
