//! UI state machines for the landing page, kept free of DOM types so they can
//! be unit tested on the host target. Components drive them through
//! `use_reducer` / `use_state` and own the timers that feed them transitions.

use std::rc::Rc;

use yew::prelude::*;

/// Carousel position over a fixed-size list. Wraps in both directions and
/// remembers the index it just left so the outgoing card can animate out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotator {
    index: usize,
    previous: Option<usize>,
    len: usize,
}

pub enum RotatorAction {
    /// Periodic advance from the rotation interval.
    Tick,
    Next,
    Prev,
    JumpTo(usize),
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "rotator needs at least one entry");
        Rotator { index: 0, previous: None, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Index the carousel just moved away from, if the last transition
    /// actually changed position.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn next(&self) -> Self {
        Rotator {
            index: (self.index + 1) % self.len,
            previous: Some(self.index),
            len: self.len,
        }
    }

    pub fn prev(&self) -> Self {
        Rotator {
            index: (self.index + self.len - 1) % self.len,
            previous: Some(self.index),
            len: self.len,
        }
    }

    /// Jumping to the current index is a no-op so repeated clicks on the
    /// active pagination dot don't replay the card transition.
    pub fn jump_to(&self, target: usize) -> Self {
        if target >= self.len || target == self.index {
            return *self;
        }
        Rotator {
            index: target,
            previous: Some(self.index),
            len: self.len,
        }
    }

    pub fn tick(&self) -> Self {
        self.next()
    }
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RotatorAction::Tick => Rc::new(self.tick()),
            RotatorAction::Next => Rc::new(self.next()),
            RotatorAction::Prev => Rc::new(self.prev()),
            RotatorAction::JumpTo(i) => Rc::new(self.jump_to(i)),
        }
    }
}

/// One-way visibility latch for scroll-triggered section reveals. Once a
/// section has been seen there is no transition back to hidden.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection sample. Only the hidden -> visible edge exists;
    /// `false` samples after the latch has fired are ignored.
    pub fn observe(&mut self, intersecting: bool) {
        if intersecting {
            self.visible = true;
        }
    }
}

/// Newsletter signup state: the draft email plus the transient confirmation
/// flag. The component schedules the expiry with a timeout; the machine just
/// records the transitions.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Newsletter {
    email: String,
    confirmed: bool,
}

pub enum NewsletterAction {
    Edit(String),
    Submit,
    /// Fired by the confirmation timeout.
    ExpireConfirmation,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Submit the draft. Returns the captured address for the email-capture
    /// collaborator, or `None` when the field is empty (the browser's
    /// `required` constraint should already have blocked that case).
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() {
            return None;
        }
        let captured = std::mem::take(&mut self.email);
        self.confirmed = true;
        Some(captured)
    }

    pub fn expire_confirmation(&mut self) {
        self.confirmed = false;
    }
}

impl Reducible for Newsletter {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NewsletterAction::Edit(value) => next.set_email(value),
            NewsletterAction::Submit => {
                next.submit();
            }
            NewsletterAction::ExpireConfirmation => next.expire_confirmation(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_of_next_returns_to_start() {
        let len = 3;
        for start in 0..len {
            let mut r = Rotator::new(len).jump_to(start);
            for _ in 0..len {
                r = r.next();
            }
            assert_eq!(r.index(), start);
        }
    }

    #[test]
    fn prev_undoes_next_from_any_index() {
        let len = 3;
        for start in 0..len {
            let r = Rotator::new(len).jump_to(start);
            assert_eq!(r.next().prev().index(), r.index());
            assert_eq!(r.prev().next().index(), r.index());
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let r = Rotator::new(3);
        assert_eq!(r.prev().index(), 2);
        assert_eq!(r.jump_to(2).next().index(), 0);
    }

    #[test]
    fn jump_to_sets_exact_index_and_is_idempotent() {
        let r = Rotator::new(3);
        for i in 0..3 {
            let once = r.jump_to(i);
            assert_eq!(once.index(), i);
            let twice = once.jump_to(i);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let r = Rotator::new(3).jump_to(1);
        assert_eq!(r.jump_to(7), r);
    }

    #[test]
    fn tick_advances_by_exactly_one() {
        let mut r = Rotator::new(3);
        for expected in [1, 2, 0, 1] {
            r = r.tick();
            assert_eq!(r.index(), expected);
        }
    }

    #[test]
    fn rotator_only_moves_when_driven() {
        // Dropping the interval handle is the cancellation path; with no
        // transitions applied the machine must hold its position.
        let r = Rotator::new(3).next();
        let snapshot = r;
        assert_eq!(r, snapshot);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn transitions_record_the_outgoing_index() {
        let r = Rotator::new(3);
        assert_eq!(r.previous(), None);
        assert_eq!(r.next().previous(), Some(0));
        assert_eq!(r.jump_to(2).previous(), Some(0));
        // A no-op jump keeps the old record instead of faking a transition.
        assert_eq!(r.jump_to(0).previous(), None);
    }

    #[test]
    fn reveal_latch_never_reverts() {
        let mut latch = RevealLatch::new();
        assert!(!latch.is_visible());
        latch.observe(true);
        assert!(latch.is_visible());
        latch.observe(false);
        assert!(latch.is_visible());
        latch.observe(true);
        assert!(latch.is_visible());
    }

    #[test]
    fn submit_captures_email_and_clears_field() {
        let mut n = Newsletter::new();
        n.set_email("user@example.com".to_string());
        assert_eq!(n.submit().as_deref(), Some("user@example.com"));
        assert_eq!(n.email(), "");
        assert!(n.is_confirmed());
    }

    #[test]
    fn confirmation_expires() {
        let mut n = Newsletter::new();
        n.set_email("user@example.com".to_string());
        n.submit();
        n.expire_confirmation();
        assert!(!n.is_confirmed());
        assert_eq!(n.email(), "");
    }

    #[test]
    fn empty_submit_is_rejected() {
        let mut n = Newsletter::new();
        assert_eq!(n.submit(), None);
        assert!(!n.is_confirmed());
    }
}
