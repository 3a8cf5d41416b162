//! Bounded section index with an animation lock.
//!
//! The paginator is a plain value: every gesture becomes a call that either
//! moves the index and arms the lock, or is dropped. Nothing is queued while
//! the lock is held.

use log::debug;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paginator {
    current: usize,
    total: usize,
    cooldown_ms: f64,
    locked_until: Option<f64>,
}

impl Paginator {
    pub fn new(total: usize) -> Self {
        Self::with_cooldown(total, config::paging::COOLDOWN_MS)
    }

    /// A paginator over `total` sections. `total` is at least one.
    pub fn with_cooldown(total: usize, cooldown_ms: f64) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            cooldown_ms,
            locked_until: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    #[cfg(test)]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[cfg(test)]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        matches!(self.locked_until, Some(until) if now_ms < until)
    }

    /// Time at which the current lock lapses, if one is armed.
    pub fn locked_until(&self) -> Option<f64> {
        self.locked_until
    }

    /// Drops an expired lock. A lock that has not yet run its cooldown stays.
    pub fn release(&mut self, now_ms: f64) {
        if !self.is_locked(now_ms) {
            self.locked_until = None;
        }
    }

    /// Steps one section. Returns the new index when the step was taken.
    pub fn navigate(&mut self, direction: Direction, now_ms: f64) -> Option<usize> {
        let next = match direction {
            Direction::Up => self.current.checked_sub(1)?,
            Direction::Down => self.current + 1,
        };
        self.navigate_to(next, now_ms)
    }

    /// Jumps straight to `index` under the same bounds and lock rules.
    pub fn navigate_to(&mut self, index: usize, now_ms: f64) -> Option<usize> {
        if index >= self.total || index == self.current {
            return None;
        }
        if self.is_locked(now_ms) {
            debug!("section change to {} dropped, transition in progress", index);
            return None;
        }
        debug!("section {} -> {}", self.current, index);
        self.current = index;
        self.locked_until = Some(now_ms + self.cooldown_ms);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: f64 = 1000.0;

    fn pager(total: usize) -> Paginator {
        Paginator::with_cooldown(total, COOLDOWN)
    }

    #[test]
    fn starts_at_first_section_unlocked() {
        let p = pager(5);
        assert_eq!(p.current(), 0);
        assert!(!p.is_locked(0.0));
        assert!(p.is_first());
    }

    #[test]
    fn walks_down_to_the_last_section_and_stops() {
        let mut p = pager(5);
        let mut now = 0.0;
        let mut seen = vec![p.current()];
        for _ in 0..4 {
            assert!(p.navigate(Direction::Down, now).is_some());
            seen.push(p.current());
            now += COOLDOWN;
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);

        assert_eq!(p.navigate(Direction::Down, now), None);
        assert_eq!(p.current(), 4);
        assert!(p.is_last());
    }

    #[test]
    fn repeated_down_never_wraps() {
        let total = 6;
        let mut p = pager(total);
        for step in 0..total {
            p.navigate(Direction::Down, step as f64 * COOLDOWN);
        }
        assert_eq!(p.current(), total - 1);
    }

    #[test]
    fn up_from_first_section_is_a_noop() {
        let mut p = pager(3);
        assert_eq!(p.navigate(Direction::Up, 0.0), None);
        assert_eq!(p.current(), 0);
        assert!(!p.is_locked(0.0));
    }

    #[test]
    fn gestures_during_the_lock_are_dropped() {
        let mut p = pager(5);
        assert_eq!(p.navigate(Direction::Down, 100.0), Some(1));
        assert!(p.is_locked(100.0));

        assert_eq!(p.navigate(Direction::Down, 400.0), None);
        assert_eq!(p.navigate(Direction::Up, 900.0), None);
        assert_eq!(p.navigate_to(3, 1099.0), None);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn lock_lapses_exactly_at_the_cooldown() {
        let mut p = pager(5);
        p.navigate(Direction::Down, 0.0);
        assert!(p.is_locked(COOLDOWN - 0.5));

        p.release(COOLDOWN - 0.5);
        assert_eq!(p.locked_until(), Some(COOLDOWN));

        p.release(COOLDOWN);
        assert_eq!(p.locked_until(), None);
        assert_eq!(p.navigate(Direction::Down, COOLDOWN), Some(2));
    }

    #[test]
    fn navigate_to_respects_bounds() {
        let mut p = pager(4);
        assert_eq!(p.navigate_to(4, 0.0), None);
        assert_eq!(p.navigate_to(usize::MAX, 0.0), None);
        assert_eq!(p.navigate_to(3, 0.0), Some(3));
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn navigate_to_current_does_not_arm_the_lock() {
        let mut p = pager(4);
        assert_eq!(p.navigate_to(0, 0.0), None);
        assert!(!p.is_locked(0.0));
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_sequences() {
        let mut p = pager(3);
        let script = [
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Down,
        ];
        for (i, direction) in script.iter().enumerate() {
            // Half the calls land inside the lock window.
            p.navigate(*direction, i as f64 * COOLDOWN / 2.0);
            assert!(p.current() < p.total());
        }
    }

    #[test]
    fn zero_sections_is_treated_as_one() {
        let mut p = pager(0);
        assert_eq!(p.total(), 1);
        assert_eq!(p.navigate(Direction::Down, 0.0), None);
    }
}
