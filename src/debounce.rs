//! Debounce
//!
//! `DebounceSlot` keeps the latest value and a generation counter; a timer
//! only fires if its generation is still the latest. `Debounced` drives the
//! slot with `gloo_timers`, dropping (and so cancelling) the previous timer
//! on every call.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[derive(Debug)]
pub struct DebounceSlot<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for DebounceSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> DebounceSlot<T> {
    /// Replace the pending value; returns the generation to fire with
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// The pending value if `generation` is still the latest call
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Coalesces calls made within `delay_ms` of each other into one call of
/// `action` with the last value.
pub struct Debounced<T: 'static> {
    delay_ms: u32,
    slot: Rc<RefCell<DebounceSlot<T>>>,
    timer: RefCell<Option<Timeout>>,
    action: Rc<dyn Fn(T)>,
}

impl<T: 'static> Debounced<T> {
    pub fn new(delay_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            slot: Rc::new(RefCell::new(DebounceSlot::default())),
            timer: RefCell::new(None),
            action: Rc::new(action),
        }
    }

    pub fn call(&self, value: T) {
        let generation = self.slot.borrow_mut().schedule(value);
        let slot = Rc::clone(&self.slot);
        let action = Rc::clone(&self.action);
        let timeout = Timeout::new(self.delay_ms, move || {
            let ready = slot.borrow_mut().fire(generation);
            if let Some(value) = ready {
                action(value);
            }
        });
        // Dropping the previous Timeout clears it
        self.timer.replace(Some(timeout));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_calls_one_fire_with_last_value() {
        let mut slot = DebounceSlot::default();
        let generations: Vec<u64> = ["a", "an", "ana", "ana ", "ana m"]
            .iter()
            .map(|v| slot.schedule(v.to_string()))
            .collect();

        // Timers of superseded calls may still run; only the last one counts
        let fired: Vec<String> = generations.iter().filter_map(|g| slot.fire(*g)).collect();
        assert_eq!(fired, vec!["ana m".to_string()]);
    }

    #[test]
    fn test_fire_consumes_value() {
        let mut slot = DebounceSlot::default();
        let generation = slot.schedule(1);
        assert_eq!(slot.fire(generation), Some(1));
        assert_eq!(slot.fire(generation), None);
    }

    #[test]
    fn test_stale_generation_after_new_call() {
        let mut slot = DebounceSlot::default();
        let first = slot.schedule(1);
        let second = slot.schedule(2);
        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), Some(2));
    }
}
