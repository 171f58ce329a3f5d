//! XP Count-up Animation
//!
//! `XpTween` is a pure function of elapsed time, so the value shown does not
//! depend on how often frames arrive. `TweenTracker` hands out a token per
//! animation; frames holding an older token stop without writing.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::request_animation_frame;

/// Integer interpolation from `from` to `to` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpTween {
    pub from: i64,
    pub to: i64,
    pub duration_ms: f64,
}

impl XpTween {
    pub fn new(from: i64, to: i64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        (self.from as f64 + (self.to - self.from) as f64 * progress).floor() as i64
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// What a fresh server value does to the number on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpSync {
    /// An animation is already heading to the value
    Keep,
    /// Show the value now; any animation in flight was cancelled
    Adopt,
}

/// Latest animation on one element
#[derive(Debug, Default)]
pub struct TweenTracker {
    token: u64,
    running_to: Option<i64>,
}

impl TweenTracker {
    /// Start a new animation, invalidating any in flight
    pub fn begin(&mut self, tween: &XpTween) -> u64 {
        self.token += 1;
        self.running_to = Some(tween.to);
        self.token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.token == token && self.running_to.is_some()
    }

    pub fn finish(&mut self, token: u64) {
        if self.token == token {
            self.running_to = None;
        }
    }

    pub fn cancel(&mut self) {
        self.token += 1;
        self.running_to = None;
    }

    /// Target of the animation in flight
    pub fn running_to(&self) -> Option<i64> {
        self.running_to
    }

    /// Decide whether `server_xp` replaces the value on screen. An animation
    /// heading elsewhere is cancelled so its remaining frames do not write.
    pub fn reconcile(&mut self, server_xp: i64) -> XpSync {
        match self.running_to {
            Some(target) if target == server_xp => XpSync::Keep,
            Some(_) => {
                self.cancel();
                XpSync::Adopt
            }
            None => XpSync::Adopt,
        }
    }
}

fn now_ms() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}

/// Run `tween` on animation frames, writing each value through `write`.
/// Without a `performance` clock the final value is written at once.
pub fn run_tween(
    tracker: Rc<RefCell<TweenTracker>>,
    tween: XpTween,
    write: impl Fn(i64) + 'static,
) {
    let token = tracker.borrow_mut().begin(&tween);
    let Some(started) = now_ms() else {
        write(tween.to);
        tracker.borrow_mut().finish(token);
        return;
    };
    write(tween.from);
    schedule_frame(tracker, tween, token, started, Rc::new(write));
}

fn schedule_frame(
    tracker: Rc<RefCell<TweenTracker>>,
    tween: XpTween,
    token: u64,
    started: f64,
    write: Rc<dyn Fn(i64)>,
) {
    request_animation_frame(move || {
        if !tracker.borrow().is_current(token) {
            return;
        }
        let elapsed = now_ms().map(|now| now - started).unwrap_or(tween.duration_ms);
        write(tween.value_at(elapsed));
        if tween.is_done(elapsed) {
            tracker.borrow_mut().finish(token);
        } else {
            schedule_frame(tracker, tween, token, started, write);
        }
    });
}
