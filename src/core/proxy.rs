//! # Drag Proxy
//!
//! The floating stand-in for the card being dragged. It follows the pointer
//! at a fixed offset and wobbles a little: each move sample picks a fresh
//! random rotation target in `[-1, 1]`, and the shown rotation chases it
//! through a damped spring so the motion is smoothed rather than jumpy.
//!
//! The proxy is purely visual. It is never part of the layout the hit tester
//! reads, and nothing here touches the sponsor store.

use std::time::Duration;

use rand::Rng;

use crate::core::drag::Point;
use crate::core::entity::SponsorId;

/// Integration step cap. Longer frame gaps are subdivided.
const MAX_STEP_SECS: f64 = 0.004;
const REST_POSITION: f64 = 0.001;
const REST_VELOCITY: f64 = 0.01;
/// Spring constants stay inside the range the step above integrates stably.
pub const STIFFNESS_RANGE: (f64, f64) = (0.1, 2000.0);
pub const DAMPING_RANGE: (f64, f64) = (0.0, 200.0);

/// Rotation magnitude at which the proxy leans one column.
const LEAN_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxySettings {
    /// Added to the pointer position to place the proxy's top-left corner.
    pub offset: Point,
    pub wobble: bool,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            offset: Point::new(-12, -1),
            wobble: true,
            stiffness: 300.0,
            damping: 30.0,
        }
    }
}

/// Damped spring, semi-implicit Euler.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: clamp_or(stiffness, STIFFNESS_RANGE, STIFFNESS_RANGE.0),
            damping: clamp_or(damping, DAMPING_RANGE, DAMPING_RANGE.0),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_POSITION && self.velocity.abs() < REST_VELOCITY
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
    }
}

/// Clamp into `(min, max)`, with `fallback` for NaN.
pub fn clamp_or(value: f64, (min, max): (f64, f64), fallback: f64) -> f64 {
    if value.is_nan() { fallback } else { value.clamp(min, max) }
}

/// Visual state of the card following the pointer.
#[derive(Debug, Clone)]
pub struct DragProxy {
    sponsor_id: SponsorId,
    pointer: Point,
    settings: ProxySettings,
    rotation: Spring,
}

impl DragProxy {
    pub fn new(sponsor_id: SponsorId, pointer: Point, settings: ProxySettings) -> Self {
        Self {
            sponsor_id,
            pointer,
            rotation: Spring::new(settings.stiffness, settings.damping),
            settings,
        }
    }

    pub fn sponsor_id(&self) -> &SponsorId {
        &self.sponsor_id
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Track a new pointer sample and pick a new wobble target.
    pub fn follow<R: Rng + ?Sized>(&mut self, pointer: Point, rng: &mut R) {
        self.pointer = pointer;
        if self.settings.wobble {
            self.rotation.set_target(rng.random_range(-1.0..=1.0));
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.rotation.tick(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.rotation.is_at_rest()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.position()
    }

    /// Top-left corner of the proxy, before any wobble.
    pub fn origin(&self) -> Point {
        self.pointer.offset(self.settings.offset)
    }

    /// Column nudge for the current rotation: -1, 0 or 1.
    pub fn lean(&self) -> i32 {
        let r = self.rotation();
        if r >= LEAN_THRESHOLD {
            1
        } else if r <= -LEAN_THRESHOLD {
            -1
        } else {
            0
        }
    }
}
