//! Time-driven property interpolation.
//!
//! A [`Tweened`] value owns at most one in-flight tween. Starting a new tween
//! replaces the current one and continues from wherever the value is now, so
//! the most recent request always wins. [`TweenHandle`]s let the caller cancel
//! a tween later; a handle whose tween was already replaced does nothing.

use glam::Vec3;

/// Values that can be linearly interpolated.
pub trait Interpolate: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out; the default for hover and press feedback.
    QuadOut,
    /// Overshoots the target by an amount controlled by the parameter, then settles.
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::BackOut(overshoot) => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
        }
    }
}

/// Identifies one tween started on one [`Tweened`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenHandle(u64);

/// Description of a tween before it starts.
#[derive(Clone, Copy, Debug)]
pub struct TweenSpec<T> {
    pub to: T,
    pub duration: f32,
    pub easing: Easing,
    pub delay: f32,
    pub yoyo: bool,
    pub repeat: u32,
    /// Where yoyo legs return to; the start value when `None`.
    pub rest: Option<T>,
}

impl<T: Interpolate> TweenSpec<T> {
    pub fn to(to: T, duration: f32) -> Self {
        Self {
            to,
            duration,
            easing: Easing::QuadOut,
            delay: 0.0,
            yoyo: false,
            repeat: 0,
            rest: None,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    /// Play forward then backward, `repeat` extra legs after the first.
    pub fn yoyo(mut self, repeat: u32) -> Self {
        self.yoyo = true;
        self.repeat = repeat;
        self
    }

    /// Return legs head for `rest` instead of the value the tween started from.
    pub fn returning_to(mut self, rest: T) -> Self {
        self.rest = Some(rest);
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveTween<T> {
    handle: TweenHandle,
    from: T,
    spec: TweenSpec<T>,
    elapsed: f32,
}

impl<T: Interpolate> ActiveTween<T> {
    fn legs(&self) -> u32 {
        self.spec.repeat + 1
    }

    fn total(&self) -> f32 {
        self.spec.delay + self.spec.duration * self.legs() as f32
    }

    fn rest(&self) -> T {
        self.spec.rest.unwrap_or(self.from)
    }

    fn final_value(&self) -> T {
        // Odd leg count lands on `to`; with yoyo an even count lands on the rest value.
        if self.spec.yoyo && self.legs() % 2 == 0 {
            self.rest()
        } else {
            self.spec.to
        }
    }

    fn sample(&self) -> T {
        let t = self.elapsed - self.spec.delay;
        if t <= 0.0 {
            return self.from;
        }
        if t >= self.spec.duration * self.legs() as f32 {
            return self.final_value();
        }
        let leg = (t / self.spec.duration).floor() as u32;
        let local = (t - leg as f32 * self.spec.duration) / self.spec.duration;
        if self.spec.yoyo && leg % 2 == 1 {
            return self
                .rest()
                .lerp_to(self.spec.to, self.spec.easing.apply(1.0 - local));
        }
        let start = if leg == 0 { self.from } else { self.rest() };
        start.lerp_to(self.spec.to, self.spec.easing.apply(local))
    }
}

/// A property value animated by at most one tween at a time.
#[derive(Clone, Debug)]
pub struct Tweened<T> {
    value: T,
    active: Option<ActiveTween<T>>,
    generation: u64,
}

impl<T: Interpolate> Tweened<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            active: None,
            generation: 0,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The value this property settles on if nothing else is requested.
    pub fn target(&self) -> T {
        self.active
            .as_ref()
            .map(|a| a.final_value())
            .unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Start a tween from the current value; supersedes any in-flight tween.
    pub fn start(&mut self, spec: TweenSpec<T>) -> TweenHandle {
        self.generation += 1;
        let handle = TweenHandle(self.generation);
        if spec.duration <= 0.0 && spec.delay <= 0.0 {
            self.value = if spec.yoyo && spec.repeat % 2 == 1 {
                spec.rest.unwrap_or(self.value)
            } else {
                spec.to
            };
            self.active = None;
            return handle;
        }
        self.active = Some(ActiveTween {
            handle,
            from: self.value,
            spec: TweenSpec {
                duration: spec.duration.max(f32::EPSILON),
                ..spec
            },
            elapsed: 0.0,
        });
        handle
    }

    /// Cancel the tween behind `handle` if it is still the current one.
    /// The value stays wherever the tween had brought it.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        match &self.active {
            Some(a) if a.handle == handle => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Advance time; returns true while a tween is still running.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.elapsed += dt_sec.max(0.0);
        self.value = active.sample();
        if active.elapsed >= active.total() {
            self.value = active.final_value();
            self.active = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut v = Tweened::new(0.8_f32);
        v.start(TweenSpec::to(1.0, 0.3));
        assert!(approx(v.target(), 1.0));
        assert!(v.advance(0.1));
        assert!(v.value() > 0.8 && v.value() < 1.0);
        assert!(!v.advance(0.25));
        assert!(approx(v.value(), 1.0));
        assert!(!v.is_animating());
    }

    #[test]
    fn newer_request_wins_and_starts_from_current_value() {
        let mut v = Tweened::new(1.0_f32);
        let first = v.start(TweenSpec::to(1.1, 0.3));
        v.advance(0.15);
        let mid = v.value();
        let second = v.start(TweenSpec::to(1.0, 0.3));
        assert_ne!(first, second);
        assert!(approx(v.value(), mid));
        assert!(approx(v.target(), 1.0));
        // The superseded handle no longer controls anything.
        assert!(!v.cancel(first));
        assert!(v.is_animating());
        v.advance(1.0);
        assert!(approx(v.value(), 1.0));
    }

    #[test]
    fn cancel_freezes_value() {
        let mut v = Tweened::new(0.0_f32);
        let h = v.start(TweenSpec::to(1.0, 1.0).easing(Easing::Linear));
        v.advance(0.5);
        assert!(v.cancel(h));
        v.advance(1.0);
        assert!(approx(v.value(), 0.5));
    }

    #[test]
    fn yoyo_returns_to_start() {
        let mut v = Tweened::new(1.1_f32);
        v.start(TweenSpec::to(0.9, 0.1).yoyo(1).easing(Easing::Linear));
        assert!(approx(v.target(), 1.1));
        v.advance(0.1);
        assert!(approx(v.value(), 0.9));
        v.advance(0.05);
        assert!(approx(v.value(), 1.0));
        v.advance(0.06);
        assert!(approx(v.value(), 1.1));
        assert!(!v.is_animating());
    }

    #[test]
    fn yoyo_returns_to_explicit_rest() {
        let mut v = Tweened::new(1.05_f32);
        v.start(
            TweenSpec::to(0.9, 0.1)
                .yoyo(1)
                .returning_to(1.1)
                .easing(Easing::Linear),
        );
        assert!(approx(v.target(), 1.1));
        v.advance(0.1);
        assert!(approx(v.value(), 0.9));
        v.advance(0.05);
        assert!(approx(v.value(), 1.0));
        v.advance(0.06);
        assert!(approx(v.value(), 1.1));
    }

    #[test]
    fn delay_holds_start_value() {
        let mut v = Tweened::new(0.0_f32);
        v.start(TweenSpec::to(1.0, 2.0).delay(0.5));
        v.advance(0.4);
        assert_eq!(v.value(), 0.0);
        v.advance(2.2);
        assert!(approx(v.value(), 1.0));
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let e = Easing::BackOut(1.7);
        assert!(approx(e.apply(0.0), 0.0));
        assert!(approx(e.apply(1.0), 1.0));
        let peak = (1..100).map(|i| e.apply(i as f32 / 100.0)).fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn zero_duration_applies_immediately() {
        let mut v = Tweened::new(Vec3::ZERO);
        v.start(TweenSpec::to(Vec3::ONE, 0.0));
        assert_eq!(v.value(), Vec3::ONE);
        assert!(!v.is_animating());
    }
}
