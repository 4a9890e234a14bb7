//! Animation timing and the named variants used by the motion wrappers.
//!
//! Everything renders to plain CSS (inline `opacity`/`transform` plus a `transition`
//! list) so no animation runtime is shipped. The reduced-motion decision is taken once
//! in `App` and handed down as a [`MotionConfig`] through context.

use crate::a11y::motion::{respects_motion_preference, PreferenceQuery};

pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);
const STEP: Easing = Easing::CubicBezier(0.0, 0.0, 0.0, 1.0);
const STAGGER_STEP: f64 = 0.08;
const SHADOW_REST: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)";
const SHADOW_LIFTED: &str = "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn to_css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }

    /// Eased progress for `t` in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                // x(s) is monotonic for control points inside [0, 1]
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..40 {
                    let mid = (lo + hi) / 2.0;
                    if bezier(x1, x2, mid) < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                bezier(y1, y2, (lo + hi) / 2.0)
            }
        }
    }
}

fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    fn to_css(self) -> String {
        ["opacity", "transform", "box-shadow"]
            .iter()
            .map(|prop| {
                format!(
                    "{} {}s {} {}s",
                    prop,
                    self.duration,
                    self.easing.to_css(),
                    self.delay
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One visual state of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub shadow: Option<&'static str>,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        shadow: None,
    };

    const fn hidden() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::VISIBLE
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        );
        if let Some(shadow) = self.shadow {
            css.push_str(&format!(" box-shadow: {};", shadow));
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Animate,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub initial: Pose,
    pub animate: Pose,
    pub exit: Pose,
    pub enter: Transition,
    pub leave: Transition,
}

impl Variant {
    fn still() -> Self {
        let none = Transition {
            duration: 0.0,
            delay: 0.0,
            easing: Easing::Linear,
        };
        Self {
            initial: Pose::VISIBLE,
            animate: Pose::VISIBLE,
            exit: Pose::VISIBLE,
            enter: none,
            leave: none,
        }
    }

    pub fn pose(&self, phase: Phase) -> Pose {
        match phase {
            Phase::Initial => self.initial,
            Phase::Animate => self.animate,
            Phase::Exit => self.exit,
        }
    }

    /// Inline style for `phase`, `delay` seconds after the parent starts.
    pub fn style(&self, phase: Phase, delay: f64) -> String {
        let transition = match phase {
            Phase::Initial => return self.initial.to_css(),
            Phase::Animate => self.enter.with_delay(self.enter.delay + delay),
            Phase::Exit => self.leave,
        };
        format!("{} transition: {};", self.pose(phase).to_css(), transition.to_css())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub reduced: bool,
    pub fast: f64,
    pub normal: f64,
    pub slow: f64,
    pub easing: Easing,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MotionConfig {
    pub fn new(reduced: bool) -> Self {
        if reduced {
            Self {
                reduced,
                fast: 0.01,
                normal: 0.01,
                slow: 0.01,
                easing: STEP,
                stiffness: 1000.0,
                damping: 100.0,
            }
        } else {
            Self {
                reduced,
                fast: 0.2,
                normal: 0.35,
                slow: 0.5,
                easing: EXPO_OUT,
                stiffness: 260.0,
                damping: 28.0,
            }
        }
    }

    pub fn detect<Q: PreferenceQuery + ?Sized>(query: &Q) -> Self {
        Self::new(!respects_motion_preference(query))
    }

    fn timed(&self, duration: f64, easing: Easing) -> Transition {
        Transition {
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// CSS has no springs; a unit-mass spring settles in roughly 8 / damping seconds.
    pub fn spring(&self) -> Transition {
        let zeta = self.damping / (2.0 * self.stiffness.sqrt());
        let easing = if zeta < 1.0 {
            Easing::CubicBezier(0.34, 1.3, 0.64, 1.0)
        } else {
            EXPO_OUT
        };
        self.timed(8.0 / self.damping, easing)
    }

    /// Delay of the `index`-th child in a staggered container.
    pub fn stagger_delay(&self, index: usize, step: Option<f64>) -> f64 {
        if self.reduced {
            0.0
        } else {
            index as f64 * step.unwrap_or(STAGGER_STEP)
        }
    }

    fn finish(&self, variant: Variant) -> Variant {
        if self.reduced {
            Variant::still()
        } else {
            variant
        }
    }

    fn rise(&self, y: f64) -> Variant {
        // these curves are linear in the site's motion system
        let normal = self.timed(self.normal, Easing::Linear);
        self.finish(Variant {
            initial: Pose { y, ..Pose::hidden() },
            animate: Pose::VISIBLE,
            exit: Pose::hidden(),
            enter: normal,
            leave: self.timed(self.fast, Easing::Linear),
        })
    }

    pub fn page(&self) -> Variant {
        let mut v = self.rise(12.0);
        if !self.reduced {
            v.exit = Pose { y: -8.0, ..Pose::hidden() };
        }
        v
    }

    pub fn fade_in(&self) -> Variant {
        self.rise(0.0)
    }

    pub fn slide_up(&self) -> Variant {
        self.rise(20.0)
    }

    pub fn stagger_item(&self) -> Variant {
        self.rise(20.0)
    }

    pub fn scale_in(&self) -> Variant {
        let mut v = self.rise(0.0);
        if !self.reduced {
            v.initial.scale = 0.95;
        }
        v
    }

    pub fn scroll_reveal(&self) -> Variant {
        let mut v = self.rise(30.0);
        if !self.reduced {
            v.enter.easing = self.easing;
        }
        v
    }

    /// `initial` is the resting card, `animate` the hovered one.
    pub fn card_hover(&self) -> Variant {
        let rest = Pose {
            shadow: Some(SHADOW_REST),
            ..Pose::VISIBLE
        };
        let normal = self.timed(self.normal, Easing::Linear);
        self.finish(Variant {
            initial: rest,
            animate: Pose {
                y: -3.0,
                shadow: Some(SHADOW_LIFTED),
                ..Pose::VISIBLE
            },
            exit: rest,
            enter: normal,
            leave: normal,
        })
    }

    /// `animate` is the pressed state.
    pub fn button_press(&self) -> Variant {
        let press = self.timed(0.1, Easing::Linear);
        self.finish(Variant {
            initial: Pose::VISIBLE,
            animate: Pose {
                scale: 0.98,
                ..Pose::VISIBLE
            },
            exit: Pose::VISIBLE,
            enter: press,
            leave: press,
        })
    }

    pub fn backdrop(&self) -> Variant {
        let mut v = self.rise(0.0);
        if !self.reduced {
            v.animate.opacity = 0.6;
        }
        v
    }

    pub fn modal_panel(&self) -> Variant {
        let away = Pose {
            y: 20.0,
            scale: 0.95,
            ..Pose::hidden()
        };
        self.finish(Variant {
            initial: away,
            animate: Pose::VISIBLE,
            exit: away,
            enter: self.spring(),
            leave: self.timed(self.fast, self.easing),
        })
    }

    pub fn toast(&self) -> Variant {
        let away = Pose {
            x: 300.0,
            scale: 0.95,
            ..Pose::hidden()
        };
        self.finish(Variant {
            initial: away,
            animate: Pose::VISIBLE,
            exit: away,
            enter: self.spring(),
            leave: self.timed(self.fast, self.easing),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_timings_and_variants() {
        let cfg = MotionConfig::new(true);
        assert_eq!(cfg.normal, 0.01);
        assert_eq!(cfg.stiffness, 1000.0);
        for v in [cfg.page(), cfg.slide_up(), cfg.toast(), cfg.card_hover()] {
            assert_eq!(v.initial, Pose::VISIBLE);
            assert_eq!(v.animate, Pose::VISIBLE);
        }
        assert_eq!(cfg.stagger_delay(5, None), 0.0);
    }

    #[test]
    fn full_motion_variants_start_hidden() {
        let cfg = MotionConfig::default();
        let slide = cfg.slide_up();
        assert_eq!(slide.initial.opacity, 0.0);
        assert_eq!(slide.initial.y, 20.0);
        assert_eq!(slide.animate, Pose::VISIBLE);
        assert_eq!(cfg.page().exit.y, -8.0);
        assert_eq!(cfg.scale_in().initial.scale, 0.95);
        assert_eq!(cfg.backdrop().animate.opacity, 0.6);
        assert!((cfg.stagger_delay(3, None) - 0.24).abs() < 1e-12);
    }

    struct Media(bool);

    impl PreferenceQuery for Media {
        fn matches(&self, media_query: &str) -> bool {
            self.0 && media_query == crate::a11y::motion::REDUCED_MOTION_QUERY
        }
    }

    #[test]
    fn detect_follows_the_reduced_motion_query() {
        assert!(MotionConfig::detect(&Media(true)).reduced);
        assert_eq!(MotionConfig::detect(&Media(false)), MotionConfig::default());
    }

    #[test]
    fn spring_settle_time_follows_damping() {
        let cfg = MotionConfig::default();
        assert!((cfg.spring().duration - 8.0 / 28.0).abs() < 1e-12);
        assert!((MotionConfig::new(true).spring().duration - 0.08).abs() < 1e-12);
    }

    #[test]
    fn style_renders_pose_and_transition() {
        let cfg = MotionConfig::default();
        let v = cfg.fade_in();
        assert_eq!(
            v.style(Phase::Initial, 0.0),
            "opacity: 0; transform: translate(0px, 0px) scale(1);"
        );
        let animate = v.style(Phase::Animate, 0.16);
        assert!(animate.starts_with("opacity: 1;"));
        assert!(animate.contains("opacity 0.35s linear 0.16s"));
    }

    #[test]
    fn expo_out_easing_is_monotonic_and_front_loaded() {
        assert!(EXPO_OUT.apply(0.0).abs() < 1e-9);
        assert!((EXPO_OUT.apply(1.0) - 1.0).abs() < 1e-9);
        assert!(EXPO_OUT.apply(0.5) > 0.8);
        let mut prev = 0.0;
        for i in 1..=20 {
            let y = EXPO_OUT.apply(i as f64 / 20.0);
            assert!(y >= prev);
            prev = y;
        }
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
        assert_eq!(EXPO_OUT.to_css(), "cubic-bezier(0.16, 1, 0.3, 1)");
    }
}
