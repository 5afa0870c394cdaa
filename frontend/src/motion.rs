//! Inline styles for the reveal transitions.

use crate::config::DEFAULT_STAGGER_BASE_MS;

/// Direction the element travels while it is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Offset the element starts from, opposite to its travel.
    pub fn initial_transform(self, distance_px: u32) -> String {
        match self {
            Direction::Up => format!("translateY({}px)", distance_px),
            Direction::Down => format!("translateY(-{}px)", distance_px),
            Direction::Left => format!("translateX({}px)", distance_px),
            Direction::Right => format!("translateX(-{}px)", distance_px),
            Direction::None => "none".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub direction: Direction,
    pub distance_px: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            direction: Direction::Up,
            distance_px: 30,
            duration_ms: 800,
            delay_ms: 0,
        }
    }
}

impl Motion {
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, transform) = if revealed {
            ("1".to_string(), "translate(0, 0)".to_string())
        } else {
            ("0".to_string(), self.direction.initial_transform(self.distance_px))
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms,
        )
    }
}

/// Preset entrance animations used by section headers and cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationKind {
    #[default]
    FadeIn,
    SlideUp,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
}

impl AnimationKind {
    fn transforms(self) -> (&'static str, &'static str) {
        match self {
            AnimationKind::FadeIn => ("translateY(20px)", "none"),
            AnimationKind::SlideUp => ("translateY(40px)", "translateY(0)"),
            AnimationKind::SlideInLeft => ("translateX(-40px)", "translateX(0)"),
            AnimationKind::SlideInRight => ("translateX(40px)", "translateX(0)"),
            AnimationKind::ScaleIn => ("scale(0.9)", "scale(1)"),
        }
    }
}

pub fn animation_style(revealed: bool, kind: AnimationKind, duration_ms: u32, delay_ms: u32) -> String {
    let (hidden, shown) = kind.transforms();
    format!(
        "transition: all {}ms cubic-bezier(0.4, 0, 0.2, 1) {}ms; opacity: {}; transform: {};",
        duration_ms,
        delay_ms,
        if revealed { 1 } else { 0 },
        if revealed { shown } else { hidden },
    )
}

/// Delay for the `index`-th element of a staggered group.
pub fn stagger_delay(index: usize, base_ms: u32) -> u32 {
    (index as u32).saturating_mul(base_ms)
}

pub fn default_stagger_delay(index: usize) -> u32 {
    stagger_delay(index, DEFAULT_STAGGER_BASE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_opposite_to_travel() {
        assert_eq!(Direction::Up.initial_transform(30), "translateY(30px)");
        assert_eq!(Direction::Down.initial_transform(30), "translateY(-30px)");
        assert_eq!(Direction::Left.initial_transform(12), "translateX(12px)");
        assert_eq!(Direction::Right.initial_transform(12), "translateX(-12px)");
        assert_eq!(Direction::None.initial_transform(99), "none");
    }

    #[test]
    fn hidden_and_revealed_styles() {
        let motion = Motion {
            delay_ms: 200,
            ..Motion::default()
        };
        let hidden = motion.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(30px);"));
        assert!(hidden.contains("opacity 800ms ease-out 200ms"));

        let shown = motion.style(true);
        assert!(shown.starts_with("opacity: 1; transform: translate(0, 0);"));
    }

    #[test]
    fn preset_animations() {
        assert_eq!(
            animation_style(false, AnimationKind::ScaleIn, 600, 0),
            "transition: all 600ms cubic-bezier(0.4, 0, 0.2, 1) 0ms; opacity: 0; transform: scale(0.9);"
        );
        assert!(animation_style(true, AnimationKind::FadeIn, 600, 50).ends_with("opacity: 1; transform: none;"));
        assert!(animation_style(false, AnimationKind::SlideInLeft, 600, 0).contains("translateX(-40px)"));
    }

    #[test]
    fn stagger() {
        assert_eq!(default_stagger_delay(0), 0);
        assert_eq!(default_stagger_delay(3), 300);
        assert_eq!(stagger_delay(2, 150), 300);
    }
}
