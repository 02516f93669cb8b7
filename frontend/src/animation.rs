//! Entrance animation presets shared by every page.
//!
//! A section is either hidden or revealed; each preset describes the CSS of
//! both states and how long the transition between them takes. Children of
//! a revealed section are staggered so they cascade in one after another.

/// Two-state entrance animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Fade in while sliding up 20px.
    #[default]
    FadeIn,
    /// Fade in while straightening from a slight tilt.
    RotateIn,
}

impl Variant {
    pub fn duration_ms(self) -> u32 {
        match self {
            Variant::FadeIn => 600,
            Variant::RotateIn => 800,
        }
    }

    fn transform(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (Variant::FadeIn, false) => "translateY(20px)",
            (Variant::FadeIn, true) => "translateY(0)",
            (Variant::RotateIn, false) => "rotate(-5deg)",
            (Variant::RotateIn, true) => "rotate(0deg)",
        }
    }

    /// Inline style for an element in the given state, starting its
    /// transition `delay_ms` after the state flips.
    pub fn style(self, revealed: bool, delay_ms: u32) -> String {
        let opacity = if revealed { 1 } else { 0 };
        format!(
            "opacity: {}; transform: {}; transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
            opacity,
            self.transform(revealed),
            self.duration_ms(),
            delay_ms,
            self.duration_ms(),
            delay_ms,
        )
    }
}

/// Delay schedule that fans a single parent reveal out to its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub increment_ms: u32,
}

impl Default for Stagger {
    fn default() -> Self {
        Self { increment_ms: 100 }
    }
}

impl Stagger {
    pub const NONE: Stagger = Stagger { increment_ms: 0 };

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index.saturating_mul(self.increment_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fade_in_moves_up_twenty_pixels() {
        assert_eq!(
            Variant::FadeIn.style(false, 0),
            "opacity: 0; transform: translateY(20px); transition: opacity 600ms ease-out 0ms, transform 600ms ease-out 0ms;"
        );
        assert_eq!(
            Variant::FadeIn.style(true, 200),
            "opacity: 1; transform: translateY(0); transition: opacity 600ms ease-out 200ms, transform 600ms ease-out 200ms;"
        );
    }

    #[test]
    fn rotate_in_is_slower() {
        assert_eq!(Variant::RotateIn.duration_ms(), 800);
        assert!(Variant::RotateIn.style(false, 0).contains("rotate(-5deg)"));
    }

    #[test]
    fn children_are_strictly_ordered() {
        let stagger = Stagger::default();
        let delays: Vec<u32> = (0..4).map(|i| stagger.delay_for(i)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_stagger_reveals_together() {
        assert!((0..3).all(|i| Stagger::NONE.delay_for(i) == 0));
    }
}
