//! Full-screen fade overlay.
//!
//! Purely cosmetic: nothing in the game waits on it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Idle,
    /// Alpha rising towards opaque
    Entering,
    /// Alpha falling back to transparent
    Leaving,
}

/// Overlay alpha in 0..=255 driven once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenFade {
    pub alpha: u8,
    pub phase: FadePhase,
}

impl ScreenFade {
    /// Start a fade-in/fade-out cycle from transparent.
    pub fn start(&mut self) {
        self.alpha = 0;
        self.phase = FadePhase::Entering;
    }

    pub fn tick(&mut self, speed: u8) {
        match self.phase {
            FadePhase::Idle => {}
            FadePhase::Entering => {
                self.alpha = self.alpha.saturating_add(speed);
                if self.alpha == u8::MAX {
                    self.phase = FadePhase::Leaving;
                }
            }
            FadePhase::Leaving => {
                self.alpha = self.alpha.saturating_sub(speed);
                if self.alpha == 0 {
                    self.phase = FadePhase::Idle;
                }
            }
        }
    }

    /// Overlay opacity in 0.0..=1.0.
    pub fn opacity(&self) -> f32 {
        self.alpha as f32 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut fade = ScreenFade::default();
        fade.start();
        let mut ticks = 0;
        while fade.phase != FadePhase::Idle {
            fade.tick(10);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(fade.alpha, 0);
        // 26 ticks up (saturating at 255), 26 down
        assert_eq!(ticks, 52);
    }

    #[test]
    fn idle_fade_does_nothing() {
        let mut fade = ScreenFade::default();
        fade.tick(10);
        assert_eq!(fade.alpha, 0);
        assert_eq!(fade.phase, FadePhase::Idle);
    }
}
