//! Story pages shown before character selection.

const PAGES: [&str; 4] = [
    "Long ago the kingdom lived in peace under the watch of the dragon riders.",
    "Then Malakor, eldest of the dragons, broke his oath and burned their halls.",
    "His brood spread across the land: fire in the volcano, frost in the north, shadow below.",
    "Now a lone hero sets out from the plains. Grow strong, and the dragons will come to you.",
];

/// Progress through the opening story.
#[derive(Debug, Clone, Default)]
pub struct OpeningCutscene {
    pub page: usize,
    /// Ticks the current page has been shown
    pub timer: u32,
    pub finished: bool,
}

impl OpeningCutscene {
    pub fn pages() -> &'static [&'static str] {
        &PAGES
    }

    pub fn current_text(&self) -> Option<&'static str> {
        if self.finished {
            return None;
        }
        PAGES.get(self.page).copied()
    }

    /// Page reveal progress in 0.0..=1.0, used for the fade-in.
    pub fn page_progress(&self, page_ticks: u32) -> f32 {
        if page_ticks == 0 {
            return 1.0;
        }
        (self.timer as f32 / page_ticks as f32).min(1.0)
    }

    /// Advance one tick. Returns true once the last page has played out.
    pub fn tick(&mut self, page_ticks: u32) -> bool {
        if self.finished {
            return true;
        }
        self.timer += 1;
        if self.timer >= page_ticks {
            self.timer = 0;
            self.page += 1;
            if self.page >= PAGES.len() {
                self.finished = true;
            }
        }
        self.finished
    }

    pub fn skip(&mut self) {
        self.finished = true;
    }
}
