//! Polite live region
//!
//! One string, overwritten by the latest user-facing event. No queue, no
//! history. The revision counter lets the renderer tell "same text written
//! again" apart from "nothing happened".

/// ARIA politeness of the region
pub const POLITENESS: &str = "polite";

#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    text: String,
    revision: u64,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the region's text
    pub fn announce(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision += 1;
        tracing::info!(
            target: "inclusive::announce",
            revision = self.revision,
            "{}",
            self.text
        );
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut region = LiveRegion::new();
        assert!(region.is_empty());

        region.announce("Topic set to Designing with color contrast.");
        region.announce("Please fix the highlighted fields before submitting.");

        assert_eq!(
            region.text(),
            "Please fix the highlighted fields before submitting."
        );
        assert_eq!(region.revision(), 2);
    }

    #[test]
    fn repeated_text_still_bumps_revision() {
        let mut region = LiveRegion::new();
        region.announce("same");
        region.announce("same");
        assert_eq!(region.revision(), 2);
    }
}
