//! A caller-owned editing session: the state an interactive front end keeps between edits.
//!
//! The session owns the override map and the order selector, rebuilds the [`EncodingConfig`]
//! on every edit, and treats [`crate::generate`] as a pure projection of that state.

use alloc::string::{String, ToString};

use crate::{
    cache::GenerationCache,
    config::{Charset, DIGITS, EncodingConfig},
    generate::{Generated, Warning},
    pattern_table::PatternTable,
    segment::{ActiveSet, Segment},
    segment_order::{OrderPreset, OrderSelector},
};

/// Configuration, overrides, sample text, and the character being edited.
pub struct Session {
    config: EncodingConfig,
    order: OrderSelector,
    patterns: PatternTable,
    sample_text: String,
    edit_char: char,
    cache: GenerationCache,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: EncodingConfig::default(),
            order: OrderSelector::default(),
            patterns: PatternTable::new(),
            sample_text: "0123".to_string(),
            edit_char: '0',
            cache: GenerationCache::new(),
        }
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Replace the configuration with `edit(current)`.
    ///
    /// The segment order always comes from the order selector, so an order set here is
    /// overwritten; use [`Self::select_order_preset`] and [`Self::set_custom_order`] instead.
    pub fn update_config(&mut self, edit: impl FnOnce(EncodingConfig) -> EncodingConfig) {
        let config = edit(self.config.clone());
        self.config = config.with_order(self.order.order());
    }

    pub fn select_order_preset(&mut self, preset: OrderPreset) {
        self.order.select_preset(preset);
        self.sync_order();
    }

    pub fn set_custom_order(&mut self, text: &str) {
        self.order.set_custom_text(text);
        self.sync_order();
    }

    #[must_use]
    pub const fn order_selector(&self) -> &OrderSelector {
        &self.order
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub const fn patterns_mut(&mut self) -> &mut PatternTable {
        &mut self.patterns
    }

    pub fn set_sample_text(&mut self, text: &str) {
        self.sample_text = text.to_string();
    }

    #[must_use]
    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }

    /// Choose which character the segment editor works on.
    pub const fn select_edit_char(&mut self, ch: char) {
        self.edit_char = ch;
    }

    /// The character being edited: the selected one if it is in the charset, otherwise the
    /// first charset character.
    #[must_use]
    pub fn edit_char(&self) -> char {
        let charset = self.effective_charset();
        if charset.contains(self.edit_char) {
            self.edit_char
        } else {
            charset.iter().next().unwrap_or(self.edit_char)
        }
    }

    /// Pattern currently shown in the segment editor.
    #[must_use]
    pub fn edit_pattern(&self) -> ActiveSet {
        self.patterns.effective_pattern(self.edit_char())
    }

    /// Flip one segment of the character being edited.
    pub fn toggle_segment(&mut self, segment: Segment) -> ActiveSet {
        let ch = self.edit_char();
        self.patterns.toggle_segment(ch, segment)
    }

    /// Revert the character being edited to its built-in pattern.
    pub fn reset_edit_char(&mut self) {
        let ch = self.edit_char();
        self.patterns.reset_override(ch);
    }

    /// Generate from the current state. A rejected custom order shows up as the first warning.
    pub fn generate(&mut self) -> Generated {
        let mut generated = self
            .cache
            .get_or_generate(&self.config, &self.patterns, &self.sample_text)
            .clone();

        if let Some(error) = self.order.error() {
            #[cfg(feature = "defmt")]
            defmt::debug!("session: custom order invalid, using {}", self.order.order());
            generated.warnings.insert(
                0,
                Warning::OrderFallback {
                    error: error.clone(),
                    order: self.order.order(),
                },
            );
        }

        generated
    }

    fn sync_order(&mut self) {
        self.config = self.config.clone().with_order(self.order.order());
    }

    fn effective_charset(&self) -> Charset {
        self.config
            .charset()
            .clone()
            .non_empty()
            .unwrap_or_else(|_| Charset::new(DIGITS))
    }
}
