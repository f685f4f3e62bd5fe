//! Font - ligature set plus line metrics

use crate::{Ligature, LigatureTrie, Ligatures, Result};

/// A loaded (or hand-built) scribble font
#[derive(Debug, Default)]
pub struct Font {
    pub(crate) ligatures: LigatureTrie,
    pub(crate) line_height: u8,
    pub(crate) baseline: u8,
}

impl Font {
    /// Create an empty font with zero metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty font with the given metrics
    pub fn with_metrics(line_height: u8, baseline: u8) -> Self {
        Self {
            ligatures: LigatureTrie::new(),
            line_height,
            baseline,
        }
    }

    /// Vertical advance on a line break
    pub fn line_height(&self) -> u8 {
        self.line_height
    }

    /// Distance from the bottom of a glyph image down to the baseline
    pub fn baseline(&self) -> u8 {
        self.baseline
    }

    /// Number of ligatures in the font
    pub fn num_ligatures(&self) -> usize {
        self.ligatures.len()
    }

    /// Iterate over every ligature, in no particular order
    pub fn ligatures(&self) -> Ligatures<'_> {
        self.ligatures.iter()
    }

    /// Add a ligature; fails if one with the same key exists
    pub fn add_ligature(&mut self, ligature: Ligature) -> Result<()> {
        self.ligatures.insert(ligature)
    }

    /// Remove the ligature stored under exactly `key`
    pub fn remove_ligature(&mut self, key: &str) -> Option<Ligature> {
        self.ligatures.remove(key)
    }

    /// Ligature to draw at the start of `text`, if any
    pub fn next_ligature(&self, text: &str) -> Option<&Ligature> {
        self.ligatures.longest_match(text)
    }
}
