//! Hierarchical section numbering ("1", "1.2", "1.2.1").

/// Deepest heading level the report uses.
pub const MAX_LEVEL: usize = 5;

/// Counts headings per level.
///
/// Numbering a heading increments its level and resets every deeper level,
/// so the first subsection after a new section is always `.1` again.
#[derive(Debug, Clone, Default)]
pub struct SectionCounter {
    counts: [u32; MAX_LEVEL],
}

impl SectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next heading at `level` (1-based, clamped to
    /// `1..=MAX_LEVEL`).
    pub fn next(&mut self, level: usize) -> String {
        let level = level.clamp(1, MAX_LEVEL);
        self.counts[level - 1] += 1;
        for deeper in &mut self.counts[level..] {
            *deeper = 0;
        }
        self.counts[..level]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}
