//! Byte offset to line/column conversion for diagnostics.

/// Fast line/column lookup using pre-calculated line offsets.
pub(crate) struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Line is 1-indexed, column is 0-indexed and counted in characters.
    pub fn line_column(&self, offset: u32, source: &str) -> (u32, u32) {
        // Err(0) cannot happen since line_starts[0] == 0, but guard the subtraction anyway.
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(0) => 0,
            Err(idx) => idx - 1,
        };

        let line_start = self.line_starts[line_idx] as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count() as u32);

        ((line_idx + 1) as u32, column)
    }
}
