//! Single-selection cursor over an ordered list of rows.

/// Index of the highlighted row, if any.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Move to the next row, stopping at the last one.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keep the selection pointing at a valid row after the list shrank or
    /// grew. An empty list clears the selection.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }
}
