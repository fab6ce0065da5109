/// One shopper gesture, expressed as a single store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    Add { name: String, price: f64 },
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    SetSelected { index: usize, selected: bool },
    SetAllSelected(bool),
    Clear,
}

impl CartCommand {
    /// Checkbox gestures arrive after the browser has already flipped the
    /// control, so the panel must be redrawn even when the store is unchanged.
    pub fn redraw_always(&self) -> bool {
        matches!(self, Self::SetSelected { .. } | Self::SetAllSelected(_))
    }
}
