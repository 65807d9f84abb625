/// Cyclic focus movement over a fixed set of items
pub trait Navigable {
    fn item_count(&self) -> usize;

    fn selected_index(&self) -> usize;

    /// Moves the selection; implementors hand focus over here
    fn select(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.selected_index() + 1) % count;
            self.select(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let previous = self
                .selected_index()
                .checked_sub(1)
                .unwrap_or(count - 1);
            self.select(previous);
        }
    }
}
