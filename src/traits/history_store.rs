use crate::structs::history_item::HistoryItem;

/// Bounded, most-recent-first persistence for past analyses. Every operation
/// is infallible from the caller's perspective: storage faults are logged and
/// swallowed, degrading to "empty history" or "not saved".
pub trait HistoryStore: Send + Sync {
    fn read(&self) -> Vec<HistoryItem>;

    fn write(&self, item: &HistoryItem);

    fn clear(&self);
}
