use trainer_core::model::Level;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub level: Level,
    pub position: usize,
    pub level_total: usize,
    pub ordinal: usize,
    pub total: usize,
    pub cycles_completed: u64,
    pub can_advance: bool,
}
