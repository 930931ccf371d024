#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered, never observed by `run_computed`.
    #[default]
    Init,
    Clean,
}

impl StateSyncStatus {
    pub fn is_stale(self) -> bool {
        !matches!(self, Self::Clean)
    }
}
