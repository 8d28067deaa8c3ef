use serde::Serialize;

/// Which statistics blocks the user asked for. Both may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSelection {
    pub short: bool,
    pub full: bool,
}

impl StatsSelection {
    pub const fn any(self) -> bool {
        self.short || self.full
    }
}
