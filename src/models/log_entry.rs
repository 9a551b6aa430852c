use serde::Serialize;

/// One row of the `logs` table: a work session, open or closed.
///
/// Timestamps are Unix seconds. An entry is *active* while its session has not
/// been logged out yet; at most one row is active at any time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,                // ⇔ logs.id (INTEGER PRIMARY KEY)
    pub time_in: Option<i64>,   // ⇔ logs.time_in
    pub time_out: Option<i64>,  // ⇔ logs.time_out
    pub active: bool,           // ⇔ logs.active (0/1)
}

impl LogEntry {
    /// Both ends present and the row no longer active.
    pub fn is_closed(&self) -> bool {
        !self.active && self.time_in.is_some() && self.time_out.is_some()
    }

    /// Worked seconds for a closed entry, `None` while still open.
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.time_in, self.time_out) {
            (Some(t_in), Some(t_out)) if !self.active => Some(t_out - t_in),
            _ => None,
        }
    }
}
