/// A row of the internal `journal` table.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub id: i64,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}
