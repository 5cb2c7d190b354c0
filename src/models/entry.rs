/// One journal record for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeEntry {
    pub id: String,         // ⇔ gratitude_entries.id (UUID v4)
    pub date: String,       // ⇔ gratitude_entries.date (TEXT "YYYY-MM-DD", unique)
    pub content: String,    // ⇔ gratitude_entries.content
    pub created_at: String, // ⇔ gratitude_entries.created_at (ISO8601, set once)
    pub updated_at: String, // ⇔ gratitude_entries.updated_at (ISO8601, every save)
}

impl GratitudeEntry {
    /// First line of the content, used by listings.
    pub fn headline(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}
