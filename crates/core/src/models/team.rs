use serde::{Deserialize, Serialize};

/// Placeholder service used when a team photo fails to load.
pub const AVATAR_FALLBACK_BASE: &str = "https://placehold.co/400x400?text=";

/// A leadership team member from `team_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,

    /// Title; may span several lines
    pub role: String,

    #[serde(default)]
    pub bio: String,

    /// Photo path relative to the site root
    #[serde(default)]
    pub image: String,
}

impl TeamMember {
    /// Placeholder avatar showing the first character of the member's name.
    #[must_use]
    pub fn avatar_fallback_url(&self) -> String {
        let initial = self
            .name
            .trim()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        format!("{AVATAR_FALLBACK_BASE}{initial}")
    }
}
