//! The assembled storybook record.

use serde::{Deserialize, Serialize};

/// A clickable point on a page with a positional hint and a reward message
/// shown on first interaction.
///
/// Positions are percentages of the page canvas. The engine keeps them in
/// [10, 90) so hotspots stay away from the canvas edges; the type itself
/// admits the full [0, 100) range for the seeded default catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveElement {
    /// Derived from the page id plus the 1-based element index
    pub id: String,
    /// Glyph rendered at the hotspot
    pub emoji: String,
    /// Horizontal position, percentage of canvas width
    pub x: f64,
    /// Vertical position, percentage of canvas height
    pub y: f64,
    /// Reward message shown on first interaction, never empty
    pub reward: String,
}

/// One page of a storybook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPage {
    /// Derived from the storybook id plus the 1-based page index
    pub id: String,
    /// Background image URL, or a composite glyph string for seeded books
    pub background: String,
    /// Narrative text, non-empty and ending in terminal punctuation
    pub text: String,
    /// Ordered hotspots on this page
    pub interactive_elements: Vec<InteractiveElement>,
}

/// The complete generated artifact: title, cover, category, description and
/// ordered pages.
///
/// Immutable after assembly; owned exclusively by the store once appended.
///
/// # Examples
///
/// ```
/// use storyloom_core::Storybook;
///
/// let book = Storybook {
///     id: "abc123".to_string(),
///     title: "小兔子的快乐冒险".to_string(),
///     cover: "🐰".to_string(),
///     category: "冒险".to_string(),
///     description: "一个关于小兔子的暖心故事。".to_string(),
///     pages: vec![],
/// };
/// assert!(book.pages.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storybook {
    /// Opaque identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Cover image URL, or an emoji fallback for seeded books
    pub cover: String,
    /// Catalog category the book is filed under
    pub category: String,
    /// One-sentence description
    pub description: String,
    /// Ordered pages; length fixed at generation time
    pub pages: Vec<StoryPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let page = StoryPage {
            id: "s1-1".to_string(),
            background: "🌲🌳🌲".to_string(),
            text: "小兔子出发了。".to_string(),
            interactive_elements: vec![InteractiveElement {
                id: "s1-1-1".to_string(),
                emoji: "🐰".to_string(),
                x: 20.0,
                y: 60.0,
                reward: "发现了小兔子！".to_string(),
            }],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("interactiveElements").is_some());
        assert!(json.get("interactive_elements").is_none());
    }
}
