//! Category-keyed glyph and reward tables.
//!
//! One ordered table with a designated default entry, not a chain of
//! conditionals: unknown categories fall back to the default entry, and
//! element indexes cycle through each list modulo its length.

/// Glyphs and reward messages for one story category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Category name this entry is keyed by
    pub category: &'static str,
    /// Hotspot glyphs, cycled by element index
    pub emojis: &'static [&'static str],
    /// Reward messages, cycled by element index
    pub rewards: &'static [&'static str],
}

impl CategoryEntry {
    /// Glyph for the given element index, cycling modulo the list length.
    pub fn emoji(&self, index: usize) -> &'static str {
        self.emojis[index % self.emojis.len()]
    }

    /// Reward message for the given element index, cycling modulo the list
    /// length.
    pub fn reward(&self, index: usize) -> &'static str {
        self.rewards[index % self.rewards.len()]
    }
}

/// Category assigned when no theme keyword matches.
pub const DEFAULT_CATEGORY: &str = "冒险";

const ENTRIES: &[CategoryEntry] = &[
    CategoryEntry {
        category: "情绪管理",
        emojis: &["😊", "😢", "😠", "😌"],
        rewards: &[
            "真棒！你理解了这种感受！",
            "你帮助小朋友找到了快乐！",
            "这就是分享爱的感觉！",
        ],
    },
    CategoryEntry {
        category: "童话",
        emojis: &["✨", "🌟", "🎭", "👑"],
        rewards: &[
            "魔法闪闪发光！",
            "你发现了一个神奇的宝藏！",
            "童话故事在继续...",
        ],
    },
    CategoryEntry {
        category: "科学",
        emojis: &["🔬", "🚀", "🌍", "⚡"],
        rewards: &["新发现！太神奇了！", "你学到了新知识！", "科学真有趣！"],
    },
    CategoryEntry {
        category: "动物",
        emojis: &["🐶", "🐱", "🦁", "🐘"],
        rewards: &[
            "小动物向你打招呼！",
            "你交到了一个毛茸茸的朋友！",
            "动物们都很喜欢你！",
        ],
    },
    CategoryEntry {
        category: "自然",
        emojis: &["🌳", "🌺", "🌈", "☀️"],
        rewards: &["大自然真美丽！", "你帮助保护了环境！", "发现了春天的气息！"],
    },
    CategoryEntry {
        category: "冒险",
        emojis: &["🗺️", "🎪", "⛵", "🏰"],
        rewards: &["勇敢的探险家！", "你找到了宝藏！", "新的冒险正等着你！"],
    },
];

/// The designated fallback entry for unrecognized categories.
static DEFAULT_ENTRY: CategoryEntry = CategoryEntry {
    category: "默认",
    emojis: &["✨", "🌟", "💫", "⭐"],
    rewards: &["真棒！继续探索吧！", "你发现了一个惊喜！", "太神奇了！"],
};

/// Theme keywords in match priority order, each mapped to a catalog
/// category. The first keyword found in the joined theme string wins.
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("友情", "情绪管理"),
    ("分享", "情绪管理"),
    ("诚实", "情绪管理"),
    ("自信", "情绪管理"),
    ("家庭", "情绪管理"),
    ("童话", "童话"),
    ("魔法", "童话"),
    ("创造力", "童话"),
    ("科学", "科学"),
    ("太空", "科学"),
    ("动物", "动物"),
    ("自然", "自然"),
    ("爱护环境", "自然"),
    ("冒险", "冒险"),
    ("勇气", "冒险"),
    ("责任", "冒险"),
];

/// Look up the table entry for a category, falling back to the default
/// entry when the category is unrecognized.
///
/// # Examples
///
/// ```
/// use storyloom_pipeline::entry_for;
///
/// assert_eq!(entry_for("动物").emoji(0), "🐶");
/// assert_eq!(entry_for("没见过的类别").emoji(0), "✨");
/// ```
pub fn entry_for(category: &str) -> &'static CategoryEntry {
    ENTRIES
        .iter()
        .find(|entry| entry.category == category)
        .unwrap_or(&DEFAULT_ENTRY)
}

/// Derive a catalog category from the request themes.
///
/// The themes are joined in insertion order and matched against the
/// keyword table; the first matching keyword wins, otherwise
/// [`DEFAULT_CATEGORY`].
///
/// # Examples
///
/// ```
/// use storyloom_pipeline::derive_category;
///
/// let themes = vec!["友情".to_string()];
/// assert_eq!(derive_category(&themes), "情绪管理");
/// assert_eq!(derive_category(&[]), "冒险");
/// ```
pub fn derive_category(themes: &[String]) -> &'static str {
    let joined = themes.join("、");
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| joined.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_cycle_modulo_table_length() {
        let entry = entry_for("科学");
        assert_eq!(entry.emoji(0), "🔬");
        assert_eq!(entry.emoji(4), "🔬");
        assert_eq!(entry.reward(3), "新发现！太神奇了！");
    }

    #[test]
    fn unknown_category_uses_default_entry() {
        let entry = entry_for("未知分类");
        assert_eq!(entry.emoji(1), "🌟");
        assert_eq!(entry.reward(0), "真棒！继续探索吧！");
    }

    #[test]
    fn first_matching_keyword_wins() {
        let themes = vec!["勇气".to_string(), "友情".to_string()];
        // 友情 precedes 勇气 in the keyword table.
        assert_eq!(derive_category(&themes), "情绪管理");
    }

    #[test]
    fn unmatched_themes_fall_back_to_default_category() {
        let themes = vec!["下象棋".to_string()];
        assert_eq!(derive_category(&themes), DEFAULT_CATEGORY);
    }
}
