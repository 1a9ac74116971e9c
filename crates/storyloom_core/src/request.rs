//! Story request types and the validating builder.

use serde::{Deserialize, Serialize};
use storyloom_error::{BuilderError, BuilderErrorKind};

/// Maximum number of distinct themes a request may carry.
pub const MAX_THEMES: usize = 3;

/// The protagonist's mood, fixed vocabulary shared with the prompt builder.
///
/// # Examples
///
/// ```
/// use storyloom_core::Mood;
/// use std::str::FromStr;
///
/// let mood = Mood::from_str("happy").unwrap();
/// assert_eq!(mood.label(), "开心");
/// assert_eq!(mood.emoji(), "😊");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    /// 开心
    Happy,
    /// 难过
    Sad,
    /// 兴奋
    Excited,
    /// 担心
    Worried,
    /// 生气
    Angry,
    /// 平静
    Peaceful,
}

impl Mood {
    /// Localized label shown to readers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "开心",
            Self::Sad => "难过",
            Self::Excited => "兴奋",
            Self::Worried => "担心",
            Self::Angry => "生气",
            Self::Peaceful => "平静",
        }
    }

    /// Glyph used for hotspot fallbacks and cover placeholders.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Excited => "🤩",
            Self::Worried => "😰",
            Self::Angry => "😠",
            Self::Peaceful => "😌",
        }
    }

    /// Adjective interpolated into the storybook title template.
    ///
    /// Negative moods map to the feeling the story should leave behind
    /// rather than the mood itself (sad stories are warm, worried stories
    /// are brave).
    pub fn title_adjective(&self) -> &'static str {
        match self {
            Self::Happy => "快乐",
            Self::Sad => "温暖",
            Self::Excited => "精彩",
            Self::Worried => "勇敢",
            Self::Angry => "平静",
            Self::Peaceful => "神奇",
        }
    }
}

/// Where the story takes place, fixed vocabulary shared with the prompt
/// builder.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Setting {
    /// 家里
    Home,
    /// 学校
    School,
    /// 森林
    Forest,
    /// 公园
    Park,
    /// 海边
    Beach,
    /// 太空
    Space,
}

impl Setting {
    /// Localized label shown to readers and embedded into prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "家里",
            Self::School => "学校",
            Self::Forest => "森林",
            Self::Park => "公园",
            Self::Beach => "海边",
            Self::Space => "太空",
        }
    }

    /// Glyph used for hotspot fallbacks.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::School => "🏫",
            Self::Forest => "🌳",
            Self::Park => "🌸",
            Self::Beach => "🏖️",
            Self::Space => "🚀",
        }
    }
}

/// A structured prompt for one story generation.
///
/// Constructed through [`StoryRequestBuilder`], which enforces the
/// invariants: the main character is non-empty and at most [`MAX_THEMES`]
/// distinct themes are kept, deduplicated in insertion order.
///
/// The request is ephemeral: created by the caller and consumed once by the
/// story engine.
///
/// # Examples
///
/// ```
/// use storyloom_core::{Mood, Setting, StoryRequest};
///
/// let request = StoryRequest::builder()
///     .main_character("小兔子")
///     .mood(Mood::Happy)
///     .setting(Setting::Forest)
///     .theme("友情")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.themes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    /// The protagonist, e.g. 小兔子 or 勇敢的小狮子
    pub main_character: String,
    /// The protagonist's mood
    pub mood: Mood,
    /// Where the story takes place, if the caller picked one
    pub setting: Option<Setting>,
    /// Up to three distinct themes, insertion order preserved
    pub themes: Vec<String>,
    /// Free-form extra elements to weave into the story
    pub additional_elements: Option<String>,
}

impl StoryRequest {
    /// Start building a request.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }
}

/// Validating builder for [`StoryRequest`].
#[derive(Debug, Clone, Default)]
pub struct StoryRequestBuilder {
    main_character: Option<String>,
    mood: Option<Mood>,
    setting: Option<Setting>,
    themes: Vec<String>,
    additional_elements: Option<String>,
}

impl StoryRequestBuilder {
    /// Set the protagonist.
    pub fn main_character(mut self, character: impl Into<String>) -> Self {
        self.main_character = Some(character.into());
        self
    }

    /// Set the protagonist's mood.
    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Set the story setting.
    pub fn setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }

    /// Add one theme. Duplicates are dropped silently; the first
    /// occurrence keeps its position.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        if !self.themes.contains(&theme) {
            self.themes.push(theme);
        }
        self
    }

    /// Add several themes at once.
    pub fn themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for theme in themes {
            self = self.theme(theme);
        }
        self
    }

    /// Set free-form extra elements.
    pub fn additional_elements(mut self, elements: impl Into<String>) -> Self {
        self.additional_elements = Some(elements.into());
        self
    }

    /// Validate and build the request.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] when the main character is missing or
    /// empty, the mood is missing, or more than [`MAX_THEMES`] distinct
    /// themes were added.
    pub fn build(self) -> Result<StoryRequest, BuilderError> {
        let main_character = self
            .main_character
            .ok_or_else(|| BuilderError::new(BuilderErrorKind::MissingField("main_character")))?;
        if main_character.trim().is_empty() {
            return Err(BuilderError::new(BuilderErrorKind::EmptyField(
                "main_character",
            )));
        }
        let mood = self
            .mood
            .ok_or_else(|| BuilderError::new(BuilderErrorKind::MissingField("mood")))?;
        if self.themes.len() > MAX_THEMES {
            return Err(BuilderError::new(BuilderErrorKind::TooManyThemes {
                limit: MAX_THEMES,
                got: self.themes.len(),
            }));
        }
        Ok(StoryRequest {
            main_character,
            mood,
            setting: self.setting,
            themes: self.themes,
            additional_elements: self.additional_elements,
        })
    }
}
