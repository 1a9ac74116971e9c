//! Prompt construction for both generative backends.
//!
//! Pure functions, no I/O. Text prompts embed the page-delimiter contract
//! the segmenter relies on; image prompts share one fixed style guide so
//! the cover and every page read as one continuous picture book.

use storyloom_core::StoryRequest;

/// Substituted when the caller picked no setting and no themes.
const NEUTRAL_DEFAULT: &str = "一个神奇的世界";

/// Visual style guide shared by the cover and every page illustration.
///
/// Restrained, sketch-like direction: generous negative space, desaturated
/// washes, no 3D or heavy texture.
const STYLE_GUIDE: &str = "Style requirements:
- Composition: at least 30% must be clean empty space (留白)
- Simple outlines and suggestive expressions rather than detailed illustrations
- Use minimal, essential strokes to suggest forms
- Colors must be desaturated and harmonious
- Artistic approach: like a simple sketch with light color washes
- Avoid strictly:
  * saturated colors
  * complex textures
  * 3D rendering effects
  * intricate patterns
  * excessive details
- Layout should feel natural and flowing
- Each element should be simple and naive in form";

/// Build the system and user prompts for the text backend.
///
/// Deterministically embeds the target page count, the Chinese-only output
/// constraint, the `第X页：` page-delimiter contract and the 2–3 sentence
/// length constraint.
///
/// # Examples
///
/// ```
/// use storyloom_core::{Mood, StoryRequest};
/// use storyloom_pipeline::prompts::build_text_prompts;
///
/// let request = StoryRequest::builder()
///     .main_character("小兔子")
///     .mood(Mood::Happy)
///     .build()
///     .unwrap();
/// let (system, user) = build_text_prompts(&request, 3);
/// assert!(system.contains("3页"));
/// assert!(user.contains("小兔子"));
/// ```
pub fn build_text_prompts(request: &StoryRequest, target_page_count: usize) -> (String, String) {
    let n = target_page_count;
    let system = format!(
        "你是一个专业的儿童故事作家。请创作一个{n}页的儿童故事，遵循以下要求：
1. 故事应该适合3-8岁的儿童阅读
2. 每页2-3句话，使用简单易懂的语言
3. 故事要有清晰的开始、发展和结局
4. 包含互动元素和简单的问题来吸引读者
5. 每页的内容要以\"第X页：\"开头（X为1-{n}）
6. 故事要富有教育意义和趣味性
7. 确保故事内容积极向上，适合儿童
8. 请严格按照\"第1页：\"、\"第2页：\"等格式标记每一页"
    );

    let setting = request
        .setting
        .map(|s| s.label())
        .unwrap_or(NEUTRAL_DEFAULT);
    let themes = if request.themes.is_empty() {
        NEUTRAL_DEFAULT.to_string()
    } else {
        request.themes.join("、")
    };
    let extra = request
        .additional_elements
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .map(|e| format!("\n- 其他元素：{e}"))
        .unwrap_or_default();

    let user = format!(
        "请创作一个有趣的儿童故事，包含以下元素：
- 主角：{character}
- 心情：{mood}
- 场景：{setting}
- 主题：{themes}{extra}

格式要求：
1. 必须分为{n}页，每页都要以\"第X页：\"开头（X为1-{n}）
2. 每页2-3句话
3. 要包含互动性的问题
4. 使用简单的中文
5. 每页结尾用句号。

示例格式：
第1页：小兔子在花园里蹦蹦跳跳。它看到了一朵美丽的花，你能找到它在哪里吗？
第2页：...（以此类推）",
        character = request.main_character,
        mood = request.mood.label(),
    );

    (system, user)
}

/// Build the cover illustration prompt for a story title.
pub fn build_cover_prompt(title: &str) -> String {
    format!(
        "Create a children's book illustration with restrained artistic style. {STYLE_GUIDE}
Theme: \"{title}\""
    )
}

/// Build the illustration prompt for one page, style-consistent with the
/// cover.
pub fn build_page_prompt(title: &str, page_number: usize) -> String {
    format!(
        "Create a children's book page following the cover's artistic direction. {STYLE_GUIDE}
- Continue the simple, suggestive art style from the cover
Page {page_number} of \"{title}\""
    )
}
