//! Story assembly: the stage-ordered generation pipeline.

use crate::{catalog, prompts, segment};
use rand::Rng;
use std::time::Duration;
use storyloom_core::{
    GenerationProgress, ImageOptions, InteractiveElement, StoryPage, StoryRequest, Storybook,
};
use storyloom_error::{PipelineError, Stage, StoryloomResult};
use storyloom_interface::{Health, HealthStatus, ImageGenerator, TextGenerator};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Hotspot positions stay inside [LOW, HIGH) so they keep clear of the
/// canvas edges.
const POSITION_LOW: f64 = 10.0;
const POSITION_HIGH: f64 = 90.0;

/// Tunable knobs for one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Pages per story; the prompt contract and the segmenter both use it
    pub target_page_count: usize,
    /// Pause before every page-image call after the first
    pub page_image_delay: Duration,
    /// Hotspots synthesized per page
    pub elements_per_page: usize,
    /// Pass-through options for every image call
    pub image_options: ImageOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_page_count: 3,
            page_image_delay: Duration::from_secs(3),
            elements_per_page: 2,
            image_options: ImageOptions::default(),
        }
    }
}

/// Callback receiving transient progress snapshots.
pub type ProgressHook = Box<dyn Fn(GenerationProgress) + Send + Sync>;

/// Sequences text generation, cover generation and per-page image
/// generation into a complete storybook.
///
/// One call to [`StoryEngine::assemble`] is a single logical transaction:
/// it either returns a fully populated [`Storybook`] or a stage-tagged
/// error, never a partial record. Appending the result to the store is the
/// caller's job.
///
/// Image calls run strictly sequentially. That is an ordering guarantee,
/// not an incidental limitation: it bounds concurrent load on the
/// rate-limited image backend and keeps the inter-call delay meaningful.
pub struct StoryEngine<T, I> {
    text: T,
    image: I,
    config: EngineConfig,
    progress: Option<ProgressHook>,
}

impl<T, I> StoryEngine<T, I> {
    /// Create an engine with the default configuration.
    pub fn new(text: T, image: I) -> Self {
        Self::with_config(text, image, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(text: T, image: I, config: EngineConfig) -> Self {
        Self {
            text,
            image,
            config,
            progress: None,
        }
    }

    /// Install a progress callback.
    pub fn on_progress(mut self, hook: impl Fn(GenerationProgress) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(hook));
        self
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn report(&self, step: &str, progress: u8) {
        if let Some(hook) = &self.progress {
            hook(GenerationProgress::new(step, progress));
        }
    }
}

impl<T: TextGenerator, I: ImageGenerator> StoryEngine<T, I> {
    /// Assemble a complete storybook from a request.
    ///
    /// The random source drives hotspot placement only; it is injected so
    /// placement is reproducible in tests.
    ///
    /// # Errors
    ///
    /// Fails with a [`PipelineError`] tagging the stage that failed: text
    /// (including segmentation), cover image, or page N image. The text
    /// stage failing aborts before any image quota is spent.
    #[instrument(skip_all, fields(character = %request.main_character, mood = %request.mood))]
    pub async fn assemble<R: Rng>(
        &self,
        request: &StoryRequest,
        rng: &mut R,
    ) -> StoryloomResult<Storybook> {
        let n = self.config.target_page_count;
        info!(pages = n, "Starting story assembly");

        self.report("正在构思故事...", 5);
        let (system, user) = prompts::build_text_prompts(request, n);
        let raw = self
            .text
            .generate_text(&system, &user)
            .await
            .map_err(|e| PipelineError::new(Stage::Text, e))?;
        debug!(chars = raw.len(), "Narrative text received");

        self.report("正在整理故事页面...", 25);
        let page_texts =
            segment::segment(&raw, n).map_err(|e| PipelineError::new(Stage::Text, e))?;

        let title = compose_title(request);
        let description = compose_description(request);
        let category = catalog::derive_category(&request.themes);

        self.report("正在绘制封面...", 35);
        let cover = self
            .image
            .generate_image(&prompts::build_cover_prompt(&title), &self.config.image_options)
            .await
            .map_err(|e| PipelineError::new(Stage::Cover, e))?;

        let story_id = Uuid::new_v4().simple().to_string();
        let mut pages = Vec::with_capacity(n);
        for (index, text) in page_texts.into_iter().enumerate() {
            let page_number = index + 1;
            if index > 0 {
                // Pacing for the image backend's throughput limits; only
                // meaningful because the previous call has completed.
                tokio::time::sleep(self.config.page_image_delay).await;
            }
            let step = format!("正在绘制第{page_number}页插图...");
            self.report(&step, (35 + 60 * page_number / n).min(95) as u8);
            let background = self
                .image
                .generate_image(
                    &prompts::build_page_prompt(&title, page_number),
                    &self.config.image_options,
                )
                .await
                .map_err(|e| PipelineError::new(Stage::PageImage(page_number), e))?;

            let page_id = format!("{story_id}-{page_number}");
            let interactive_elements =
                scatter_elements(rng, &page_id, category, self.config.elements_per_page);
            pages.push(StoryPage {
                id: page_id,
                background,
                text,
                interactive_elements,
            });
        }

        self.report("故事完成！", 100);
        info!(story_id = %story_id, pages = pages.len(), "Story assembled");
        Ok(Storybook {
            id: story_id,
            title,
            cover,
            category: category.to_string(),
            description,
            pages,
        })
    }
}

impl<T: TextGenerator + Health, I: ImageGenerator> StoryEngine<T, I> {
    /// Probe the text backend deliberately.
    pub async fn health(&self) -> StoryloomResult<HealthStatus> {
        self.text.health().await
    }
}

/// Title template: 主角 + mood adjective + 冒险.
fn compose_title(request: &StoryRequest) -> String {
    format!(
        "{}的{}冒险",
        request.main_character,
        request.mood.title_adjective()
    )
}

/// Description template interpolating character and themes.
fn compose_description(request: &StoryRequest) -> String {
    if request.themes.is_empty() {
        format!("一个关于{}的暖心故事。", request.main_character)
    } else {
        format!(
            "一个关于{}的{}的暖心故事。",
            request.main_character,
            request.themes.join("、")
        )
    }
}

/// Synthesize the fixed-size hotspot set for one page.
///
/// Positions are drawn independently per axis, uniform over [10, 90);
/// glyph and reward cycle through the category entry by element index.
fn scatter_elements<R: Rng>(
    rng: &mut R,
    page_id: &str,
    category: &str,
    count: usize,
) -> Vec<InteractiveElement> {
    let entry = catalog::entry_for(category);
    (0..count)
        .map(|index| InteractiveElement {
            id: format!("{page_id}-{}", index + 1),
            emoji: entry.emoji(index).to_string(),
            x: rng.gen_range(POSITION_LOW..POSITION_HIGH),
            y: rng.gen_range(POSITION_LOW..POSITION_HIGH),
            reward: entry.reward(index).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use storyloom_core::Mood;

    fn request() -> StoryRequest {
        StoryRequest::builder()
            .main_character("小兔子")
            .mood(Mood::Sad)
            .theme("友情")
            .build()
            .unwrap()
    }

    #[test]
    fn title_uses_mood_adjective_not_mood_name() {
        assert_eq!(compose_title(&request()), "小兔子的温暖冒险");
    }

    #[test]
    fn description_interpolates_themes() {
        assert_eq!(
            compose_description(&request()),
            "一个关于小兔子的友情的暖心故事。"
        );
    }

    #[test]
    fn hotspot_positions_stay_clear_of_canvas_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        for sample in 0..1000 {
            let elements = scatter_elements(&mut rng, "s-1", "冒险", 2);
            assert_eq!(elements.len(), 2);
            for element in &elements {
                assert!(
                    (POSITION_LOW..POSITION_HIGH).contains(&element.x),
                    "sample {sample}: x out of bounds: {}",
                    element.x
                );
                assert!(
                    (POSITION_LOW..POSITION_HIGH).contains(&element.y),
                    "sample {sample}: y out of bounds: {}",
                    element.y
                );
                assert!(!element.reward.is_empty());
            }
        }
    }

    #[test]
    fn seeded_rng_reproduces_placement() {
        let a = scatter_elements(&mut StdRng::seed_from_u64(42), "s-1", "动物", 2);
        let b = scatter_elements(&mut StdRng::seed_from_u64(42), "s-1", "动物", 2);
        assert_eq!(a, b);
    }

    #[test]
    fn element_ids_derive_from_page_id() {
        let elements = scatter_elements(&mut StdRng::seed_from_u64(1), "abc-2", "童话", 2);
        assert_eq!(elements[0].id, "abc-2-1");
        assert_eq!(elements[1].id, "abc-2-2");
    }
}
