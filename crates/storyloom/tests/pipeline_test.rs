//! End-to-end assembly tests against scripted backends.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use storyloom::{
    GenerationProgress, ImageError, ImageErrorKind, ImageGenerator, ImageOptions, Mood, Setting,
    Stage, StoryEngine, StoryRequest, StorybookStore, StoryloomErrorKind, StoryloomResult,
    TextError, TextErrorKind, TextGenerator,
};

/// Text backend returning a scripted narrative, counting calls.
struct ScriptedText {
    response: Result<&'static str, ()>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedText {
    fn ok(response: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: Ok(response),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: Err(()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl TextGenerator for ScriptedText {
    async fn generate_text(&self, _system: &str, _user: &str) -> StoryloomResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Ok(text) => Ok(text.to_string()),
            Err(()) => Err(TextError::new(TextErrorKind::Api {
                status: 500,
                body: "server error".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-text"
    }
}

/// Image backend returning sequential URLs, optionally failing at one call.
struct ScriptedImages {
    fail_at: Option<usize>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedImages {
    fn ok() -> (Self, Arc<AtomicUsize>) {
        Self::failing_at(None)
    }

    fn failing_at(fail_at: Option<usize>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                fail_at,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl ImageGenerator for ScriptedImages {
    async fn generate_image(
        &self,
        _prompt: &str,
        _options: &ImageOptions,
    ) -> StoryloomResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(call) {
            return Err(ImageError::new(ImageErrorKind::Api {
                status: 500,
                body: "server error".to_string(),
            })
            .into());
        }
        Ok(format!("https://img.test/{call}.png"))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-image"
    }
}

const MARKER_NARRATIVE: &str =
    "第1页：小恐龙出发了。\n第2页：它遇到了新朋友。\n第3页：大家一起回家了。";

fn request() -> StoryRequest {
    StoryRequest::builder()
        .main_character("小恐龙")
        .mood(Mood::Happy)
        .setting(Setting::Forest)
        .theme("友情")
        .build()
        .unwrap()
}

fn stage_of(err: &storyloom::StoryloomError) -> Stage {
    match err.kind() {
        StoryloomErrorKind::Pipeline(p) => p.stage,
        other => panic!("expected a pipeline error, got {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn assemble_produces_complete_storybook() {
    let (text, text_calls) = ScriptedText::ok(MARKER_NARRATIVE);
    let (images, image_calls) = ScriptedImages::ok();
    let engine = StoryEngine::new(text, images);
    let mut rng = StdRng::seed_from_u64(1);

    let start = tokio::time::Instant::now();
    let book = engine.assemble(&request(), &mut rng).await.unwrap();

    assert_eq!(book.title, "小恐龙的快乐冒险");
    assert_eq!(book.category, "情绪管理");
    assert_eq!(book.description, "一个关于小恐龙的友情的暖心故事。");
    assert_eq!(book.cover, "https://img.test/0.png");
    assert_eq!(book.pages.len(), 3);
    assert_eq!(book.pages[0].text, "小恐龙出发了。");
    assert_eq!(book.pages[2].text, "大家一起回家了。");

    for (index, page) in book.pages.iter().enumerate() {
        assert_eq!(page.id, format!("{}-{}", book.id, index + 1));
        assert_eq!(page.background, format!("https://img.test/{}.png", index + 1));
        assert_eq!(page.interactive_elements.len(), 2);
        for element in &page.interactive_elements {
            assert!((10.0..90.0).contains(&element.x));
            assert!((10.0..90.0).contains(&element.y));
        }
    }

    assert_eq!(text_calls.load(Ordering::SeqCst), 1);
    // One cover plus one image per page.
    assert_eq!(image_calls.load(Ordering::SeqCst), 4);
    // Two inter-page pauses of 3s each; the first page starts immediately.
    assert_eq!(start.elapsed(), std::time::Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn text_failure_aborts_before_any_image_call() {
    let (text, _) = ScriptedText::failing();
    let (images, image_calls) = ScriptedImages::ok();
    let engine = StoryEngine::new(text, images);

    let store = StorybookStore::with_defaults();
    let before = store.len();

    let err = engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap_err();

    assert_eq!(stage_of(&err), Stage::Text);
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
    // A failed generation never produces a partial record to append.
    assert_eq!(store.len(), before);
}

#[tokio::test(start_paused = true)]
async fn unsplittable_narrative_is_a_text_stage_failure() {
    let (text, _) = ScriptedText::ok("   \n  ");
    let (images, image_calls) = ScriptedImages::ok();
    let engine = StoryEngine::new(text, images);

    let err = engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap_err();

    assert_eq!(stage_of(&err), Stage::Text);
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn cover_failure_is_stage_tagged() {
    let (text, _) = ScriptedText::ok(MARKER_NARRATIVE);
    let (images, image_calls) = ScriptedImages::failing_at(Some(0));
    let engine = StoryEngine::new(text, images);

    let err = engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap_err();

    assert_eq!(stage_of(&err), Stage::Cover);
    assert_eq!(image_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn second_page_failure_names_the_page() {
    let (text, _) = ScriptedText::ok(MARKER_NARRATIVE);
    // Call 0 is the cover, call 1 is page 1, call 2 is page 2.
    let (images, image_calls) = ScriptedImages::failing_at(Some(2));
    let engine = StoryEngine::new(text, images);

    let err = engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap_err();

    assert_eq!(stage_of(&err), Stage::PageImage(2));
    assert_eq!(image_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn progress_runs_monotonically_to_completion() {
    let (text, _) = ScriptedText::ok(MARKER_NARRATIVE);
    let (images, _) = ScriptedImages::ok();
    let seen: Arc<Mutex<Vec<GenerationProgress>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let engine = StoryEngine::new(text, images).on_progress(move |progress| {
        sink.lock().unwrap().push(progress);
    });

    engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert_eq!(seen.last().unwrap().progress, 100);
    assert_eq!(seen.last().unwrap().step, "故事完成！");
    for window in seen.windows(2) {
        assert!(window[0].progress <= window[1].progress);
    }
}

#[tokio::test(start_paused = true)]
async fn assembled_book_lands_first_in_the_store() {
    let (text, _) = ScriptedText::ok(MARKER_NARRATIVE);
    let (images, _) = ScriptedImages::ok();
    let engine = StoryEngine::new(text, images);

    let book = engine
        .assemble(&request(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap();

    let mut store = StorybookStore::with_defaults();
    let id = book.id.clone();
    store.add(book);
    assert_eq!(store.list()[0].id, id);
    assert_eq!(store.len(), 6);
    assert!(store.get(&id).is_some());
}
