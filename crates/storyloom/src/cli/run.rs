//! Command handlers.

use crate::cli::GenerateArgs;
use storyloom_backends::{BackendConfig, ChatClient, ImageClient, Retrying};
use storyloom_core::StoryRequest;
use storyloom_interface::HealthStatus;
use storyloom_pipeline::{CATEGORIES, EngineConfig, StoryEngine, StorybookStore};
use tracing::info;

/// Build the engine from environment configuration, run one generation,
/// and print the assembled storybook as JSON.
pub async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = StoryRequest::builder()
        .main_character(args.character)
        .mood(args.mood)
        .themes(args.themes);
    if let Some(setting) = args.setting {
        builder = builder.setting(setting);
    }
    if let Some(extra) = args.extra {
        builder = builder.additional_elements(extra);
    }
    let request = builder.build()?;

    let config = BackendConfig::from_env()?;
    let engine_config = EngineConfig {
        target_page_count: args.pages,
        ..EngineConfig::default()
    };
    let engine = StoryEngine::with_config(
        ChatClient::new(config.clone()),
        Retrying::new(ImageClient::new(config)),
        engine_config,
    )
    .on_progress(|progress| {
        info!(progress = progress.progress, "{}", progress.step);
    });

    let book = engine.assemble(&request, &mut rand::thread_rng()).await?;
    println!("{}", serde_json::to_string_pretty(&book)?);
    Ok(())
}

/// Probe the text backend and report its status.
pub async fn run_health() -> Result<(), Box<dyn std::error::Error>> {
    let config = BackendConfig::from_env()?;
    let client = ChatClient::new(config);
    let engine = StoryEngine::new(client, NoImages);
    match engine.health().await? {
        HealthStatus::Healthy => println!("healthy"),
        HealthStatus::Degraded { message } => println!("degraded: {message}"),
        HealthStatus::Unhealthy { message } => println!("unhealthy: {message}"),
    }
    Ok(())
}

/// Print the catalog filter list and the seeded books, one line per book.
pub fn list_catalog() -> Result<(), Box<dyn std::error::Error>> {
    println!("分类：{}", CATEGORIES.join(" / "));
    let store = StorybookStore::with_defaults();
    for book in store.list() {
        println!(
            "{} {} [{}] {} ({} pages)",
            book.id,
            book.cover,
            book.category,
            book.title,
            book.pages.len()
        );
    }
    Ok(())
}

/// Image backend stand-in for commands that never generate images.
struct NoImages;

#[async_trait::async_trait]
impl storyloom_interface::ImageGenerator for NoImages {
    async fn generate_image(
        &self,
        _prompt: &str,
        _options: &storyloom_core::ImageOptions,
    ) -> storyloom_error::StoryloomResult<String> {
        Err(storyloom_error::ImageError::new(
            storyloom_error::ImageErrorKind::EmptyResult,
        )
        .into())
    }

    fn provider_name(&self) -> &'static str {
        "none"
    }

    fn model_name(&self) -> &str {
        "none"
    }
}
