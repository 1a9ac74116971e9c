//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use storyloom_core::{Mood, Setting};

/// Storyloom - Children's storybook generation from structured requests
#[derive(Parser, Debug)]
#[command(name = "storyloom")]
#[command(about = "Generate illustrated children's storybooks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a complete storybook and print it as JSON
    Generate(GenerateArgs),

    /// Probe the text backend with a minimal completion
    Health,

    /// List the seeded storybook catalog
    Catalog,
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The protagonist, e.g. 小兔子
    #[arg(long)]
    pub character: String,

    /// The protagonist's mood (happy, sad, excited, worried, angry, peaceful)
    #[arg(long)]
    pub mood: Mood,

    /// Where the story takes place (home, school, forest, park, beach, space)
    #[arg(long)]
    pub setting: Option<Setting>,

    /// A story theme; may be repeated up to three times
    #[arg(long = "theme")]
    pub themes: Vec<String>,

    /// Free-form extra elements to weave into the story
    #[arg(long)]
    pub extra: Option<String>,

    /// Number of pages to generate
    #[arg(long, default_value = "3")]
    pub pages: usize,
}
