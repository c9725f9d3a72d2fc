use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use lookout_engine::PageLayout;
use lookout_types::PageDocument;
use lookout_tui::ViewerOptions;
use lookout_util::preferences::UserPreferences;
use tracing::Level;

/// Content width used when composing the outline without a terminal.
const OUTLINE_COMPOSE_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "lookout", version, about = "Terminal viewer for sectioned pages with scroll-spy navigation")]
struct Cli {
    /// Path to the page manifest (YAML or JSON)
    page: PathBuf,

    /// Print the composed section outline as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Theme id for this run (overrides the saved preference)
    #[arg(long)]
    theme: Option<String>,

    /// Disable smooth scrolling for this run
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let document = lookout_engine::load_page_from_file(&cli.page)?;

    // No TUI needed for outline mode.
    if cli.outline {
        return print_outline(&document);
    }

    let preferences = Arc::new(UserPreferences::new().unwrap_or_else(|error| {
        tracing::warn!("failed to load preferences, continuing without persistence: {error}");
        UserPreferences::ephemeral()
    }));

    let options = ViewerOptions {
        theme_override: cli.theme,
        plain: cli.plain,
    };
    lookout_tui::run(document, preferences, options).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

/// Prints the section registry as pretty JSON, the scriptable face of the
/// navigation builder.
fn print_outline(document: &PageDocument) -> Result<()> {
    let layout = PageLayout::compose(document, OUTLINE_COMPOSE_WIDTH);
    let sections: Vec<serde_json::Value> = layout
        .registry
        .iter()
        .map(|section| {
            serde_json::json!({
                "id": section.id,
                "label": section.label,
                "top": section.top,
            })
        })
        .collect();

    let out = serde_json::json!({
        "title": document.title,
        "sections": sections,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
