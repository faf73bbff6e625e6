//! ModeGrid Engine - Main entry point.
//!
//! Runs one UI message against a scene document on disk:
//!
//! ```text
//! modegrid-engine <document.json> [<message.json>] [<output.json>]
//! ```
//!
//! Without a message file the engine answers a `DETECT` request. The plugin
//! reply and the resulting document are printed as JSON. With an output path
//! the resulting document is also written there.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modegrid_engine::api::UiBridge;
use modegrid_engine::config::GridConfig;
use modegrid_engine::infrastructure::memory::{InMemoryHost, SceneDocument};
use modegrid_engine::App;
use modegrid_shared::messages::{PluginMessage, UiMessage};

#[derive(Serialize)]
struct Output {
    reply: Option<PluginMessage>,
    document: SceneDocument,
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modegrid_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let document_path: PathBuf = args
        .next()
        .context("usage: modegrid-engine <document.json> [<message.json>] [<output.json>]")?
        .into();
    let message_path = args.next().map(PathBuf::from);
    let output_path = args.next().map(PathBuf::from);

    let config = GridConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        document = %document_path.display(),
        label_style = %config.label_style,
        "Starting ModeGrid Engine"
    );

    let document = SceneDocument::from_path(&document_path)?;
    let message = match &message_path {
        Some(path) => load_message(path)?,
        None => UiMessage::Detect,
    };

    let host = Arc::new(InMemoryHost::new(document));
    let app = Arc::new(App::new(host.clone(), host.clone(), config));
    let bridge = UiBridge::new(app);

    let reply = bridge.handle(message);
    let document = host.snapshot()?;
    if let Some(path) = &output_path {
        document.write_to(path)?;
        tracing::info!(output = %path.display(), "Wrote resulting document");
    }
    let output = Output { reply, document };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_message(path: &Path) -> anyhow::Result<UiMessage> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read UI message {}", path.display()))?;
    Ok(UiMessage::from_json(&raw)?)
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
