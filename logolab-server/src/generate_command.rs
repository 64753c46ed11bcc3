use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::path::Path;
use std::sync::Arc;

use logolab_client::{
    AnalysisSource, ClientConfig, DesignSession, DirectGemini, DirectPollinations, GatewayAnalysis,
    GatewayClient, GatewayImages, ImageSource, RetryConfig, SessionSnapshot, SlotState,
};
use logolab_core::modules::config as core_config;
use logolab_core::providers::build_http_client;
use logolab_core::GeminiTextProvider;

pub struct GenerateOptions {
    pub project: String,
    pub description: String,
    pub gateway: String,
    pub direct: bool,
    pub json: bool,
}

pub async fn run(config_path: Option<&Path>, options: GenerateOptions) -> Result<()> {
    let session = build_session(config_path, &options)?;

    if let Err(e) = session.submit(&options.project, &options.description).await {
        eprintln!("{} {}", "✗".red(), e.user_message().red());
        return Err(anyhow::anyhow!(e));
    }

    let snapshot = session.snapshot();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&snapshot_json(&snapshot))?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn build_session(config_path: Option<&Path>, options: &GenerateOptions) -> Result<DesignSession> {
    let retry = RetryConfig::default();

    let (analysis, images): (Arc<dyn AnalysisSource>, Arc<dyn ImageSource>) = if options.direct {
        let config = core_config::load_config(config_path)?;
        let http_client = build_http_client(Some(&config.upstream_proxy), config.request_timeout)
            .map_err(|e| anyhow::anyhow!(e))?;
        let provider = GeminiTextProvider::from_config(http_client, &config).ok();
        (
            Arc::new(DirectGemini::new(provider)) as Arc<dyn AnalysisSource>,
            Arc::new(DirectPollinations::new(config.pollinations_base_url)) as Arc<dyn ImageSource>,
        )
    } else {
        let client = Arc::new(GatewayClient::new(ClientConfig {
            base_url: options.gateway.clone(),
            retry,
            ..Default::default()
        })?);
        (
            Arc::new(GatewayAnalysis::new(client.clone())) as Arc<dyn AnalysisSource>,
            Arc::new(GatewayImages::new(client, true)) as Arc<dyn ImageSource>,
        )
    };

    Ok(DesignSession::new(analysis, images, retry))
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    let Some(result) = &snapshot.result else {
        println!("{}", "No design generated.".yellow());
        return;
    };

    println!("{}", "Concept:".cyan().bold());
    println!("  {}\n", result.concept_summary);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Title", "Prompt", "Source", "Image"]);

    for (slot, variant) in result.variants.iter().enumerate() {
        let (source, image) = match snapshot.slots.get(slot) {
            Some(SlotState::ImageReady(image)) => {
                (Cell::new(image.source).fg(Color::Green), Cell::new(preview(&image.image)))
            }
            Some(SlotState::Error(message)) => (Cell::new("failed").fg(Color::Red), Cell::new(message)),
            _ => (Cell::new("-"), Cell::new("-")),
        };
        table.add_row(vec![Cell::new(variant.id), Cell::new(&variant.title), Cell::new(&variant.prompt), source, image]);
    }
    println!("{table}");

    if !result.colors.is_empty() {
        println!("\n{}", "Palette:".cyan().bold());
        for color in &result.colors {
            println!("  {} {}", color.hex, color.name);
        }
    }
}

/// Data URIs are far too long for a terminal cell.
fn preview(image: &str) -> String {
    if image.starts_with("data:") {
        let bytes = image.len();
        let head: String = image.chars().take(32).collect();
        format!("{}… ({} bytes)", head, bytes)
    } else {
        image.to_string()
    }
}

fn snapshot_json(snapshot: &SessionSnapshot) -> serde_json::Value {
    let images: Vec<serde_json::Value> = snapshot
        .slots
        .iter()
        .map(|slot| match slot {
            SlotState::ImageReady(image) => serde_json::json!(image),
            SlotState::Error(message) => serde_json::json!({"error": message}),
            _ => serde_json::Value::Null,
        })
        .collect();

    serde_json::json!({
        "result": snapshot.result,
        "images": images,
    })
}
