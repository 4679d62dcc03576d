//! Runs the scripted EduBuddy study-help demo.

use anyhow::{Context, Result};
use edubuddy::config::EduBuddyConfig;
use edubuddy::demo::run_demo;
use edubuddy::memory::JsonFileMemoryStore;
use edubuddy::{MEMORY_PATH_ENV, build_generator, init_logging, resolve_memory_path};
use log::{debug, info};
use std::sync::Arc;

fn main() -> Result<()> {
    init_logging();

    let cwd = std::env::current_dir().context("cwd")?;
    info!("loading layered config from cwd: {}", cwd.display());
    let layered = EduBuddyConfig::load_layered(&cwd).context("failed to load layered config")?;
    debug!("layered config loaded (layers={})", layered.layers.len());
    let config = layered.config;

    let memory_path = resolve_memory_path(&config, &cwd, std::env::var(MEMORY_PATH_ENV).ok());
    let store = JsonFileMemoryStore::open(&memory_path).with_context(|| {
        format!("failed to open memory bank at {}", memory_path.display())
    })?;
    let generator = build_generator(&config.generator);

    let output = run_demo(
        Arc::new(store),
        Arc::new(generator),
        config.tools.search_top_k,
    )
    .context("demo run failed")?;

    println!("Demo output:");
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to render demo output")?
    );
    Ok(())
}
