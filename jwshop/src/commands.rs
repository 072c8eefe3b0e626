//! Command handlers

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use storefront_leptos::catalog::{BESTSELLERS, JOURNAL_POSTS, NAV_LINKS};
use storefront_leptos::inspect::Screen;
use storefront_leptos::types::classify_viewport;
use storefront_leptos::{PageOptions, contract, render_page};
use tracing::{info, warn};

use crate::config::SiteConfig;

/// Whether a command succeeded in the domain sense (e.g. contract satisfied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

fn page_options(config: &SiteConfig, width: Option<u32>) -> PageOptions {
    let width = width.unwrap_or(config.viewport_width);
    PageOptions {
        theme: config.theme.clone(),
        viewport: classify_viewport(width),
    }
}

pub fn render(config: &SiteConfig, width: Option<u32>, out: Option<&Path>) -> Result<Outcome> {
    let options = page_options(config, width);
    let html = render_page(&options);
    let out = out.unwrap_or(config.output.as_path());

    if out == Path::new("-") {
        std::io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(Outcome::Success);
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("failed to write {}", out.display()))?;

    info!(
        path = %out.display(),
        bytes = html.len(),
        viewport = options.viewport.as_str(),
        "page written"
    );
    Ok(Outcome::Success)
}

pub fn check(file: &Path) -> Result<Outcome> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let report = contract::verify(&html);

    let mut stdout = std::io::stdout().lock();
    if report.is_satisfied() {
        writeln!(stdout, "contract satisfied ({} rules)", report.checked)?;
        info!(path = %file.display(), "contract satisfied");
        return Ok(Outcome::Success);
    }

    for violation in &report.violations {
        writeln!(stdout, "{}", violation)?;
    }
    warn!(
        path = %file.display(),
        violations = report.violations.len(),
        "contract violated"
    );
    Ok(Outcome::Failure)
}

pub fn outline(config: &SiteConfig, width: Option<u32>, json: bool) -> Result<Outcome> {
    let html = render_page(&page_options(config, width));
    let lines = Screen::parse(&html).outline();

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &lines).context("failed to encode outline")?;
        writeln!(stdout)?;
    } else {
        for line in &lines {
            writeln!(stdout, "{}", line)?;
        }
    }
    Ok(Outcome::Success)
}

pub fn catalog() -> Result<Outcome> {
    let content = serde_json::json!({
        "nav_links": NAV_LINKS,
        "bestsellers": BESTSELLERS,
        "journal_posts": JOURNAL_POSTS,
    });
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &content).context("failed to encode catalog")?;
    writeln!(stdout)?;
    Ok(Outcome::Success)
}
