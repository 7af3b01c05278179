//! Accord CLI - Main Entry Point
//!
//! Mounts an accordion on an HTML file, replays the requested actions and
//! prints the container's resulting markup.

mod args;

use accord::{Accordion, Options, Selectors};
use accord_dom::{Document, Dom, NodeId};
use anyhow::{Context, Result};
use args::{Action, Args};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output = run(&args)?;
    println!("{output}");
    Ok(())
}

fn run(args: &Args) -> Result<String> {
    let markup = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut doc = accord_html::parse(&markup).context("parsing markup")?;

    let options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Options>(&text)
                .with_context(|| format!("invalid options in {}", path.display()))?
        }
        None => Options::default(),
    };

    let mut selectors = Selectors::default();
    if let Some(trigger) = &args.trigger {
        selectors.trigger = trigger.clone();
    }
    if let Some(body) = &args.body {
        selectors.body = body.clone();
    }

    let mut accordion = match &args.container {
        Some(id) => {
            let container = element(&doc, id)?;
            Accordion::new(&mut doc, container, selectors, options)
        }
        None => Accordion::mount(&mut doc, selectors, options),
    }
    .context("setting up accordion")?;
    tracing::info!(triggers = accordion.panels().len(), "accordion ready");

    for action in &args.actions {
        match action {
            Action::Click(id) => {
                let target = element(&doc, id)?;
                accordion.click(&mut doc, target);
            }
            Action::ExpandAll => accordion.expand_all(&mut doc),
            Action::CollapseAll => accordion.collapse_all(&mut doc),
        }
    }

    let output = doc.outer_html(accordion.container());
    accordion.destroy(&mut doc);
    Ok(output)
}

fn element(doc: &Document, id: &str) -> Result<NodeId> {
    doc.get_element_by_id(id)
        .with_context(|| format!("no element with id `{id}`"))
}
