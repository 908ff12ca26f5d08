//! `dress order`: layered dressing order for an edge list.
//!
//! - `dress order wardrobe.txt` reads pairs from a file.
//! - `dress order` (or `dress order -`) reads pairs from stdin.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use dressing_core::config::DressConfig;
use dressing_core::input::{EdgeFormat, parse_edges};
use dressing_core::{ClothingGraph, DressingError, DressingOrder, initial_frontier, traverse};
use serde::Serialize;
use tracing::debug;

use crate::output::{CliError, OutputMode, render_error, render_mode};

/// Arguments for `dress order`.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Edge list file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Edge list encoding: auto, text, or json. Defaults to `[input] format`
    /// from dress.toml.
    #[arg(long)]
    pub input_format: Option<EdgeFormat>,

    /// Include each item's direct prerequisites (pretty output).
    #[arg(long)]
    pub explain: bool,
}

/// JSON shape: `{"layers": [[...]], "explanations": {item: [prerequisites]}}`.
#[derive(Debug, Serialize)]
pub struct OrderOutput {
    #[serde(flatten)]
    order: DressingOrder,
    explanations: BTreeMap<String, Vec<String>>,
}

/// Execute `dress order`.
pub fn run_order(args: &OrderArgs, config: &DressConfig, output: OutputMode) -> anyhow::Result<()> {
    let source = read_source(args.file.as_deref())?;
    let format = args.input_format.unwrap_or(config.input.format);

    let edges = match parse_edges(&source, format) {
        Ok(edges) => edges,
        Err(e) => {
            render_error(output, &CliError::from(&e))?;
            anyhow::bail!("{e}");
        }
    };
    debug!(entries = edges.len(), %format, "parsed edge list");

    let payload = match plan_order(&edges) {
        Ok(payload) => payload,
        Err(e) => {
            render_error(output, &CliError::from(&e))?;
            anyhow::bail!("{e}");
        }
    };

    emit_order(output, &payload, args.explain)
}

/// Build, explain, and order `edges`.
///
/// Prerequisites are captured before traversal drains the graph.
pub fn plan_order<S: AsRef<str>>(edges: &[(S, S)]) -> Result<OrderOutput, DressingError> {
    let mut graph = ClothingGraph::from_edges(edges)?;
    let explanations = graph.prerequisites();
    let frontier = initial_frontier(&graph);
    let order = traverse(&frontier, &mut graph)?;

    Ok(OrderOutput {
        order,
        explanations,
    })
}

/// Print an ordered payload in the requested mode.
pub fn emit_order(output: OutputMode, payload: &OrderOutput, explain: bool) -> anyhow::Result<()> {
    render_mode(output, payload, render_order_text, |payload, w| {
        render_order_pretty(payload, explain, w)
    })
}

fn read_source(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read edge list from stdin")?;
            Ok(buf)
        }
    }
}

fn render_order_text(payload: &OrderOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if !payload.order.is_empty() {
        writeln!(w, "{}", payload.order)?;
    }
    Ok(())
}

fn render_order_pretty(
    payload: &OrderOutput,
    explain: bool,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(w, "Dressing order")?;

    if payload.order.is_empty() {
        writeln!(w, "(no clothing items)")?;
        return Ok(());
    }

    for (idx, layer) in payload.order.layers.iter().enumerate() {
        let noun = if layer.len() == 1 { "item" } else { "items" };
        writeln!(w, "\nStep {} ({} {noun}):", idx + 1, layer.len())?;

        for item in layer {
            writeln!(w, "  - {item}")?;

            if explain {
                let prerequisites = payload
                    .explanations
                    .get(item)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                if prerequisites.is_empty() {
                    writeln!(w, "    ready: no prerequisites")?;
                } else {
                    writeln!(w, "    after: {}", prerequisites.join(", "))?;
                }
            }
        }
    }

    Ok(())
}
