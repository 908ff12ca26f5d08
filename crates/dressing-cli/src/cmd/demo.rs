//! `dress demo`: order the built-in suit wardrobe.

use clap::Args;
use dressing_core::demo::SUIT_EDGES;

use crate::cmd::order::{emit_order, plan_order};
use crate::output::OutputMode;

/// Arguments for `dress demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Include each item's direct prerequisites (pretty output).
    #[arg(long)]
    pub explain: bool,
}

/// Execute `dress demo`.
pub fn run_demo(args: &DemoArgs, output: OutputMode) -> anyhow::Result<()> {
    let payload = plan_order(SUIT_EDGES)?;
    emit_order(output, &payload, args.explain)
}
