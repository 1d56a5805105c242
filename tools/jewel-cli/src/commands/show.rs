//! Print one diamond.

use anyhow::{bail, Result};
use jewel_catalog::prelude::*;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let Some(diamond) = catalog.get(&args.id) else {
        bail!("Diamond '{}' not found", args.id);
    };

    if ctx.output.is_json() {
        ctx.output.json(diamond);
        return Ok(());
    }

    ctx.output.header(&diamond.name);
    ctx.output.kv("id", diamond.id.as_str());
    ctx.output.kv("group", diamond.group.as_str());
    ctx.output.kv("shape", diamond.shape.as_str());
    ctx.output.kv("carat", &format!("{}ct", diamond.carat));
    ctx.output.kv("color", diamond.color.as_str());
    ctx.output.kv("clarity", diamond.clarity.as_str());
    ctx.output.kv("cut", diamond.cut.as_str());
    ctx.output.kv("polish", diamond.polish.as_str());
    ctx.output.kv("symmetry", diamond.symmetry.as_str());
    ctx.output.kv("measurements", &diamond.measurements);
    ctx.output.kv("certification", diamond.certification.as_str());
    ctx.output.kv(
        "price",
        &diamond.price.display().unwrap_or_else(|| "on request".to_string()),
    );
    ctx.output.kv("stock", &stock_badge(diamond.in_stock));
    if diamond.featured {
        ctx.output.kv("featured", "yes");
    }
    ctx.output.kv("path", &diamond.path());

    Ok(())
}
