//! Build messaging links.

use anyhow::{anyhow, Context as _, Result};
use jewel_catalog::prelude::*;
use jewel_messaging::Inquiry;
use serde::Serialize;

use super::LinkArgs;
use crate::context::Context;

#[derive(Serialize)]
struct LinkOutput {
    message: String,
    url: String,
}

/// Run the link command.
pub fn run(args: LinkArgs, ctx: &Context) -> Result<()> {
    let link = ctx
        .config
        .inquiry_link()
        .context("Messaging config is invalid")?;

    let inquiry = match &args.id {
        Some(id) => {
            let catalog = Catalog::builtin()?;
            let diamond = catalog
                .get(id)
                .ok_or_else(|| anyhow!("Diamond '{}' not found", id))?;
            Inquiry::for_product(diamond.name.clone(), diamond.id.as_str())
                .with_category(diamond.group.as_str())
                .with_optional_filters(args.filters.clone())
        }
        None => Inquiry::general(),
    };

    if args.id.is_none() && args.filters.is_some() {
        ctx.output.warn("--filters only applies to product links; building the general link");
    }

    let output = LinkOutput {
        message: link.message(&inquiry),
        url: link.url(&inquiry),
    };

    if ctx.output.is_json() {
        ctx.output.json(&output);
        return Ok(());
    }

    ctx.output.debug(&output.message);
    println!("{}", output.url);
    Ok(())
}
