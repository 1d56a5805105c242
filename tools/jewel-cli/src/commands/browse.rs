//! Run the listing engine from the command line.

use anyhow::{anyhow, bail, Result};
use jewel_catalog::prelude::*;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{pad, stock_badge};

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let state = filter_state(&args)?;
    let catalog = Catalog::builtin()?;
    let view = filter_catalog(&catalog, &state);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} {} diamonds",
        view.len(),
        view.group_total,
        state.group
    ));
    if let Some(summary) = state.summary() {
        ctx.output.kv("filters", &summary);
    }
    ctx.output.kv("sort", state.sort.display_name());

    if view.is_empty() {
        ctx.output.info("No diamonds match these filters.");
        return Ok(());
    }

    let widths = [10, 10, 7, 14, 6, 10, 12];
    println!();
    ctx.output.table_row(
        &["ID", "SHAPE", "CARAT", "COLOR", "CLAR.", "PRICE", "STOCK"],
        &widths,
    );
    for diamond in view.iter() {
        let carat = diamond.carat.to_string();
        let price = diamond.price.display().unwrap_or_else(|| "on request".to_string());
        let stock = pad(&stock_badge(diamond.in_stock), widths[6]);
        ctx.output.table_row(
            &[
                diamond.id.as_str(),
                diamond.shape.as_str(),
                &carat,
                diamond.color.as_str(),
                diamond.clarity.as_str(),
                &price,
                &stock,
            ],
            &widths,
        );
    }

    Ok(())
}

/// Build a filter state from the flags. Unlike query strings, unknown
/// values are errors here.
fn filter_state(args: &BrowseArgs) -> Result<FilterState> {
    let group = Group::parse(&args.group).ok_or_else(|| {
        anyhow!(
            "Unknown group '{}' (expected one of: {})",
            args.group,
            Group::ALL.iter().map(|g| g.slug()).collect::<Vec<_>>().join(", ")
        )
    })?;
    let mut state = FilterState::new(group);

    let facets = [
        (FacetKind::Shape, &args.shape),
        (FacetKind::Color, &args.color),
        (FacetKind::Clarity, &args.clarity),
        (FacetKind::Cut, &args.cut),
        (FacetKind::Certification, &args.cert),
    ];
    for (kind, values) in facets {
        for value in values {
            if state.is_selected(kind, value) {
                continue;
            }
            if !state.toggle_facet(kind, value) {
                bail!("Unknown {} '{}' for the {} group", kind.param(), value, group);
            }
        }
    }

    let carat = |value: &Option<String>, default: Carat| -> Result<Carat> {
        match value {
            Some(v) => Carat::parse(v).ok_or_else(|| anyhow!("Invalid carat weight '{}'", v)),
            None => Ok(default),
        }
    };
    state.set_carat_range(CaratRange::new(
        carat(&args.carat_min, Carat::MIN_FILTER)?,
        carat(&args.carat_max, Carat::MAX_FILTER)?,
    ));
    state.set_in_stock_only(args.in_stock);

    let sort = SortOption::parse(&args.sort).ok_or_else(|| anyhow!("Unknown sort '{}'", args.sort))?;
    state.set_sort(sort);

    Ok(state)
}
