//! Validate the catalog, string tables and site config.

use anyhow::{bail, Context as _, Result};
use jewel_catalog::prelude::*;
use jewel_i18n::{Language, StringTable};
use serde::Serialize;

use super::CheckArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CheckReport {
    diamonds: usize,
    groups: Vec<GroupCount>,
    featured: usize,
    missing_strings: Vec<MissingStrings>,
    placeholders: Vec<&'static str>,
}

#[derive(Serialize)]
struct GroupCount {
    group: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct MissingStrings {
    language: &'static str,
    keys: Vec<String>,
}

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Checking storefront");

    let catalog = Catalog::builtin().context("Embedded catalog failed validation")?;
    ctx.output.success(&format!("Catalog: {} diamonds", catalog.len()));

    let groups: Vec<GroupCount> = Group::ALL
        .iter()
        .map(|group| GroupCount {
            group: group.as_str(),
            count: catalog.in_group(*group).count(),
        })
        .collect();
    for entry in &groups {
        ctx.output.kv(entry.group, &entry.count.to_string());
    }
    let featured = catalog.featured().count();
    ctx.output.kv("featured", &featured.to_string());

    let missing_strings = missing_translations()?;
    if missing_strings.is_empty() {
        ctx.output.success("String tables: every language covers the base table");
    }
    for entry in &missing_strings {
        ctx.output.warn(&format!(
            "{}: {} keys fall back to {}",
            entry.language,
            entry.keys.len(),
            Language::BASE.code()
        ));
        for key in &entry.keys {
            ctx.output.debug(key);
        }
    }

    ctx.config
        .inquiry_link()
        .context("Messaging config is invalid")?;
    let placeholders = ctx.config.unresolved_placeholders();
    if placeholders.is_empty() {
        ctx.output.success("Config: no placeholders left");
    } else {
        ctx.output.warn(&format!("Config: {} placeholder values", placeholders.len()));
        for field in &placeholders {
            ctx.output.list_item(field);
        }
    }

    let strict_failure = args.strict && !placeholders.is_empty();

    if ctx.output.is_json() {
        ctx.output.json(&CheckReport {
            diamonds: catalog.len(),
            groups,
            featured,
            missing_strings,
            placeholders,
        });
    }

    if strict_failure {
        bail!("Placeholder values must be replaced before launch");
    }
    Ok(())
}

/// Keys present in the base table but absent from another language.
fn missing_translations() -> Result<Vec<MissingStrings>> {
    let base = StringTable::builtin(Language::BASE).context("Base string table is invalid")?;

    let mut report = Vec::new();
    for language in Language::ALL.iter().filter(|l| **l != Language::BASE) {
        let table = StringTable::builtin(*language)
            .with_context(|| format!("String table for {} is invalid", language.code()))?;
        let keys: Vec<String> = base
            .keys()
            .filter(|key| table.get(key).is_none())
            .map(str::to_string)
            .collect();
        if !keys.is_empty() {
            report.push(MissingStrings {
                language: language.code(),
                keys,
            });
        }
    }
    Ok(report)
}
