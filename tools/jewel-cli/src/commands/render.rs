//! Render a page through the site handler.

use anyhow::{bail, Result};
use jewel_i18n::Language;
use jewel_site::{Site, SiteRequest};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let site = Site::builtin(ctx.config.clone())?;

    let cookie = match &args.lang {
        Some(code) => match Language::parse(code) {
            Some(language) => Some(format!("language={}", language.code())),
            None => bail!("Unsupported language '{}'", code),
        },
        None => None,
    };

    let mut request = SiteRequest::get(&args.path);
    if let Some(cookie) = &cookie {
        request = request.with_cookie(cookie);
    }
    let response = site.handle(&request);
    ctx.output.debug(&format!("{} {}", response.status, args.path));

    let Some(page) = response.page_body() else {
        for (name, value) in &response.headers {
            ctx.output.kv(name.as_str(), value);
        }
        bail!("No page body ({})", response.status);
    };

    if args.sections {
        for name in page.section_names() {
            ctx.output.list_item(name);
        }
    } else {
        println!("{}", page.render());
    }

    if !response.status.is_success() {
        ctx.output.warn(&format!("Status {}", response.status));
    }
    Ok(())
}
