#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::{info, error};
use poem::{http::StatusCode, web::Html};
use serde::Serialize;
use tera::{Context, Tera};

use crate::utils::{errors::Errors, promo_utils};

// Page templates are the .html files directly in the templates directory.
const TEMPLATE_EXTENSION: &str = ".html";
const RENDER_ERROR_BODY: &str = "Internal Server Error";

// ---------------------------------------------------------------------------
// load_templates:
// ---------------------------------------------------------------------------
/** Parse every page template in the directory, each registered under its file
 * name (e.g. home.html).  It's all or nothing: an empty directory or a single
 * template that doesn't parse fails the whole load.
 */
pub fn load_templates(dir: &str) -> Result<Tera> {
    let files = promo_utils::get_files_in_dir(dir, TEMPLATE_EXTENSION)?;
    if files.is_empty() {
        return Err(anyhow!(Errors::NoTemplates(dir.to_string())));
    }

    // Pair each path with its registration name.
    let mut named: Vec<(PathBuf, Option<String>)> = Vec::with_capacity(files.len());
    for f in files {
        let name = f.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string());
        named.push((f, name));
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![TEMPLATE_EXTENSION]);
    if let Err(e) = tera.add_template_files(named) {
        return Err(anyhow!(Errors::TemplateLoad(dir.to_string(), error_chain(&e))));
    }

    info!("Loaded page templates from {}: {:?}", dir, tera.get_template_names().collect::<Vec<_>>());
    Ok(tera)
}

// ---------------------------------------------------------------------------
// render_page:
// ---------------------------------------------------------------------------
/** Render a template that takes no data. */
pub fn render_page(tera: &Tera, name: &str) -> poem::Result<Html<String>> {
    render(tera, name, &Context::new())
}

// ---------------------------------------------------------------------------
// render_page_with:
// ---------------------------------------------------------------------------
/** Render a template whose context is built from the fields of data. */
pub fn render_page_with<T: Serialize>(tera: &Tera, name: &str, data: &T) -> poem::Result<Html<String>> {
    match Context::from_serialize(data) {
        Ok(ctx) => render(tera, name, &ctx),
        Err(e) => Err(render_failure(name, &e)),
    }
}

// ***************************************************************************
// PRIVATE FUNCTIONS
// ***************************************************************************
fn render(tera: &Tera, name: &str, ctx: &Context) -> poem::Result<Html<String>> {
    // The page is rendered into memory, so a failure never leaves
    // a partial body on the wire.
    tera.render(name, ctx)
        .map(Html)
        .map_err(|e| render_failure(name, &e))
}

// Log the failure and turn it into a bare 500.
fn render_failure(name: &str, e: &tera::Error) -> poem::Error {
    error!("{}", Errors::TemplateRender(name.to_string(), error_chain(e)));
    poem::Error::from_string(RENDER_ERROR_BODY, StatusCode::INTERNAL_SERVER_ERROR)
}

// Tera puts the useful detail in the source chain.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        s += ": ";
        s += &cause.to_string();
        source = cause.source();
    }
    s
}
