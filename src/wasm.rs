//! WASM bindings for the browser presentation layer.
//!
//! This module exposes the overlay pipeline to JavaScript via wasm-bindgen.
//! Offsets are taken as UTF-16 code units, which is what `String.length`
//! counts on the JavaScript side.

use wasm_bindgen::prelude::*;

use crate::markup::render_html;
use crate::model::{OffsetUnit, SourceKind};
use crate::overlay::{Overlay, OverlayOptions};
use crate::source::article::Article;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn options(enabled: Vec<String>) -> Result<OverlayOptions, JsValue> {
    let kinds = enabled
        .iter()
        .map(|name| name.parse::<SourceKind>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| JsValue::from_str(&e))?;
    Ok(OverlayOptions::new()
        .with_enabled(kinds)
        .with_unit(OffsetUnit::Utf16))
}

fn parse(article_json: &str) -> Result<Article, JsValue> {
    Article::from_json(article_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render an article's annotated paragraphs as HTML.
///
/// `enabled` lists the source kinds to show (`"entity"`, `"adjective"`,
/// `"sentiment"`, `"citation"`).
#[wasm_bindgen]
pub fn render_article_html(article_json: &str, enabled: Vec<String>) -> Result<String, JsValue> {
    let article = parse(article_json)?;
    let options = options(enabled)?;
    let sources = article.sources();
    let overlay = Overlay::build(&article.body, &sources, &options);
    Ok(render_html(&overlay.paragraphs()))
}

/// Render an article's paragraphs as a JSON render tree.
#[wasm_bindgen]
pub fn render_article_tree(article_json: &str, enabled: Vec<String>) -> Result<String, JsValue> {
    let article = parse(article_json)?;
    let options = options(enabled)?;
    let sources = article.sources();
    let overlay = Overlay::build(&article.body, &sources, &options);
    serde_json::to_string(&overlay.paragraphs()).map_err(|e| JsValue::from_str(&e.to_string()))
}
