//! Markup generation from paragraph blocks.
//!
//! - `escape`: pure escaping for element content and attribute values
//! - `html`: `<p>` per paragraph, `<mark>` per annotation, nested as the
//!   render tree nests
//!
//! Each `<mark>` carries the span's display class, its id in `data-span`
//! (so tooltips can be correlated back to annotator metadata) and a `title`
//! taken from the label, or the source kind when there is no label.

mod escape;
mod html;

pub use escape::{escape_attribute, escape_html};
pub use html::render_html;
