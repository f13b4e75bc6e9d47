//! Output rendering module
//!
//! Renders listed records through a format string: aligned tables, plain
//! per-record templates, or a JSON array.

mod apis;
mod context;
mod renderer;
mod table;
mod template;
mod view;

pub use apis::{api_table_headers, output_apis, write_apis, ApiView, DEFAULT_API_TABLE_FORMAT};
pub use context::{render, FormatSpec, RenderContext, RenderMode};
pub use renderer::render_collection;
pub use table::write_aligned;
pub use template::{CompiledTemplate, FieldTemplate, FieldTemplateEngine, TemplateEngine};
pub use view::{field_index, serialize_view, HeaderMap, HeaderRow, RecordView};
