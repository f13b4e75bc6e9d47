//! Rendering context: format selection, header emission and dispatch

use std::io::Write;

use crate::error::{ApictlError, Result};

use super::renderer::render_collection;
use super::table::write_aligned;
use super::template::{CompiledTemplate, FieldTemplateEngine, TemplateEngine};
use super::view::{HeaderMap, HeaderRow, RecordView};

/// Prefix selecting table mode
pub const TABLE_PREFIX: &str = "table ";

/// Format value selecting the record type's default table
pub const TABLE_KEY: &str = "table";

/// Format value selecting JSON output of the whole collection
pub const JSON_KEY: &str = "json";

/// Template text plus the field-to-header mapping for one render pass
#[derive(Debug, Clone, Default)]
pub struct FormatSpec {
    pub template: String,
    pub headers: HeaderMap,
}

impl FormatSpec {
    pub fn new(template: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            template: template.into(),
            headers,
        }
    }
}

/// How a format string is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Header line, then one line per record
    Table(String),
    /// One line per record, no header
    Plain(String),
    /// Pretty JSON array of every record
    Json,
}

impl RenderMode {
    /// Select the mode for `format`, falling back to `default_format` when empty
    pub fn select(format: &str, default_format: &str) -> Self {
        let format = match format {
            "" | TABLE_KEY => default_format,
            other => other,
        };
        if format == JSON_KEY {
            return RenderMode::Json;
        }
        match format.strip_prefix(TABLE_PREFIX) {
            Some(template) => RenderMode::Table(unescape(template)),
            None => RenderMode::Plain(unescape(format)),
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, RenderMode::Table(_))
    }
}

/// Turn literal `\t` and `\n` sequences into tab and newline
fn unescape(template: &str) -> String {
    template.replace("\\t", "\t").replace("\\n", "\n")
}

/// Renders a collection of views to one sink under one [`FormatSpec`]
pub struct RenderContext<W, E = FieldTemplateEngine> {
    out: W,
    spec: FormatSpec,
    engine: E,
    align: bool,
}

impl<W: Write> RenderContext<W> {
    /// Context using the built-in template engine
    pub fn new(out: W, spec: FormatSpec) -> Self {
        Self::with_engine(out, spec, FieldTemplateEngine)
    }
}

impl<W: Write, E> RenderContext<W, E> {
    /// Context using an injected template engine
    pub fn with_engine(out: W, spec: FormatSpec, engine: E) -> Self {
        Self {
            out,
            spec,
            engine,
            align: false,
        }
    }

    /// Space-align table mode output instead of writing raw tabs
    ///
    /// Aligned output is buffered, so a failing render writes nothing.
    pub fn aligned(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Consume the context, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render `records` in the mode selected by the format string
    ///
    /// Template compilation happens before any output is written. In table
    /// mode the header line is always written, even for zero records.
    pub fn render<V>(&mut self, records: &[V]) -> Result<()>
    where
        V: RecordView,
        E: TemplateEngine<V>,
    {
        match RenderMode::select(&self.spec.template, V::DEFAULT_FORMAT) {
            RenderMode::Json => {
                let json = serde_json::to_string_pretty(records)
                    .map_err(|e| ApictlError::Template(e.to_string()))?;
                writeln!(self.out, "{}", json)?;
            }
            RenderMode::Table(text) => {
                let template = self.engine.compile(&text)?;
                if self.align {
                    let mut buffer = Vec::new();
                    write_table(&mut buffer, &template, &self.spec.headers, records)?;
                    write_aligned(&mut self.out, &String::from_utf8_lossy(&buffer))?;
                } else {
                    write_table(&mut self.out, &template, &self.spec.headers, records)?;
                }
            }
            RenderMode::Plain(text) => {
                let template = self.engine.compile(&text)?;
                render_collection(&mut self.out, &template, records)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn write_table<V, T>(
    out: &mut dyn Write,
    template: &T,
    headers: &HeaderMap,
    records: &[V],
) -> Result<()>
where
    V: RecordView,
    T: CompiledTemplate<V>,
{
    template.execute_header(out, &HeaderRow::new::<V>(headers))?;
    out.write_all(b"\n")?;
    render_collection(out, template, records)
}

/// Render `records` to `out` with the built-in engine and raw tab output
pub fn render<W: Write, V: RecordView>(out: W, records: &[V], spec: FormatSpec) -> Result<()> {
    RenderContext::new(out, spec).render(records)
}
