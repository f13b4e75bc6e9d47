//! Template engine abstraction and the built-in field template
//!
//! The rendering context only needs two capabilities from a template engine:
//! compile a format string, and execute the compiled template against one
//! record (or against the header row). [`FieldTemplateEngine`] is the default
//! implementation, supporting this grammar:
//!
//! ```text
//! {{.Field}}              accessor value
//! {{ json ARG }}          compact JSON of ARG
//! {{ jsonPretty ARG }}    indented JSON of ARG
//! {{ upper .Field }}      upper-cased accessor value
//! {{ lower .Field }}      lower-cased accessor value
//! ```
//!
//! where `ARG` is `.` (the whole record) or `.Field`. Field names are checked
//! against the view's fixed accessor set at compile time.

use std::io::Write;
use std::marker::PhantomData;

use crate::error::{ApictlError, Result};

use super::view::{field_index, HeaderRow, RecordView};

/// Compiles format strings for records of type `V`
pub trait TemplateEngine<V: RecordView> {
    type Template: CompiledTemplate<V>;

    /// Compile a template, failing on malformed syntax or unknown accessors
    fn compile(&self, text: &str) -> Result<Self::Template>;
}

/// A compiled per-record template
pub trait CompiledTemplate<V: RecordView> {
    /// Render one record to `out`, without a line terminator
    fn execute(&self, out: &mut dyn Write, record: &V) -> Result<()>;

    /// Render the header row to `out`, without a line terminator
    fn execute_header(&self, out: &mut dyn Write, header: &HeaderRow<'_>) -> Result<()>;
}

/// Built-in engine for the `{{.Field}}` template grammar
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldTemplateEngine;

impl<V: RecordView> TemplateEngine<V> for FieldTemplateEngine {
    type Template = FieldTemplate<V>;

    fn compile(&self, text: &str) -> Result<FieldTemplate<V>> {
        FieldTemplate::compile(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Func {
    Json,
    JsonPretty,
    Upper,
    Lower,
}

impl Func {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Func::Json),
            "jsonPretty" => Ok(Func::JsonPretty),
            "upper" => Ok(Func::Upper),
            "lower" => Ok(Func::Lower),
            other => Err(template_error(format!("function {:?} not defined", other))),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Func::Json => "json",
            Func::JsonPretty => "jsonPretty",
            Func::Upper => "upper",
            Func::Lower => "lower",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Dot,
    Field(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(usize),
    Call(Func, Arg),
}

/// Template compiled against the accessor set of `V`
#[derive(Debug, Clone)]
pub struct FieldTemplate<V> {
    segments: Vec<Segment>,
    _view: PhantomData<fn(&V)>,
}

impl<V: RecordView> FieldTemplate<V> {
    /// Parse `text`, resolving every field reference against `V::FIELDS`
    pub fn compile(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            push_text(&mut segments, &rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| template_error(format!("unclosed action in {:?}", text)))?;
            segments.push(Self::parse_action(after_open[..end].trim())?);
            rest = &after_open[end + 2..];
        }
        push_text(&mut segments, rest);

        Ok(Self {
            segments,
            _view: PhantomData,
        })
    }

    fn parse_action(action: &str) -> Result<Segment> {
        let words: Vec<&str> = action.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(template_error("missing value for command".to_string())),
            [arg] => match Self::parse_arg(arg)? {
                Arg::Field(index) => Ok(Segment::Field(index)),
                Arg::Dot => Err(template_error(
                    "\".\" must be passed to a function such as jsonPretty".to_string(),
                )),
            },
            [func, arg] => {
                let func = Func::parse(func)?;
                let arg = Self::parse_arg(arg)?;
                if matches!(func, Func::Upper | Func::Lower) && arg == Arg::Dot {
                    return Err(template_error(format!(
                        "{} expects a field, not \".\"",
                        func.name()
                    )));
                }
                Ok(Segment::Call(func, arg))
            }
            _ => Err(template_error(format!("unsupported action {:?}", action))),
        }
    }

    fn parse_arg(arg: &str) -> Result<Arg> {
        if arg == "." {
            return Ok(Arg::Dot);
        }
        let name = arg.strip_prefix('.').ok_or_else(|| {
            template_error(format!("expected \".\" or \".Field\", found {:?}", arg))
        })?;
        field_index::<V>(name).map(Arg::Field).ok_or_else(|| {
            template_error(format!(
                "can't evaluate field {} (available: {})",
                name,
                V::FIELDS.join(", ")
            ))
        })
    }

    /// Render the whole template to a string before anything reaches the sink
    fn render(&self, data: &dyn TemplateData) -> Result<String> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => rendered.push_str(text),
                Segment::Field(index) => rendered.push_str(data.field(*index)),
                Segment::Call(func, arg) => rendered.push_str(&call(*func, *arg, data)?),
            }
        }
        Ok(rendered)
    }
}

impl<V: RecordView> CompiledTemplate<V> for FieldTemplate<V> {
    fn execute(&self, out: &mut dyn Write, record: &V) -> Result<()> {
        let rendered = self.render(&RecordData(record))?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn execute_header(&self, out: &mut dyn Write, header: &HeaderRow<'_>) -> Result<()> {
        let rendered = self.render(header)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Literal text outside actions, including any stray `}}`, is copied as is
fn push_text(segments: &mut Vec<Segment>, literal: &str) {
    if !literal.is_empty() {
        segments.push(Segment::Text(literal.to_string()));
    }
}

/// Values a template can be executed against
trait TemplateData {
    fn field(&self, index: usize) -> &str;
    fn to_json(&self, pretty: bool) -> serde_json::Result<String>;
}

struct RecordData<'a, V>(&'a V);

impl<V: RecordView> TemplateData for RecordData<'_, V> {
    fn field(&self, index: usize) -> &str {
        self.0.field(index)
    }

    fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        to_json(self.0, pretty)
    }
}

impl TemplateData for HeaderRow<'_> {
    fn field(&self, index: usize) -> &str {
        self.label(index)
    }

    fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        to_json(self.headers(), pretty)
    }
}

fn call(func: Func, arg: Arg, data: &dyn TemplateData) -> Result<String> {
    let json = |pretty: bool| -> Result<String> {
        let result = match arg {
            Arg::Dot => data.to_json(pretty),
            Arg::Field(index) => to_json(data.field(index), pretty),
        };
        result.map_err(|e| template_error(format!("error calling {}: {}", func.name(), e)))
    };

    match func {
        Func::Json => json(false),
        Func::JsonPretty => json(true),
        Func::Upper => Ok(arg_text(arg, data).to_uppercase()),
        Func::Lower => Ok(arg_text(arg, data).to_lowercase()),
    }
}

fn arg_text(arg: Arg, data: &dyn TemplateData) -> &str {
    match arg {
        Arg::Field(index) => data.field(index),
        Arg::Dot => "",
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn template_error(message: String) -> ApictlError {
    ApictlError::Template(message)
}
