//! Collection renderer: one template execution per record

use std::io::Write;

use crate::error::Result;

use super::template::CompiledTemplate;
use super::view::RecordView;

/// Execute `template` once per record, in order, each followed by `\n`
///
/// The first template or write error aborts the pass and is returned
/// unchanged; later records are not attempted.
pub fn render_collection<V, T>(out: &mut dyn Write, template: &T, records: &[V]) -> Result<()>
where
    V: RecordView,
    T: CompiledTemplate<V> + ?Sized,
{
    for record in records {
        template.execute(out, record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApictlError;
    use crate::output::template::FieldTemplate;
    use crate::output::view::{serialize_view, HeaderRow};
    use serde::{Serialize, Serializer};
    use std::cell::Cell;

    #[derive(Debug)]
    struct Word(String);

    impl Serialize for Word {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serialize_view(self, serializer)
        }
    }

    impl RecordView for Word {
        const FIELDS: &'static [&'static str] = &["Text"];
        const DEFAULT_FORMAT: &'static str = "{{.Text}}";

        fn field(&self, index: usize) -> &str {
            match index {
                0 => &self.0,
                _ => "",
            }
        }
    }

    fn words(items: &[&str]) -> Vec<Word> {
        items.iter().map(|w| Word(w.to_string())).collect()
    }

    /// Fails on the n-th execution (0-based)
    struct FailAt {
        at: usize,
        calls: Cell<usize>,
    }

    impl CompiledTemplate<Word> for FailAt {
        fn execute(&self, out: &mut dyn Write, record: &Word) -> Result<()> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call == self.at {
                return Err(ApictlError::Template(format!("boom at {}", call)));
            }
            out.write_all(record.0.as_bytes())?;
            Ok(())
        }

        fn execute_header(&self, _out: &mut dyn Write, _header: &HeaderRow<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_collection_in_order() {
        let template = FieldTemplate::<Word>::compile("{{.Text}}").unwrap();
        let mut out = Vec::new();
        render_collection(&mut out, &template, &words(&["b", "a", "c"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b\na\nc\n");
    }

    #[test]
    fn test_render_collection_empty() {
        let template = FieldTemplate::<Word>::compile("{{.Text}}").unwrap();
        let mut out = Vec::new();
        render_collection(&mut out, &template, &words(&[])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_first_error_wins() {
        let template = FailAt {
            at: 1,
            calls: Cell::new(0),
        };
        let mut out = Vec::new();
        let err = render_collection(&mut out, &template, &words(&["one", "two", "three"]))
            .unwrap_err();

        assert_eq!(err.to_string(), "Template error: boom at 1");
        assert_eq!(String::from_utf8(out).unwrap(), "one\n");
        assert_eq!(template.calls.get(), 2);
    }
}
