//! API output: record adapter, default table format and header labels

use serde::{Serialize, Serializer};
use std::io;

use super::context::{FormatSpec, RenderContext};
use super::view::{serialize_view, HeaderMap, RecordView};
use crate::apim::apis::Api;
use crate::error::Result;

const API_ID_HEADER: &str = "ID";
const API_NAME_HEADER: &str = "NAME";
const API_CONTEXT_HEADER: &str = "CONTEXT";
const API_VERSION_HEADER: &str = "VERSION";
const API_PROVIDER_HEADER: &str = "PROVIDER";
const API_STATUS_HEADER: &str = "STATUS";

/// Default table for `list apis`
pub const DEFAULT_API_TABLE_FORMAT: &str =
    "table {{.Id}}\t{{.Name}}\t{{.Version}}\t{{.Context}}\t{{.Status}}\t{{.Provider}}";

/// Read-only view of one API for templates and JSON output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiView {
    id: String,
    name: String,
    context: String,
    version: String,
    provider: String,
    status: String,
}

impl From<&Api> for ApiView {
    fn from(api: &Api) -> Self {
        Self {
            id: api.id().to_string(),
            name: api.name().to_string(),
            context: api.context().to_string(),
            version: api.version().to_string(),
            provider: api.provider().to_string(),
            status: api.status().to_string(),
        }
    }
}

impl ApiView {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl RecordView for ApiView {
    const FIELDS: &'static [&'static str] =
        &["Id", "Name", "Context", "Version", "Provider", "Status"];
    const DEFAULT_FORMAT: &'static str = DEFAULT_API_TABLE_FORMAT;

    fn field(&self, index: usize) -> &str {
        match index {
            0 => self.id(),
            1 => self.name(),
            2 => self.context(),
            3 => self.version(),
            4 => self.provider(),
            5 => self.status(),
            _ => "",
        }
    }
}

/// JSON goes through the accessors, not the struct fields
impl Serialize for ApiView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_view(self, serializer)
    }
}

/// Header labels for API tables
pub fn api_table_headers() -> HeaderMap {
    HeaderMap::new()
        .with("Id", API_ID_HEADER)
        .with("Name", API_NAME_HEADER)
        .with("Context", API_CONTEXT_HEADER)
        .with("Version", API_VERSION_HEADER)
        .with("Status", API_STATUS_HEADER)
        .with("Provider", API_PROVIDER_HEADER)
}

/// Render APIs to `out` under `format`
pub fn write_apis<W: io::Write>(out: W, apis: &[Api], format: &str, align: bool) -> Result<()> {
    let views: Vec<ApiView> = apis.iter().map(ApiView::from).collect();
    let spec = FormatSpec::new(format, api_table_headers());
    RenderContext::new(out, spec).aligned(align).render(&views)
}

/// Render APIs to stdout under `format`
pub fn output_apis(apis: &[Api], format: &str, align: bool) -> Result<()> {
    write_apis(io::stdout().lock(), apis, format, align)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_api(id: &str, name: &str, version: &str, context: &str, status: &str) -> Api {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "version": version,
            "context": context,
            "status": status,
            "provider": "admin"
        }))
        .unwrap()
    }

    fn sample_apis() -> Vec<Api> {
        vec![
            create_test_api("1", "PizzaAPI", "1.0.0", "/pizza", "PUBLISHED"),
            create_test_api("2", "PastaAPI", "2.0.0", "/pasta", "CREATED"),
        ]
    }

    fn render(apis: &[Api], format: &str) -> String {
        let mut out = Vec::new();
        write_apis(&mut out, apis, format, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_api_view_projects_every_field() {
        let api = create_test_api("1", "PizzaAPI", "1.0.0", "/pizza", "PUBLISHED");
        let view = ApiView::from(&api);
        assert_eq!(view.id(), api.id());
        assert_eq!(view.name(), api.name());
        assert_eq!(view.context(), api.context());
        assert_eq!(view.version(), api.version());
        assert_eq!(view.provider(), api.provider());
        assert_eq!(view.status(), api.status());
    }

    #[test]
    fn test_api_view_missing_fields_are_empty() {
        let view = ApiView::from(&Api::default());
        for index in 0..ApiView::FIELDS.len() {
            assert_eq!(view.field(index), "");
        }
    }

    #[test]
    fn test_api_view_json_keys_are_accessor_names() {
        let api = create_test_api("1", "PizzaAPI", "1.0.0", "/pizza", "PUBLISHED");
        let json = serde_json::to_string(&ApiView::from(&api)).unwrap();
        assert_eq!(
            json,
            r#"{"Id":"1","Name":"PizzaAPI","Context":"/pizza","Version":"1.0.0","Provider":"admin","Status":"PUBLISHED"}"#
        );
    }

    #[test]
    fn test_default_format_output() {
        let out = render(&sample_apis(), "");
        assert_eq!(
            out,
            "ID\tNAME\tVERSION\tCONTEXT\tSTATUS\tPROVIDER\n\
             1\tPizzaAPI\t1.0.0\t/pizza\tPUBLISHED\tadmin\n\
             2\tPastaAPI\t2.0.0\t/pasta\tCREATED\tadmin\n"
        );
    }

    #[test]
    fn test_custom_table_format() {
        let out = render(&sample_apis(), "table {{.Name}}\t{{.Status}}");
        assert_eq!(
            out,
            "NAME\tSTATUS\nPizzaAPI\tPUBLISHED\nPastaAPI\tCREATED\n"
        );
    }

    #[test]
    fn test_json_pretty_single_api() {
        let apis = vec![create_test_api("1", "PizzaAPI", "1.0.0", "/pizza", "PUBLISHED")];
        let out = render(&apis, "{{ jsonPretty . }}");

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        let mut expected = vec!["Id", "Name", "Context", "Version", "Provider", "Status"];
        keys.sort();
        expected.sort();
        assert_eq!(keys, expected);
        assert!(out.starts_with("{\n  \"Id\": \"1\",\n  \"Name\": \"PizzaAPI\""));
    }

    #[test]
    fn test_table_and_json_agree() {
        let apis = sample_apis();
        let table = render(&apis, "");
        let json = render(&apis, "json");
        let values: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

        let headers: Vec<&str> = table.lines().next().unwrap().split('\t').collect();
        let header_to_field = api_table_headers();
        for (line, value) in table.lines().skip(1).zip(values.iter()) {
            for (cell, header) in line.split('\t').zip(headers.iter()) {
                let field = header_to_field
                    .iter()
                    .find(|(_, label)| label == header)
                    .map(|(field, _)| field)
                    .unwrap();
                assert_eq!(value[field].as_str(), Some(cell));
            }
        }
    }

    #[test]
    fn test_empty_list_prints_header_only() {
        let out = render(&[], "");
        assert_eq!(out, "ID\tNAME\tVERSION\tCONTEXT\tSTATUS\tPROVIDER\n");
    }

    #[test]
    fn test_unknown_accessor_is_template_error() {
        let mut out = Vec::new();
        let err = write_apis(&mut out, &sample_apis(), "table {{.Owner}}", false).unwrap_err();
        assert!(err.to_string().contains("Owner"));
        assert!(out.is_empty());
    }
}
