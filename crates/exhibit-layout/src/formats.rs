//! Per-column format assignment for tables

use exhibit_core::FormatSpec;
use serde_json::Value as Json;

use crate::error::{LayoutError, LayoutResult};
use crate::frame::Frame;

/// How a table's data columns are formatted
///
/// Every shape starts from the dtype default of each column; a caller
/// supplied spec replaces the default spec of the columns it applies to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Formats {
    /// Dtype defaults only
    #[default]
    Inherit,
    /// One number format for every column
    NumFormat(String),
    /// One spec broadcast to every column
    Uniform(FormatSpec),
    /// Specs zipped with the columns in order
    Positional(Vec<FormatSpec>),
    /// Specs for named columns
    Columns(Vec<(String, FormatSpec)>),
}

impl Formats {
    /// Interpret a loosely typed JSON `formats` argument against a frame
    ///
    /// * a string is a number format for every column;
    /// * a list is zipped with the columns (strings become `num_format`);
    /// * an object whose keys are all column names maps columns to specs;
    /// * any other object is a single spec broadcast to every column.
    pub fn from_json(value: &Json, frame: &Frame) -> LayoutResult<Formats> {
        match value {
            Json::Null => Ok(Formats::Inherit),
            Json::String(code) => Ok(Formats::NumFormat(code.clone())),
            Json::Array(items) => items
                .iter()
                .map(spec_from_json)
                .collect::<LayoutResult<Vec<_>>>()
                .map(Formats::Positional),
            Json::Object(map) if map.is_empty() => Ok(Formats::Inherit),
            Json::Object(map) => {
                let known = map.keys().filter(|k| frame.position(k).is_some()).count();
                if known == 0 {
                    return spec_from_json(value).map(Formats::Uniform);
                }
                if let Some(unknown) = map.keys().find(|k| frame.position(k).is_none()) {
                    return Err(LayoutError::UnknownColumn(unknown.clone()));
                }
                map.iter()
                    .map(|(k, v)| spec_from_json(v).map(|spec| (k.clone(), spec)))
                    .collect::<LayoutResult<Vec<_>>>()
                    .map(Formats::Columns)
            }
            other => Err(LayoutError::UnrecognizedFormat(other.to_string())),
        }
    }

    /// Resolve one spec per column of `frame`, in column order
    pub fn resolve(&self, frame: &Frame) -> LayoutResult<Vec<FormatSpec>> {
        let mut specs: Vec<FormatSpec> = frame
            .columns()
            .iter()
            .map(|c| c.dtype().default_format())
            .collect();

        match self {
            Formats::Inherit => {}
            Formats::NumFormat(code) => {
                specs.fill(FormatSpec::num_format(code.as_str()));
            }
            Formats::Uniform(spec) => specs.fill(spec.clone()),
            Formats::Positional(list) => {
                for (slot, spec) in specs.iter_mut().zip(list) {
                    *slot = spec.clone();
                }
            }
            Formats::Columns(map) => {
                for (name, spec) in map {
                    let pos = frame
                        .position(name)
                        .ok_or_else(|| LayoutError::UnknownColumn(name.clone()))?;
                    specs[pos] = spec.clone();
                }
            }
        }
        Ok(specs)
    }
}

impl From<FormatSpec> for Formats {
    fn from(spec: FormatSpec) -> Self {
        Formats::Uniform(spec)
    }
}

impl From<&str> for Formats {
    fn from(code: &str) -> Self {
        Formats::NumFormat(code.to_string())
    }
}

impl From<Vec<FormatSpec>> for Formats {
    fn from(list: Vec<FormatSpec>) -> Self {
        Formats::Positional(list)
    }
}

/// A spec from a JSON object, or a number format from a JSON string
pub(crate) fn spec_from_json(value: &Json) -> LayoutResult<FormatSpec> {
    match value {
        Json::String(code) => Ok(FormatSpec::num_format(code.as_str())),
        Json::Object(_) => serde_json::from_value(value.clone())
            .map_err(|e| LayoutError::UnrecognizedFormat(format!("{} ({})", value, e))),
        other => Err(LayoutError::UnrecognizedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Series;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn frame() -> Frame {
        Frame::new(vec![
            Series::new("Paid", [1.5, 2.5]),
            Series::new("Count", [1i64, 2]),
            Series::new("LOB", ["Auto", "Home"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_dtype_defaults() {
        let specs = Formats::Inherit.resolve(&frame()).unwrap();
        assert_eq!(
            specs,
            vec![
                FormatSpec::num_format("#,0.00"),
                FormatSpec::num_format("#,0"),
                FormatSpec::new().with("align", "left"),
            ]
        );
    }

    #[test]
    fn test_num_format_applies_to_all() {
        let specs = Formats::from("0.0%").resolve(&frame()).unwrap();
        assert!(specs.iter().all(|s| *s == FormatSpec::num_format("0.0%")));
    }

    #[test]
    fn test_positional_is_zipped() {
        let specs = Formats::Positional(vec![FormatSpec::num_format("0")])
            .resolve(&frame())
            .unwrap();
        assert_eq!(specs[0], FormatSpec::num_format("0"));
        assert_eq!(specs[1], FormatSpec::num_format("#,0"));
    }

    #[test]
    fn test_column_spec_replaces_default() {
        let formats = Formats::Columns(vec![(
            "Paid".to_string(),
            FormatSpec::new().with("bold", true),
        )]);
        let specs = formats.resolve(&frame()).unwrap();
        assert_eq!(specs[0], FormatSpec::new().with("bold", true));

        let unknown = Formats::Columns(vec![("Nope".to_string(), FormatSpec::new())]);
        assert!(matches!(
            unknown.resolve(&frame()),
            Err(LayoutError::UnknownColumn(c)) if c == "Nope"
        ));
    }

    #[test]
    fn test_from_json_shapes() {
        let f = frame();
        assert_eq!(
            Formats::from_json(&json!("0%"), &f).unwrap(),
            Formats::NumFormat("0%".into())
        );
        assert_eq!(
            Formats::from_json(&json!({"num_format": "0%"}), &f).unwrap(),
            Formats::Uniform(FormatSpec::num_format("0%"))
        );
        assert_eq!(
            Formats::from_json(&json!(["0%", {"bold": true}]), &f).unwrap(),
            Formats::Positional(vec![
                FormatSpec::num_format("0%"),
                FormatSpec::new().with("bold", true)
            ])
        );
        assert_eq!(
            Formats::from_json(&json!({"Paid": "#,0", "LOB": {"align": "right"}}), &f).unwrap(),
            Formats::Columns(vec![
                ("LOB".to_string(), FormatSpec::new().with("align", "right")),
                ("Paid".to_string(), FormatSpec::num_format("#,0")),
            ])
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        let f = frame();
        assert!(matches!(
            Formats::from_json(&json!(12), &f),
            Err(LayoutError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            Formats::from_json(&json!([true]), &f),
            Err(LayoutError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            Formats::from_json(&json!({"Paid": "0", "Incurred": "0"}), &f),
            Err(LayoutError::UnknownColumn(c)) if c == "Incurred"
        ));
        assert!(matches!(
            Formats::from_json(&json!({"Paid": 3}), &f),
            Err(LayoutError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_json_value_types() {
        let spec = spec_from_json(&json!({"bold": true, "bottom": 1, "font_size": 10.5})).unwrap();
        assert_eq!(
            spec,
            FormatSpec::new()
                .with("bold", true)
                .with("bottom", 1)
                .with("font_size", 10.5)
        );
    }
}
