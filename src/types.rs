use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::pattern::NamePattern;

/// On-disk shape of `info.json`. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawManifest {
    pub(crate) name_pattern: String,
    pub(crate) arguments: IndexMap<String, RawArgument>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArgument {
    pub(crate) values: Vec<serde_json::Value>,
}

/// One scalar value a parameter can take.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParamValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl ParamValue {
    /// Returns `None` for `null`, arrays and objects.
    pub(crate) fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(ParamValue::Text(s)),
            serde_json::Value::Number(n) => Some(ParamValue::Number(n)),
            serde_json::Value::Bool(b) => Some(ParamValue::Bool(b)),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }
}

/// Values render the way the sweep tools name their files: `True`/`False`
/// for booleans and Python `repr` rules for floats.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => f.write_str(&float_repr(x)),
                _ => write!(f, "{n}"),
            },
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// Shortest round-trip digits; scientific with a signed two-digit exponent
/// when the decimal exponent is below -4 or at least 16, otherwise fixed
/// with a trailing `.0` on whole values.
fn float_repr(x: f64) -> String {
    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let fixed = x.to_string();
        if fixed.contains('.') { fixed } else { format!("{fixed}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Parameter {
    pub(crate) name: String,
    pub(crate) values: Vec<ParamValue>,
}

/// Validated manifest. Parameters keep the order of `arguments`.
#[derive(Debug, Clone)]
pub(crate) struct Manifest {
    pub(crate) name_pattern: NamePattern,
    pub(crate) parameters: Vec<Parameter>,
}

impl Manifest {
    pub(crate) fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Number of combinations in the full product, saturating at `usize::MAX`.
    pub(crate) fn combination_count(&self) -> usize {
        crate::combinations::enumerate(self).len()
    }
}

/// One value assignment per parameter, in manifest order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Combination<'a> {
    pub(crate) entries: Vec<(&'a str, &'a ParamValue)>,
}

impl<'a> Combination<'a> {
    pub(crate) fn get(&self, name: &str) -> Option<&'a ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// A combination whose image was found, plus the name it was copied to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutputRow<'a> {
    pub(crate) combination: Combination<'a>,
    pub(crate) file: String,
}

impl OutputRow<'_> {
    /// Cell values in column order: parameters, then `FILE`.
    pub(crate) fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self
            .combination
            .entries
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        fields.push(self.file.clone());
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    pub(crate) output_dir: PathBuf,
    pub(crate) csv_path: PathBuf,
    pub(crate) visited: usize,
    pub(crate) copied: usize,
    pub(crate) skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_display_forms() {
        let text = ParamValue::from_json(json!("red")).unwrap();
        let int = ParamValue::from_json(json!(3)).unwrap();
        let float = ParamValue::from_json(json!(0.5)).unwrap();
        let whole_float = ParamValue::from_json(json!(1.0)).unwrap();
        let flag = ParamValue::from_json(json!(false)).unwrap();
        assert_eq!(text.to_string(), "red");
        assert_eq!(int.to_string(), "3");
        assert_eq!(float.to_string(), "0.5");
        assert_eq!(whole_float.to_string(), "1.0");
        assert_eq!(flag.to_string(), "False");
    }

    #[test]
    fn scalars_match_sweep_file_names() {
        let render = |v: serde_json::Value| ParamValue::from_json(v).unwrap().to_string();
        assert_eq!(render(json!(true)), "True");
        assert_eq!(render(json!(1e-05)), "1e-05");
        assert_eq!(render(json!(1e20)), "1e+20");
        assert_eq!(render(json!(-2.5e-7)), "-2.5e-07");
        assert_eq!(render(json!(1.5e300)), "1.5e+300");
        assert_eq!(render(json!(1e15)), "1000000000000000.0");
        assert_eq!(render(json!(1e16)), "1e+16");
        assert_eq!(render(json!(0.0001)), "0.0001");
        assert_eq!(render(json!(-0.0)), "-0.0");
        assert_eq!(render(json!(12345.678)), "12345.678");
        assert_eq!(render(json!(-7)), "-7");
    }

    #[test]
    fn non_scalars_rejected() {
        assert!(ParamValue::from_json(json!(null)).is_none());
        assert!(ParamValue::from_json(json!([1, 2])).is_none());
        assert!(ParamValue::from_json(json!({"a": 1})).is_none());
    }

    #[test]
    fn output_row_fields_end_with_file() {
        let red = ParamValue::Text("red".to_string());
        let small = ParamValue::Text("small".to_string());
        let row = OutputRow {
            combination: Combination {
                entries: vec![("color", &red), ("size", &small)],
            },
            file: "1.png".to_string(),
        };
        assert_eq!(row.fields(), vec!["red", "small", "1.png"]);
        assert_eq!(row.combination.get("size"), Some(&small));
        assert_eq!(row.combination.get("shape"), None);
    }
}
