//! Conversion of item documents stored in files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde_json::Value;
use tracing::debug;

use mcitem::{ItemCodec, ItemError, ItemStack};

use crate::config;


/// Options of a conversion, usually built from the environment.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Pretty print written documents.
    pub pretty: bool,
    /// Only validate, never write.
    pub dry_run: bool,
    /// Write next to the original file with this extension instead of overwriting.
    pub suffix: Option<String>,
}

impl Options {

    /// Read the options from the environment configuration.
    pub fn from_env() -> Self {
        Self {
            pretty: config::pretty(),
            dry_run: config::dry_run(),
            suffix: config::suffix().map(str::to_string),
        }
    }

}


/// The result of a successful file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Number of items in the document.
    pub items: usize,
    /// Number of items that had a legacy numeric id.
    pub upgraded: usize,
    /// The file written, none on dry runs.
    pub output: Option<PathBuf>,
}


/// Convert a single document: upgrade every legacy id, check that every item decodes
/// and write the upgraded document back. Nothing is written if any item fails.
pub fn convert_file(codec: &ItemCodec, path: &Path, options: &Options) -> Result<Outcome, ConvertError> {

    let text = fs::read_to_string(path)?;
    let json = serde_json::from_str::<Value>(&text)?;
    let upgraded = count_legacy(&json);

    let json = codec.normalize_all(json)?;
    let items = match &json {
        Value::Array(_) => codec.deserialize_all::<ItemStack>(json.clone())?.len(),
        _ => codec.deserialize::<ItemStack>(json.clone()).map(|_| 1)?,
    };

    debug!("{}: {items} items valid", path.display());

    if options.dry_run {
        return Ok(Outcome { items, upgraded, output: None });
    }

    let output = match &options.suffix {
        Some(suffix) => suffixed(path, suffix),
        None => path.to_path_buf(),
    };

    let mut text = if options.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    text.push('\n');

    fs::write(&output, text)?;
    Ok(Outcome { items, upgraded, output: Some(output) })

}

/// Return the path of the file next to the given one, with the suffix appended to the
/// whole file name: `items.json` with `new` gives `items.json.new`.
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Count the items of a document whose id is still numeric.
fn count_legacy(json: &Value) -> usize {
    let is_legacy = |item: &Value| item.get("id").is_some_and(Value::is_number);
    match json {
        Value::Array(array) => array.iter().filter(|&item| is_legacy(item)).count(),
        item => is_legacy(item) as usize,
    }
}


/// Error type returned when a file cannot be converted.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Item(#[from] ItemError),
}


#[cfg(test)]
mod tests {

    use super::*;

    /// Write a document in a file unique to the calling test.
    fn fixture(name: &str, text: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mcitem-convert-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.json"));
        fs::write(&path, text).unwrap();
        path
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn in_place() {

        let path = fixture("in_place", r#"[{"id": 1, "count": 64}, {"id": "DIRT", "count": 2}, {"id": 2267}]"#);
        let outcome = convert_file(&ItemCodec::default(), &path, &Options::default()).unwrap();

        assert_eq!(outcome, Outcome { items: 3, upgraded: 2, output: Some(path.clone()) });
        assert_eq!(read(&path), serde_json::json!([
            {"id": "STONE", "count": 64},
            {"id": "DIRT", "count": 2},
            {"id": "RECORD_12"},
        ]));

    }

    #[test]
    fn with_suffix() {

        let path = fixture("with_suffix", r#"{"id": 35, "damage": 14, "custom": "kept"}"#);
        let options = Options { pretty: true, suffix: Some("new".to_string()), ..Default::default() };
        let outcome = convert_file(&ItemCodec::default(), &path, &options).unwrap();

        let output = path.with_file_name("with_suffix.json.new");
        assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
        assert_eq!(read(&output), serde_json::json!({"id": "WOOL", "damage": 14, "custom": "kept"}));
        assert_eq!(read(&path), serde_json::json!({"id": 35, "damage": 14, "custom": "kept"}));

    }

    #[test]
    fn suffix_appended() {
        assert_eq!(suffixed(Path::new("dir/items.json"), "new"), Path::new("dir/items.json.new"));
        assert_eq!(suffixed(Path::new("items.txt"), "new"), Path::new("items.txt.new"));
        assert_eq!(suffixed(Path::new("items.new"), "new"), Path::new("items.new.new"));
    }

    #[test]
    fn dry_run() {
        let text = r#"{"id": 1}"#;
        let path = fixture("dry_run", text);
        let options = Options { dry_run: true, ..Default::default() };
        let outcome = convert_file(&ItemCodec::default(), &path, &options).unwrap();
        assert_eq!(outcome, Outcome { items: 1, upgraded: 1, output: None });
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn failure_writes_nothing() {

        let text = r#"[{"id": 1}, {"id": 99999}]"#;
        let path = fixture("failure", text);
        let err = convert_file(&ItemCodec::default(), &path, &Options::default()).unwrap_err();

        match err {
            ConvertError::Item(err) => assert_eq!(err.root(), &ItemError::UnknownLegacyTypeId(99999)),
            err => panic!("unexpected error: {err}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), text);

    }

    #[test]
    fn syntax_error() {
        let path = fixture("syntax", "{\"id\":");
        let err = convert_file(&ItemCodec::default(), &path, &Options::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Json(_)));
    }

}
