// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border settings: the value type, field-by-field validation, and persistence.
//!
//! Settings are always fully resolved. Raw persisted data goes through [`validate`], which
//! keeps every valid field and falls back to the documented default for each field that is
//! missing or malformed. Storage failures fall back to [`Settings::default`] for the run.
//!
//! ```
//! use matboard_layout::settings::{Settings, validate};
//! use matboard_layout::document::Rgb;
//! use serde_json::json;
//!
//! let s = validate(&json!({ "gap": 12, "strokeColor": { "r": 2.0, "g": 0, "b": 0 } }));
//! assert_eq!(s.gap, 12.0);
//! assert_eq!(s.stroke_color, Rgb::BLACK); // out of range → default
//! assert_eq!(s.stroke_width, Settings::default().stroke_width);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::document::{Rgb, StrokeAlign, StrokeStyle};
use crate::error::{LayoutError, Result};

/// Resolved border settings.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Outward margin between a node and its border, on every side.
    pub gap: f64,
    /// Border stroke weight.
    pub stroke_width: f64,
    /// Border stroke color.
    pub stroke_color: Rgb,
    /// Border stroke alignment.
    pub stroke_align: StrokeAlign,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gap: 8.0,
            stroke_width: 1.0,
            stroke_color: Rgb::BLACK,
            stroke_align: StrokeAlign::Center,
        }
    }
}

impl Settings {
    /// Stroke parameters for a border rectangle.
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.stroke_width,
            color: self.stroke_color,
            align: self.stroke_align,
        }
    }

    /// Persisted (camelCase JSON) form.
    pub fn to_value(&self) -> Value {
        json!({
            "gap": self.gap,
            "strokeWidth": self.stroke_width,
            "strokeColor": {
                "r": self.stroke_color.r,
                "g": self.stroke_color.g,
                "b": self.stroke_color.b,
            },
            "strokeAlign": self.stroke_align.as_str(),
        })
    }
}

/// Resolve raw persisted data into [`Settings`], one default per invalid field.
///
/// - `gap`, `strokeWidth`: finite numbers `>= 0`.
/// - `strokeColor`: an object with numeric `r`, `g`, `b`, each in `[0, 1]`.
/// - `strokeAlign`: one of `"CENTER"`, `"INSIDE"`, `"OUTSIDE"`.
///
/// Anything that is not an object resolves to the defaults.
pub fn validate(raw: &Value) -> Settings {
    let defaults = Settings::default();
    let Some(fields) = raw.as_object() else {
        return defaults;
    };
    Settings {
        gap: fields
            .get("gap")
            .and_then(non_negative)
            .unwrap_or(defaults.gap),
        stroke_width: fields
            .get("strokeWidth")
            .and_then(non_negative)
            .unwrap_or(defaults.stroke_width),
        stroke_color: fields
            .get("strokeColor")
            .and_then(Value::as_object)
            .and_then(color)
            .unwrap_or(defaults.stroke_color),
        stroke_align: fields
            .get("strokeAlign")
            .and_then(|v| StrokeAlign::deserialize(v).ok())
            .unwrap_or(defaults.stroke_align),
    }
}

fn non_negative(v: &Value) -> Option<f64> {
    v.as_f64().filter(|x| x.is_finite() && *x >= 0.0)
}

fn color(fields: &Map<String, Value>) -> Option<Rgb> {
    let channel = |key: &str| {
        fields
            .get(key)?
            .as_f64()
            .filter(|c| (0.0..=1.0).contains(c))
    };
    Some(Rgb::new(channel("r")?, channel("g")?, channel("b")?))
}

/// Somewhere to keep raw settings between runs.
pub trait SettingsStore {
    /// Read the raw value, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Value>>;

    /// Replace the raw value.
    fn save(&mut self, raw: &Value) -> Result<()>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<Value>,
}

impl MemoryStore {
    /// A store pre-filled with `raw`.
    pub fn with_value(raw: Value) -> Self {
        Self { value: Some(raw) }
    }

    /// The currently stored raw value.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Value>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, raw: &Value) -> Result<()> {
        self.value = Some(raw.clone());
        Ok(())
    }
}

/// A pretty-printed JSON file. A missing file reads as "never saved".
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store settings at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn unavailable(err: impl ToString) -> LayoutError {
    LayoutError::PersistenceUnavailable {
        reason: err.to_string(),
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(unavailable(err)),
        };
        serde_json::from_str(&text).map(Some).map_err(unavailable)
    }

    fn save(&mut self, raw: &Value) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(unavailable)?;
        }
        let text = serde_json::to_string_pretty(raw).map_err(unavailable)?;
        fs::write(&self.path, text).map_err(unavailable)
    }
}

/// Load settings, falling back to defaults when nothing is stored or the store fails.
pub fn load_settings<S: SettingsStore + ?Sized>(store: &S) -> Settings {
    match store.load() {
        Ok(Some(raw)) => validate(&raw),
        Ok(None) => {
            debug!("no stored settings; using defaults");
            Settings::default()
        }
        Err(err) => {
            warn!(%err, "falling back to default settings");
            Settings::default()
        }
    }
}

/// Persist `settings`. A failure is logged and returned; callers keep using `settings` for the run.
pub fn save_settings<S: SettingsStore + ?Sized>(store: &mut S, settings: &Settings) -> Result<()> {
    store
        .save(&settings.to_value())
        .inspect_err(|err| warn!(%err, "settings were not persisted"))
}
