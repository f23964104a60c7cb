use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atk_core::OptionRecord;
use atk_table_filters::{decorate_columns, ColumnConfig, ColumnDef, ColumnType};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub global_search_enabled: bool,
    pub tables: BTreeMap<String, TableFilterSettings>,
    pub logging: LoggingSettings,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            global_search_enabled: true,
            tables: BTreeMap::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl FilterSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Read settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no filter settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filter settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse filter settings JSON")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write filter settings to {:?}", path))?;
        Ok(())
    }

    pub fn settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("atk").join("filter-settings.json"))
    }

    /// The search text to apply, or `None` when global search is switched off
    pub fn global_search<'a>(&self, query: Option<&'a str>) -> Option<&'a str> {
        query.filter(|_| self.global_search_enabled)
    }

    pub fn table(&self, name: &str) -> Option<&TableFilterSettings> {
        self.tables.get(name)
    }

    /// Column definitions of a configured table
    pub fn column_defs(&self, table: &str) -> Result<Vec<ColumnDef>> {
        let settings = self
            .table(table)
            .with_context(|| format!("No filter settings for table '{}'", table))?;
        settings
            .column_defs()
            .with_context(|| format!("Invalid column settings for table '{}'", table))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFilterSettings {
    pub columns: Vec<ColumnSettings>,
}

impl TableFilterSettings {
    /// Build filterable columns through the strict data-type factory.
    ///
    /// An unknown `data_type` fails with `InvalidColumnDataType`.
    pub fn column_defs(&self) -> atk_core::Result<Vec<ColumnDef>> {
        let columns = self
            .columns
            .iter()
            .map(ColumnSettings::column_def)
            .collect::<atk_core::Result<Vec<_>>>()?;
        Ok(decorate_columns(&columns))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSettings {
    pub id: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Narrower semantic type kept on the column meta, e.g. `currency`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionRecord>,
    #[serde(default = "default_true")]
    pub enable_filter: bool,
}

impl ColumnSettings {
    pub fn new(id: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data_type: data_type.into(),
            display_name: None,
            column_type: None,
            options: Vec::new(),
            enable_filter: true,
        }
    }

    pub fn column_def(&self) -> atk_core::Result<ColumnDef> {
        let mut config = ColumnConfig::named(self.id.clone(), &self.data_type)?;
        if let Some(name) = &self.display_name {
            config = config.display_name(name.clone());
        }
        if let Some(column_type) = self.column_type {
            config = config.column_type(column_type);
        }
        if !self.options.is_empty() {
            config = config.options(self.options.clone());
        }
        Ok(config.build().with_filter_enabled(self.enable_filter))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Overrides the preset filter directives; RUST_LOG still wins
    pub default_filter: Option<String>,
    pub json_logs: bool,
    pub console_logs: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            default_filter: None,
            json_logs: false,
            console_logs: true,
        }
    }
}
