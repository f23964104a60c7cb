//! ATK Settings - filter configuration and logging setup
//!
//! Table column declarations are kept in a JSON settings file under the
//! user's config directory and turned into decorated column definitions
//! through the strict data-type factory.

pub mod logging;
mod settings;

pub use logging::{init_from_settings, LoggingConfig};
pub use settings::{ColumnSettings, FilterSettings, LoggingSettings, TableFilterSettings};
