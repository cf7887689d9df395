pub mod config;
pub mod controller;
pub mod mapping;
pub mod testing;
pub mod transport;
pub mod view;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RemoteConfig,
};
pub use controller::{
    ConfirmPrompt, DataStore, EditSession, MetadataController, Notifier, Severity, ViewState,
};
pub use mapping::{Mapping, MappingClient, MappingError, MappingStats, UpsertRequest};
pub use transport::{ApiResponse, HttpTransport, Transport, TransportError};
pub use view::{render_table, MappingRow, StatsSummary, TableRow};
