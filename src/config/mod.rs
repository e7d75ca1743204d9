pub mod settings;
pub mod sources;

pub use settings::AppConfig;
pub use sources::{find_source, get_sources, DataSourceConfig, SourceColumns};
