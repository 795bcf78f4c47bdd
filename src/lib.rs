pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    clock::{ManualClock, SystemClock},
    http::HttpSource,
    storage::{LocalStorage, MemoryStorage},
};
pub use config::toml_config::TomlConfig;
pub use core::{
    cache::DatasetCache,
    hierarchy::build_catalog,
    loader::DatasetLoader,
    parser::parse_dataset,
    projector::project_program,
    session::{DetailView, LoadState, Session},
};
pub use domain::model::{Grade, RowRecord, TableOutcome};
pub use utils::error::{LessenError, Result};
