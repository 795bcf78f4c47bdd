pub mod cache;
pub mod deeplink;
pub mod hierarchy;
pub mod loader;
pub mod normalize;
pub mod parser;
pub mod projector;
pub mod session;

pub use crate::domain::model::{Catalog, RowRecord, TableOutcome};
pub use crate::domain::ports::{Clock, ConfigProvider, DatasetSource, Storage};
pub use crate::utils::error::Result;
