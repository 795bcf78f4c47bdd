// Adapters layer: concrete implementations for external systems (http, storage, time).

pub mod clock;
pub mod http;
pub mod storage;
