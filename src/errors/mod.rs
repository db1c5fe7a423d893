pub mod types;

pub use types::NaviError;
