pub mod parser;
pub mod resolve;
pub mod schema;
pub mod types;

pub use types::*;
pub use parser::{load_config, parse_config};
pub use resolve::{resolve_settings, ServeOverrides, ServeSettings};
