pub mod config;
pub mod error;
pub mod record;

pub use config::BatchConfig;
pub use error::{CotError, Result};
pub use record::Record;
