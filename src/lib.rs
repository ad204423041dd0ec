pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod influence;
pub mod log;
pub mod reader;
pub mod splitter;
pub mod types;
pub mod visitor;

pub use config::{CompressionMode, ConverterConfig};
pub use driver::{Batch, run};
pub use error::{ConvertError, Result};
pub use types::{BatchReport, GameBlock, GameFailure, UciLine};
pub use visitor::convert_movetext;
