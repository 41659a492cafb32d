pub mod engine;
pub mod filter;
pub mod formatter;
pub mod link;
pub mod ordering;
pub mod parser;
pub mod pipeline;
pub mod sections;

pub use crate::domain::model::{BoardPayload, ParsedComment, RawComment, Report, SectionConfig};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
