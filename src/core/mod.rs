pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod search;

pub use crate::domain::model::{GridLayout, ReachResult};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline};
pub use crate::utils::error::Result;
