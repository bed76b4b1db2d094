pub mod matcher;
pub mod normalize;
pub mod service;

pub use crate::domain::model::{CallRecord, CallRow, MatchQuery};
pub use crate::domain::ports::{AudioSource, ConfigProvider, RowSource};
pub use crate::utils::error::Result;
