pub mod batch;
pub mod formatter;

pub use crate::domain::country::CountryCode;
pub use crate::domain::model::{FormattedRecord, OutputFormat, PostalRecord};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
