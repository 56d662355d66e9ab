use crate::domain::model::OutputFormat;

pub trait ConfigProvider {
    /// Country applied to records that do not carry their own.
    fn default_country(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
}
