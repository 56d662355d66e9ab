// Domain layer: the country catalog with its layout rules, batch models and ports.

pub mod country;
pub mod model;
pub mod ports;
pub(crate) mod rules;
