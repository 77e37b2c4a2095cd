// Domain layer: report models, provider wire shapes and the provider ports.

pub mod model;
pub mod ports;
pub mod upstream;
