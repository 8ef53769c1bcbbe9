// Domain layer: policies, operations and outcomes, plus the configuration port.

pub mod model;
pub mod ports;
