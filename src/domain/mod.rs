// Domain layer: value types and the ports the ordering flow talks through.

pub mod model;
pub mod ports;
