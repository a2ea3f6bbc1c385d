// Domain layer: the enumeration model and the ports it talks through.

pub mod model;
pub mod ports;
