// Domain layer: plain data models and ports (interfaces). Nothing here
// depends on the config or CLI layers.

pub mod model;
pub mod ports;
