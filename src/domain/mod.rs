// Domain layer: entity definitions and ports (interfaces) implemented by adapters.

pub mod entity;
pub mod model;
pub mod ports;
