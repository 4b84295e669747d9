// Domain layer: core models and ports (interfaces). No external dependencies beyond std.

pub mod ports;
