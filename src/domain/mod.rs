// Domain layer: relocation model and the filesystem port. No I/O here.

pub mod model;
pub mod ports;
