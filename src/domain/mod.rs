// Domain layer: timeout records, field markers and the layout port. No I/O here.

pub mod model;
pub mod ports;
