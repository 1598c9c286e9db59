// Domain layer: the Worker capability, the output port and the line formats.

pub mod model;
pub mod ports;
