// Domain layer: grid model, run options and the ports the pipeline is written against.

pub mod model;
pub mod options;
pub mod ports;
