// Domain layer: record model, schema contract and ports. No AWS types here.

pub mod model;
pub mod ports;
pub mod record;
