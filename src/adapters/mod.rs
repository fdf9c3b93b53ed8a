// Adapters layer: concrete record stores behind the `RecordStore` port.

pub mod local;
pub mod memory;

#[cfg(feature = "lambda")]
pub mod dynamodb;
