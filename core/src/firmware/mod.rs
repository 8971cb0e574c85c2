pub mod payload;
pub mod table;

pub use payload::{TableAncillary, TablePayload};
pub use table::QuantizedTable;
