use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown symbol '{symbol}' for {type_name}")]
    UnknownSymbol {
        type_name: &'static str,
        symbol: String,
    },

    #[error("Index {index} out of range for {type_name} (count {count})")]
    IndexOutOfRange {
        type_name: &'static str,
        index: i64,
        count: usize,
    },

    #[error("Ordinal {ordinal} of {type_name} does not fit in a {bits}-bit field")]
    OrdinalOverflow {
        type_name: &'static str,
        ordinal: usize,
        bits: u16,
    },
}
