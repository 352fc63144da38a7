//! PLC4X Rust registries for closed enumerated protocol fields

pub mod protocols;
pub mod spi;

pub use protocols::s7::SzlModuleTypeClass;
pub use spi::{ClosedEnum, DecodeConfig, RegistryError, UnknownValuePolicy, WireValue};
