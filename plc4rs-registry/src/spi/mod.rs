//! Service Provider Interface (SPI) for PLC4X enumerated fields
//!
//! This module provides the core abstraction for the closed enumerations that
//! appear as fields inside protocol messages. The main trait is `ClosedEnum`,
//! which maps between a strongly-typed value, its ordinal (the number that
//! travels on the wire) and its canonical name (the text used in configuration
//! files and diagnostics).
//!
//! Types are not implemented by hand; the `closed_enum!` macro declares the
//! enum and its registry from one table.
//!
//! # Example
//! ```rust
//! use plc4rs_registry::closed_enum;
//! use plc4rs_registry::spi::{ClosedEnum, RegistryError};
//!
//! closed_enum! {
//!     pub enum Mode {
//!         Stop = 0 => "STOP",
//!         Run = 1 => "RUN",
//!     }
//!     default = Stop;
//! }
//!
//! assert_eq!(Mode::from_name("RUN"), Ok(Mode::Run));
//! assert_eq!(Mode::from_ordinal(0), Ok(Mode::Stop));
//! assert_eq!(Mode::count(), 2);
//! assert!(matches!(Mode::from_ordinal(7), Err(RegistryError::IndexOutOfRange { .. })));
//! ```

use std::fmt::Debug;
use std::iter::Copied;
use std::slice::Iter;
use tracing::trace;

/// A closed, compile-time fixed set of named values.
///
/// `VALUES` and `NAMES` are parallel tables in ordinal order: the value at
/// position `i` has ordinal `i` and canonical name `NAMES[i]`.
pub trait ClosedEnum: Copy + Eq + Debug + Send + Sync + 'static {
    /// Type name used in error messages
    const TYPE_NAME: &'static str;
    /// All members in ordinal order
    const VALUES: &'static [Self];
    /// Canonical names, parallel to `VALUES`
    const NAMES: &'static [&'static str];
    /// The designated empty value of the field
    const DEFAULT: Self;

    /// Zero-based position of this member, also its wire encoding
    fn ordinal(self) -> usize;

    /// Canonical, case-sensitive name of this member
    fn name(self) -> &'static str;

    fn default_value() -> Self {
        Self::DEFAULT
    }

    fn count() -> usize {
        Self::VALUES.len()
    }

    /// Looks up a member by exact canonical name.
    ///
    /// No trimming or case folding is applied.
    fn from_name(name: &str) -> Result<Self, RegistryError> {
        match Self::NAMES.iter().position(|candidate| *candidate == name) {
            Some(index) => Ok(Self::VALUES[index]),
            None => {
                trace!("No {} named '{}'", Self::TYPE_NAME, name);
                Err(RegistryError::UnknownSymbol {
                    type_name: Self::TYPE_NAME,
                    symbol: name.to_owned(),
                })
            }
        }
    }

    /// Looks up a member by zero-based ordinal.
    ///
    /// Accepts wire integers and signed caller input; see `from_index` for
    /// positions that are already `usize`.
    fn from_ordinal(index: impl Into<i64>) -> Result<Self, RegistryError> {
        let index = index.into();
        match usize::try_from(index) {
            Ok(position) => Self::from_index(position),
            Err(_) => Err(out_of_range::<Self>(index)),
        }
    }

    /// Looks up a member by position, as returned by `ordinal()`.
    fn from_index(index: usize) -> Result<Self, RegistryError> {
        Self::VALUES.get(index).copied().ok_or_else(|| {
            // saturates for positions beyond i64::MAX
            out_of_range::<Self>(i64::try_from(index).unwrap_or(i64::MAX))
        })
    }

    /// Iterates all members in ordinal order
    fn iter() -> Copied<Iter<'static, Self>> {
        Self::VALUES.iter().copied()
    }
}

fn out_of_range<T: ClosedEnum>(index: i64) -> RegistryError {
    trace!("No {} at ordinal {}", T::TYPE_NAME, index);
    RegistryError::IndexOutOfRange {
        type_name: T::TYPE_NAME,
        index,
        count: T::count(),
    }
}

pub mod codec;
pub mod config;
pub mod error;
#[doc(hidden)]
pub mod macros;

pub use codec::WireValue;
pub use config::{DecodeConfig, UnknownValuePolicy};
pub use error::RegistryError;

#[cfg(test)]
mod tests {
    use super::*;

    crate::closed_enum! {
        /// Default deliberately not the first member.
        enum Level {
            Low = 0 => "LOW",
            Normal = 1 => "NORMAL",
            High = 2 => "HIGH",
        }
        default = Normal;
    }

    #[test]
    fn test_declared_default() {
        assert_eq!(Level::default_value(), Level::Normal);
        assert_eq!(Level::default(), Level::Normal);
        assert_ne!(Level::default_value(), Level::VALUES[0]);
    }

    #[test]
    fn test_tables_are_parallel() {
        assert_eq!(Level::VALUES.len(), Level::NAMES.len());
        for (i, value) in Level::iter().enumerate() {
            assert_eq!(value.ordinal(), i);
            assert_eq!(value.name(), Level::NAMES[i]);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = Level::from_name("low").unwrap_err();
        assert_eq!(err.to_string(), "Unknown symbol 'low' for Level");

        let err = Level::from_ordinal(-3).unwrap_err();
        assert_eq!(err.to_string(), "Index -3 out of range for Level (count 3)");
    }

    #[test]
    fn test_from_index() {
        for value in Level::iter() {
            assert_eq!(Level::from_index(value.ordinal()), Ok(value));
        }
        assert_eq!(
            Level::from_index(Level::count()),
            Err(RegistryError::IndexOutOfRange {
                type_name: "Level",
                index: 3,
                count: 3,
            })
        );
        assert!(matches!(
            Level::from_index(usize::MAX),
            Err(RegistryError::IndexOutOfRange { count: 3, .. })
        ));
    }

    #[test]
    fn test_standard_traits() {
        assert_eq!("HIGH".parse::<Level>(), Ok(Level::High));
        assert_eq!(Level::try_from(1u8), Ok(Level::Normal));
        assert_eq!(u8::from(Level::High), 2);
        assert_eq!(format!("{}", Level::Low), "LOW");
        assert_eq!(format!("{:>6}", Level::Low), "   LOW");
        assert!(Level::Low < Level::High);
    }

    #[test]
    fn test_from_name_rejects_near_misses() {
        for input in ["", " LOW", "LOW ", "Lo", "LOWER", "high"] {
            assert!(
                matches!(Level::from_name(input), Err(RegistryError::UnknownSymbol { .. })),
                "{input:?} must not match"
            );
        }
    }
}
