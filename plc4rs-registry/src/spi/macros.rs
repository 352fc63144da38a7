//! Support code for `closed_enum!`

use crate::spi::ClosedEnum;
use serde::{Deserialize, Deserializer, Serializer};

pub use serde;

/// Declares a field enum together with its `ClosedEnum` registry.
///
/// Each member is written `Variant = ordinal => "NAME"`. Ordinals must start
/// at 0 and be contiguous, and names must be unique; both are checked at
/// compile time. `default = Variant;` names the empty value of the field.
///
/// Besides `ClosedEnum`, the generated type implements `Default`, `Display`,
/// `FromStr`, `TryFrom<u8>`, `From<T> for u8` and serde by canonical name.
///
/// A table that skips an ordinal does not compile:
///
/// ```compile_fail
/// plc4rs_registry::closed_enum! {
///     enum Gap {
///         A = 0 => "A",
///         B = 2 => "B",
///     }
///     default = A;
/// }
/// ```
///
/// Neither does one that repeats a name:
///
/// ```compile_fail
/// plc4rs_registry::closed_enum! {
///     enum Twice {
///         A = 0 => "A",
///         B = 1 => "A",
///     }
///     default = A;
/// }
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $ordinal:literal => $text:literal
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $ordinal,
            )+
        }

        const _: () = {
            assert!(
                $crate::spi::macros::ordinals_are_contiguous(&[$($ordinal),+]),
                "closed_enum ordinals must start at 0 and be contiguous"
            );
            assert!(
                $crate::spi::macros::names_are_unique(&[$($text),+]),
                "closed_enum names must be unique"
            );
        };

        impl $crate::spi::ClosedEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[$(Self::$variant),+];
            const NAMES: &'static [&'static str] = &[$($text),+];
            const DEFAULT: Self = Self::$default;

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                <Self as $crate::spi::ClosedEnum>::default_value()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(<Self as $crate::spi::ClosedEnum>::name(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::spi::RegistryError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::spi::ClosedEnum>::from_name(s)
            }
        }

        impl ::core::convert::TryFrom<u8> for $name {
            type Error = $crate::spi::RegistryError;

            fn try_from(value: u8) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::spi::ClosedEnum>::from_ordinal(value)
            }
        }

        impl ::core::convert::From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl $crate::spi::macros::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::spi::macros::serde::Serializer,
            {
                $crate::spi::macros::serialize_name(*self, serializer)
            }
        }

        impl<'de> $crate::spi::macros::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::spi::macros::serde::Deserializer<'de>,
            {
                $crate::spi::macros::deserialize_name(deserializer)
            }
        }
    };
}

pub const fn ordinals_are_contiguous(ordinals: &[usize]) -> bool {
    let mut i = 0;
    while i < ordinals.len() {
        if ordinals[i] != i {
            return false;
        }
        i += 1;
    }
    true
}

pub const fn names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

pub fn serialize_name<T, S>(value: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ClosedEnum,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

pub fn deserialize_name<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: ClosedEnum,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    T::from_name(&name).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_ordinals() {
        assert!(ordinals_are_contiguous(&[0, 1, 2, 3]));
        assert!(!ordinals_are_contiguous(&[0, 2]));
        assert!(!ordinals_are_contiguous(&[1, 2]));
        assert!(!ordinals_are_contiguous(&[0, 0]));
    }

    #[test]
    fn test_unique_names() {
        assert!(names_are_unique(&["CPU", "CP"]));
        assert!(names_are_unique(&["CP", "cp"]));
        assert!(!names_are_unique(&["IM", "FM", "IM"]));
    }
}
