//! Wire codec for enumerated fields
//!
//! An enumerated field travels as its ordinal in a single unsigned byte.
//! Decoding comes in two flavours because only the enclosing message knows
//! whether an unrecognised ordinal should abort decoding: `parse` rejects it,
//! `parse_lenient` keeps the raw byte as `WireValue::Unknown`.

use bytes::{BufMut, BytesMut};
use nom::{
    error::{Error, ErrorKind},
    number::complete::be_u8,
    IResult,
};
use tracing::{debug, warn};

use crate::spi::config::{DecodeConfig, UnknownValuePolicy};
use crate::spi::{ClosedEnum, RegistryError};

/// Width of an enumerated field on the wire
pub const FIELD_BITS: u16 = 8;

pub fn length_in_bits() -> u16 {
    FIELD_BITS
}

pub fn length_in_bytes() -> u16 {
    FIELD_BITS / 8
}

/// A decoded field that may carry an ordinal outside the known set.
///
/// `Unknown` only ever holds ordinals that name no member; build values
/// from a byte with `WireValue::from_raw` so a known ordinal is never
/// wrapped as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireValue<T> {
    Known(T),
    Unknown(u8),
}

impl<T: ClosedEnum> WireValue<T> {
    pub fn from_raw(raw: u8) -> Self {
        match T::from_ordinal(raw) {
            Ok(value) => WireValue::Known(value),
            Err(_) => WireValue::Unknown(raw),
        }
    }

    pub fn known(self) -> Option<T> {
        match self {
            WireValue::Known(value) => Some(value),
            WireValue::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, WireValue::Known(_))
    }

    /// The byte this field is encoded as
    pub fn raw(self) -> Result<u8, RegistryError> {
        match self {
            WireValue::Known(value) => ordinal_byte(value),
            WireValue::Unknown(raw) => Ok(raw),
        }
    }

    pub fn serialize(self, buf: &mut BytesMut) -> Result<(), RegistryError> {
        buf.put_u8(self.raw()?);
        Ok(())
    }
}

impl<T: ClosedEnum> From<T> for WireValue<T> {
    fn from(value: T) -> Self {
        WireValue::Known(value)
    }
}

fn ordinal_byte<T: ClosedEnum>(value: T) -> Result<u8, RegistryError> {
    let ordinal = value.ordinal();
    u8::try_from(ordinal).map_err(|_| RegistryError::OrdinalOverflow {
        type_name: T::TYPE_NAME,
        ordinal,
        bits: FIELD_BITS,
    })
}

/// Encodes a field as its ordinal byte.
///
/// Nothing is written when the ordinal does not fit in the field.
pub fn serialize<T: ClosedEnum>(value: T, buf: &mut BytesMut) -> Result<(), RegistryError> {
    buf.put_u8(ordinal_byte(value)?);
    Ok(())
}

/// Decodes a field, failing with `ErrorKind::Tag` on an unknown ordinal.
pub fn parse<T: ClosedEnum>(input: &[u8]) -> IResult<&[u8], T> {
    let (rest, raw) = be_u8(input)?;

    match T::from_ordinal(raw) {
        Ok(value) => Ok((rest, value)),
        Err(e) => {
            debug!("Rejecting field: {}", e);
            Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
        }
    }
}

/// Decodes a field, keeping an unknown ordinal as `WireValue::Unknown`.
pub fn parse_lenient<T: ClosedEnum>(input: &[u8]) -> IResult<&[u8], WireValue<T>> {
    let (rest, raw) = be_u8(input)?;

    let value = WireValue::from_raw(raw);
    if !value.is_known() {
        warn!("Preserving unknown {} ordinal {}", T::TYPE_NAME, raw);
    }
    Ok((rest, value))
}

/// Decodes a field according to the configured unknown-value policy.
pub fn parse_with<'a, T: ClosedEnum>(
    input: &'a [u8],
    config: &DecodeConfig,
) -> IResult<&'a [u8], WireValue<T>> {
    match config.unknown_values {
        UnknownValuePolicy::Reject => {
            let (rest, value) = parse::<T>(input)?;
            Ok((rest, WireValue::Known(value)))
        }
        UnknownValuePolicy::Preserve => parse_lenient(input),
    }
}
