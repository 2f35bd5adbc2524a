//! 8-bit byte <-> 5-bit group regrouping.
//!
//! Encoding always pads the last group with zero bits. Decoding is strict by
//! default: leftover bits must be fewer than the source width and all zero.

use bech32::{u5, CheckBase32, ToBase32};

use crate::error::{Nip19Error, Result};

/// Expand bytes into 5-bit groups, zero-padding the final group.
pub fn to_groups(bytes: &[u8]) -> Vec<u5> {
    bytes.to_base32()
}

/// Pack 5-bit groups back into bytes.
///
/// With `pad == false` any leftover bits must be zero and narrower than a
/// group, otherwise [`Nip19Error::InvalidPadding`]. With `pad == true` the
/// leftover bits are flushed as one final zero-padded byte.
pub fn from_groups(groups: &[u5], pad: bool) -> Result<Vec<u8>> {
    regroup(groups, 5, 8, pad)
}

/// Validate raw values as 5-bit groups.
pub fn groups_from_values(values: &[u8]) -> Result<Vec<u5>> {
    let groups: Vec<u5> = values.check_base32()?;
    Ok(groups)
}

/// General regrouping between bit widths of 1..=8.
pub fn regroup<T>(data: &[T], from: u32, to: u32, pad: bool) -> Result<Vec<u8>>
where
    T: Into<u8> + Copy,
{
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(Nip19Error::UnsupportedOrUnimplemented(format!(
            "regrouping {from}-bit units into {to}-bit units"
        )));
    }
    Ok(bech32::convert_bits(data, from, to, pad)?)
}
