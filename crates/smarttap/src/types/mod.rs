mod capabilities;
mod directory_entry;
mod transaction_mode;

pub use capabilities::SmartTapCapabilities;
pub use directory_entry::DirectoryEntry;
pub use transaction_mode::TransactionMode;

use crate::tlv::{TagId, TlvMap};
use crate::{Error, Result};

/// First value of `tag` as a fixed-size array, `None` when the tag is absent
pub(crate) fn fixed_value<const N: usize>(fields: &TlvMap, tag: &[u8]) -> Result<Option<[u8; N]>> {
    fields
        .first(tag)
        .map(|value| {
            <[u8; N]>::try_from(&value[..]).map_err(|_| Error::InvalidFieldLength {
                tag: TagId::from(tag),
                expected: N,
                actual: value.len(),
            })
        })
        .transpose()
}
