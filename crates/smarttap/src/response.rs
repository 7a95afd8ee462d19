//! Splitting a raw response APDU into payload and status word

use bytes::Bytes;
use derive_more::{Display, From, Into};

use crate::{Error, Result};

/// Status word (SW1 SW2) trailing every response APDU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    pub const fn sw1(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn sw2(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Smart Tap treats every `9XXX` status as success, `9000` being the
    /// plain case and the others carrying wallet specific information.
    pub const fn is_success(self) -> bool {
        self.sw1() >> 4 == 0x9
    }
}

/// Response APDU with its status word split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    payload: Bytes,
    status: StatusWord,
}

impl ApduResponse {
    /// Split `raw` into payload and trailing status word
    pub fn from_bytes(raw: Bytes) -> Result<Self> {
        let len = raw.len();
        if len < 2 {
            return Err(Error::ResponseTooShort { len });
        }

        let status = StatusWord::new(raw[len - 2], raw[len - 1]);
        let payload = raw.slice(..len - 2);

        Ok(Self { payload, status })
    }

    pub const fn status(&self) -> StatusWord {
        self.status
    }

    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}
