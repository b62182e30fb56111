//! Legacy advertising payload encoding.

use heapless::Vec;
use uuid::Uuid;

use crate::config::FirmwareConfig;
use crate::error::LinkError;

/// Maximum legacy advertising / scan response length.
pub const MAX_AD_LEN: usize = 31;

/// AD type: Flags.
pub const AD_TYPE_FLAGS: u8 = 0x01;
/// AD type: Complete List of 128-bit Service UUIDs.
pub const AD_TYPE_UUID128_ALL: u8 = 0x07;
/// AD type: Complete Local Name.
pub const AD_TYPE_NAME_COMPLETE: u8 = 0x09;

/// Flags bit: LE General Discoverable Mode.
pub const FLAG_LE_GENERAL_DISCOVERABLE: u8 = 0x02;
/// Flags bit: BR/EDR Not Supported.
pub const FLAG_BR_EDR_NOT_SUPPORTED: u8 = 0x04;

/// Advertising data plus scan response, as AD structures.
///
/// The advertising data carries the flags and the service UUID; the name
/// goes into the scan response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingPayload {
    advertising: Vec<u8, MAX_AD_LEN>,
    scan_response: Vec<u8, MAX_AD_LEN>,
}

impl AdvertisingPayload {
    /// Encode the payload for a service and device name.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::PayloadOverflow`] if the name does not fit.
    pub fn new(service_uuid: &Uuid, name: &str) -> Result<Self, LinkError> {
        let mut advertising = Vec::new();
        push_structure(
            &mut advertising,
            AD_TYPE_FLAGS,
            &[FLAG_LE_GENERAL_DISCOVERABLE | FLAG_BR_EDR_NOT_SUPPORTED],
        )?;

        // AD carries the UUID little-endian
        let mut uuid = *service_uuid.as_bytes();
        uuid.reverse();
        push_structure(&mut advertising, AD_TYPE_UUID128_ALL, &uuid)?;

        let mut scan_response = Vec::new();
        push_structure(&mut scan_response, AD_TYPE_NAME_COMPLETE, name.as_bytes())?;

        Ok(Self {
            advertising,
            scan_response,
        })
    }

    /// Encode the payload described by a FirmwareConfig.
    pub fn from_config(config: &FirmwareConfig) -> Result<Self, LinkError> {
        Self::new(&config.advertising.service_uuid, config.device_name())
    }

    /// Advertising data bytes.
    #[inline]
    pub fn advertising_data(&self) -> &[u8] {
        &self.advertising
    }

    /// Scan response bytes.
    #[inline]
    pub fn scan_response(&self) -> &[u8] {
        &self.scan_response
    }
}

fn push_structure(
    buf: &mut Vec<u8, MAX_AD_LEN>,
    ad_type: u8,
    data: &[u8],
) -> Result<(), LinkError> {
    // length byte counts the type byte too
    let len = data.len() + 1;
    if buf.len() + 1 + len > MAX_AD_LEN {
        return Err(LinkError::PayloadOverflow);
    }

    buf.push(len as u8).map_err(|_| LinkError::PayloadOverflow)?;
    buf.push(ad_type).map_err(|_| LinkError::PayloadOverflow)?;
    buf.extend_from_slice(data)
        .map_err(|_| LinkError::PayloadOverflow)
}
