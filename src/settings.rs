//! Persistent appliance settings.
//!
//! The settings record travels as: a fixed identifier, a layout version,
//! the postcard-encoded payload, and a CRC32 stored twice (plain and
//! complemented). On load, an unknown identifier or version simply means
//! "no settings" and the caller falls back to [`Settings::default`]; a
//! checksum that fails means the stored data is damaged and is reported
//! as an error. Saves are read back and verified before being trusted.
//!
//! Bump [`SETTINGS_VERSION`] any time the [`Settings`] struct changes
//! shape; old records then read as absent instead of misparsing.

use serde::{Deserialize, Serialize};

use crate::fingerboard::DutyCycleControl;
use crate::painter::UnplayedOption;
use crate::{Error, Result};

/// Identifies a settings record. Never changes.
pub const SETTINGS_ID: u16 = 0xC04D;

/// Version of the record layout.
pub const SETTINGS_VERSION: u16 = 1;

const HEADER_SIZE: usize = 6; // id + version + payload length
const TRAILER_SIZE: usize = 8; // crc32 + complemented crc32

/// Upper bound on an encoded settings record.
pub const MAX_ENCODED_SIZE: usize = 64;

const MAX_PAYLOAD_SIZE: usize = MAX_ENCODED_SIZE - HEADER_SIZE - TRAILER_SIZE;

/// The appliance settings that survive power-off.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Startup LED brightness (duty cycle, `1..=10`).
    pub brightness: u8,
    /// Long chord type names on the chord screen.
    pub verbose: bool,
    /// How unplayed strings are marked on the fingerboard.
    pub unplayed: UnplayedOption,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: DutyCycleControl::DEFAULT,
            verbose: true,
            unplayed: UnplayedOption::default(),
        }
    }
}

fn compute_crc(bytes: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Encode a settings record into `buffer`, returning the encoded length.
///
/// # Errors
///
/// [`Error::FormatError`] if `buffer` is too small (it never is at
/// [`MAX_ENCODED_SIZE`]).
pub fn encode(settings: &Settings, buffer: &mut [u8]) -> Result<usize> {
    let mut payload = [0u8; MAX_PAYLOAD_SIZE];
    let payload_len = postcard::to_slice(settings, &mut payload)
        .map_err(|_| Error::FormatError)?
        .len();

    let crc_offset = HEADER_SIZE.wrapping_add(payload_len);
    let total = crc_offset.wrapping_add(TRAILER_SIZE);
    let record = buffer.get_mut(..total).ok_or(Error::FormatError)?;

    record[0..2].copy_from_slice(&SETTINGS_ID.to_le_bytes());
    record[2..4].copy_from_slice(&SETTINGS_VERSION.to_le_bytes());
    record[4..6].copy_from_slice(&(payload_len as u16).to_le_bytes());
    record[HEADER_SIZE..crc_offset].copy_from_slice(&payload[..payload_len]);

    let crc = compute_crc(&record[..crc_offset]);
    record[crc_offset..crc_offset + 4].copy_from_slice(&crc.to_le_bytes());
    record[crc_offset + 4..total].copy_from_slice(&(!crc).to_le_bytes());

    Ok(total)
}

fn read_u16(buffer: &[u8], offset: usize) -> Option<u16> {
    let bytes = buffer.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes(bytes.try_into().ok()?))
}

fn read_u32(buffer: &[u8], offset: usize) -> Option<u32> {
    let bytes = buffer.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

/// Decode a settings record.
///
/// Returns `Ok(None)` when no record is present (wrong or missing id,
/// or a different layout version).
///
/// # Errors
///
/// [`Error::StorageCorrupted`] when the record claims to be ours but
/// fails length, checksum, or payload validation.
pub fn decode(buffer: &[u8]) -> Result<Option<Settings>> {
    let Some(id) = read_u16(buffer, 0) else {
        return Ok(None);
    };
    if id != SETTINGS_ID {
        return Ok(None);
    }
    let Some(version) = read_u16(buffer, 2) else {
        return Ok(None);
    };
    if version != SETTINGS_VERSION {
        return Ok(None);
    }

    let payload_len = read_u16(buffer, 4).ok_or(Error::StorageCorrupted)? as usize;
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(Error::StorageCorrupted);
    }

    let crc_offset = HEADER_SIZE.wrapping_add(payload_len);
    let stored_crc = read_u32(buffer, crc_offset).ok_or(Error::StorageCorrupted)?;
    let stored_not_crc =
        read_u32(buffer, crc_offset.wrapping_add(4)).ok_or(Error::StorageCorrupted)?;
    if stored_not_crc != !stored_crc {
        return Err(Error::StorageCorrupted);
    }

    let checked = buffer.get(..crc_offset).ok_or(Error::StorageCorrupted)?;
    if compute_crc(checked) != stored_crc {
        return Err(Error::StorageCorrupted);
    }

    let payload = buffer
        .get(HEADER_SIZE..crc_offset)
        .ok_or(Error::StorageCorrupted)?;
    let settings = postcard::from_bytes(payload).map_err(|_| Error::StorageCorrupted)?;
    Ok(Some(settings))
}

#[cfg(not(feature = "host"))]
mod store {
    use defmt::{error, info};
    use embassy_rp::Peri;
    use embassy_rp::flash::{Blocking, ERASE_SIZE, Flash as EmbassyFlash};
    use embassy_rp::peripherals::FLASH;

    use super::{MAX_ENCODED_SIZE, Settings, decode, encode};
    use crate::{Error, Result};

    // Internal flash size for Raspberry Pi Pico 2 (4 MB).
    #[cfg(feature = "pico2")]
    const INTERNAL_FLASH_SIZE: usize = 4 * 1024 * 1024;

    // Internal flash size for Raspberry Pi Pico 1 (2 MB).
    #[cfg(not(feature = "pico2"))]
    const INTERNAL_FLASH_SIZE: usize = 2 * 1024 * 1024;

    // The settings live in the last erase block of internal flash, well
    // clear of the program image at the bottom.
    const SETTINGS_OFFSET: u32 = (INTERNAL_FLASH_SIZE - ERASE_SIZE) as u32;

    /// Settings storage in the last erase block of internal flash.
    pub struct SettingsStore {
        flash: EmbassyFlash<'static, FLASH, Blocking, INTERNAL_FLASH_SIZE>,
    }

    impl SettingsStore {
        /// Take ownership of the flash peripheral.
        #[must_use]
        pub fn new(peripheral: Peri<'static, FLASH>) -> Self {
            Self {
                flash: EmbassyFlash::new_blocking(peripheral),
            }
        }

        /// Load the stored settings, if any.
        ///
        /// # Errors
        ///
        /// [`Error::Flash`] on read failure, [`Error::StorageCorrupted`]
        /// if the record is present but damaged.
        pub fn load(&mut self) -> Result<Option<Settings>> {
            let mut buffer = [0u8; MAX_ENCODED_SIZE];
            self.flash
                .blocking_read(SETTINGS_OFFSET, &mut buffer)
                .map_err(Error::Flash)?;
            match decode(&buffer) {
                Ok(Some(settings)) => {
                    info!("settings: loaded");
                    Ok(Some(settings))
                }
                Ok(None) => {
                    info!("settings: none stored, using defaults");
                    Ok(None)
                }
                Err(err) => {
                    error!("settings: stored record is corrupt");
                    Err(err)
                }
            }
        }

        /// Save the settings, then read them back to verify.
        ///
        /// # Errors
        ///
        /// [`Error::Flash`] on erase/write/read failure,
        /// [`Error::SaveVerifyFailed`] if the read-back does not match.
        pub fn save(&mut self, settings: &Settings) -> Result<()> {
            let mut block = [0xFFu8; ERASE_SIZE];
            let encoded_len = encode(settings, &mut block)?;

            self.flash
                .blocking_erase(SETTINGS_OFFSET, SETTINGS_OFFSET + ERASE_SIZE as u32)
                .map_err(Error::Flash)?;
            self.flash
                .blocking_write(SETTINGS_OFFSET, &block)
                .map_err(Error::Flash)?;

            let mut readback = [0u8; MAX_ENCODED_SIZE];
            self.flash
                .blocking_read(SETTINGS_OFFSET, &mut readback)
                .map_err(Error::Flash)?;
            if readback[..encoded_len] != block[..encoded_len] {
                error!("settings: save verification failed");
                return Err(Error::SaveVerifyFailed);
            }

            info!("settings: saved {} bytes", encoded_len);
            Ok(())
        }

        /// Erase the stored settings.
        ///
        /// # Errors
        ///
        /// [`Error::Flash`] on erase failure.
        pub fn clear(&mut self) -> Result<()> {
            self.flash
                .blocking_erase(SETTINGS_OFFSET, SETTINGS_OFFSET + ERASE_SIZE as u32)
                .map_err(Error::Flash)?;
            info!("settings: cleared");
            Ok(())
        }
    }
}

#[cfg(not(feature = "host"))]
pub use store::SettingsStore;
