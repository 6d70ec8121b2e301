use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zbus::zvariant::{OwnedValue, Value};

use crate::{
    herald_err,
    utils::errors::{HeraldError, HeraldErrorKind},
};

/// Well-known hint keys defined by the wire protocol.
/// Anything outside this list passes through the hint map untouched.
pub mod keys {
    pub const URGENCY: &str = "urgency";
    pub const CATEGORY: &str = "category";
    pub const DESKTOP_ENTRY: &str = "desktop-entry";
    pub const TRANSIENT: &str = "transient";
    pub const RESIDENT: &str = "resident";
    pub const SOUND_NAME: &str = "sound-name";
    pub const IMAGE_PATH: &str = "image-path";
    pub const IMAGE_DATA: &str = "image-data";
}

/// The `urgency` hint, a single byte on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Urgency {
    Low = 0,
    #[default]
    Normal = 1,
    Critical = 2,
}

impl TryFrom<OwnedValue> for Urgency {
    type Error = zbus::Error;

    fn try_from(value: OwnedValue) -> Result<Self, Self::Error> {
        let byte: u8 = value.try_into()?;

        match byte {
            0 => Ok(Self::Low),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Critical),
            other => Err(Self::Error::Failure(format!("urgency out of range: {other}"))),
        }
    }
}

impl From<Urgency> for Value<'static> {
    fn from(value: Urgency) -> Self {
        Value::U8(value as u8)
    }
}

impl FromStr for Urgency {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "critical" => Ok(Self::Critical),
            _ => Err(herald_err!(
                HeraldErrorKind::InvalidFlag,
                "unknown urgency: {}",
                s
            )),
        }
    }
}

impl Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// The `image-data` hint payload, wire signature `(iiibiiay)`.
#[derive(Debug, Clone, PartialEq, zbus::zvariant::Value, zbus::zvariant::OwnedValue)]
pub struct ImageData {
    pub width: i32,
    pub height: i32,
    pub rowstride: i32,
    pub has_alpha: bool,
    pub bits_per_sample: i32,
    pub channels: i32,
    pub data: Vec<u8>,
}

/// Read-only view over a notification's hint map, decoding the well-known
/// keys into their protocol-defined types.
///
/// A missing key is `Ok(None)`; a key carrying a value of the wrong type is
/// a protocol-level error, never a panic.
pub struct Hints<'a> {
    map: &'a HashMap<String, OwnedValue>,
}

impl<'a> Hints<'a> {
    pub fn new(map: &'a HashMap<String, OwnedValue>) -> Self {
        Self { map }
    }

    pub fn urgency(&self) -> Result<Option<Urgency>, HeraldError> {
        self.decode(keys::URGENCY)
    }

    pub fn category(&self) -> Result<Option<String>, HeraldError> {
        self.decode(keys::CATEGORY)
    }

    pub fn desktop_entry(&self) -> Result<Option<String>, HeraldError> {
        self.decode(keys::DESKTOP_ENTRY)
    }

    pub fn transient(&self) -> Result<Option<bool>, HeraldError> {
        self.decode(keys::TRANSIENT)
    }

    pub fn resident(&self) -> Result<Option<bool>, HeraldError> {
        self.decode(keys::RESIDENT)
    }

    pub fn sound_name(&self) -> Result<Option<String>, HeraldError> {
        self.decode(keys::SOUND_NAME)
    }

    pub fn image_path(&self) -> Result<Option<String>, HeraldError> {
        self.decode(keys::IMAGE_PATH)
    }

    pub fn image_data(&self) -> Result<Option<ImageData>, HeraldError> {
        self.decode(keys::IMAGE_DATA)
    }

    fn decode<T>(&self, key: &str) -> Result<Option<T>, HeraldError>
    where
        T: TryFrom<OwnedValue>,
        T::Error: Display,
    {
        match self.map.get(key) {
            Some(value) => T::try_from(value.clone())
                .map(Some)
                .map_err(|e| herald_err!(HeraldErrorKind::InvalidHint, "{}: {}", key, e)),
            None => Ok(None),
        }
    }
}
