//! Encode options and their string/environment forms.

use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, Mode, Version};

/// Options for one encode. `None` fields are chosen automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level (default M)
    pub ec_level: ECLevel,
    /// Force a version instead of picking the smallest that fits
    pub version: Option<Version>,
    /// Force a mode instead of detecting it from the text
    pub mode: Option<Mode>,
    /// Force a mask instead of running the penalty search
    pub mask_pattern: Option<MaskPattern>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            version: None,
            mode: None,
            mask_pattern: None,
        }
    }
}

impl EncodeOptions {
    /// Level M, everything else auto
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the level taken from `QR_DEFAULT_ECC` when set
    pub fn from_env() -> Self {
        Self {
            ec_level: default_ec_level(),
            ..Self::default()
        }
    }

    /// Set the error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Force a version instead of picking the smallest that fits
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Force a mode instead of detecting it from the text
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Force a mask instead of searching all eight
    pub fn with_mask_pattern(mut self, mask: MaskPattern) -> Self {
        self.mask_pattern = Some(mask);
        self
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(QrError::InvalidOption {
                option: "error correction level",
                value: s.to_string(),
                expected: "L, M, Q or H",
            }),
        }
    }
}

fn is_auto(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("auto")
}

/// `auto`, `numeric`, `alphanumeric` or `byte`
pub fn parse_mode_option(s: &str) -> Result<Option<Mode>> {
    if is_auto(s) {
        return Ok(None);
    }
    match s.trim().to_ascii_lowercase().as_str() {
        "numeric" => Ok(Some(Mode::Numeric)),
        "alphanumeric" => Ok(Some(Mode::Alphanumeric)),
        "byte" => Ok(Some(Mode::Byte)),
        _ => Err(QrError::InvalidOption {
            option: "mode",
            value: s.to_string(),
            expected: "auto, numeric, alphanumeric or byte",
        }),
    }
}

fn parse_integer(s: &str, option: &'static str, expected: &'static str) -> Result<i64> {
    s.trim().parse::<i64>().map_err(|_| QrError::InvalidOption {
        option,
        value: s.to_string(),
        expected,
    })
}

fn narrow(value: i64, parameter: &'static str, max: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|&v| i64::from(v) <= max)
        .ok_or(QrError::OutOfRangeParameter {
            parameter,
            value,
            min: 0,
            max,
        })
}

/// `auto` or a version number 1-40
pub fn parse_version_option(s: &str) -> Result<Option<Version>> {
    if is_auto(s) {
        return Ok(None);
    }
    let value = parse_integer(s, "version", "auto or 1-40")?;
    let number = u8::try_from(value).map_err(|_| QrError::OutOfRangeParameter {
        parameter: "version",
        value,
        min: 1,
        max: 40,
    })?;
    Version::new(number).map(Some)
}

/// `auto` or a mask index 0-7
pub fn parse_mask_option(s: &str) -> Result<Option<MaskPattern>> {
    if is_auto(s) {
        return Ok(None);
    }
    let value = parse_integer(s, "mask pattern", "auto or 0-7")?;
    let index = narrow(value, "mask pattern", 7)?;
    MaskPattern::from_index(index).map(Some)
}

const DEFAULT_MODULE_SIZE_PX: u32 = 10;
const MAX_MODULE_SIZE: u32 = 100;
const DEFAULT_QUIET_ZONE_MODULES: u32 = 4;
const MAX_QUIET_ZONE: u32 = 64;

fn parse_value<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse::<T>().ok())
}

/// Level from an optional `QR_DEFAULT_ECC` value; anything unparseable gives M
pub fn ec_level_from(value: Option<&str>) -> ECLevel {
    parse_value(value).unwrap_or(ECLevel::M)
}

/// Pixels per module, limited to 1-100
pub fn clamp_module_size(size: u32) -> u32 {
    size.clamp(1, MAX_MODULE_SIZE)
}

/// Quiet zone width in modules, limited to 64
pub fn clamp_quiet_zone(modules: u32) -> u32 {
    modules.min(MAX_QUIET_ZONE)
}

/// Module size from an optional `QR_DEFAULT_MODULE_SIZE` value
pub fn module_size_from(value: Option<&str>) -> u32 {
    clamp_module_size(parse_value(value).unwrap_or(DEFAULT_MODULE_SIZE_PX))
}

/// Quiet zone from an optional `QR_DEFAULT_QUIET_ZONE` value
pub fn quiet_zone_from(value: Option<&str>) -> u32 {
    clamp_quiet_zone(parse_value(value).unwrap_or(DEFAULT_QUIET_ZONE_MODULES))
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// `QR_DEFAULT_ECC`, falling back to M
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| ec_level_from(env_value("QR_DEFAULT_ECC").as_deref()))
}

static DEFAULT_MODULE_SIZE: OnceLock<u32> = OnceLock::new();

/// `QR_DEFAULT_MODULE_SIZE`, falling back to 10 pixels per module
pub fn default_module_size() -> u32 {
    *DEFAULT_MODULE_SIZE
        .get_or_init(|| module_size_from(env_value("QR_DEFAULT_MODULE_SIZE").as_deref()))
}

static DEFAULT_QUIET_ZONE: OnceLock<u32> = OnceLock::new();

/// `QR_DEFAULT_QUIET_ZONE`, falling back to the standard 4 modules
pub fn default_quiet_zone() -> u32 {
    *DEFAULT_QUIET_ZONE
        .get_or_init(|| quiet_zone_from(env_value("QR_DEFAULT_QUIET_ZONE").as_deref()))
}
