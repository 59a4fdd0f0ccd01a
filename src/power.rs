//! DPMS power levels and the value records returned by DPMS queries.
use std::fmt;

use serde::Serialize;

/// `DPMSModeOn` wire constant
pub const DPMS_MODE_ON: u16 = 0;
/// `DPMSModeStandby` wire constant
pub const DPMS_MODE_STANDBY: u16 = 1;
/// `DPMSModeSuspend` wire constant
pub const DPMS_MODE_SUSPEND: u16 = 2;
/// `DPMSModeOff` wire constant
pub const DPMS_MODE_OFF: u16 = 3;

/// Power level a DPMS-capable monitor can be forced into or reported in
///
/// Discriminants are the DPMS protocol's mode codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PowerLevel {
    On = DPMS_MODE_ON,
    Standby = DPMS_MODE_STANDBY,
    Suspend = DPMS_MODE_SUSPEND,
    Off = DPMS_MODE_OFF,
}

impl PowerLevel {
    pub const ALL: [PowerLevel; 4] = [
        PowerLevel::On,
        PowerLevel::Standby,
        PowerLevel::Suspend,
        PowerLevel::Off,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerLevel::On => "On",
            PowerLevel::Standby => "Standby",
            PowerLevel::Suspend => "Suspend",
            PowerLevel::Off => "Off",
        }
    }
}

impl From<PowerLevel> for u16 {
    fn from(level: PowerLevel) -> u16 {
        level as u16
    }
}

/// Error returned when a code is not one of the four DPMS modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLevel(pub u16);

impl TryFrom<u16> for PowerLevel {
    type Error = UnknownLevel;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            DPMS_MODE_ON => Ok(PowerLevel::On),
            DPMS_MODE_STANDBY => Ok(PowerLevel::Standby),
            DPMS_MODE_SUSPEND => Ok(PowerLevel::Suspend),
            DPMS_MODE_OFF => Ok(PowerLevel::Off),
            other => Err(UnknownLevel(other)),
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of probing the server for the DPMS extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExtensionInfo {
    pub supported: bool,
    pub event_base: i32,
    pub error_base: i32,
}

impl ExtensionInfo {
    /// Answer for a server without the extension
    pub const ABSENT: ExtensionInfo = ExtensionInfo {
        supported: false,
        event_base: 0,
        error_base: 0,
    };
}

/// DPMS extension version reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Idle thresholds in seconds; zero disables the corresponding stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Timeouts {
    pub standby: u16,
    pub suspend: u16,
    pub off: u16,
}

impl Timeouts {
    pub fn new(standby: u16, suspend: u16, off: u16) -> Self {
        Timeouts {
            standby,
            suspend,
            off,
        }
    }
}

impl From<(u16, u16, u16)> for Timeouts {
    fn from((standby, suspend, off): (u16, u16, u16)) -> Self {
        Timeouts::new(standby, suspend, off)
    }
}

impl From<Timeouts> for (u16, u16, u16) {
    fn from(t: Timeouts) -> Self {
        (t.standby, t.suspend, t.off)
    }
}

/// Current power level and whether DPMS is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Info {
    /// Raw mode code as reported by the server
    pub power_level: u16,
    pub enabled: bool,
}

impl Info {
    /// Decode the reported level, `None` for codes outside the enumeration
    pub fn level(&self) -> Option<PowerLevel> {
        PowerLevel::try_from(self.power_level).ok()
    }

    /// Human-readable level, `Unknown (<n>)` for unrecognized codes
    pub fn level_name(&self) -> String {
        match self.level() {
            Some(level) => level.name().to_string(),
            None => format!("Unknown ({})", self.power_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_constants_match_protocol() {
        assert_eq!(u16::from(PowerLevel::On), 0);
        assert_eq!(u16::from(PowerLevel::Standby), 1);
        assert_eq!(u16::from(PowerLevel::Suspend), 2);
        assert_eq!(u16::from(PowerLevel::Off), 3);
    }

    #[test]
    fn try_from_accepts_all_levels() {
        for level in PowerLevel::ALL {
            assert_eq!(PowerLevel::try_from(u16::from(level)), Ok(level));
        }
    }

    #[test]
    fn try_from_rejects_unknown_code() {
        assert_eq!(PowerLevel::try_from(4), Err(UnknownLevel(4)));
        assert_eq!(PowerLevel::try_from(1000), Err(UnknownLevel(1000)));
    }

    #[test]
    fn level_display_names() {
        assert_eq!(PowerLevel::On.to_string(), "On");
        assert_eq!(PowerLevel::Standby.to_string(), "Standby");
        assert_eq!(PowerLevel::Suspend.to_string(), "Suspend");
        assert_eq!(PowerLevel::Off.to_string(), "Off");
    }

    #[test]
    fn info_decodes_level() {
        let info = Info {
            power_level: DPMS_MODE_SUSPEND,
            enabled: true,
        };
        assert_eq!(info.level(), Some(PowerLevel::Suspend));
        assert_eq!(info.level_name(), "Suspend");
    }

    #[test]
    fn info_unknown_level_name() {
        let info = Info {
            power_level: 7,
            enabled: false,
        };
        assert_eq!(info.level(), None);
        assert_eq!(info.level_name(), "Unknown (7)");
    }

    #[test]
    fn timeouts_tuple_conversion() {
        let t = Timeouts::from((60, 120, 300));
        assert_eq!(t, Timeouts::new(60, 120, 300));
        assert_eq!(<(u16, u16, u16)>::from(t), (60, 120, 300));
    }

    #[test]
    fn version_display() {
        let v = Version { major: 1, minor: 2 };
        assert_eq!(v.to_string(), "1.2");
    }
}
