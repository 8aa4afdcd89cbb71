//! The vendor SDK command id table.
//!
//! Ids follow the wrapper shim's numbering exactly; the table is open-ended
//! by design — ids this build does not know decode to an ignore event, never
//! a failure, so newer SDK revisions keep streaming.

/// A recognized vendor SDK command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Command {
    LogLine = 0,
    Init = 1,
    InitWithName = 2,
    GetSdkVersion = 3,
    GetConfigOptionNumber = 4,
    GetConfigOptionBool = 5,
    GetConfigOptionColor = 6,
    GetConfigOptionRect = 7,
    GetConfigOptionString = 8,
    GetConfigOptionKeyInput = 9,
    GetConfigOptionSelect = 10,
    GetConfigOptionRange = 11,
    SetConfigOptionLabel = 12,
    SetTargetDevice = 13,
    SaveCurrentLighting = 14,
    SetLighting = 15,
    RestoreLighting = 16,
    FlashLighting = 17,
    PulseLighting = 18,
    StopEffects = 19,
    SetLightingFromBitmap = 20,
    SetLightingForKeyWithScanCode = 21,
    SetLightingForKeyWithHidCode = 22,
    SetLightingForKeyWithQuartzCode = 23,
    SetLightingForKeyWithKeyName = 24,
    SaveLightingForKey = 25,
    RestoreLightingForKey = 26,
    ExcludeKeysFromBitmap = 27,
    FlashSingleKey = 28,
    PulseSingleKey = 29,
    StopEffectsOnKey = 30,
    SetLightingForTargetZone = 31,
    Shutdown = 32,
}

impl Command {
    /// Look up a wire command id. `None` means the id is unknown to this
    /// build (a newer SDK revision, or garbage).
    pub fn from_u32(id: u32) -> Option<Command> {
        use Command::*;
        Some(match id {
            0 => LogLine,
            1 => Init,
            2 => InitWithName,
            3 => GetSdkVersion,
            4 => GetConfigOptionNumber,
            5 => GetConfigOptionBool,
            6 => GetConfigOptionColor,
            7 => GetConfigOptionRect,
            8 => GetConfigOptionString,
            9 => GetConfigOptionKeyInput,
            10 => GetConfigOptionSelect,
            11 => GetConfigOptionRange,
            12 => SetConfigOptionLabel,
            13 => SetTargetDevice,
            14 => SaveCurrentLighting,
            15 => SetLighting,
            16 => RestoreLighting,
            17 => FlashLighting,
            18 => PulseLighting,
            19 => StopEffects,
            20 => SetLightingFromBitmap,
            21 => SetLightingForKeyWithScanCode,
            22 => SetLightingForKeyWithHidCode,
            23 => SetLightingForKeyWithQuartzCode,
            24 => SetLightingForKeyWithKeyName,
            25 => SaveLightingForKey,
            26 => RestoreLightingForKey,
            27 => ExcludeKeysFromBitmap,
            28 => FlashSingleKey,
            29 => PulseSingleKey,
            30 => StopEffectsOnKey,
            31 => SetLightingForTargetZone,
            32 => Shutdown,
            _ => return None,
        })
    }

    /// The wire id of this command.
    pub fn id(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_all_known_ids() {
        for id in 0..=32 {
            let command = Command::from_u32(id).unwrap();
            assert_eq!(command.id(), id);
        }
    }

    #[test]
    fn unknown_ids_are_none() {
        assert_eq!(Command::from_u32(33), None);
        assert_eq!(Command::from_u32(u32::MAX), None);
    }

    #[test]
    fn spot_check_numbering() {
        assert_eq!(Command::from_u32(15), Some(Command::SetLighting));
        assert_eq!(Command::from_u32(20), Some(Command::SetLightingFromBitmap));
        assert_eq!(
            Command::from_u32(24),
            Some(Command::SetLightingForKeyWithKeyName)
        );
        assert_eq!(Command::from_u32(27), Some(Command::ExcludeKeysFromBitmap));
        assert_eq!(Command::from_u32(32), Some(Command::Shutdown));
    }
}
