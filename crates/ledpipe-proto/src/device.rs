use serde::Serialize;

/// Which device classes a client is currently targeting.
///
/// A bit-flag set; the flag values are the vendor SDK's. The interesting
/// distinction for the gateway is [`PER_KEY_RGB`](DeviceTarget::PER_KEY_RGB):
/// with it set, a global lighting command is a per-key fill; without it, the
/// command only paints the device background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceTarget(u32);

impl DeviceTarget {
    pub const NONE: DeviceTarget = DeviceTarget(0);
    pub const MONOCHROME: DeviceTarget = DeviceTarget(1 << 0);
    pub const RGB: DeviceTarget = DeviceTarget(1 << 1);
    pub const PER_KEY_RGB: DeviceTarget = DeviceTarget(1 << 2);
    pub const ALL: DeviceTarget = DeviceTarget(1 | 1 << 1 | 1 << 2);

    /// Interpret raw wire bits. Unknown bits are preserved — the SDK has
    /// grown flags before and clients echo whatever they were compiled with.
    pub const fn from_bits(bits: u32) -> Self {
        DeviceTarget(bits)
    }

    /// The raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set in `self`.
    pub const fn contains(self, other: DeviceTarget) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for DeviceTarget {
    fn default() -> Self {
        DeviceTarget::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_class() {
        assert!(DeviceTarget::ALL.contains(DeviceTarget::MONOCHROME));
        assert!(DeviceTarget::ALL.contains(DeviceTarget::RGB));
        assert!(DeviceTarget::ALL.contains(DeviceTarget::PER_KEY_RGB));
    }

    #[test]
    fn monochrome_is_not_per_key() {
        assert!(!DeviceTarget::MONOCHROME.contains(DeviceTarget::PER_KEY_RGB));
    }

    #[test]
    fn wire_bits_roundtrip() {
        assert_eq!(DeviceTarget::from_bits(7), DeviceTarget::ALL);
        assert_eq!(DeviceTarget::from_bits(4).bits(), 4);
        // Unknown high bits survive.
        assert_eq!(DeviceTarget::from_bits(0x80).bits(), 0x80);
    }

    #[test]
    fn default_targets_everything() {
        assert_eq!(DeviceTarget::default(), DeviceTarget::ALL);
    }
}
