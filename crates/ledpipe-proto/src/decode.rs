//! The stateless command interpreter.
//!
//! `(command id, payload)` in, [`LightingEvent`] out. The mapping is total:
//! unknown ids, unmodeled commands, malformed payloads and unmapped vendor
//! addresses all decode to [`LightingEvent::Ignore`] — games feed this pipe
//! whatever their SDK binding produces, and a bad frame must never cost
//! them the session.

use tracing::{debug, info, trace};

use crate::color::Color;
use crate::command::Command;
use crate::device::DeviceTarget;
use crate::event::LightingEvent;
use crate::keymap::{self, BITMAP_BYTES_PER_CELL, BITMAP_SIZE, KEY_TABLE};
use crate::led::LedId;

/// Decode one frame into its semantic effect.
pub fn decode(command_id: u32, payload: &[u8]) -> LightingEvent {
    let Some(command) = Command::from_u32(command_id) else {
        info!(command_id, "unknown command id");
        return LightingEvent::Ignore;
    };

    match command {
        Command::LogLine => LightingEvent::Log(String::from_utf8_lossy(payload).into_owned()),
        Command::Init | Command::InitWithName => {
            debug!(name = %String::from_utf8_lossy(payload), "client init");
            LightingEvent::Ignore
        }
        Command::Shutdown => LightingEvent::Reset,
        Command::SetTargetDevice => match read_u32(payload, 0) {
            Some(bits) => LightingEvent::SetMode(DeviceTarget::from_bits(bits)),
            None => short_payload(command, payload),
        },
        Command::SetLighting => match Color::from_rgb_bytes(payload) {
            Some(color) => LightingEvent::SetGlobal(color),
            None => short_payload(command, payload),
        },
        Command::SetLightingForKeyWithKeyName => {
            decode_set_key(command, payload, keymap::from_key_name)
        }
        Command::SetLightingForKeyWithScanCode => {
            decode_set_key(command, payload, keymap::from_scan_code)
        }
        Command::SetLightingForKeyWithHidCode => {
            decode_set_key(command, payload, keymap::from_hid_code)
        }
        Command::SetLightingFromBitmap => decode_bitmap(payload),
        Command::ExcludeKeysFromBitmap => decode_exclude(payload),
        // Effects, config options, save/restore and quartz/zone addressing
        // are accepted but not modeled.
        _ => LightingEvent::Ignore,
    }
}

fn read_u32(payload: &[u8], offset: usize) -> Option<u32> {
    let bytes = payload.get(offset..offset + 4)?;
    Some(u32::from_le_bytes(bytes.try_into().expect("4-byte slice")))
}

fn short_payload(command: Command, payload: &[u8]) -> LightingEvent {
    debug!(?command, len = payload.len(), "payload too short, dropping");
    LightingEvent::Ignore
}

fn decode_set_key(
    command: Command,
    payload: &[u8],
    resolve: fn(u32) -> Option<LedId>,
) -> LightingEvent {
    let (Some(code), Some(rest)) = (read_u32(payload, 0), payload.get(4..)) else {
        return short_payload(command, payload);
    };
    let Some(color) = Color::from_rgb_bytes(rest) else {
        return short_payload(command, payload);
    };
    match resolve(code) {
        Some(led) => LightingEvent::SetKey { led, color },
        None => {
            // Expected: vendor address spaces are sparser than the universe.
            trace!(?command, code, "unmapped key address");
            LightingEvent::Ignore
        }
    }
}

fn decode_bitmap(payload: &[u8]) -> LightingEvent {
    // All-or-nothing: validate the full grid before producing any cell, so
    // a truncated frame can never half-paint the board.
    if payload.len() < BITMAP_SIZE {
        return short_payload(Command::SetLightingFromBitmap, payload);
    }

    let mut cells = Vec::with_capacity(KEY_TABLE.len());
    for def in KEY_TABLE {
        if let Some(cell) = def.bitmap_cell {
            let offset = cell as usize * BITMAP_BYTES_PER_CELL;
            if let Some(color) = Color::from_bgra_bytes(&payload[offset..]) {
                cells.push((def.led, color));
            }
        }
    }
    LightingEvent::SetBitmap(cells)
}

fn decode_exclude(payload: &[u8]) -> LightingEvent {
    let Some(count) = read_u32(payload, 0) else {
        return short_payload(Command::ExcludeKeysFromBitmap, payload);
    };
    let count = count as usize;
    let Some(needed) = count
        .checked_mul(4)
        .and_then(|bytes| bytes.checked_add(4))
    else {
        return short_payload(Command::ExcludeKeysFromBitmap, payload);
    };
    if payload.len() < needed {
        return short_payload(Command::ExcludeKeysFromBitmap, payload);
    }

    let mut leds = Vec::with_capacity(count);
    for i in 0..count {
        // Offsets validated above; read_u32 cannot fail here.
        if let Some(code) = read_u32(payload, 4 + i * 4) {
            if let Some(led) = keymap::from_key_name(code) {
                leds.push(led);
            }
        }
    }
    LightingEvent::ExcludeKeys(leds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{BITMAP_HEIGHT, BITMAP_WIDTH};

    fn set_key_payload(code: u32, r: u8, g: u8, b: u8) -> Vec<u8> {
        let mut payload = code.to_le_bytes().to_vec();
        payload.extend_from_slice(&[r, g, b]);
        payload
    }

    #[test]
    fn decoding_is_idempotent() {
        let payload = set_key_payload(0x01E, 1, 2, 3);
        let first = decode(24, &payload);
        let second = decode(24, &payload);
        assert_eq!(first, second);
        assert!(!matches!(first, LightingEvent::Ignore));
    }

    #[test]
    fn log_line_is_lossy_utf8() {
        assert_eq!(
            decode(0, b"hello from game"),
            LightingEvent::Log("hello from game".into())
        );
        // Invalid UTF-8 is tolerated, not fatal.
        assert!(matches!(decode(0, &[0xFF, 0xFE]), LightingEvent::Log(_)));
    }

    #[test]
    fn init_is_informational() {
        assert_eq!(decode(1, b"game.exe"), LightingEvent::Ignore);
        assert_eq!(decode(2, b"game.exe"), LightingEvent::Ignore);
    }

    #[test]
    fn shutdown_resets() {
        assert_eq!(decode(32, &[]), LightingEvent::Reset);
    }

    #[test]
    fn set_target_device_reads_flags() {
        assert_eq!(
            decode(13, &4u32.to_le_bytes()),
            LightingEvent::SetMode(DeviceTarget::PER_KEY_RGB)
        );
        assert_eq!(decode(13, &[1, 0]), LightingEvent::Ignore);
    }

    #[test]
    fn set_lighting_implies_opaque() {
        assert_eq!(
            decode(15, &[10, 20, 30]),
            LightingEvent::SetGlobal(Color::rgb(10, 20, 30))
        );
    }

    #[test]
    fn set_lighting_short_payload_ignored() {
        assert_eq!(decode(15, &[10, 20]), LightingEvent::Ignore);
    }

    #[test]
    fn set_key_by_each_scheme() {
        // A: key name 0x1E, scan code 0x1E, HID code 0x04.
        let expected = LightingEvent::SetKey {
            led: LedId::A,
            color: Color::rgb(1, 2, 3),
        };
        assert_eq!(decode(24, &set_key_payload(0x01E, 1, 2, 3)), expected);
        assert_eq!(decode(21, &set_key_payload(0x01E, 1, 2, 3)), expected);
        assert_eq!(decode(22, &set_key_payload(0x004, 1, 2, 3)), expected);
    }

    #[test]
    fn set_key_unmapped_address_dropped() {
        assert_eq!(decode(24, &set_key_payload(0xDEAD, 1, 2, 3)), LightingEvent::Ignore);
    }

    #[test]
    fn set_key_short_payload_ignored() {
        assert_eq!(decode(24, &[0x1E, 0, 0, 0, 10]), LightingEvent::Ignore);
    }

    #[test]
    fn bitmap_corrects_channel_order() {
        let mut payload = vec![0u8; BITMAP_SIZE];
        // Escape is cell 0; write B,G,R,A.
        payload[0..4].copy_from_slice(&[30, 20, 10, 200]);

        let LightingEvent::SetBitmap(cells) = decode(20, &payload) else {
            panic!("expected bitmap event");
        };
        let (_, color) = cells
            .iter()
            .find(|(led, _)| *led == LedId::Escape)
            .unwrap();
        assert_eq!(
            *color,
            Color {
                r: 10,
                g: 20,
                b: 30,
                a: 200
            }
        );
    }

    #[test]
    fn bitmap_covers_every_mapped_cell() {
        let payload = vec![0u8; BITMAP_SIZE];
        let LightingEvent::SetBitmap(cells) = decode(20, &payload) else {
            panic!("expected bitmap event");
        };
        let mapped = KEY_TABLE
            .iter()
            .filter(|def| def.bitmap_cell.is_some())
            .count();
        assert_eq!(cells.len(), mapped);
        assert!(mapped < BITMAP_WIDTH * BITMAP_HEIGHT);
    }

    #[test]
    fn bitmap_short_payload_applies_nothing() {
        assert_eq!(decode(20, &[0u8; BITMAP_SIZE - 1]), LightingEvent::Ignore);
    }

    #[test]
    fn exclude_keys_resolves_names() {
        let mut payload = 2u32.to_le_bytes().to_vec();
        payload.extend_from_slice(&0x01Eu32.to_le_bytes()); // A
        payload.extend_from_slice(&0xDEADu32.to_le_bytes()); // unmapped

        assert_eq!(
            decode(27, &payload),
            LightingEvent::ExcludeKeys(vec![LedId::A])
        );
    }

    #[test]
    fn exclude_keys_short_list_ignored() {
        let mut payload = 3u32.to_le_bytes().to_vec();
        payload.extend_from_slice(&0x01Eu32.to_le_bytes());
        assert_eq!(decode(27, &payload), LightingEvent::Ignore);
    }

    #[test]
    fn exclude_keys_huge_count_ignored() {
        let payload = u32::MAX.to_le_bytes().to_vec();
        assert_eq!(decode(27, &payload), LightingEvent::Ignore);
    }

    #[test]
    fn unmodeled_commands_ignored() {
        for id in [3, 4, 12, 14, 16, 17, 18, 19, 23, 25, 26, 28, 29, 30, 31] {
            assert_eq!(decode(id, &[0u8; 16]), LightingEvent::Ignore);
        }
    }

    #[test]
    fn unknown_command_ignored() {
        assert_eq!(decode(999, &[1, 2, 3]), LightingEvent::Ignore);
    }
}
