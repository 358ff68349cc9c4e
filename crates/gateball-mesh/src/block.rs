use crate::uuids;

/// Acceleration sample attached to a motion event, in g.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Events decoded from a Move block's notification frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockEvent {
    Shaken(Acceleration),
    Tapped(Acceleration),
    Flipped(Acceleration),
    /// Which face the block came to rest on (1-6).
    Orientation(u8),
}

/// Motion message category byte.
const MSG_MOTION: u8 = 0x01;

const MOTION_TAP: u8 = 0x00;
const MOTION_SHAKE: u8 = 0x01;
const MOTION_FLIP: u8 = 0x02;
const MOTION_ORIENTATION: u8 = 0x03;

/// Raw acceleration unit: 1 g = 1024 counts.
const ACCEL_SCALE: f32 = 1024.0;

/// Append the additive checksum the block expects on every command.
pub fn with_checksum(payload: &[u8]) -> Vec<u8> {
    let sum = payload
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    let mut command = payload.to_vec();
    command.push(sum);
    command
}

/// The feature-activation command: until it is written to the block, no
/// sensor notifications are sent.
pub fn feature_activation_command() -> Vec<u8> {
    with_checksum(&[0x00, 0x02, 0x01])
}

/// Whether an advertised local name belongs to the MESH block family.
pub fn is_mesh_block(local_name: &str) -> bool {
    local_name.starts_with(uuids::BLOCK_NAME_PREFIX)
}

/// Decode one notification frame. Unknown frames decode to `None`; callers
/// log and drop them.
pub fn decode_notify(data: &[u8]) -> Option<BlockEvent> {
    if data.len() < 2 || data[0] != MSG_MOTION {
        return None;
    }
    match data[1] {
        MOTION_TAP => Some(BlockEvent::Tapped(decode_acceleration(data)?)),
        MOTION_SHAKE => Some(BlockEvent::Shaken(decode_acceleration(data)?)),
        MOTION_FLIP => Some(BlockEvent::Flipped(decode_acceleration(data)?)),
        MOTION_ORIENTATION => data.get(2).map(|&face| BlockEvent::Orientation(face)),
        _ => None,
    }
}

/// Acceleration triple: three little-endian i16s starting at byte 2.
fn decode_acceleration(data: &[u8]) -> Option<Acceleration> {
    if data.len() < 8 {
        return None;
    }
    let axis = |offset: usize| {
        i16::from_le_bytes([data[offset], data[offset + 1]]) as f32 / ACCEL_SCALE
    };
    Some(Acceleration {
        x: axis(2),
        y: axis(4),
        z: axis(6),
    })
}
