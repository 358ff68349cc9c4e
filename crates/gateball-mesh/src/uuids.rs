use uuid::Uuid;

/// GATT service advertised by every MESH block.
pub const SERVICE: Uuid = Uuid::from_u128(0x72c90001_57a9_4d40_b746_534e22ec9f9e);

/// Indication characteristic (block status frames).
pub const INDICATE: Uuid = Uuid::from_u128(0x72c90005_57a9_4d40_b746_534e22ec9f9e);

/// Notification characteristic (sensor event frames).
pub const NOTIFY: Uuid = Uuid::from_u128(0x72c90003_57a9_4d40_b746_534e22ec9f9e);

/// Write-with-response characteristic (commands).
pub const WRITE: Uuid = Uuid::from_u128(0x72c90004_57a9_4d40_b746_534e22ec9f9e);

/// Write-without-response characteristic.
pub const WRITE_WO_RESPONSE: Uuid = Uuid::from_u128(0x72c90002_57a9_4d40_b746_534e22ec9f9e);

/// The four block characteristics, in role order.
pub const CHARACTERISTICS: [Uuid; 4] = [INDICATE, NOTIFY, WRITE, WRITE_WO_RESPONSE];

/// Advertised-name prefix shared by the MESH block family.
pub const BLOCK_NAME_PREFIX: &str = "MESH-100";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characteristics_share_the_service_base() {
        // Only the leading 32 bits distinguish the five UUIDs.
        const BASE_MASK: u128 = 0xffff_ffff_ffff_ffff_ffff_ffff;
        for uuid in CHARACTERISTICS {
            assert_eq!(uuid.as_u128() & BASE_MASK, SERVICE.as_u128() & BASE_MASK);
        }
    }

    #[test]
    fn characteristics_are_distinct() {
        for (i, a) in CHARACTERISTICS.iter().enumerate() {
            for b in &CHARACTERISTICS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
