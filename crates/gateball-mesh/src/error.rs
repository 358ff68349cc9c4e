/// Failures surfaced by the BLE session.
#[derive(Debug)]
pub enum MeshError {
    /// No Bluetooth adapter was available on this host.
    NoAdapter,
    /// The block exposed the wrong number of known characteristics.
    MissingCharacteristics(usize),
    /// Underlying BLE stack failure.
    Ble(btleplug::Error),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAdapter => write!(f, "no bluetooth adapter found"),
            Self::MissingCharacteristics(n) => {
                write!(f, "expected 4 block characteristics, discovered {n}")
            },
            Self::Ble(e) => write!(f, "ble error: {e}"),
        }
    }
}

impl std::error::Error for MeshError {}

impl From<btleplug::Error> for MeshError {
    fn from(e: btleplug::Error) -> Self {
        Self::Ble(e)
    }
}
