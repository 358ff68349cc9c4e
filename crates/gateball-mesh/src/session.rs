use btleplug::api::{
    Central, CentralEvent, CharPropFlags, Characteristic, Manager as _, Peripheral as _,
    ScanFilter, WriteType,
};
use btleplug::platform::{Manager, Peripheral};
use futures::stream::StreamExt;
use tokio::sync::mpsc;

use crate::block::{self, BlockEvent};
use crate::error::MeshError;
use crate::uuids;

/// The four block characteristics assigned to fixed roles.
#[derive(Debug, Clone)]
pub struct BlockCharacteristics {
    pub indicate: Characteristic,
    pub notify: Characteristic,
    pub write: Characteristic,
    pub write_without_response: Characteristic,
}

/// Name of a characteristic's primary property, lower-cased for sorting.
fn primary_property_name(properties: CharPropFlags) -> &'static str {
    if properties.contains(CharPropFlags::INDICATE) {
        "indicate"
    } else if properties.contains(CharPropFlags::NOTIFY) {
        "notify"
    } else if properties.contains(CharPropFlags::WRITE) {
        "write"
    } else if properties.contains(CharPropFlags::WRITE_WITHOUT_RESPONSE) {
        "writewithoutresponse"
    } else {
        "unknown"
    }
}

/// Assign discovered characteristics to their roles.
///
/// Discovery order is not guaranteed by the stack, so the four block
/// characteristics are sorted by primary property name first; the sorted
/// order is exactly indicate, notify, write, write-without-response.
pub fn assign_roles(
    discovered: impl IntoIterator<Item = Characteristic>,
) -> Result<BlockCharacteristics, MeshError> {
    let mut chars: Vec<Characteristic> = discovered
        .into_iter()
        .filter(|c| uuids::CHARACTERISTICS.contains(&c.uuid))
        .collect();
    chars.sort_by(|a, b| {
        primary_property_name(a.properties).cmp(&primary_property_name(b.properties))
    });

    let chars: [Characteristic; 4] = chars
        .try_into()
        .map_err(|v: Vec<Characteristic>| MeshError::MissingCharacteristics(v.len()))?;
    let [indicate, notify, write, write_without_response] = chars;
    Ok(BlockCharacteristics {
        indicate,
        notify,
        write,
        write_without_response,
    })
}

/// Run a full block session: scan, connect to the first MESH block, perform
/// the activation handshake, then forward decoded events until the peer or
/// the receiver goes away.
///
/// Every step is sequential; a failed step logs at the call site (via `?`
/// and the caller) and ends the session — there are no retries.
pub async fn run(events_out: mpsc::UnboundedSender<BlockEvent>) -> Result<(), MeshError> {
    let manager = Manager::new().await?;
    let central = manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .ok_or(MeshError::NoAdapter)?;

    let mut adapter_events = central.events().await?;
    central
        .start_scan(ScanFilter {
            services: vec![uuids::SERVICE],
        })
        .await?;
    tracing::info!("scanning for MESH blocks");

    while let Some(event) = adapter_events.next().await {
        let CentralEvent::DeviceDiscovered(id) = event else {
            continue;
        };
        let peripheral = central.peripheral(&id).await?;
        let Some(properties) = peripheral.properties().await? else {
            continue;
        };
        let Some(name) = properties.local_name else {
            continue;
        };
        tracing::info!(%name, "discovered peripheral");
        if !block::is_mesh_block(&name) {
            continue;
        }

        central.stop_scan().await?;
        peripheral.connect().await?;
        tracing::info!(%name, "connected");

        run_block(&peripheral, &events_out).await?;
        return Ok(());
    }

    Ok(())
}

/// Handshake with a connected block and pump its notifications.
async fn run_block(
    peripheral: &Peripheral,
    events_out: &mpsc::UnboundedSender<BlockEvent>,
) -> Result<(), MeshError> {
    peripheral.discover_services().await?;
    let roles = assign_roles(peripheral.characteristics())?;

    peripheral.subscribe(&roles.indicate).await?;
    peripheral.subscribe(&roles.notify).await?;

    let mut notifications = peripheral.notifications().await?;

    peripheral
        .write(
            &roles.write,
            &block::feature_activation_command(),
            WriteType::WithResponse,
        )
        .await?;
    tracing::info!("block ready");

    while let Some(notification) = notifications.next().await {
        if notification.uuid == uuids::INDICATE {
            tracing::debug!(len = notification.value.len(), "indicate frame");
            continue;
        }
        match block::decode_notify(&notification.value) {
            Some(event) => {
                if events_out.send(event).is_err() {
                    // Receiver dropped; the session has no one to tell.
                    return Ok(());
                }
            },
            None => tracing::debug!(frame = ?notification.value, "unrecognized frame"),
        }
    }

    tracing::warn!("notification stream ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn characteristic(uuid: Uuid, properties: CharPropFlags) -> Characteristic {
        Characteristic {
            uuid,
            service_uuid: uuids::SERVICE,
            properties,
            descriptors: BTreeSet::new(),
        }
    }

    fn block_set() -> Vec<Characteristic> {
        vec![
            characteristic(uuids::INDICATE, CharPropFlags::INDICATE),
            characteristic(uuids::NOTIFY, CharPropFlags::NOTIFY),
            characteristic(uuids::WRITE, CharPropFlags::WRITE),
            characteristic(
                uuids::WRITE_WO_RESPONSE,
                CharPropFlags::WRITE_WITHOUT_RESPONSE,
            ),
        ]
    }

    #[test]
    fn roles_assigned_regardless_of_discovery_order() {
        // Every permutation of the four roles must sort identically.
        let base = block_set();
        let permutations: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [3, 2, 1, 0],
            [1, 3, 0, 2],
            [2, 0, 3, 1],
            [3, 0, 1, 2],
            [1, 2, 3, 0],
        ];
        for order in permutations {
            let shuffled: Vec<Characteristic> =
                order.iter().map(|&i| base[i].clone()).collect();
            let roles = assign_roles(shuffled).expect("roles should assign");
            assert_eq!(roles.indicate.uuid, uuids::INDICATE);
            assert_eq!(roles.notify.uuid, uuids::NOTIFY);
            assert_eq!(roles.write.uuid, uuids::WRITE);
            assert_eq!(roles.write_without_response.uuid, uuids::WRITE_WO_RESPONSE);
        }
    }

    #[test]
    fn foreign_characteristics_are_ignored() {
        let mut chars = block_set();
        chars.push(characteristic(
            Uuid::from_u128(0xdead_beef),
            CharPropFlags::READ,
        ));
        let roles = assign_roles(chars).expect("extra characteristics are filtered");
        assert_eq!(roles.notify.uuid, uuids::NOTIFY);
    }

    #[test]
    fn missing_characteristic_is_an_error() {
        let mut chars = block_set();
        chars.pop();
        match assign_roles(chars) {
            Err(MeshError::MissingCharacteristics(3)) => {},
            other => panic!("expected MissingCharacteristics(3), got {other:?}"),
        }
    }

    #[test]
    fn property_names_sort_in_role_order() {
        let names = [
            primary_property_name(CharPropFlags::INDICATE),
            primary_property_name(CharPropFlags::NOTIFY),
            primary_property_name(CharPropFlags::WRITE),
            primary_property_name(CharPropFlags::WRITE_WITHOUT_RESPONSE),
        ];
        let mut sorted = names;
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
