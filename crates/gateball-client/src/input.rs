use bevy::prelude::*;

use crate::game::Round;

/// Forward pressed keys to the round's input scheme. Each press overwrites
/// the velocity — there is no accumulation.
pub fn keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut round: ResMut<Round>) {
    for key in keys.get_just_pressed() {
        if let Some(code) = key_code_name(*key) {
            round.0.apply_key(code);
        }
    }
}

/// Bevy key codes to KeyboardEvent.code-style names understood by the
/// input schemes.
fn key_code_name(key: KeyCode) -> Option<&'static str> {
    match key {
        KeyCode::ArrowUp => Some("ArrowUp"),
        KeyCode::ArrowDown => Some("ArrowDown"),
        KeyCode::ArrowLeft => Some("ArrowLeft"),
        KeyCode::ArrowRight => Some("ArrowRight"),
        KeyCode::KeyZ => Some("KeyZ"),
        KeyCode::KeyX => Some("KeyX"),
        KeyCode::KeyC => Some("KeyC"),
        KeyCode::KeyA => Some("KeyA"),
        KeyCode::KeyS => Some("KeyS"),
        KeyCode::KeyD => Some("KeyD"),
        KeyCode::KeyQ => Some("KeyQ"),
        KeyCode::KeyW => Some("KeyW"),
        KeyCode::KeyE => Some("KeyE"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_have_names() {
        assert_eq!(key_code_name(KeyCode::ArrowUp), Some("ArrowUp"));
        assert_eq!(key_code_name(KeyCode::KeyQ), Some("KeyQ"));
        assert_eq!(key_code_name(KeyCode::Space), None);
    }
}
