//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::LocomotionInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    let held = |keys: &[KeyCode]| keys.iter().any(|k| keyboard.pressed(*k));

    input.left = held(&[KeyCode::KeyA, KeyCode::ArrowLeft]);
    input.right = held(&[KeyCode::KeyD, KeyCode::ArrowRight]);
    input.up = held(&[KeyCode::KeyW, KeyCode::ArrowUp]);
    input.down = held(&[KeyCode::KeyS, KeyCode::ArrowDown]);

    input.jump = held(&[KeyCode::Space, KeyCode::KeyK]);
    input.jump_pressed |= keyboard.any_just_pressed([KeyCode::Space, KeyCode::KeyK]);
}
