use crate::input::navigation::NavigationInput;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Maps a keyboard event onto the navigation state.
///
/// W/A/S/D pan, I zooms in, K zooms out; the up and down arrows nudge the
/// iteration budget once per press.
pub fn handle_key_event(input: &mut NavigationInput, key_code: KeyCode, state: ElementState) {
    let pressed = state == ElementState::Pressed;

    match key_code {
        KeyCode::KeyW => input.move_up = pressed,
        KeyCode::KeyS => input.move_down = pressed,
        KeyCode::KeyA => input.move_left = pressed,
        KeyCode::KeyD => input.move_right = pressed,
        KeyCode::KeyI => input.zoom_in = pressed,
        KeyCode::KeyK => input.zoom_out = pressed,
        KeyCode::ArrowUp if pressed => input.request_budget_up(),
        KeyCode::ArrowDown if pressed => input.request_budget_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_updates_held_flags() {
        let mut input = NavigationInput::default();

        handle_key_event(&mut input, KeyCode::KeyW, ElementState::Pressed);
        handle_key_event(&mut input, KeyCode::KeyA, ElementState::Pressed);
        handle_key_event(&mut input, KeyCode::KeyI, ElementState::Pressed);

        assert!(input.move_up);
        assert!(input.move_left);
        assert!(input.zoom_in);

        handle_key_event(&mut input, KeyCode::KeyW, ElementState::Released);
        handle_key_event(&mut input, KeyCode::KeyA, ElementState::Released);
        handle_key_event(&mut input, KeyCode::KeyI, ElementState::Released);

        assert!(!input.move_up);
        assert!(!input.move_left);
        assert!(!input.zoom_in);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = NavigationInput::default();

        handle_key_event(&mut input, KeyCode::KeyZ, ElementState::Pressed);

        assert_eq!(input, NavigationInput::default());
    }

    #[test]
    fn test_arrow_release_does_not_request_budget_change() {
        let mut input = NavigationInput::default();
        let untouched = NavigationInput::default();

        handle_key_event(&mut input, KeyCode::ArrowUp, ElementState::Released);
        handle_key_event(&mut input, KeyCode::ArrowDown, ElementState::Released);

        assert_eq!(input, untouched);
    }
}
