use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rapport_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Applies one key press to an inline field editor. Empty values are valid:
/// clearing a field is a legitimate edit. With `multiline`, Alt+Enter
/// inserts a line break instead of confirming.
pub fn handle_dialog_input(input: &mut InputState, key: KeyEvent, multiline: bool) -> DialogAction {
    match key.code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter if multiline && key.modifiers.contains(KeyModifiers::ALT) => {
            input.insert_char('\n');
            DialogAction::None
        }
        KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.clear();
            DialogAction::None
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_confirm() {
        let mut input = InputState::new();
        for c in "Revue".chars() {
            assert_eq!(
                handle_dialog_input(&mut input, press(KeyCode::Char(c)), false),
                DialogAction::None
            );
        }
        assert_eq!(
            handle_dialog_input(&mut input, press(KeyCode::Enter), false),
            DialogAction::Confirm
        );
        assert_eq!(input.as_str(), "Revue");
    }

    #[test]
    fn test_empty_confirm_is_allowed() {
        let mut input = InputState::new();
        assert_eq!(
            handle_dialog_input(&mut input, press(KeyCode::Enter), false),
            DialogAction::Confirm
        );
    }

    #[test]
    fn test_alt_enter_inserts_newline_only_when_multiline() {
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);

        let mut input = InputState::with_text("a");
        assert_eq!(handle_dialog_input(&mut input, alt_enter, true), DialogAction::None);
        assert_eq!(input.as_str(), "a\n");

        let mut input = InputState::with_text("a");
        assert_eq!(handle_dialog_input(&mut input, alt_enter, false), DialogAction::Confirm);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = InputState::with_text("brouillon");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        handle_dialog_input(&mut input, ctrl_u, false);
        assert!(input.is_empty());
    }

    #[test]
    fn test_escape_cancels() {
        let mut input = InputState::with_text("x");
        assert_eq!(
            handle_dialog_input(&mut input, press(KeyCode::Esc), false),
            DialogAction::Cancel
        );
    }
}
