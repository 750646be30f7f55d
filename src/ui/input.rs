use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::model::FormState;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The form changed and needs a redraw.
    Redraw,
    Submit,
    Quit,
    Ignored,
}

/// Applies one key press to the form.
///
/// Key releases and repeats reported by some terminals are ignored.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            KeyOutcome::Redraw
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            KeyOutcome::Redraw
        }
        KeyCode::Backspace => {
            form.backspace();
            KeyOutcome::Redraw
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
            form.push_char(ch);
            KeyOutcome::Redraw
        }
        KeyCode::Char(_)
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => KeyOutcome::Ignored,
    }
}
