//! Translate key events into editor commands and dispatch them.

use slatedeck_core::EditorSession;

/// A command the shortcut surface can issue against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Explicit save; driven asynchronously by the shell.
    Save,
    Undo,
    Redo,
    /// Delete the selected element, or the current slide when nothing is
    /// selected and more than one slide exists.
    Delete,
    Escape,
    /// Playback navigation.
    NextSlide,
    PrevSlide,
}

/// Map a key event to a command. `ctrl` covers Cmd on macOS; arrow keys only
/// navigate during presentation playback.
pub fn map_key(key: &str, ctrl: bool, shift: bool, playback: bool) -> Option<EditorCommand> {
    match key {
        "s" | "S" if ctrl => Some(EditorCommand::Save),
        "z" | "Z" if ctrl && shift => Some(EditorCommand::Redo),
        "z" | "Z" if ctrl => Some(EditorCommand::Undo),
        "y" | "Y" if ctrl => Some(EditorCommand::Redo),
        "Delete" | "Backspace" if !ctrl => Some(EditorCommand::Delete),
        "Escape" => Some(EditorCommand::Escape),
        "ArrowRight" | "ArrowDown" if playback => Some(EditorCommand::NextSlide),
        "ArrowLeft" | "ArrowUp" if playback => Some(EditorCommand::PrevSlide),
        _ => None,
    }
}

/// Apply a command to the session. Returns true when the document changed,
/// so the shell can mark the autosave manager dirty. `Save` is a no-op here;
/// the shell owns the async storage call.
pub fn apply(session: &mut EditorSession, command: EditorCommand) -> bool {
    match command {
        EditorCommand::Save => false,
        EditorCommand::Undo => session.undo(),
        EditorCommand::Redo => session.redo(),
        EditorCommand::Delete => {
            let elements_before = session.editor().active_slide().elements.len();
            let slides_before = session.editor().slide_count();
            session.delete_selection_or_slide();
            session.editor().slide_count() != slides_before
                || session.editor().active_slide().elements.len() != elements_before
        }
        EditorCommand::Escape => {
            session.escape();
            false
        }
        EditorCommand::NextSlide => {
            session.next_slide();
            false
        }
        EditorCommand::PrevSlide => {
            session.prev_slide();
            false
        }
    }
}
