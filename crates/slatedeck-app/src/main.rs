//! Main application entry point.
//!
//! Restores the last edited presentation (or seeds a starter deck from the
//! template catalog), prints the shortcut surface, and saves on exit.

use slatedeck_app::ShortcutRegistry;
use slatedeck_core::storage::{AutosaveManager, FileStorage};
use slatedeck_core::{DeckEditor, EditorSession, builtin_templates};
use slatedeck_panels::{ColorSwatch, GRADIENT_PRESETS, slide_background, text_color_update};
use std::sync::Arc;

fn main() {
    env_logger::init();
    log::info!("Starting Slatedeck");

    if let Err(err) = pollster::block_on(run()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FileStorage::default_location()?);
    log::info!("presentations directory: {}", storage.base_path().display());
    let mut autosave = AutosaveManager::new(storage);

    let mut session = match autosave.load_last().await {
        Some(presentation) => {
            log::info!("restored \"{}\"", presentation.title);
            EditorSession::new(DeckEditor::new(presentation))
        }
        None => starter_session(),
    };

    ShortcutRegistry::print_all();
    let presentation = session.editor().presentation();
    println!(
        "\"{}\": {} slide(s), {} element(s) on the current slide",
        presentation.title,
        presentation.slide_count(),
        session.editor().active_slide().elements.len(),
    );

    autosave.mark_dirty();
    autosave.save(session.editor().presentation()).await?;
    Ok(())
}

/// Build a fresh deck from the template catalog: a title slide followed by
/// a title-and-body slide, styled through the panel presets.
fn starter_session() -> EditorSession {
    let templates = builtin_templates();
    let mut session = EditorSession::with_title("Untitled presentation");

    if let Some(title) = templates.iter().find(|t| t.name == "Title") {
        if let Err(err) = session.editor_mut().replace_elements(0, &title.elements) {
            log::warn!("failed to apply title template: {err}");
        }
    }
    if let Some(body) = templates.iter().find(|t| t.name == "Title and body") {
        session.insert_template_slide(body);
    }
    session.set_active_slide(0);

    // Style the title slide with panel payloads.
    session
        .editor_mut()
        .set_slide_background(slide_background(None, Some(&GRADIENT_PRESETS[0])));
    let heading = session.editor().active_slide().elements.first().map(|e| e.id());
    if let (Some(id), Some(white)) = (heading, ColorSwatch::by_name("White")) {
        session.update_element(id, &text_color_update(white.hex));
    }
    session
}
