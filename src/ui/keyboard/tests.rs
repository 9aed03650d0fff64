use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(key_event(egui::Key::Z, egui::Modifiers::COMMAND));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_y_emits_redo() {
    let events = collect_with_key_event(key_event(egui::Key::Y, egui::Modifiers::COMMAND));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_shift_z_emits_redo_only() {
    let modifiers = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
    let events = collect_with_key_event(key_event(egui::Key::Z, modifiers));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_escape_emits_cancel() {
    let events = collect_with_key_event(key_event(egui::Key::Escape, egui::Modifiers::default()));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_plain_z_is_ignored() {
    let events = collect_with_key_event(key_event(egui::Key::Z, egui::Modifiers::default()));

    assert!(events.is_empty());
}
