//! Controller Tests
//!
//! Event protocol driven against in-memory storage.

use super::*;
use crate::render::SubmitMode;
use crate::repository::MemoryStorage;

fn setup(items: &[&str]) -> (Controller<MemoryStorage>, MemoryStorage) {
    let backend = MemoryStorage::new();
    let store = ItemStore::new(backend.clone());
    if !items.is_empty() {
        let labels: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        store.save_items(&labels).unwrap();
    }
    (Controller::start(store), backend)
}

fn stored_items(backend: &MemoryStorage) -> Vec<String> {
    ItemStore::new(backend.clone()).load_items()
}

fn visible_labels(view: &ListView) -> Vec<&str> {
    view.rows.iter().filter(|row| row.visible).map(|row| row.label.as_str()).collect()
}

fn title(effect: &Effect) -> Option<&str> {
    match effect {
        Effect::None => None,
        Effect::Notify(dialog) | Effect::Confirm(dialog) => Some(dialog.title.as_str()),
    }
}

#[test]
fn test_startup_rehydrates_from_store() {
    let backend = MemoryStorage::new();
    let store = ItemStore::new(backend.clone());
    store.save_items(&["milk".to_string(), "eggs".to_string()]).unwrap();
    store.save_theme(Theme::Dark).unwrap();

    let controller = Controller::start(ItemStore::new(backend));
    let view = controller.view();

    assert_eq!(controller.list().labels(), ["milk", "eggs"]);
    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(view.theme, Theme::Dark);
    assert!(view.show_clear);
    assert!(view.show_filter);
}

#[test]
fn test_startup_does_not_write() {
    let (_controller, backend) = setup(&[]);
    assert!(backend.is_empty());
}

#[test]
fn test_startup_with_corrupt_items() {
    let backend = MemoryStorage::new();
    backend.set("items", "not json").unwrap();

    let controller = Controller::start(ItemStore::new(backend));

    assert!(controller.list().is_empty());
    assert!(!controller.view().show_clear);
}

#[test]
fn test_submit_adds_and_persists() {
    let (mut controller, backend) = setup(&[]);

    let effect = controller.dispatch(Event::Submit("milk".to_string())).unwrap();

    assert_eq!(effect, Effect::None);
    assert_eq!(controller.list().labels(), ["milk"]);
    assert_eq!(stored_items(&backend), ["milk"]);
    let view = controller.view();
    assert!(view.show_clear);
    assert!(view.show_filter);
    assert_eq!(view.input_text, "");
}

#[test]
fn test_submit_blank_notifies() {
    let (mut controller, backend) = setup(&[]);

    for text in ["", "   "] {
        let effect = controller.dispatch(Event::Submit(text.to_string())).unwrap();
        assert_eq!(effect, Effect::Notify(Dialog::empty_input()));
    }

    assert!(controller.list().is_empty());
    assert!(backend.is_empty());
    assert_eq!(controller.mode(), Mode::Idle);
}

#[test]
fn test_submit_duplicate_notifies() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);
    let revision = controller.view().revision;

    let effect = controller.dispatch(Event::Submit("milk".to_string())).unwrap();

    assert_eq!(effect, Effect::Notify(Dialog::duplicate()));
    assert_eq!(controller.list().labels(), ["milk", "eggs"]);
    assert_eq!(stored_items(&backend), ["milk", "eggs"]);
    // Input is left alone so the user can fix it
    assert_eq!(controller.view().revision, revision);
}

#[test]
fn test_select_for_edit_enters_update_mode() {
    let (mut controller, _backend) = setup(&["milk", "eggs"]);

    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();

    assert_eq!(controller.mode(), Mode::Editing("milk".to_string()));
    let view = controller.view();
    assert_eq!(view.submit_mode, SubmitMode::Update);
    assert_eq!(view.input_text, "milk");
    assert!(!view.clear_enabled);
    assert!(view.rows.iter().all(|row| !row.deletable));
    assert!(view.rows[0].editing);
}

#[test]
fn test_edit_commit_keeps_position() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();
    let effect = controller.dispatch(Event::Submit("  oat milk  ".to_string())).unwrap();

    assert_eq!(effect, Effect::None);
    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(controller.list().labels(), ["  oat milk  ", "eggs"]);
    assert_eq!(stored_items(&backend), ["  oat milk  ", "eggs"]);

    let view = controller.view();
    assert_eq!(view.submit_mode, SubmitMode::Add);
    assert_eq!(view.input_text, "");
    assert!(view.clear_enabled);
    assert!(view.rows.iter().all(|row| row.deletable));
}

#[test]
fn test_edit_commit_blank_stays_editing() {
    let (mut controller, backend) = setup(&["milk"]);

    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();
    let effect = controller.dispatch(Event::Submit("  ".to_string())).unwrap();

    assert_eq!(effect, Effect::Notify(Dialog::empty_input()));
    assert_eq!(controller.mode(), Mode::Editing("milk".to_string()));
    assert_eq!(stored_items(&backend), ["milk"]);
}

#[test]
fn test_edit_commit_allows_existing_label() {
    let (mut controller, _backend) = setup(&["foo", "bar"]);

    controller.dispatch(Event::SelectForEdit("foo".to_string())).unwrap();
    assert_eq!(controller.dispatch(Event::Submit("foo".to_string())).unwrap(), Effect::None);

    controller.dispatch(Event::SelectForEdit("bar".to_string())).unwrap();
    assert_eq!(controller.dispatch(Event::Submit("foo".to_string())).unwrap(), Effect::None);

    assert_eq!(controller.list().labels(), ["foo", "foo"]);
}

#[test]
fn test_switching_edit_target_does_not_commit() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();
    controller.dispatch(Event::SelectForEdit("eggs".to_string())).unwrap();

    assert_eq!(controller.mode(), Mode::Editing("eggs".to_string()));
    assert_eq!(controller.list().labels(), ["milk", "eggs"]);
    assert_eq!(stored_items(&backend), ["milk", "eggs"]);
    assert_eq!(controller.view().input_text, "eggs");
}

#[test]
fn test_cancel_edit_returns_to_idle() {
    let (mut controller, _backend) = setup(&["milk"]);

    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();
    controller.dispatch(Event::CancelEdit).unwrap();

    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(controller.view().input_text, "");
}

#[test]
fn test_select_unknown_item_is_ignored() {
    let (mut controller, _backend) = setup(&["milk"]);

    let effect = controller.dispatch(Event::SelectForEdit("eggs".to_string())).unwrap();

    assert_eq!(effect, Effect::None);
    assert_eq!(controller.mode(), Mode::Idle);
}

#[test]
fn test_delete_waits_for_confirmation() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    let effect = controller.dispatch(Event::RequestDelete("milk".to_string())).unwrap();

    assert_eq!(effect, Effect::Confirm(Dialog::confirm_delete()));
    assert_eq!(controller.pending(), Some(&PendingAction::Delete("milk".to_string())));
    assert_eq!(controller.list().labels(), ["milk", "eggs"]);

    let effect = controller.resolve(true).unwrap();

    assert_eq!(effect, Effect::Notify(Dialog::deleted()));
    assert_eq!(controller.pending(), None);
    assert_eq!(controller.list().labels(), ["eggs"]);
    assert_eq!(stored_items(&backend), ["eggs"]);
}

#[test]
fn test_declined_delete_changes_nothing() {
    let (mut controller, backend) = setup(&["milk"]);
    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();

    controller.dispatch(Event::RequestDelete("milk".to_string())).unwrap();
    let effect = controller.resolve(false).unwrap();

    assert_eq!(effect, Effect::None);
    assert_eq!(controller.mode(), Mode::Editing("milk".to_string()));
    assert_eq!(stored_items(&backend), ["milk"]);
}

#[test]
fn test_confirmed_delete_ends_edit() {
    let (mut controller, _backend) = setup(&["milk", "eggs"]);
    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();

    controller.dispatch(Event::RequestDelete("eggs".to_string())).unwrap();
    controller.resolve(true).unwrap();

    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(controller.list().labels(), ["milk"]);
}

#[test]
fn test_events_rejected_while_confirmation_pending() {
    let (mut controller, _backend) = setup(&["milk"]);
    controller.dispatch(Event::RequestClearAll).unwrap();

    let result = controller.dispatch(Event::Submit("eggs".to_string()));
    assert!(matches!(result, Err(ControllerError::ConfirmationPending)));
    assert!(matches!(
        controller.dispatch(Event::ToggleTheme),
        Err(ControllerError::ConfirmationPending)
    ));

    // Filtering is display-only and still allowed
    controller.dispatch(Event::FilterInput("m".to_string())).unwrap();
    assert_eq!(controller.filter(), "m");
    assert_eq!(controller.pending(), Some(&PendingAction::ClearAll));
}

#[test]
fn test_resolve_without_pending() {
    let (mut controller, _backend) = setup(&[]);
    assert!(matches!(controller.resolve(true), Err(ControllerError::NoPendingConfirmation)));
}

#[test]
fn test_filter_is_display_only() {
    let (mut controller, backend) = setup(&["a", "b", "c"]);
    let revision = controller.view().revision;

    controller.dispatch(Event::FilterInput("b".to_string())).unwrap();
    assert_eq!(visible_labels(&controller.view()), ["b"]);

    controller.dispatch(Event::FilterInput(String::new())).unwrap();
    assert_eq!(visible_labels(&controller.view()), ["a", "b", "c"]);

    assert_eq!(controller.list().labels(), ["a", "b", "c"]);
    assert_eq!(stored_items(&backend), ["a", "b", "c"]);
    assert_eq!(controller.view().revision, revision);
}

#[test]
fn test_toggle_theme_persists_each_time() {
    let (mut controller, backend) = setup(&[]);
    let original = controller.theme();

    controller.dispatch(Event::ToggleTheme).unwrap();
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(ItemStore::new(backend.clone()).load_theme(), Theme::Dark);

    controller.dispatch(Event::ToggleTheme).unwrap();
    assert_eq!(controller.theme(), original);
    assert_eq!(ItemStore::new(backend).load_theme(), original);
}

#[test]
fn test_toggle_theme_keeps_edit_mode() {
    let (mut controller, _backend) = setup(&["milk"]);
    controller.dispatch(Event::SelectForEdit("milk".to_string())).unwrap();

    controller.dispatch(Event::ToggleTheme).unwrap();

    assert_eq!(controller.mode(), Mode::Editing("milk".to_string()));
}

#[test]
fn test_scenario_add_milk() {
    let (mut controller, backend) = setup(&[]);

    let effect = controller.dispatch(Event::Submit("milk".to_string())).unwrap();

    assert_eq!(effect, Effect::None);
    assert_eq!(controller.list().labels(), ["milk"]);
    assert_eq!(stored_items(&backend), ["milk"]);
    assert!(controller.view().show_clear);
}

#[test]
fn test_duplicate_submit_notifies() {
    let (mut controller, backend) = setup(&["milk"]);

    let effect = controller.dispatch(Event::Submit("milk".to_string())).unwrap();

    assert!(matches!(effect, Effect::Notify(_)));
    assert_eq!(title(&effect), Some("This item already exists"));
    assert_eq!(stored_items(&backend), ["milk"]);
}

#[test]
fn test_confirmed_delete_sequence() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    let effect = controller.dispatch(Event::RequestDelete("eggs".to_string())).unwrap();
    assert!(matches!(effect, Effect::Confirm(_)));
    assert_eq!(title(&effect), Some("Are you sure?"));
    assert_eq!(stored_items(&backend), ["milk", "eggs"]);

    let effect = controller.resolve(true).unwrap();
    assert!(matches!(effect, Effect::Notify(_)));
    assert_eq!(title(&effect), Some("Item has been deleted"));
    assert_eq!(stored_items(&backend), ["milk"]);
    assert_eq!(controller.pending(), None);
}

#[test]
fn test_declined_clear_keeps_items() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    let effect = controller.dispatch(Event::RequestClearAll).unwrap();
    assert_eq!(title(&effect), Some("Are you sure?"));

    let effect = controller.resolve(false).unwrap();
    assert_eq!(title(&effect), Some("Your items are safe!"));
    assert_eq!(controller.list().labels(), ["milk", "eggs"]);
    assert_eq!(stored_items(&backend), ["milk", "eggs"]);
    assert_eq!(controller.pending(), None);
}

#[test]
fn test_confirmed_clear_sequence() {
    let (mut controller, backend) = setup(&["milk", "eggs"]);

    let effect = controller.dispatch(Event::RequestClearAll).unwrap();
    assert!(matches!(effect, Effect::Confirm(_)));

    let effect = controller.resolve(true).unwrap();
    assert_eq!(title(&effect), Some("Poof! Your items have been deleted!"));
    assert!(controller.list().is_empty());
    assert!(stored_items(&backend).is_empty());
    assert_eq!(backend.get("items").unwrap().as_deref(), Some("[]"));
    let view = controller.view();
    assert!(!view.show_clear);
    assert!(!view.show_filter);
}

#[test]
fn test_edit_into_repeat_survives_restart() {
    let (mut controller, backend) = setup(&["foo", "bar"]);

    controller.dispatch(Event::SelectForEdit("bar".to_string())).unwrap();
    controller.dispatch(Event::Submit("foo".to_string())).unwrap();
    assert_eq!(stored_items(&backend), ["foo", "foo"]);

    let mut controller = Controller::start(ItemStore::new(backend.clone()));
    assert_eq!(controller.list().labels(), ["foo", "foo"]);
    assert_eq!(controller.view().rows.len(), 2);

    controller.dispatch(Event::Submit("milk".to_string())).unwrap();
    assert_eq!(stored_items(&backend), ["foo", "foo", "milk"]);
}
