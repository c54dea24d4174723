//! Controller Integration Tests
//!
//! Runs the controller end to end over the headless view and in-memory storage.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::{
        HeadlessListView, InputField, InputHandler, Item, KeyValueStorage, ListConfig, ListController,
        ListView, MemoryField, MemoryStorage,
    };

    type Controller = Rc<ListController<HeadlessListView>>;

    fn setup_controller(storage: &Rc<MemoryStorage>, config: ListConfig, answer: bool) -> Controller {
        let backend: Rc<dyn KeyValueStorage> = storage.clone();
        let controller = ListController::new(config, HeadlessListView::new(), backend, move |_: &str| answer);
        controller.restore();
        controller
    }

    fn setup_tasks(items: &[Item]) -> (Controller, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let controller = setup_controller(&storage, ListConfig::tasks(), true);
        for item in items {
            controller.render(&item.text, item.completed);
        }
        controller.save();
        (controller, storage)
    }

    fn persisted(storage: &MemoryStorage) -> Vec<Item> {
        let raw = storage.raw("todo-tasks").expect("tasks were never saved");
        serde_json::from_str(&raw).expect("stored tasks are not a JSON array")
    }

    #[test]
    fn test_round_trip_through_fresh_instance() {
        let items = vec![
            Item::with_state("write report", false),
            Item::with_state("call bank", true),
            Item::with_state("<script>x</script>", false),
        ];
        let (_, storage) = setup_tasks(&items);

        let reloaded = setup_controller(&storage, ListConfig::tasks(), true);
        assert_eq!(reloaded.snapshot(), items);
        assert_eq!(reloaded.view().is_struck(1), Some(true));
        assert_eq!(reloaded.view().is_struck(0), Some(false));
    }

    #[test]
    fn test_restore_does_not_write() {
        let storage = Rc::new(MemoryStorage::new().with_entry("todo-tasks", "garbage"));
        let controller = setup_controller(&storage, ListConfig::tasks(), true);

        assert!(controller.snapshot().is_empty());
        assert_eq!(storage.raw("todo-tasks").as_deref(), Some("garbage"));
    }

    #[test]
    fn test_save_is_idempotent() {
        let (controller, storage) = setup_tasks(&[Item::new("a"), Item::with_state("b", true)]);

        controller.save();
        let first = storage.raw("todo-tasks");
        controller.save();
        assert_eq!(storage.raw("todo-tasks"), first);
    }

    #[test]
    fn test_add_trims_and_saves() {
        let (controller, storage) = setup_tasks(&[]);

        assert!(controller.add("  buy milk  "));
        assert_eq!(persisted(&storage), vec![Item::new("buy milk")]);
        assert_eq!(controller.view().is_struck(0), Some(false));
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let (controller, storage) = setup_tasks(&[Item::new("a")]);
        let before = storage.raw("todo-tasks");

        assert!(!controller.add(""));
        assert!(!controller.add("   "));
        assert_eq!(controller.snapshot(), vec![Item::new("a")]);
        assert_eq!(storage.raw("todo-tasks"), before);
    }

    #[test]
    fn test_toggle_reflects_in_persistence() {
        let (controller, storage) = setup_tasks(&[Item::new("a")]);

        controller.view().click_checkbox(0);
        assert_eq!(persisted(&storage), vec![Item::with_state("a", true)]);
        assert_eq!(controller.view().is_struck(0), Some(true));
        assert_eq!(controller.view().decoration(0), Some("line-through"));

        controller.view().click_checkbox(0);
        assert_eq!(persisted(&storage), vec![Item::new("a")]);
        assert_eq!(controller.view().is_struck(0), Some(false));
    }

    #[test]
    fn test_edit_commit_on_blur() {
        let (controller, storage) = setup_tasks(&[Item::new("buy milk")]);
        let view = controller.view();

        view.begin_edit(0);
        assert!(view.is_editing(0));
        view.type_into_editor(0, "  buy bread  ");
        view.blur_editor(0);

        assert!(!view.is_editing(0));
        assert_eq!(view.label(0).as_deref(), Some("buy bread"));
        assert_eq!(persisted(&storage), vec![Item::new("buy bread")]);
    }

    #[test]
    fn test_edit_commit_on_enter() {
        let (controller, storage) = setup_tasks(&[Item::new("buy milk")]);
        let view = controller.view();

        view.begin_edit(0);
        view.type_into_editor(0, "  buy bread  ");
        view.press_key_in_editor(0, "Escape");
        assert!(view.is_editing(0));

        view.press_key_in_editor(0, "Enter");
        assert!(!view.is_editing(0));
        assert_eq!(persisted(&storage), vec![Item::new("buy bread")]);
    }

    #[test]
    fn test_blank_edit_commits_empty_text() {
        let (controller, storage) = setup_tasks(&[Item::new("buy milk")]);
        let view = controller.view();

        view.begin_edit(0);
        view.type_into_editor(0, "   ");
        view.blur_editor(0);

        assert!(!view.is_editing(0));
        assert_eq!(view.label(0).as_deref(), Some(""));
        assert_eq!(persisted(&storage), vec![Item::new("")]);
    }

    #[test]
    fn test_row_mid_edit_persists_previous_text() {
        let (controller, storage) = setup_tasks(&[Item::new("a"), Item::new("b")]);
        let view = controller.view();

        view.begin_edit(0);
        view.type_into_editor(0, "changed");
        view.click_checkbox(1);
        assert_eq!(
            persisted(&storage),
            vec![Item::new("a"), Item::with_state("b", true)]
        );

        view.blur_editor(0);
        assert_eq!(
            persisted(&storage),
            vec![Item::new("changed"), Item::with_state("b", true)]
        );
    }

    #[test]
    fn test_delete_completed() {
        let (controller, storage) = setup_tasks(&[
            Item::new("a"),
            Item::with_state("b", true),
            Item::with_state("c", true),
        ]);

        assert_eq!(controller.delete_completed(), 2);
        assert_eq!(controller.snapshot(), vec![Item::new("a")]);
        assert_eq!(persisted(&storage), vec![Item::new("a")]);
    }

    #[test]
    fn test_delete_completed_interleaved() {
        let (controller, storage) = setup_tasks(&[
            Item::with_state("a", true),
            Item::new("b"),
            Item::with_state("c", true),
            Item::new("d"),
        ]);

        controller.delete_completed();
        assert_eq!(persisted(&storage), vec![Item::new("b"), Item::new("d")]);
    }

    #[test]
    fn test_delete_row() {
        let (controller, storage) = setup_tasks(&[Item::new("a"), Item::new("b"), Item::new("c")]);

        controller.view().click_delete(1);
        assert_eq!(persisted(&storage), vec![Item::new("a"), Item::new("c")]);

        controller.delete_row(7);
        assert_eq!(controller.snapshot().len(), 2);
    }

    #[test]
    fn test_delete_all_confirmed() {
        let (controller, storage) = setup_tasks(&[Item::new("a"), Item::with_state("b", true)]);

        assert!(controller.delete_all());
        assert!(controller.view().is_empty());
        assert_eq!(storage.raw("todo-tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_all_declined() {
        let storage = Rc::new(MemoryStorage::new());
        let asked = Rc::new(Cell::new(0));
        let prompt_count = asked.clone();
        let backend: Rc<dyn KeyValueStorage> = storage.clone();
        let controller = ListController::new(
            ListConfig::tasks(),
            HeadlessListView::new(),
            backend,
            move |message: &str| {
                assert_eq!(message, "Are you sure you want to delete all tasks?");
                prompt_count.set(prompt_count.get() + 1);
                false
            },
        );
        controller.add("a");
        controller.add("b");
        let before = storage.raw("todo-tasks");

        assert!(!controller.delete_all());
        assert_eq!(asked.get(), 1);
        assert_eq!(controller.snapshot(), vec![Item::new("a"), Item::new("b")]);
        assert_eq!(storage.raw("todo-tasks"), before);
    }

    #[test]
    fn test_input_handler_clears_only_on_add() {
        let (controller, storage) = setup_tasks(&[]);
        let input = InputHandler::new(controller.clone());
        let field = MemoryField::new("  read book ");

        assert!(!input.handle_key("a", &field));
        assert_eq!(field.value(), "  read book ");

        assert!(input.handle_key("Enter", &field));
        assert_eq!(field.value(), "");
        assert_eq!(persisted(&storage), vec![Item::new("read book")]);

        field.set("   ");
        assert!(!input.handle_key("Enter", &field));
        assert_eq!(field.value(), "   ");
        assert_eq!(controller.snapshot().len(), 1);
    }

    #[test]
    fn test_lists_are_independent() {
        let storage = Rc::new(MemoryStorage::new());
        let tasks = setup_controller(&storage, ListConfig::tasks(), true);
        let priorities = setup_controller(&storage, ListConfig::priorities(), true);

        tasks.add("task");
        priorities.add("priority");
        priorities.view().click_checkbox(0);
        tasks.delete_all();

        assert_eq!(storage.raw("todo-tasks").as_deref(), Some("[]"));
        assert_eq!(
            storage.raw("todo-priorities").as_deref(),
            Some(r#"[{"text":"priority","completed":true}]"#)
        );
    }

    #[test]
    fn test_dropped_controller_ignores_row_events() {
        let storage = Rc::new(MemoryStorage::new());
        let backend: Rc<dyn KeyValueStorage> = storage.clone();
        let view = Rc::new(HeadlessListView::new());
        let controller = ListController::new(ListConfig::tasks(), view.clone(), backend, |_: &str| true);
        controller.add("a");
        drop(controller);

        view.click_checkbox(0);
        assert_eq!(
            storage.raw("todo-tasks").as_deref(),
            Some(r#"[{"text":"a","completed":false}]"#)
        );
    }
}
