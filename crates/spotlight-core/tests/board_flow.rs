use spotlight_core::store::{load_board, save_tags, save_tasks};
use spotlight_core::{
    Action, KeyValueStore, MemoryStore, Task, TaskBoard, TaskId, WidgetConfig,
};

#[derive(Debug, Clone, Default)]
struct QuotaExceeded;

impl KeyValueStore for QuotaExceeded {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("quota exceeded")
    }
}

fn open_board() -> TaskBoard<MemoryStore> {
    TaskBoard::open(MemoryStore::new(), WidgetConfig::default())
}

fn add(board: &mut TaskBoard<MemoryStore>, text: &str) -> TaskId {
    board.dispatch(Action::ClickBar);
    board.dispatch(Action::SetQuery(text.to_string()));
    board.dispatch(Action::Submit);
    board.board().tasks[0].id.clone()
}

fn click(board: &mut TaskBoard<MemoryStore>, id: &TaskId, now_ms: u64) {
    board.dispatch(Action::ClickTask {
        id: id.clone(),
        now_ms,
    });
}

fn persisted_tasks(board: &TaskBoard<MemoryStore>) -> Vec<Task> {
    let raw = board
        .store()
        .read("spotlight_tasks")
        .expect("tasks persisted");
    serde_json::from_str(&raw).expect("parse persisted tasks")
}

#[test]
fn fresh_board_has_no_tasks_and_default_tags() {
    let board = open_board();
    assert!(board.board().tasks.is_empty());
    assert_eq!(board.board().tags, vec!["School", "Work"]);
    assert!(!board.ui().expanded);
}

#[test]
fn submit_prepends_persists_and_collapses() {
    let mut board = open_board();
    let first = add(&mut board, "Write essay");
    let second = add(&mut board, "Buy milk");

    let tasks = &board.board().tasks;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, second);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(!tasks[0].is_completed);
    assert_eq!(tasks[0].assigned_to, None);
    assert_ne!(first, second);

    assert!(!board.ui().expanded);
    assert!(board.ui().query.is_empty());
    assert_eq!(persisted_tasks(&board), board.board().tasks);
}

#[test]
fn unchecking_before_the_deadline_keeps_the_task() {
    let mut board = open_board();
    let id = add(&mut board, "Buy milk");

    click(&mut board, &id, 0);
    click(&mut board, &id, 1_200);
    board.dispatch(Action::RemovalTick { now_ms: 2_000 });

    let task = board.board().task(&id).expect("task survives");
    assert!(!task.is_completed);

    board.dispatch(Action::RemovalTick { now_ms: 3_200 });
    assert!(board.board().task(&id).is_some());
    assert_eq!(board.next_removal_deadline(), None);
}

#[test]
fn checked_task_disappears_after_the_delay() {
    let mut board = open_board();
    let keep = add(&mut board, "Keep");
    let id = add(&mut board, "Done soon");

    click(&mut board, &id, 10_000);
    assert_eq!(board.next_removal_deadline(), Some(12_000));

    board.dispatch(Action::RemovalTick { now_ms: 11_999 });
    assert!(board.board().task(&id).is_some());

    board.dispatch(Action::RemovalTick { now_ms: 12_000 });
    assert!(board.board().task(&id).is_none());
    assert!(board.board().task(&keep).is_some());
    assert!(persisted_tasks(&board).iter().all(|task| task.id != id));
}

#[test]
fn earlier_timer_removes_a_rechecked_task() {
    let mut board = open_board();
    let id = add(&mut board, "Flip flop");

    click(&mut board, &id, 0);
    click(&mut board, &id, 500);
    board.dispatch(Action::RemovalTick { now_ms: 2_000 });
    assert!(board.board().task(&id).is_some());

    click(&mut board, &id, 2_100);
    assert_eq!(board.next_removal_deadline(), Some(2_500));
    board.dispatch(Action::RemovalTick { now_ms: 2_500 });
    assert!(board.board().task(&id).is_none());

    board.dispatch(Action::RemovalTick { now_ms: 4_100 });
    assert_eq!(board.next_removal_deadline(), None);
}

#[test]
fn active_tag_click_assigns_without_toggling() {
    let mut board = open_board();
    let id = add(&mut board, "Report");

    board.dispatch(Action::SelectTag("Work".to_string()));
    click(&mut board, &id, 0);

    let task = board.board().task(&id).expect("task");
    assert_eq!(task.assigned_to.as_deref(), Some("Work"));
    assert!(!task.is_completed);
    assert_eq!(board.ui().active_tag, None);
    assert_eq!(board.next_removal_deadline(), None);

    click(&mut board, &id, 100);
    assert!(board.board().task(&id).expect("task").is_completed);
}

#[test]
fn outside_click_and_escape_clear_selection() {
    let mut board = open_board();
    board.dispatch(Action::SelectTag("Work".to_string()));
    board.dispatch(Action::ClickOutside);
    assert_eq!(board.ui().active_tag, None);

    board.dispatch(Action::ClickBar);
    board.dispatch(Action::SelectTag("School".to_string()));
    board.dispatch(Action::Escape);
    assert_eq!(board.ui().active_tag, None);
    assert!(!board.ui().expanded);
}

#[test]
fn drop_assigns_dragged_tag_once() {
    let mut board = open_board();
    let a = add(&mut board, "a");
    let b = add(&mut board, "b");

    board.dispatch(Action::StartDrag("School".to_string()));
    board.dispatch(Action::DropOnTask(a.clone()));
    board.dispatch(Action::DropOnTask(b.clone()));

    assert_eq!(
        board.board().task(&a).and_then(|t| t.assigned_to.clone()),
        Some("School".to_string())
    );
    assert_eq!(board.board().task(&b).and_then(|t| t.assigned_to.clone()), None);
    assert_eq!(board.ui().dragged_tag, None);
}

#[test]
fn confirmed_tag_delete_cascades_and_persists() {
    let mut board = open_board();
    let a = add(&mut board, "a");
    let b = add(&mut board, "b");
    board.dispatch(Action::StartDrag("Work".to_string()));
    board.dispatch(Action::DropOnTask(a.clone()));
    board.dispatch(Action::StartDrag("School".to_string()));
    board.dispatch(Action::DropOnTask(b.clone()));

    board.dispatch(Action::DeleteTag {
        label: "Work".to_string(),
        confirmed: false,
    });
    assert_eq!(board.board().tags, vec!["School", "Work"]);
    assert!(board.board().task(&a).expect("a").is_assigned_to("Work"));

    board.dispatch(Action::DeleteTag {
        label: "Work".to_string(),
        confirmed: true,
    });
    assert_eq!(board.board().tags, vec!["School"]);
    assert_eq!(board.board().task(&a).expect("a").assigned_to, None);
    assert!(board.board().task(&b).expect("b").is_assigned_to("School"));
    assert_eq!(
        board.store().read("spotlight_pills").as_deref(),
        Some(r#"["School"]"#)
    );
}

#[test]
fn reopening_restores_lists_in_order() {
    let mut board = open_board();
    add(&mut board, "one");
    add(&mut board, "two");
    board.dispatch(Action::AddTag(Some("Home".to_string())));
    board.dispatch(Action::AddTag(Some("Home".to_string())));

    let expected = board.board().clone();
    let reopened = TaskBoard::open(board.store().clone(), WidgetConfig::default());
    assert_eq!(reopened.board(), &expected);
    assert_eq!(
        reopened.board().tags,
        vec!["School", "Work", "Home", "Home"]
    );
}

#[test]
fn explicit_save_and_load_round_trip() {
    let config = WidgetConfig::default();
    let mut store = MemoryStore::new();
    let mut tasks = vec![Task::new("x".to_string()), Task::new("y".to_string())];
    tasks[1].is_completed = true;
    tasks[0].assigned_to = Some("Work".to_string());
    let tags = vec!["B".to_string(), "A".to_string(), "B".to_string()];

    save_tasks(&mut store, &config, &tasks).expect("save tasks");
    save_tags(&mut store, &config, &tags).expect("save tags");

    let board = load_board(&store, &config);
    assert_eq!(board.tasks, tasks);
    assert_eq!(board.tags, tags);
}

#[test]
fn custom_config_changes_keys_and_delay() {
    let config = WidgetConfig::from_toml_str(
        r#"
[storage]
tasks_key = "t"
tags_key = "p"

[timing]
removal_delay_ms = 50
"#,
    )
    .expect("parse config");
    let mut board = TaskBoard::open(MemoryStore::new(), config);
    let id = add(&mut board, "quick");

    click(&mut board, &id, 0);
    board.dispatch(Action::RemovalTick { now_ms: 50 });

    assert!(board.board().tasks.is_empty());
    assert_eq!(board.store().read("t").as_deref(), Some("[]"));
    assert_eq!(board.store().read("spotlight_tasks"), None);
}

#[test]
fn failed_writes_keep_in_memory_state() {
    let mut board = TaskBoard::open(QuotaExceeded, WidgetConfig::default());

    board.dispatch(Action::ClickBar);
    board.dispatch(Action::SetQuery("Buy milk".to_string()));
    let change = board.dispatch(Action::Submit);
    assert!(change.tasks);

    board.dispatch(Action::AddTag(Some("Home".to_string())));

    assert_eq!(board.board().tasks.len(), 1);
    assert_eq!(board.board().tasks[0].text, "Buy milk");
    assert!(!board.ui().expanded);
    assert_eq!(board.board().tags, vec!["School", "Work", "Home"]);
}

#[test]
fn deleting_the_selected_tag_drops_the_selection() {
    let mut board = open_board();
    let id = add(&mut board, "Report");

    board.dispatch(Action::SelectTag("Work".to_string()));
    board.dispatch(Action::StartDrag("Work".to_string()));
    board.dispatch(Action::DeleteTag {
        label: "Work".to_string(),
        confirmed: true,
    });
    assert_eq!(board.ui().active_tag, None);
    assert_eq!(board.ui().dragged_tag, None);

    click(&mut board, &id, 0);
    board.dispatch(Action::DropOnTask(id.clone()));
    let task = board.board().task(&id).expect("task");
    assert_eq!(task.assigned_to, None);
    assert!(task.is_completed);
    assert_eq!(board.board().tags, vec!["School"]);
}
