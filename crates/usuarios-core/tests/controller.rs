//! Controller tests against an in-memory store.
//!
//! The store records every call and can be told to fail individual
//! operations, so each test can check exactly which requests went out and
//! which notifications came back.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use usuarios_core::{
    Controller, DeleteState, DialogState, Field, LoadTrigger, NewUser, Notification,
    NotificationKind, Outcome, RequestFailed, Severity, User, UserForm, UserId, UserStore,
};

// ============================================================================
// Test store
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List,
    Create(String, String),
    Update(User),
    Delete(UserId),
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    next_id: u64,
    calls: Vec<Call>,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
}

#[derive(Clone, Default)]
struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.get()).max().unwrap_or(0) + 1;
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            state.users = users;
            state.next_id = next_id;
        }
        store
    }

    fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    fn set(&self, f: impl FnOnce(&mut State)) {
        f(&mut self.state.lock().unwrap());
    }
}

fn failed() -> RequestFailed {
    RequestFailed::with_status(500, "simulated failure")
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, RequestFailed> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(failed());
        }
        Ok(state.users.clone())
    }

    async fn create(&self, user: &NewUser) -> Result<Option<User>, RequestFailed> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(
            user.name().to_string(),
            user.description().to_string(),
        ));
        if state.fail_create {
            return Err(failed());
        }
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        let created = user.clone().into_user(id);
        state.users.push(created.clone());
        Ok(Some(created))
    }

    async fn update(&self, user: &User) -> Result<Option<User>, RequestFailed> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(user.clone()));
        if state.fail_update {
            return Err(failed());
        }
        match state.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(Some(user.clone()))
            }
            None => Err(RequestFailed::with_status(404, "Usuario no encontrado")),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), RequestFailed> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id));
        if state.fail_delete {
            return Err(failed());
        }
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(RequestFailed::with_status(404, "Usuario no encontrado"));
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

type TestController = Controller<MemoryStore, tokio::sync::mpsc::UnboundedSender<Notification>>;

fn user(id: u64, name: &str, description: &str) -> User {
    User::new(UserId::new(id), name, description)
}

fn seeded() -> Vec<User> {
    vec![user(1, "A", "d"), user(2, "Bea", "support")]
}

fn controller(store: &MemoryStore) -> (TestController, UnboundedReceiver<Notification>) {
    let (tx, rx) = unbounded_channel();
    (Controller::new(store.clone(), tx), rx)
}

fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<NotificationKind> {
    let mut kinds = Vec::new();
    while let Ok(n) = rx.try_recv() {
        kinds.push(n.kind);
    }
    kinds
}

async fn loaded(store: &MemoryStore) -> (TestController, UnboundedReceiver<Notification>) {
    let (mut controller, rx) = controller(store);
    assert_eq!(controller.init().await, Outcome::Completed);
    (controller, rx)
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn starts_empty_and_idle() {
    let store = MemoryStore::with_users(seeded());
    let (controller, _rx) = controller(&store);

    assert!(controller.users().is_empty());
    assert_eq!(controller.dialog(), DialogState::Closed);
    assert_eq!(controller.delete_state(), DeleteState::Idle);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn init_replaces_list_in_received_order() {
    let users = vec![user(9, "Zed", "z"), user(3, "Amy", "a")];
    let store = MemoryStore::with_users(users.clone());
    let (controller, mut rx) = loaded(&store).await;

    assert_eq!(controller.users(), users);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn init_failure_is_silent_and_keeps_list() {
    let store = MemoryStore::with_users(seeded());
    store.set(|s| s.fail_list = true);
    let (mut controller, mut rx) = controller(&store);

    assert_eq!(controller.init().await, Outcome::Failed);
    assert!(controller.users().is_empty());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn user_reload_failure_notifies_and_keeps_list() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    store.set(|s| s.fail_list = true);
    assert_eq!(controller.reload().await, Outcome::Failed);

    assert_eq!(controller.users(), seeded());
    assert_eq!(drain(&mut rx), vec![NotificationKind::LoadFailed]);
}

#[tokio::test]
async fn after_mutation_load_failure_is_silent() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    store.set(|s| s.fail_list = true);
    assert_eq!(
        controller.load(LoadTrigger::AfterMutation).await,
        Outcome::Failed
    );
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn subscribers_see_loads() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = controller(&store);
    let mut users = controller.subscribe();

    let _ = controller.init().await;

    assert!(users.has_changed().unwrap());
    assert_eq!(*users.borrow_and_update(), seeded());
}

// ============================================================================
// Inline editing
// ============================================================================

#[tokio::test]
async fn begin_edit_buffers_a_copy() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let row = controller.user(0).unwrap();
    controller.begin_edit(&row);
    controller.edit_row(0, |u| u.name = "changed".to_string());

    assert_eq!(controller.buffered(row.id), Some(&user(1, "A", "d")));
}

#[tokio::test]
async fn begin_edit_twice_overwrites_the_copy() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    controller.begin_edit(&user(1, "A", "d"));
    controller.begin_edit(&user(1, "A2", "d2"));

    assert_eq!(
        controller.buffered(UserId::new(1)),
        Some(&user(1, "A2", "d2"))
    );
}

#[tokio::test]
async fn cancel_edit_restores_pre_edit_values() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let row = controller.user(0).unwrap();
    controller.begin_edit(&row);
    assert!(controller.edit_row(0, |u| u.name = "B".to_string()));
    assert_eq!(controller.user(0).unwrap().name, "B");

    let edited = controller.user(0).unwrap();
    controller.cancel_edit(&edited, 0);

    assert_eq!(controller.user(0).unwrap(), user(1, "A", "d"));
    assert!(!controller.is_editing(UserId::new(1)));
    assert!(store.calls().iter().all(|c| *c == Call::List));
}

#[tokio::test]
async fn cancel_edit_without_saved_copy_clears_the_row() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let row = controller.user(1).unwrap();
    controller.cancel_edit(&row, 1);

    assert_eq!(controller.user(1).unwrap(), User::blank(UserId::new(2)));
}

#[tokio::test]
async fn cancel_edit_out_of_range_drops_the_copy() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let row = controller.user(0).unwrap();
    controller.begin_edit(&row);
    controller.cancel_edit(&row, 10);

    assert!(!controller.is_editing(row.id));
    assert_eq!(controller.users(), seeded());
}

#[tokio::test]
async fn edit_row_keeps_the_id() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    assert!(controller.edit_row(0, |u| u.id = UserId::new(99)));
    assert_eq!(controller.user(0).unwrap().id, UserId::new(1));
    assert!(!controller.edit_row(5, |u| u.name.clear()));
}

#[tokio::test]
async fn save_edit_success_notifies_and_reloads() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    let row = controller.user(0).unwrap();
    controller.begin_edit(&row);
    controller.edit_row(0, |u| u.description = "new".to_string());
    let edited = controller.user(0).unwrap();

    assert_eq!(controller.save_edit(edited.clone()).await, Outcome::Completed);

    assert_eq!(drain(&mut rx), vec![NotificationKind::Updated]);
    assert_eq!(store.list_calls(), 2);
    assert!(store.calls().contains(&Call::Update(edited.clone())));
    assert_eq!(controller.user(0).unwrap(), edited);
    // The saved copy is not cleared by a successful save.
    assert!(controller.is_editing(UserId::new(1)));
}

#[tokio::test]
async fn save_edit_failure_keeps_edited_row_and_buffer() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;
    store.set(|s| s.fail_update = true);

    let row = controller.user(0).unwrap();
    controller.begin_edit(&row);
    controller.edit_row(0, |u| u.name = "B".to_string());
    let edited = controller.user(0).unwrap();

    assert_eq!(controller.save_edit(edited).await, Outcome::Failed);

    assert_eq!(drain(&mut rx), vec![NotificationKind::UpdateFailed]);
    assert_eq!(
        controller.users(),
        vec![user(1, "B", "d"), user(2, "Bea", "support")]
    );
    assert_eq!(controller.buffered(UserId::new(1)), Some(&user(1, "A", "d")));
    assert_eq!(store.list_calls(), 1);
}

#[tokio::test]
async fn save_edit_success_with_failing_reload_notifies_once() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;
    store.set(|s| s.fail_list = true);

    let outcome = controller.save_edit(user(2, "Bea", "lead")).await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(drain(&mut rx), vec![NotificationKind::Updated]);
}

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn create_success_closes_dialog_and_reloads() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    controller.open_create_dialog();
    let outcome = controller
        .create(UserForm::new("Carla", "finance"))
        .await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(controller.dialog(), DialogState::Closed);
    assert_eq!(drain(&mut rx), vec![NotificationKind::Created]);
    assert_eq!(store.list_calls(), 2);
    assert!(
        controller
            .users()
            .iter()
            .any(|u| u.name == "Carla" && u.description == "finance")
    );
}

#[tokio::test]
async fn create_keeps_returned_record_when_names_repeat() {
    let store = MemoryStore::with_users(vec![user(3, "Carla", "finance")]);
    let (mut controller, _rx) = loaded(&store).await;

    let outcome = controller
        .create(UserForm::new("Carla", "finance"))
        .await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(controller.last_created(), Some(&user(4, "Carla", "finance")));
}

#[tokio::test]
async fn create_keeps_returned_record_when_reload_fails() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;
    store.set(|s| s.fail_list = true);

    let outcome = controller
        .create(UserForm::new("Carla", "finance"))
        .await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(controller.last_created().map(|u| u.id), Some(UserId::new(3)));
    assert_eq!(controller.users(), seeded());
}

#[tokio::test]
async fn failed_create_forgets_previous_record() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let _ = controller.create(UserForm::new("Carla", "finance")).await;
    assert!(controller.last_created().is_some());

    store.set(|s| s.fail_create = true);
    let _ = controller.create(UserForm::new("Dan", "qa")).await;
    assert!(controller.last_created().is_none());
}

#[tokio::test]
async fn create_with_empty_name_sends_nothing() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    controller.open_create_dialog();
    let outcome = controller.create(UserForm::new("", "x")).await;

    let Outcome::Invalid(errors) = &outcome else {
        panic!("expected validation failure, got {:?}", outcome);
    };
    assert!(errors.has(Field::Name));
    assert_eq!(controller.dialog(), DialogState::Open);
    assert!(drain(&mut rx).is_empty());
    assert_eq!(store.calls(), vec![Call::List]);
}

#[tokio::test]
async fn create_failure_keeps_dialog_and_form() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;
    store.set(|s| s.fail_create = true);

    controller.open_create_dialog();
    let form = UserForm::new("Dan", "qa");
    assert_eq!(controller.create(form.clone()).await, Outcome::Failed);

    assert_eq!(controller.dialog(), DialogState::Open);
    assert_eq!(controller.form(), &form);
    assert_eq!(drain(&mut rx), vec![NotificationKind::CreateFailed]);
    assert_eq!(store.list_calls(), 1);
}

#[tokio::test]
async fn dialog_toggles() {
    let store = MemoryStore::default();
    let (mut controller, _rx) = controller(&store);

    controller.open_create_dialog();
    assert_eq!(controller.dialog(), DialogState::Open);
    controller.close_create_dialog();
    assert_eq!(controller.dialog(), DialogState::Closed);
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn delete_rejected_sends_nothing() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    let outcome = controller.delete(UserId::new(1), &false).await;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(drain(&mut rx), vec![NotificationKind::DeleteCancelled]);
    assert_eq!(store.calls(), vec![Call::List]);
    assert_eq!(controller.delete_state(), DeleteState::Idle);
}

#[tokio::test]
async fn delete_accepted_notifies_once_and_reloads_once() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    let outcome = controller.delete(UserId::new(1), &true).await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(drain(&mut rx), vec![NotificationKind::Deleted]);
    assert_eq!(
        store.calls(),
        vec![Call::List, Call::Delete(UserId::new(1)), Call::List]
    );
    assert_eq!(controller.users(), vec![user(2, "Bea", "support")]);
}

#[tokio::test]
async fn delete_failure_notifies_error() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;
    store.set(|s| s.fail_delete = true);

    let outcome = controller.delete(UserId::new(2), &true).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(drain(&mut rx), vec![NotificationKind::DeleteFailed]);
    assert_eq!(store.list_calls(), 1);
    assert_eq!(controller.users(), seeded());
}

#[tokio::test]
async fn confirmation_waits_for_an_answer() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    let prompt = controller.request_delete(UserId::new(2));
    assert_eq!(prompt.id, UserId::new(2));
    assert_eq!(
        controller.delete_state(),
        DeleteState::AwaitingConfirmation { id: UserId::new(2) }
    );
    assert_eq!(store.calls(), vec![Call::List]);

    assert_eq!(controller.accept_delete().await, Outcome::Completed);
    assert_eq!(controller.delete_state(), DeleteState::Idle);
    assert_eq!(drain(&mut rx), vec![NotificationKind::Deleted]);
}

#[tokio::test]
async fn later_request_replaces_pending_one() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, _rx) = loaded(&store).await;

    let _ = controller.request_delete(UserId::new(1));
    let _ = controller.request_delete(UserId::new(2));
    let _ = controller.accept_delete().await;

    assert!(store.calls().contains(&Call::Delete(UserId::new(2))));
    assert!(!store.calls().contains(&Call::Delete(UserId::new(1))));
}

#[tokio::test]
async fn answers_while_idle_do_nothing() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    assert_eq!(controller.accept_delete().await, Outcome::Cancelled);
    assert_eq!(controller.reject_delete(), Outcome::Cancelled);

    assert!(drain(&mut rx).is_empty());
    assert_eq!(store.calls(), vec![Call::List]);
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn notifications_carry_severity() {
    let store = MemoryStore::with_users(seeded());
    let (mut controller, mut rx) = loaded(&store).await;

    let _ = controller.delete(UserId::new(1), &true).await;
    let _ = controller.delete(UserId::new(2), &false).await;

    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();
    assert_eq!(first.severity, Severity::Success);
    assert_eq!(second.severity, Severity::Error);
    assert_eq!(second.kind, NotificationKind::DeleteCancelled);
}
