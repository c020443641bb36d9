mod common;

use common::{
    child_cursor, item_cursor, parent_store, parent_with_items, Env, Form, FormAction, FormModel,
    Parent, ParentAction,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use unistore::{try_update_keyed, update_cursor, Cursor, Model};

#[tokio::test]
async fn tagged_child_action_matches_direct_set() {
    let env = Env::default();
    let parent = Parent {
        title: "root".into(),
        child: Form {
            count: 4,
            text: "child".into(),
        },
        ..Parent::default()
    };
    let store = parent_store(parent.clone(), env.clone());

    store.dispatch(ParentAction::Child(FormAction::Increment));

    let expected = child_cursor().set(
        parent.clone(),
        FormModel::update(parent.child.clone(), FormAction::Increment, &env).state,
    );
    assert_eq!(store.read(), expected);
    assert_eq!(store.read().title, "root");
}

#[tokio::test]
async fn child_effects_come_back_retagged() {
    let store = parent_store(Parent::default(), Env::default());
    let actions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&actions);
    store.observe_actions(move |action| sink.lock().push(action.clone()));

    store.dispatch(ParentAction::Child(FormAction::IncrementLater(
        Duration::from_millis(2),
    )));
    store.settled().await;

    assert_eq!(store.read().child.count, 1);
    assert_eq!(
        actions.lock().last(),
        Some(&ParentAction::Child(FormAction::Increment))
    );
}

#[tokio::test]
async fn keyed_child_effects_keep_their_key() {
    let store = parent_store(parent_with_items(), Env::default());
    let actions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&actions);
    store.observe_actions(move |action| sink.lock().push(action.clone()));

    store.dispatch(ParentAction::Item(
        2,
        FormAction::IncrementLater(Duration::from_millis(2)),
    ));
    store.settled().await;

    assert_eq!(store.read().items[&2].count, 3);
    assert_eq!(store.read().items[&1].count, 1);
    assert_eq!(
        actions.lock().last(),
        Some(&ParentAction::Item(2, FormAction::Increment))
    );
}

#[tokio::test]
async fn missing_key_leaves_collection_untouched() {
    let store = parent_store(parent_with_items(), Env::default());
    let before = store.read();

    store.dispatch(ParentAction::Item(42, FormAction::Increment));

    let after = store.read();
    assert_eq!(after.items.len(), 3);
    assert_eq!(after, before);
}

#[tokio::test]
async fn action_for_removed_item_is_dropped_after_removal() {
    let store = parent_store(parent_with_items(), Env::default());
    let env = store.environment().clone();

    store.dispatch(ParentAction::Item(
        3,
        FormAction::IncrementLater(Duration::from_millis(10)),
    ));
    store.dispatch(ParentAction::Remove(3));
    store.settled().await;

    let state = store.read();
    assert_eq!(state.items.len(), 2);
    assert!(!state.items.contains_key(&3));
    assert!(env.entries().is_empty());
}

#[test]
fn cursor_update_is_pure() {
    let env = Env::default();
    let parent = parent_with_items();

    let first = update_cursor::<FormModel, _>(
        &child_cursor(),
        parent.clone(),
        FormAction::SetText("a".into()),
        &env,
    );
    let second = update_cursor::<FormModel, _>(
        &child_cursor(),
        parent.clone(),
        FormAction::SetText("a".into()),
        &env,
    );
    assert_eq!(first.state, second.state);
    assert_eq!(first.state.items, parent.items);
}

#[test]
fn try_update_keyed_present_and_absent() {
    let env = Env::default();
    let parent = parent_with_items();

    let hit = try_update_keyed::<FormModel, _>(
        &item_cursor(),
        &parent,
        FormAction::SetCount(9),
        &env,
        &1,
    )
    .expect("key 1 exists");
    assert_eq!(hit.state.items[&1].count, 9);
    assert_eq!(hit.effects.len(), 1);

    let miss = try_update_keyed::<FormModel, _>(
        &item_cursor(),
        &parent,
        FormAction::SetCount(9),
        &env,
        &7,
    );
    assert!(miss.is_none());
}
