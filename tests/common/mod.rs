//! Shared fixture models for store tests.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use unistore::{
    update_cursor, update_keyed, Effect, KeyedLens, Lens, Model, Store, StoreConfig, Transition,
    Update,
};

/// Services handed to the fixture models. Effects record into `log`.
#[derive(Clone, Default)]
pub struct Env {
    pub log: Arc<Mutex<Vec<String>>>,
}

impl Env {
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    pub count: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Increment,
    SetCount(i32),
    SetText(String),
    IncrementLater(Duration),
    Animated(&'static str),
    Logged,
}

pub struct FormModel;

impl Model for FormModel {
    type State = Form;
    type Action = FormAction;
    type Environment = Env;

    fn update(state: Form, action: FormAction, env: &Env) -> Update<Form, FormAction> {
        match action {
            FormAction::Increment => Update::new(Form {
                count: state.count + 1,
                ..state
            }),
            FormAction::SetCount(count) => {
                let log = Arc::clone(&env.log);
                Update::with_effects(
                    Form { count, ..state },
                    vec![Effect::new(async move {
                        log.lock().push(format!("set_count:{}", count));
                        FormAction::Logged
                    })],
                )
            }
            FormAction::SetText(text) => Update::new(Form { text, ..state }),
            FormAction::IncrementLater(delay) => Update::with_effects(
                state,
                vec![Effect::new(async move {
                    tokio::time::sleep(delay).await;
                    FormAction::Increment
                })],
            ),
            FormAction::Animated(name) => Update::new(Form {
                count: state.count + 1,
                ..state
            })
            .with_transition(Transition::new(name)),
            FormAction::Logged => Update::new(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parent {
    pub title: String,
    pub child: Form,
    pub items: BTreeMap<u32, Form>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParentAction {
    Child(FormAction),
    Item(u32, FormAction),
    Remove(u32),
}

pub fn child_cursor() -> Lens<Parent, Form, ParentAction, FormAction> {
    Lens::new(
        |parent: &Parent| parent.child.clone(),
        |parent: Parent, child| Parent { child, ..parent },
        ParentAction::Child,
    )
}

pub fn item_cursor() -> KeyedLens<Parent, Form, ParentAction, FormAction, u32> {
    KeyedLens::new(
        |parent: &Parent, id: &u32| parent.items.get(id).cloned(),
        |mut parent: Parent, item, id: &u32| {
            parent.items.insert(*id, item);
            parent
        },
        |action, id: &u32| ParentAction::Item(*id, action),
    )
}

pub struct ParentModel;

impl Model for ParentModel {
    type State = Parent;
    type Action = ParentAction;
    type Environment = Env;

    fn update(state: Parent, action: ParentAction, env: &Env) -> Update<Parent, ParentAction> {
        match action {
            ParentAction::Child(action) => {
                update_cursor::<FormModel, _>(&child_cursor(), state, action, env)
            }
            ParentAction::Item(id, action) => {
                update_keyed::<FormModel, _>(&item_cursor(), state, action, env, &id)
            }
            ParentAction::Remove(id) => {
                let mut parent = state;
                parent.items.remove(&id);
                Update::new(parent)
            }
        }
    }
}

/// Parent with three items keyed 1..=3, item `n` holding count `n`.
pub fn parent_with_items() -> Parent {
    let mut parent = Parent {
        title: "list".into(),
        ..Parent::default()
    };
    for id in 1..=3 {
        parent.items.insert(
            id,
            Form {
                count: id as i32,
                text: format!("item {}", id),
            },
        );
    }
    parent
}

pub fn form_store(env: Env) -> Store<FormModel> {
    Store::builder(env)
        .config(StoreConfig::with_label("form").log_dispatch(true))
        .build(Form::default())
        .expect("store")
}

pub fn parent_store(state: Parent, env: Env) -> Store<ParentModel> {
    Store::builder(env)
        .config(StoreConfig::with_label("parent"))
        .build(state)
        .expect("store")
}

/// Collects every committed state an observer sees.
pub fn record_changes<M: Model>(store: &Store<M>) -> Arc<Mutex<Vec<M::State>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.observe(move |change| sink.lock().push(change.state.clone()));
    seen
}
