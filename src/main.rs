//! Demo: a counter and a keyed task list driven through one store.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use unistore::logging::init_tracing;
use unistore::{
    update_cursor, update_keyed, Cursor, Effect, KeyedLens, Model, Store, StoreConfig, StoreLike,
    Update,
};

#[derive(Parser)]
#[command(name = "unistore-demo")]
#[command(about = "Drive a sample store through cursors and delayed effects")]
#[command(version)]
struct Cli {
    /// Store config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of delayed increments to schedule
    #[arg(short, long, default_value_t = 3)]
    increments: u32,

    /// Delay step between increments, in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Counter {
    count: u32,
}

#[derive(Debug)]
enum CounterAction {
    Increment,
    IncrementAfter(Duration),
    Set(u32),
}

struct CounterModel;

impl Model for CounterModel {
    type State = Counter;
    type Action = CounterAction;
    type Environment = ();

    fn update(state: Counter, action: CounterAction, _env: &()) -> Update<Counter, CounterAction> {
        match action {
            CounterAction::Increment => Update::new(Counter {
                count: state.count + 1,
            }),
            CounterAction::IncrementAfter(delay) => Update::with_effects(
                state,
                vec![Effect::new(async move {
                    tokio::time::sleep(delay).await;
                    CounterAction::Increment
                })],
            ),
            CounterAction::Set(count) => Update::new(Counter { count }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    title: String,
    done: bool,
}

#[derive(Debug)]
enum TaskAction {
    Toggle,
}

struct TaskModel;

impl Model for TaskModel {
    type State = Task;
    type Action = TaskAction;
    type Environment = ();

    fn update(state: Task, action: TaskAction, _env: &()) -> Update<Task, TaskAction> {
        match action {
            TaskAction::Toggle => Update::new(Task {
                done: !state.done,
                ..state
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct App {
    counter: Counter,
    tasks: BTreeMap<u32, Task>,
}

#[derive(Debug)]
enum AppAction {
    Counter(CounterAction),
    Task(u32, TaskAction),
    AddTask(u32, String),
    RemoveTask(u32),
}

#[derive(Clone)]
struct CounterCursor;

impl Cursor for CounterCursor {
    type Outer = App;
    type Inner = Counter;
    type OuterAction = AppAction;
    type InnerAction = CounterAction;

    fn get(&self, app: &App) -> Counter {
        app.counter.clone()
    }

    fn set(&self, app: App, counter: Counter) -> App {
        App { counter, ..app }
    }

    fn tag(&self, action: CounterAction) -> AppAction {
        AppAction::Counter(action)
    }
}

fn task_cursor() -> KeyedLens<App, Task, AppAction, TaskAction, u32> {
    KeyedLens::new(
        |app: &App, id: &u32| app.tasks.get(id).cloned(),
        |mut app: App, task, id: &u32| {
            app.tasks.insert(*id, task);
            app
        },
        |action, id: &u32| AppAction::Task(*id, action),
    )
}

struct AppModel;

impl Model for AppModel {
    type State = App;
    type Action = AppAction;
    type Environment = ();

    fn update(state: App, action: AppAction, env: &()) -> Update<App, AppAction> {
        match action {
            AppAction::Counter(action) => {
                update_cursor::<CounterModel, _>(&CounterCursor, state, action, env)
            }
            AppAction::Task(id, action) => {
                update_keyed::<TaskModel, _>(&task_cursor(), state, action, env, &id)
            }
            AppAction::AddTask(id, title) => {
                let mut app = state;
                app.tasks.insert(id, Task { title, done: false });
                Update::new(app)
            }
            AppAction::RemoveTask(id) => {
                let mut app = state;
                app.tasks.remove(&id);
                Update::new(app)
            }
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let config = match &cli.config {
        Some(path) => StoreConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StoreConfig::with_label("demo"),
    };

    let store = Store::<AppModel>::builder(()).config(config).build_with(|_| {
        Update::with_effects(
            App::default(),
            vec![
                Effect::just(AppAction::AddTask(1, "write docs".into())),
                Effect::just(AppAction::AddTask(2, "ship".into())),
            ],
        )
    })?;
    store.observe(|change| {
        println!(
            "state: count={} tasks={}",
            change.state.counter.count,
            change.state.tasks.len()
        );
    });
    store.settled().await;

    let counter = store.scope(CounterCursor);
    for step in 1..=u64::from(cli.increments) {
        counter.dispatch(CounterAction::IncrementAfter(Duration::from_millis(
            cli.delay_ms * step,
        )));
    }
    store.settled().await;

    let count = counter.binding(|counter: &Counter| counter.count, CounterAction::Set);
    count.set(count.get() * 10);

    store.scope_keyed(task_cursor(), 1).dispatch(TaskAction::Toggle);
    store.dispatch(AppAction::RemoveTask(2));
    // Task 2 is gone; this lands on a missing key and is dropped.
    store.scope_keyed(task_cursor(), 2).dispatch(TaskAction::Toggle);

    let state = store.read();
    let done: Vec<&str> = state
        .tasks
        .values()
        .filter(|task| task.done)
        .map(|task| task.title.as_str())
        .collect();
    println!(
        "final count={} tasks={} done={:?}",
        state.counter.count,
        state.tasks.len(),
        done
    );
    Ok(())
}
