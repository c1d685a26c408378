//! A small offline walkthrough of the planner.
//! Set `RUST_LOG=debug` to see what the store does under the hood.

use std::path::Path;

use chrono::{Duration, Local};

use dayboard::cache::Cache;
use dayboard::utils::{print_month_grid, print_task_list};
use dayboard::Planner;
use dayboard::TaskColor;
use dayboard::TaskKey;

const DEMO_STORAGE_FILE: &str = "demo_tasks.json";

fn main() {
    env_logger::init();

    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    let cache = Cache::new(Path::new(DEMO_STORAGE_FILE));
    let mut planner = Planner::new(cache);

    println!("Loaded {} saved task(s) from {}", planner.store().tasks().len(), DEMO_STORAGE_FILE);

    let groceries = planner.add_task("Buy groceries", today, 45, TaskColor::Green);
    planner.add_task("Water the plants", today, 10, TaskColor::Blue);
    planner.add_task("Call the dentist", tomorrow, 15, TaskColor::Pink);

    // Invalid inputs are rejected and create nothing
    assert!(planner.add_task("   ", today, 30, TaskColor::Blue).is_none());

    if let Some(id) = groceries {
        planner.toggle_task(&TaskKey::Id(id));
    }

    println!("\n---- This month ----");
    print_month_grid(&planner.month_grid());

    println!("\n---- All tasks ----");
    print_task_list(&planner.task_list());

    planner.select_day(today);
    println!("\n---- Only today ----");
    print_task_list(&planner.task_list());

    planner.next_month();
    println!("\n---- Next month ----");
    print_month_grid(&planner.month_grid());

    println!("\n{} task(s) remaining. Run me again: the list was saved to {}.",
        planner.remaining_count(), DEMO_STORAGE_FILE);
}
