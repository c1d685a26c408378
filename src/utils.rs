//! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use crate::calendar::MonthGrid;
use crate::view::{TaskEntry, TaskListView};

/// A debug utility that pretty-prints a task list view
pub fn print_task_list(view: &TaskListView) {
    match view.filter {
        Some(day) => println!("TASKS on {} ({} remaining overall)", day, view.remaining),
        None => println!("TASKS ({} remaining)", view.remaining),
    }
    for entry in &view.entries {
        print_task(entry);
    }
}

pub fn print_task(entry: &TaskEntry) {
    let completion = if entry.completed { "✓" } else { " " };
    println!("    {} {}\t{} · {} min · {}",
        completion, entry.text, entry.date_label, entry.duration_minutes, entry.accent.to_hex_string());
}

/// A debug utility that pretty-prints a month grid, one line per week
pub fn print_month_grid(grid: &MonthGrid) {
    println!("{:^28}", grid.label);
    for label in &grid.weekday_labels {
        print!("{:>4}", label);
    }
    println!();

    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        print!("    ");
        column += 1;
    }
    for cell in &grid.cells {
        let marker = if cell.is_today {
            '*'
        } else if cell.is_selected {
            '>'
        } else if cell.indicators.is_empty() == false {
            '.'
        } else {
            ' '
        };
        print!(" {:>2}{}", cell.day, marker);
        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    stdout.write_all(b"Press Enter to continue...").unwrap();
    stdout.flush().unwrap();
    stdin().read_exact(&mut [0]).unwrap();
}
