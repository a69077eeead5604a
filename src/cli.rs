use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use std::sync::Arc;

use crate::calendar::{self, slots, CalendarView};
use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::models::message::Role;
use crate::models::task::{Priority, TaskDraft};
use crate::service::chat;
use crate::service::coach::{CoachClient, GeminiCoach};

#[derive(Parser)]
#[command(name = "focusdesk", about = "Marketing-team productivity dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard stats line once and exit.
    Summary,
}

pub async fn run(settings: Settings) {
    let cli = Cli::parse();
    let coach: Option<Arc<dyn CoachClient>> = settings
        .gemini_api_key
        .clone()
        .map(|key| Arc::new(GeminiCoach::new(key)) as Arc<dyn CoachClient>);
    let today = Local::now().date_naive();
    let mut dashboard = Dashboard::new(today, coach);

    match cli.command {
        Some(Commands::Summary) => print_stats(&dashboard),
        None => interactive_loop(&mut dashboard, today).await,
    }
}

async fn interactive_loop(dashboard: &mut Dashboard, today: NaiveDate) {
    print_dashboard(dashboard, today);
    loop {
        let options = vec![
            "Show dashboard",
            "Show calendar",
            "Switch calendar view",
            "Previous",
            "Next",
            "Add task",
            "Open coach chat",
            "Test AI connection",
            "Quit",
        ];
        let choice = match Select::new("What next?", options).prompt() {
            Ok(choice) => choice,
            Err(_) => break,
        };
        match choice {
            "Show dashboard" => print_dashboard(dashboard, today),
            "Show calendar" => print_calendar(dashboard),
            "Switch calendar view" => {
                switch_view(dashboard);
                print_calendar(dashboard);
            }
            "Previous" => {
                dashboard.navigate(-1);
                print_calendar(dashboard);
            }
            "Next" => {
                dashboard.navigate(1);
                print_calendar(dashboard);
            }
            "Add task" => add_task_prompt(dashboard),
            "Open coach chat" => chat_loop(dashboard).await,
            "Test AI connection" => {
                dashboard.chat_mut().test_connection().await;
                print_transcript_tail(dashboard, 1);
            }
            _ => break,
        }
    }
}

fn print_dashboard(dashboard: &Dashboard, today: NaiveDate) {
    let indicator = if dashboard.chat().is_configured() {
        "Gemini AI Connected"
    } else {
        "AI Offline"
    };
    println!();
    println!(
        "HAY Productivity Dashboard - {}",
        today.format("%A, %B %-d, %Y")
    );
    println!("[{indicator}]");
    print_stats(dashboard);
    println!();
    println!("Priority Tasks");
    for task in dashboard.tasks().tasks() {
        println!(
            "  #{} {} [{}] due {} ({})",
            task.id, task.title, task.priority, task.deadline, task.estimated_hours
        );
        if !task.description.is_empty() {
            println!("      {}", task.description);
        }
    }
    println!();
    println!("Today's Schedule");
    for event in calendar::events_on_date(dashboard.events(), today) {
        println!("  {}  {}", event.time_range(), event.title);
    }
}

fn print_stats(dashboard: &Dashboard) {
    let stats = dashboard.stats();
    println!(
        "Active Tasks: {} | Critical Items: {} | Calendar Events: {} | Est. Hours: {}h",
        stats.active_tasks, stats.critical_items, stats.calendar_events, stats.estimated_hours
    );
}

fn print_calendar(dashboard: &Dashboard) {
    println!();
    println!(
        "Calendar ({} view, {})",
        dashboard.view.label(),
        dashboard.reference.format("%Y-%m-%d")
    );
    match dashboard.view {
        CalendarView::Day => print_day(dashboard, dashboard.reference),
        CalendarView::Week => {
            for date in calendar::week_dates(dashboard.reference) {
                let marker = if date == dashboard.reference { "*" } else { " " };
                let events = calendar::events_on_date(dashboard.events(), date);
                print!("{marker}{}", date.format("%a %m-%d"));
                if events.is_empty() {
                    println!();
                } else {
                    let titles: Vec<&str> =
                        events.iter().map(|event| event.title.as_str()).collect();
                    println!("  {}", titles.join(", "));
                }
            }
        }
        CalendarView::Month => {
            println!(" Su  Mo  Tu  We  Th  Fr  Sa");
            for week in calendar::month_weeks(dashboard.reference) {
                let row: Vec<String> = week
                    .iter()
                    .map(|date| {
                        if date.month() == dashboard.reference.month() {
                            let busy =
                                !calendar::events_on_date(dashboard.events(), *date).is_empty();
                            format!("{:>3}{}", date.day(), if busy { "*" } else { " " })
                        } else {
                            "  . ".to_string()
                        }
                    })
                    .collect();
                println!("{}", row.join(""));
            }
        }
    }
}

fn print_day(dashboard: &Dashboard, date: NaiveDate) {
    for hour in slots::slot_hours() {
        let events = calendar::events_in_slot(dashboard.events(), date, hour);
        if events.is_empty() {
            println!("  {hour:02}:00");
        } else {
            for event in events {
                println!("  {hour:02}:00  {} ({})", event.title, event.time_range());
            }
        }
    }
}

fn switch_view(dashboard: &mut Dashboard) {
    let views = vec!["day", "week", "month"];
    if let Ok(choice) = Select::new("Calendar view", views).prompt() {
        let view = match choice {
            "week" => CalendarView::Week,
            "month" => CalendarView::Month,
            _ => CalendarView::Day,
        };
        dashboard.set_view(view);
    }
}

fn add_task_prompt(dashboard: &mut Dashboard) {
    let Ok(title) = Text::new("Task title:").prompt() else {
        return;
    };
    let description = optional_text("Description (optional):");
    let priority = Select::new("Priority", vec!["critical", "important", "normal"])
        .prompt()
        .ok()
        .map(|choice| match choice {
            "critical" => Priority::Critical,
            "normal" => Priority::Normal,
            _ => Priority::Important,
        });
    let deadline = optional_text("Deadline (optional):");
    let estimated_hours = optional_text("Estimated hours (optional):");

    let added = dashboard.add_task(TaskDraft {
        title,
        description,
        priority,
        deadline,
        estimated_hours,
    });
    if added {
        println!("Task added.");
        print_transcript_tail(dashboard, 1);
    } else {
        println!("Task title cannot be empty.");
    }
}

fn optional_text(prompt: &str) -> Option<String> {
    Text::new(prompt)
        .prompt()
        .ok()
        .filter(|text| !text.trim().is_empty())
}

async fn chat_loop(dashboard: &mut Dashboard) {
    dashboard.set_chat_open(true);
    if dashboard.chat().transcript().is_empty() {
        println!("{}", chat::GREETING);
    } else {
        print_transcript_tail(dashboard, usize::MAX);
    }
    loop {
        let Ok(text) = Text::new("You (blank to close):").prompt() else {
            break;
        };
        if text.trim().is_empty() {
            break;
        }
        println!("Thinking...");
        dashboard.chat_mut().send(&text).await;
        print_transcript_tail(dashboard, 1);
    }
    dashboard.set_chat_open(false);
}

fn print_transcript_tail(dashboard: &Dashboard, count: usize) {
    let transcript = dashboard.chat().transcript();
    let start = transcript.len().saturating_sub(count);
    for message in &transcript[start..] {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "coach",
        };
        println!("[{}] {}: {}", message.timestamp, who, message.content);
    }
}
