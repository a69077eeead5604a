use std::sync::Arc;

use chrono::NaiveDate;

use crate::calendar::{self, CalendarView};
use crate::models::event::{seed_events, CalendarEvent};
use crate::models::task::{TaskDraft, TaskStore};
use crate::service::chat::ChatSession;
use crate::service::coach::CoachClient;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub active_tasks: usize,
    pub critical_items: usize,
    pub calendar_events: usize,
    pub estimated_hours: f64,
}

/// All interaction state in one value. Every user action mutates it
/// through a method, and every render reads from it.
pub struct Dashboard {
    pub view: CalendarView,
    pub reference: NaiveDate,
    show_chat: bool,
    tasks: TaskStore,
    events: Vec<CalendarEvent>,
    chat: ChatSession,
}

impl Dashboard {
    pub fn new(today: NaiveDate, coach: Option<Arc<dyn CoachClient>>) -> Self {
        Self {
            view: CalendarView::Day,
            reference: today,
            show_chat: false,
            tasks: TaskStore::seeded(),
            events: seed_events(today),
            chat: ChatSession::new(coach),
        }
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatSession {
        &mut self.chat
    }

    pub fn stats(&self) -> DashboardStats {
        let summary = self.tasks.summary();
        DashboardStats {
            active_tasks: summary.count,
            critical_items: summary.critical_count,
            calendar_events: self.events.len(),
            estimated_hours: summary.total_estimated_hours,
        }
    }

    // On success the scripted coaching note lands in the transcript.
    pub fn add_task(&mut self, draft: TaskDraft) -> bool {
        match self.tasks.add(draft) {
            Some(task) => {
                let task = task.clone();
                self.chat.append_task_note(&task);
                true
            }
            None => false,
        }
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn chat_open(&self) -> bool {
        self.show_chat
    }

    pub fn set_chat_open(&mut self, open: bool) {
        self.show_chat = open;
    }

    pub fn navigate(&mut self, direction: i32) {
        self.reference = calendar::navigate(self.reference, self.view, direction);
    }
}
