use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Important,
    Normal,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::Important => "important",
            Priority::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub deadline: String,
    pub estimated_hours: String,
}

#[derive(Debug, Default, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub deadline: Option<String>,
    pub estimated_hours: Option<String>,
}

impl TaskDraft {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskSummary {
    pub count: usize,
    pub critical_count: usize,
    pub total_estimated_hours: f64,
}

// Append-only for the whole session; ids come from a monotonic counter.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.add(TaskDraft {
            title: "Sales office customer journey".to_string(),
            description: Some(
                "Design and map the complete customer journey for the sales office experience"
                    .to_string(),
            ),
            priority: Some(Priority::Critical),
            deadline: Some("2 weeks".to_string()),
            estimated_hours: Some("8h".to_string()),
        });
        store.add(TaskDraft {
            title: "August digital campaign".to_string(),
            description: Some(
                "Launch comprehensive digital marketing campaign for August neighborhood showcase"
                    .to_string(),
            ),
            priority: Some(Priority::Critical),
            deadline: Some("Aug 1-2".to_string()),
            estimated_hours: Some("12h".to_string()),
        });
        store.add(TaskDraft {
            title: "November event planning".to_string(),
            description: Some(
                "Plan and coordinate the November community engagement event".to_string(),
            ),
            priority: Some(Priority::Important),
            deadline: Some("Oct 15".to_string()),
            estimated_hours: Some("15h".to_string()),
        });
        store
    }

    /// Returns `None` without touching the store when the title is
    /// empty or whitespace-only. Missing fields get defaults.
    pub fn add(&mut self, draft: TaskDraft) -> Option<&Task> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        self.next_id += 1;
        self.tasks.push(Task {
            id: self.next_id,
            title: title.to_string(),
            description: draft.description.unwrap_or_default(),
            priority: draft.priority.unwrap_or(Priority::Important),
            deadline: draft.deadline.unwrap_or_else(|| "TBD".to_string()),
            estimated_hours: draft.estimated_hours.unwrap_or_else(|| "TBD".to_string()),
        });
        self.tasks.last()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // Total hours come from the numeric prefix of each estimate;
    // "12h" counts as 12, "TBD" as 0.
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            count: self.tasks.len(),
            critical_count: self
                .tasks
                .iter()
                .filter(|t| t.priority == Priority::Critical)
                .count(),
            total_estimated_hours: self
                .tasks
                .iter()
                .map(|t| numeric_prefix(&t.estimated_hours))
                .sum(),
        }
    }
}

fn numeric_prefix(text: &str) -> f64 {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0.0)
}
