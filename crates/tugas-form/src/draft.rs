/// **Input**: Raw field text typed by the user.
/// **Output**: `DraftTask` values, field metadata, and the wire request.
/// **Position**: Form data model shared by the controller and every front end.
/// **Update**: Revisit when form fields or their labels change.
use tugas_adapter::CreateTaskRequest;

/// Editable fields of the task form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Name,
    DeadlineDate,
    DeadlineTime,
    AttachmentLink,
    SubmitLink,
}

/// What kind of value a field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Time,
    Url,
}

impl TaskField {
    pub const ALL: [TaskField; 5] = [
        TaskField::Name,
        TaskField::DeadlineDate,
        TaskField::DeadlineTime,
        TaskField::AttachmentLink,
        TaskField::SubmitLink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskField::Name => "Nama Tugas",
            TaskField::DeadlineDate => "Tanggal Deadline",
            TaskField::DeadlineTime => "Waktu Deadline (Opsional)",
            TaskField::AttachmentLink => "Link Tugas (Opsional)",
            TaskField::SubmitLink => "Link Pengumpulan (Opsional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            TaskField::Name => "Contoh: UTS SDA",
            TaskField::DeadlineDate => "YYYY-MM-DD",
            TaskField::DeadlineTime => "HH:MM",
            TaskField::AttachmentLink => "https://drive.google.com/...",
            TaskField::SubmitLink => "https://spot.upi.edu/...",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            TaskField::Name => InputKind::Text,
            TaskField::DeadlineDate => InputKind::Date,
            TaskField::DeadlineTime => InputKind::Time,
            TaskField::AttachmentLink | TaskField::SubmitLink => InputKind::Url,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, TaskField::Name | TaskField::DeadlineDate)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The in-progress, unsaved task record held in form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTask {
    pub name: String,
    pub deadline_date: String,
    pub deadline_time: String,
    pub attachment_link: String,
    pub submit_link: String,
}

impl DraftTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::Name => &self.name,
            TaskField::DeadlineDate => &self.deadline_date,
            TaskField::DeadlineTime => &self.deadline_time,
            TaskField::AttachmentLink => &self.attachment_link,
            TaskField::SubmitLink => &self.submit_link,
        }
    }

    pub fn get_mut(&mut self, field: TaskField) -> &mut String {
        match field {
            TaskField::Name => &mut self.name,
            TaskField::DeadlineDate => &mut self.deadline_date,
            TaskField::DeadlineTime => &mut self.deadline_time,
            TaskField::AttachmentLink => &mut self.attachment_link,
            TaskField::SubmitLink => &mut self.submit_link,
        }
    }

    pub fn is_empty(&self) -> bool {
        TaskField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Wire payload; values are sent exactly as typed.
    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            name: self.name.clone(),
            deadline_date: self.deadline_date.clone(),
            deadline_time: self.deadline_time.clone(),
            attachment_link: self.attachment_link.clone(),
            submit_link: self.submit_link.clone(),
        }
    }
}
