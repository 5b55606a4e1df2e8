use tasklist_core::Task;

/// Which input of the create/edit dialog has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

/// Transient fields bound to the create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub field: FormField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated from an existing task, focus on the title.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            field: FormField::Title,
        }
    }

    /// Submission stays disabled while the title is blank.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    /// Titles are single-line; only the description takes newlines.
    pub fn newline(&mut self) {
        if self.field == FormField::Description {
            self.description.push('\n');
        }
    }
}
