use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use tasklist_core::{FilterMode, Task, TaskId, TaskStore};
use tracing::debug;

use crate::components::task_list::TaskList;
use crate::form::{FormField, TaskForm};

/// Which dialog, if any, is open.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// List navigation, no dialog
    Normal,
    /// Create (`editing: None`) or edit dialog
    Editing {
        editing: Option<TaskId>,
        form: TaskForm,
    },
    /// Read-only task detail
    Viewing { task: Task },
    /// Confirm delete task
    ConfirmDelete { task: Task },
}

pub struct App {
    store: TaskStore,
    list: TaskList,
    mode: Mode,
    status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, filter: FilterMode) -> Self {
        let list = Self::load_list(&store, filter);
        Self {
            store,
            list,
            mode: Mode::Normal,
            status_message: None,
        }
    }

    fn load_list(store: &TaskStore, filter: FilterMode) -> TaskList {
        let tasks = store.filtered(filter).into_iter().cloned().collect();
        TaskList::new(tasks, filter)
    }

    /// Rebuild the visible list from the store, keeping the cursor on the
    /// same task when it is still visible.
    fn refresh(&mut self) {
        let selected_id = self.list.selected_task().map(|t| t.id);
        let selected_idx = self.list.selected_index();
        self.list = Self::load_list(&self.store, self.list.filter());
        if let Some(id) = selected_id {
            if !self.list.select_task_by_id(id) {
                self.list.select_index(selected_idx.unwrap_or(0));
            }
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn filter(&self) -> FilterMode {
        self.list.filter()
    }

    pub fn visible_tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list.selected_task()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        if filter == self.list.filter() {
            return;
        }
        debug!(filter = filter.as_str(), "filter changed");
        let selected_id = self.list.selected_task().map(|t| t.id);
        self.list = Self::load_list(&self.store, filter);
        if let Some(id) = selected_id {
            self.list.select_task_by_id(id);
        }
        self.status_message = Some(format!("Filter: {}", filter.display_name()));
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(from = mode_name(&self.mode), to = mode_name(&mode), "mode transition");
        self.mode = mode;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::Editing { editing, form } => self.handle_editing(key, editing, form),
            Mode::Viewing { .. } => self.handle_viewing(key),
            Mode::ConfirmDelete { task } => self.handle_confirm_delete(key, task),
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('e') => {
                if let Some(task) = self.list.selected_task().cloned() {
                    self.open_edit(&task);
                }
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(task) = self.list.selected_task() {
                    let task = task.clone();
                    self.set_mode(Mode::Viewing { task });
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.list.selected_task() {
                    let task = task.clone();
                    self.set_mode(Mode::ConfirmDelete { task });
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.list.selected_task().map(|t| t.id) {
                    self.store.toggle_completed(id);
                    self.refresh();
                }
            }
            KeyCode::Tab | KeyCode::Char('f') => self.set_filter(self.filter().next()),
            KeyCode::BackTab => self.set_filter(self.filter().prev()),
            KeyCode::Char('1') => self.set_filter(FilterMode::All),
            KeyCode::Char('2') => self.set_filter(FilterMode::Active),
            KeyCode::Char('3') => self.set_filter(FilterMode::Completed),
            _ => self.list.handle_key(key),
        }
    }

    fn open_create(&mut self) {
        self.set_mode(Mode::Editing {
            editing: None,
            form: TaskForm::new(),
        });
    }

    fn open_edit(&mut self, task: &Task) {
        self.set_mode(Mode::Editing {
            editing: Some(task.id),
            form: TaskForm::from_task(task),
        });
    }

    fn handle_editing(&mut self, key: KeyEvent, editing: Option<TaskId>, mut form: TaskForm) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.set_mode(Mode::Normal),
            KeyCode::Char('s') if ctrl => self.submit_form(editing, form),
            KeyCode::Enter if form.field == FormField::Title => self.submit_form(editing, form),
            KeyCode::Enter => {
                form.newline();
                self.mode = Mode::Editing { editing, form };
            }
            KeyCode::Tab | KeyCode::BackTab => {
                form.toggle_field();
                self.mode = Mode::Editing { editing, form };
            }
            KeyCode::Backspace => {
                form.pop();
                self.mode = Mode::Editing { editing, form };
            }
            KeyCode::Char(c) if !ctrl => {
                form.push(c);
                self.mode = Mode::Editing { editing, form };
            }
            _ => {}
        }
    }

    /// Commit the form. Does nothing while the title is blank.
    fn submit_form(&mut self, editing: Option<TaskId>, form: TaskForm) {
        if !form.can_submit() {
            return;
        }
        match editing {
            Some(id) => {
                if self.store.update(id, &form.title, &form.description) {
                    self.status_message = Some("Task updated".into());
                }
                self.refresh();
            }
            None => {
                if let Some(id) = self.store.create(&form.title, &form.description) {
                    self.refresh();
                    self.list.select_task_by_id(id);
                    self.status_message = Some("Task created".into());
                }
            }
        }
        self.set_mode(Mode::Normal);
    }

    fn handle_viewing(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            self.set_mode(Mode::Normal);
        }
    }

    fn handle_confirm_delete(&mut self, key: KeyEvent, task: Task) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if self.store.delete(task.id) {
                    self.status_message = Some(format!("Deleted: {}", task.title));
                }
                self.refresh();
                self.set_mode(Mode::Normal);
            }
            _ => self.set_mode(Mode::Normal),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        self.render_filter_tabs(frame, layout[1]);
        self.list.render(frame, layout[2]);
        self.render_status_bar(frame, layout[3]);

        // Overlays
        match &self.mode {
            Mode::Normal => {}
            Mode::Editing { editing, form } => {
                self.render_form(frame, editing.is_some(), form, area)
            }
            Mode::Viewing { task } => self.render_task_detail(frame, task, area),
            Mode::ConfirmDelete { task } => self.render_confirm_delete_dialog(frame, task, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let counts = self.store.counts();
        let title = Line::from(vec![
            Span::styled(" Task Manager ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(counts.active.to_string(), Style::default().bold()),
            Span::raw(" active · "),
            Span::styled(counts.completed.to_string(), Style::default().bold()),
            Span::raw(" completed"),
        ]);
        frame.render_widget(title, area);
    }

    fn render_filter_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = FilterMode::ALL
            .iter()
            .map(|f| Line::from(f.display_name()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.filter().index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
            .divider(" ");
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Normal => vec![
                ("q", "quit"),
                ("j/k", "tasks"),
                ("n", "new"),
                ("e", "edit"),
                ("Enter", "view"),
                ("Space", "toggle"),
                ("d", "del"),
                ("Tab", "filter"),
            ],
            Mode::Editing { form, .. } => match form.field {
                FormField::Title => vec![
                    ("Enter", "save"),
                    ("Tab", "description"),
                    ("Esc", "cancel"),
                ],
                FormField::Description => vec![
                    ("Ctrl+S", "save"),
                    ("Tab", "title"),
                    ("Esc", "cancel"),
                ],
            },
            Mode::Viewing { .. } => vec![("Esc/q/Enter", "close")],
            Mode::ConfirmDelete { .. } => vec![("y", "confirm"), ("any", "cancel")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default().fg(Color::Yellow).bold(),
                    ),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_form(&self, frame: &mut Frame, is_edit: bool, form: &TaskForm, area: Rect) {
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let (heading, submit_label) = if is_edit {
            (" Edit Task ", "Save Changes")
        } else {
            (" Add New Task ", "Add Task")
        };
        let block = Block::default()
            .title(heading)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Paragraph::new(form.title.as_str())
            .block(field_block("Title *", form.field == FormField::Title));
        frame.render_widget(title, rows[0]);

        let description = Paragraph::new(form.description.as_str())
            .block(field_block(
                "Description (optional)",
                form.field == FormField::Description,
            ))
            .wrap(Wrap { trim: false });
        frame.render_widget(description, rows[1]);

        let submit_style = if form.can_submit() {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let buttons = Line::from(vec![
            Span::styled(" Cancel ", Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(format!(" {submit_label} "), submit_style),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(buttons, rows[2]);
    }

    fn render_task_detail(&self, frame: &mut Frame, task: &Task, area: Rect) {
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Task Detail ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let badge_style = if task.completed {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Blue).bold()
        };

        let mut lines = vec![
            Line::from(Span::styled(task.title.as_str(), Style::default().bold())),
            Line::from(""),
            Line::from(Span::styled(format!("[{}]", task.status_name()), badge_style)),
        ];

        if task.has_description() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Description", Style::default().bold())));
            lines.extend(task.description.lines().map(Line::from));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Created", Style::default().bold())));
        lines.push(Line::from(format_created_at(task)));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_confirm_delete_dialog(&self, frame: &mut Frame, task: &Task, area: Rect) {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Delete Task? ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let text = format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.\n\n(y)es / (any key) cancel",
            task.title
        );
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup);
    }
}

fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Normal => "normal",
        Mode::Editing { editing: None, .. } => "creating",
        Mode::Editing { .. } => "editing",
        Mode::Viewing { .. } => "viewing",
        Mode::ConfirmDelete { .. } => "confirm_delete",
    }
}

fn field_block(label: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border)
}

/// Creation time in local time, e.g. `10/1/2024, 9:00:00 AM`.
pub fn format_created_at(task: &Task) -> String {
    task.created_at
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
