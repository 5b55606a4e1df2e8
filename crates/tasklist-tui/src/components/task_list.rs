use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use tasklist_core::{FilterMode, Task, TaskId};

/// The filtered task list with its cursor.
pub struct TaskList {
    tasks: Vec<Task>,
    filter: FilterMode,
    list_state: ListState,
}

impl TaskList {
    /// `tasks` must already be filtered by `filter`.
    pub fn new(tasks: Vec<Task>, filter: FilterMode) -> Self {
        let mut list_state = ListState::default();
        if !tasks.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            tasks,
            filter,
            list_state,
        }
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Returns the currently highlighted task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.list_state.selected()?;
        self.tasks.get(idx)
    }

    /// Select the task with the given id. Returns `false` and leaves the
    /// cursor alone if it is not in the list.
    pub fn select_task_by_id(&mut self, task_id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == task_id) {
            Some(idx) => {
                self.list_state.select(Some(idx));
                true
            }
            None => false,
        }
    }

    /// Select `idx`, clamped to the last row.
    pub fn select_index(&mut self, idx: usize) {
        if self.tasks.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(idx.min(self.tasks.len() - 1)));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < self.tasks.len() {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            // Jump to first/last
            KeyCode::Char('g') | KeyCode::Home => self.list_state.select(Some(0)),
            KeyCode::Char('G') | KeyCode::End => {
                self.list_state.select(Some(self.tasks.len() - 1))
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ({}) ", self.filter.display_name(), self.tasks.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if self.tasks.is_empty() {
            self.render_empty(frame, block, area);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(task_item).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).bold())
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_empty(&self, frame: &mut Frame, block: Block, area: Rect) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.filter.empty_message(),
                Style::default().fg(Color::Gray).bold(),
            )),
        ];
        if let Some(hint) = self.filter.empty_hint() {
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

fn task_item(task: &Task) -> ListItem<'_> {
    let (checkbox, title_style) = if task.completed {
        (
            Span::styled("[x] ", Style::default().fg(Color::Green).bold()),
            Style::default().fg(Color::DarkGray).crossed_out(),
        )
    } else {
        (
            Span::styled("[ ] ", Style::default().fg(Color::Gray)),
            Style::default().bold(),
        )
    };

    let mut lines = vec![Line::from(vec![
        checkbox,
        Span::styled(task.title.as_str(), title_style),
    ])];
    if let Some(first) = task.description.lines().find(|l| !l.trim().is_empty()) {
        let color = if task.completed {
            Color::DarkGray
        } else {
            Color::Gray
        };
        lines.push(Line::from(Span::styled(
            format!("    {first}"),
            Style::default().fg(color),
        )));
    }
    ListItem::new(lines)
}
