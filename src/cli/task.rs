//! taskdeck task command implementations.

use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query::Criteria;
use crate::task::{Priority, Status, Tag, Task, TaskDraft};

pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: String,
    pub status: String,
    pub tags: Vec<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub clear_tags: bool,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RmOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub tags: Vec<String>,
    pub search: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ShowOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct MoveOptions {
    pub id: String,
    pub position: usize,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct TagsOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct TaskListOutput {
    total: usize,
    tasks: Vec<Task>,
}

#[derive(serde::Serialize)]
struct TaskRemovedOutput {
    id: Uuid,
    removed: bool,
}

#[derive(serde::Serialize)]
struct TagListOutput {
    total: usize,
    tags: Vec<Tag>,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;

    let mut draft = TaskDraft::new(options.title);
    draft.description = options.description.unwrap_or_default();
    draft.due_date = parse_due(options.due.as_deref())?;
    draft.priority = Some(options.priority.parse()?);
    draft.status = Some(options.status.parse()?);
    draft.tags = parse_tags(&options.tags)?;

    let task = ctx.store.submit(draft, None)?;

    let mut human = HumanOutput::new("Task added");
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Title", task.title.clone());
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Priority", task.priority.to_string());
    if let Some(due) = task.due_date {
        human.push_summary("Due", due.to_string());
    }
    if !task.tags.is_empty() {
        human.push_summary("Tags", task.tag_labels().join(", "));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}

pub fn run_edit(options: EditOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let id = parse_id(&options.id)?;

    let existing = ctx.store.find(id).ok_or(Error::TaskNotFound(id))?.clone();

    // Start from the current values; flags override field by field.
    let mut draft = TaskDraft::new(options.title.unwrap_or_else(|| existing.title.clone()));
    draft.description = options
        .description
        .unwrap_or_else(|| existing.description.clone());
    draft.due_date = if options.clear_due {
        None
    } else {
        match options.due.as_deref() {
            Some(due) => parse_due(Some(due))?,
            None => existing.due_date,
        }
    };
    draft.priority = match options.priority.as_deref() {
        Some(value) => Some(value.parse()?),
        None => Some(existing.priority),
    };
    draft.status = match options.status.as_deref() {
        Some(value) => Some(value.parse()?),
        None => Some(existing.status),
    };
    draft.tags = if options.clear_tags {
        Vec::new()
    } else if options.tags.is_empty() {
        existing.tags.clone()
    } else {
        parse_tags(&options.tags)?
    };

    let task = ctx.store.submit(draft, Some(id))?;

    let mut human = HumanOutput::new("Task updated");
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Title", task.title.clone());
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Priority", task.priority.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &task,
        Some(&human),
    )
}

pub fn run_rm(options: RmOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let id = parse_id(&options.id)?;

    let removed = ctx.store.delete(id);

    let output = TaskRemovedOutput { id, removed };

    let header = if removed {
        "Task deleted"
    } else {
        "Task not found; nothing deleted"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("ID", id.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;

    let criteria = Criteria {
        priority: options
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        status: options
            .status
            .as_deref()
            .map(str::parse::<Status>)
            .transpose()?,
        due_date: parse_due(options.due.as_deref())?,
        tags: options.tags,
        search: options.search,
    };

    let tasks = ctx.store.filtered_view(&criteria);

    let output = TaskListOutput {
        total: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", tasks.len().to_string());
    for task in &tasks {
        let mut line = format!(
            "[{}][{}] {} {}",
            task.status, task.priority, task.id, task.title
        );
        if let Some(due) = task.due_date {
            line.push_str(&format!(" (due: {due})"));
        }
        if !task.tags.is_empty() {
            line.push_str(&format!(" [{}]", task.tag_labels().join(", ")));
        }
        human.push_detail(line);
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

pub fn run_show(options: ShowOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let id = parse_id(&options.id)?;

    let task = ctx.store.find(id).ok_or(Error::TaskNotFound(id))?.clone();

    let mut human = HumanOutput::new(task.title.clone());
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Priority", task.priority.to_string());
    human.push_summary(
        "Due",
        task.due_date
            .map(|due| due.to_string())
            .unwrap_or_else(|| "none".to_string()),
    );
    human.push_summary("Order", task.order.to_string());
    human.push_summary("Created", task.created_at.to_rfc3339());
    human.push_summary("Updated", task.updated_at.to_rfc3339());
    if !task.description.is_empty() {
        human.push_detail(task.description.clone());
    }
    for tag in &task.tags {
        human.push_detail(format!("tag: {} ({})", tag.label, tag.color));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "show",
        &task,
        Some(&human),
    )
}

pub fn run_move(options: MoveOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let id = parse_id(&options.id)?;

    if ctx.store.find(id).is_none() {
        return Err(Error::TaskNotFound(id));
    }

    // Rebuild the full manual order the way a drag-drop does: take the
    // current unfiltered view, move the task, and assign positions 0..n.
    let view = ctx.store.filtered_view(&Criteria::default());
    let mut ids: Vec<Uuid> = view.iter().map(|task| task.id).collect();
    ids.retain(|existing| *existing != id);
    let position = options.position.min(ids.len());
    ids.insert(position, id);

    let pairs: Vec<(Uuid, i64)> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i64))
        .collect();
    ctx.store.reorder(&pairs);

    let tasks = ctx.store.filtered_view(&Criteria::default());
    let output = TaskListOutput {
        total: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new("Task moved");
    human.push_summary("ID", id.to_string());
    human.push_summary("Position", position.to_string());
    for task in &tasks {
        human.push_detail(format!("{} {} {}", task.order, task.id, task.title));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "move",
        &output,
        Some(&human),
    )
}

pub fn run_tags(options: TagsOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;

    let tags = ctx.store.tags().to_vec();
    let output = TagListOutput {
        total: tags.len(),
        tags: tags.clone(),
    };

    let mut human = HumanOutput::new("Tags");
    human.push_summary("Total", tags.len().to_string());
    for tag in &tags {
        human.push_detail(format!("{} ({})", tag.label, tag.color));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "tags",
        &output,
        Some(&human),
    )
}

pub(crate) fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| Error::InvalidArgument(format!("invalid task id '{raw}'")))
}

pub(crate) fn parse_due(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        Some(raw) => {
            let date = raw.trim().parse::<NaiveDate>().map_err(|_| {
                Error::InvalidArgument(format!("invalid date '{raw}' (expected YYYY-MM-DD)"))
            })?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}

fn parse_tags(raw: &[String]) -> Result<Vec<Tag>> {
    raw.iter().map(|tag| tag.parse()).collect()
}
