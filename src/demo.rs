//! The people table shown by the demo binary.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use crate::error::FieldError;
use crate::table::{ColumnDef, DataTable, DataTableBuilder, DateDisplay, Record, SelectOption};

/// How long the simulated backend takes to accept an edit.
pub const SAVE_LATENCY: Duration = Duration::from_secs(1);

/// A row of the demo table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Identity.
    pub id: u32,
    /// Display name (read-only in the table).
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Status option value.
    pub status: String,
    /// Birth date timestamp.
    pub birth_date: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl Person {
    fn new(
        id: u32,
        name: &str,
        age: u32,
        status: &str,
        birth_date: &str,
        created_at: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            status: status.to_string(),
            birth_date: birth_date.to_string(),
            created_at: created_at.to_string(),
        }
    }
}

impl Record for Person {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "age" => Some(self.age.to_string()),
            "status" => Some(self.status.clone()),
            "birth_date" => Some(self.birth_date.clone()),
            "created_at" => Some(self.created_at.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError> {
        match key {
            "name" => self.name = value.to_string(),
            "age" => {
                self.age = value
                    .trim()
                    .parse()
                    .map_err(|_| FieldError::invalid(key, value, "age must be a whole number"))?;
            }
            "status" => self.status = value.to_string(),
            "birth_date" => self.birth_date = value.to_string(),
            "created_at" => self.created_at = value.to_string(),
            _ => return Err(FieldError::Missing(key.to_string())),
        }
        Ok(())
    }
}

/// The status options.
pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Active", "123"),
        SelectOption::new("Inactive", "456"),
        SelectOption::new("Pending", "789"),
    ]
}

/// The column configuration of the people table.
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name").width(20).read_only(),
        ColumnDef::new("age", "Age").width(20),
        ColumnDef::new("status", "Status")
            .width(20)
            .select(status_options()),
        ColumnDef::new("birth_date", "Birth Date")
            .width(20)
            .date(DateDisplay::Long),
        ColumnDef::new("created_at", "Created At")
            .width(20)
            .date(DateDisplay::LongWithTime),
    ]
}

/// The initial people.
pub fn people() -> Vec<Person> {
    vec![
        Person::new(1, "John Doe", 30, "123", "1993-05-15", "2023-06-01T10:00:00Z"),
        Person::new(2, "Jane Smith", 25, "456", "1998-08-22", "2023-06-02T11:30:00Z"),
        Person::new(3, "Bob Johnson", 35, "789", "1988-11-30", "2023-06-03T09:15:00Z"),
    ]
}

/// What the table's callbacks asked the demo to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    /// Show a person.
    Viewed(Person),
    /// Open a person's page.
    Redirected(u32),
    /// Remove a person.
    Deleted(u32),
    /// The backend accepted an edited person.
    Saved(Person),
    /// A save failed.
    SaveFailed {
        /// The person.
        id: u32,
        /// Why.
        message: String,
    },
}

/// Start building the demo table.
///
/// The callbacks only report to `events`; the app owns the people and
/// applies the changes. The edit callback waits `latency` like a backend
/// call, then reports the edited person.
pub fn table_builder(
    latency: Duration,
    events: mpsc::UnboundedSender<DemoEvent>,
) -> DataTableBuilder<Person> {
    let view_tx = events.clone();
    let redirect_tx = events.clone();
    let delete_tx = events.clone();
    let save_tx = events.clone();
    let error_tx = events;

    DataTable::builder(columns())
        .on_view(move |person: &Person| {
            let _ = view_tx.send(DemoEvent::Viewed(person.clone()));
        })
        .on_redirect(move |person: &Person| {
            let _ = redirect_tx.send(DemoEvent::Redirected(person.id));
        })
        .on_delete(move |person: &Person| {
            let _ = delete_tx.send(DemoEvent::Deleted(person.id));
        })
        .on_row_edit(move |person: Person| {
            let tx = save_tx.clone();
            async move {
                tokio::time::sleep(latency).await;
                info!(id = person.id, "Sending to backend");
                tx.send(DemoEvent::Saved(person))
                    .map_err(|_| anyhow::anyhow!("the table was closed"))?;
                anyhow::Ok(())
            }
        })
        .on_error(move |id: &u32, message: &str| {
            let _ = error_tx.send(DemoEvent::SaveFailed {
                id: *id,
                message: message.to_string(),
            });
        })
}
