//! Column configuration.
//!
//! A column names a field of the record, how to label it, how wide to draw
//! it, whether it can be edited, and which editor/display strategy it uses.

/// Key of the synthesized trailing actions column.
pub const ACTIONS_COLUMN_KEY: &str = "actions";

/// Header of the synthesized trailing actions column.
pub const ACTIONS_COLUMN_HEADER: &str = "Actions";

/// One entry of a select column's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,
    /// Value stored in the record.
    pub value: String,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// How a date column shows its value when not being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateDisplay {
    /// `2024-03-01`
    #[default]
    Date,
    /// `01 Mar 2024`
    Long,
    /// `01 Mar 2024 14:05`
    LongWithTime,
    /// Any strftime pattern.
    Custom(String),
}

impl DateDisplay {
    /// The strftime pattern for this display.
    pub fn pattern(&self) -> &str {
        match self {
            DateDisplay::Date => "%Y-%m-%d",
            DateDisplay::Long => "%d %b %Y",
            DateDisplay::LongWithTime => "%d %b %Y %H:%M",
            DateDisplay::Custom(pattern) => pattern,
        }
    }
}

/// The editing/display strategy of a column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Free text.
    #[default]
    Text,
    /// One of a fixed list of options.
    Select {
        /// The options in display order.
        options: Vec<SelectOption>,
    },
    /// A calendar date, stored as a timestamp.
    Date {
        /// Read-only display format.
        display: DateDisplay,
    },
}

impl FieldKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Select { .. } => "select",
            FieldKind::Date { .. } => "date",
        }
    }

    /// Check whether this is a date column.
    pub fn is_date(&self) -> bool {
        matches!(self, FieldKind::Date { .. })
    }
}

/// Static configuration for one displayed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Key into the record.
    pub key: String,
    /// Header label.
    pub header: String,
    /// Width as a percentage of the table width.
    pub width: Option<u16>,
    /// Whether the field may be edited inline.
    pub editable: bool,
    /// Editing/display strategy.
    pub kind: FieldKind,
}

impl ColumnDef {
    /// Create an editable text column.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            editable: true,
            kind: FieldKind::Text,
        }
    }

    /// Set the width as a percentage (clamped to 100).
    pub fn width(mut self, percent: u16) -> Self {
        self.width = Some(percent.min(100));
        self
    }

    /// Mark the column as read-only.
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Set whether the column is editable.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Make this a select column with the given options.
    pub fn select(mut self, options: Vec<SelectOption>) -> Self {
        self.kind = FieldKind::Select { options };
        self
    }

    /// Make this a date column with the given read-only display.
    pub fn date(mut self, display: DateDisplay) -> Self {
        self.kind = FieldKind::Date { display };
        self
    }

    /// Check whether this is the synthesized actions column.
    pub fn is_actions(&self) -> bool {
        self.key == ACTIONS_COLUMN_KEY
    }

    /// The synthesized actions column.
    pub(crate) fn actions() -> Self {
        Self::new(ACTIONS_COLUMN_KEY, ACTIONS_COLUMN_HEADER).read_only()
    }
}
