//! The checklist record owned by a project, in one of two shapes.

use super::{ConversionTasksData, TransferTasksData};
use crate::project::domain::ProjectType;
use serde::{Deserialize, Serialize};

/// Checklist record for exactly one project shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tasks_data_type", content = "data", rename_all = "snake_case")]
pub enum TaskRecord {
    /// Conversion checklist.
    Conversion(Box<ConversionTasksData>),
    /// Transfer checklist.
    Transfer(Box<TransferTasksData>),
}

impl TaskRecord {
    /// Returns an untouched record of the shape matching `project_type`.
    #[must_use]
    pub fn empty(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Conversion => Self::Conversion(Box::default()),
            ProjectType::Transfer => Self::Transfer(Box::default()),
        }
    }

    /// Returns the project type this record's shape belongs to.
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        match self {
            Self::Conversion(_) => ProjectType::Conversion,
            Self::Transfer(_) => ProjectType::Transfer,
        }
    }

    /// Returns the conversion checklist, if this is one.
    #[must_use]
    pub fn as_conversion(&self) -> Option<&ConversionTasksData> {
        match self {
            Self::Conversion(data) => Some(&**data),
            Self::Transfer(_) => None,
        }
    }

    /// Returns the transfer checklist, if this is one.
    #[must_use]
    pub fn as_transfer(&self) -> Option<&TransferTasksData> {
        match self {
            Self::Transfer(data) => Some(&**data),
            Self::Conversion(_) => None,
        }
    }
}

impl From<ConversionTasksData> for TaskRecord {
    fn from(data: ConversionTasksData) -> Self {
        Self::Conversion(Box::new(data))
    }
}

impl From<TransferTasksData> for TaskRecord {
    fn from(data: TransferTasksData) -> Self {
        Self::Transfer(Box::new(data))
    }
}
