//! Task type value object

use serde::{Deserialize, Serialize};

/// The kind of work a collaboration request represents
///
/// Selects the system-prompt flavor used for each bounce; it does not
/// change the orchestration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    General,
    Coding,
    Analysis,
    Architecture,
}

impl TaskType {
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::General => "general",
            TaskType::Coding => "coding",
            TaskType::Analysis => "analysis",
            TaskType::Architecture => "architecture",
        }
    }
}

impl Default for TaskType {
    fn default() -> Self {
        TaskType::General
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(TaskType::General),
            "coding" => Ok(TaskType::Coding),
            "analysis" => Ok(TaskType::Analysis),
            "architecture" => Ok(TaskType::Architecture),
            other => Err(format!("Unknown task type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_roundtrip() {
        for t in [
            TaskType::General,
            TaskType::Coding,
            TaskType::Analysis,
            TaskType::Architecture,
        ] {
            let parsed: TaskType = t.as_str().parse().unwrap();
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn test_unknown_task_type_rejected() {
        assert!("poetry".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(TaskType::default(), TaskType::General);
    }
}
