use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::gs;

/// A group name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(pub SmolStr);
impl GroupName {
    /// The name folded to lowercase, as used for store keys and ordering.
    pub fn to_lowercase(&self) -> SmolStr {
        SmolStr::new(self.0.to_lowercase())
    }

    /// Whether this name matches `other`, ignoring case.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0 == other || self.0.to_lowercase() == other.to_lowercase()
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        GroupName(SmolStr::new(name))
    }
}

/// A permission group, as the listing cares about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The group name
    pub name: GroupName,
    /// The name to present instead of [`Group::name`], if set
    pub display_name: Option<String>,
    /// The priority weight, if set. Use [`Group::weight`] to read it.
    pub weight: Option<u32>,
}
impl Group {
    /// Create a group with no display name and no weight.
    pub fn new(name: impl Into<GroupName>) -> Self {
        Group {
            name: name.into(),
            display_name: None,
            weight: None,
        }
    }

    /// Set the weight.
    pub fn with_weight(self, weight: u32) -> Self {
        Group {
            weight: Some(weight),
            ..self
        }
    }

    /// Set the display name.
    pub fn with_display_name(self, display_name: impl Into<String>) -> Self {
        Group {
            display_name: Some(display_name.into()),
            ..self
        }
    }

    /// The weight used for ordering and display. Groups without a weight count as `0`.
    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(0)
    }

    /// The name to present to users, falling back to the group name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.name.as_str())
    }
}
impl From<gs::GroupRecord> for Group {
    fn from(record: gs::GroupRecord) -> Self {
        Group {
            name: GroupName(record.name.into()),
            display_name: record.display_name.filter(|d| !d.is_empty()),
            weight: record.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_weight_is_zero() {
        assert_eq!(Group::new("default").weight(), 0);
        assert_eq!(Group::new("admin").with_weight(10).weight(), 10);
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        assert_eq!(Group::new("admin").display_name(), "admin");
        assert_eq!(
            Group::new("admin").with_display_name("Admins").display_name(),
            "Admins"
        );
    }

    #[test]
    fn test_empty_stored_display_name_is_unset() {
        let group = Group::from(gs::GroupRecord {
            name: "mod".to_string(),
            display_name: Some(String::new()),
            weight: Some(5),
        });
        assert_eq!(group.display_name(), "mod");
        assert_eq!(group.weight(), 5);
    }
}
