use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{GroupName, gs};

/// A track name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackName(pub SmolStr);
impl TrackName {
    /// The name folded to lowercase, as used for store keys.
    pub fn to_lowercase(&self) -> SmolStr {
        SmolStr::new(self.0.to_lowercase())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for TrackName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for TrackName {
    fn from(name: &str) -> Self {
        TrackName(SmolStr::new(name))
    }
}

/// A track: an ordered chain of groups that users are promoted and demoted along
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// The track name
    pub name: TrackName,
    /// The group names in the track, lowest rung first
    pub groups: Vec<SmolStr>,
}
impl Track {
    /// Create a track from a name and a chain of group names.
    pub fn new<'a>(name: impl Into<TrackName>, groups: impl IntoIterator<Item = &'a str>) -> Self {
        Track {
            name: name.into(),
            groups: groups.into_iter().map(SmolStr::new).collect(),
        }
    }

    /// Whether the group appears anywhere in this track, ignoring case.
    pub fn contains_group(&self, group: &GroupName) -> bool {
        self.groups.iter().any(|g| group.eq_ignore_case(g))
    }
}
impl From<gs::TrackRecord> for Track {
    fn from(record: gs::TrackRecord) -> Self {
        Track {
            name: TrackName(record.name.into()),
            groups: record.groups.into_iter().map(SmolStr::from).collect(),
        }
    }
}
