use serde::{Deserialize, Serialize};

/// A group, as it is persisted.
///
/// The name is not part of the stored body; [`crate::FileStorage`] takes it from the
/// file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// The group name.
    #[serde(skip)]
    pub name: String,
    /// The name to show instead of `name`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The group weight, if one has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// A track, as it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// The track name.
    #[serde(skip)]
    pub name: String,
    /// The group names making up the track, in promotion order.
    #[serde(default)]
    pub groups: Vec<String>,
}
