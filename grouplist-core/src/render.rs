//! Turning ranked groups into interactive listing lines.

use grouplist_state::{Group, GroupName, TrackName};

use crate::{
    locale::{LocaleManager, Message},
    text::{COLOR_CHAR, ClickEvent, Color, Component, HoverEvent, parse_legacy},
};

/// The listing line for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    /// The group this line describes.
    pub group: GroupName,
    /// The styled line, with click and hover actions on every node.
    pub component: Component,
}

/// Renders the listing line for `group`.
///
/// `tracks` are the tracks the group belongs to; when there are none, the entry is
/// formatted without a track annotation. `label` is the command label the listing
/// was invoked with and is used to build the click action.
pub fn render(
    group: &Group,
    tracks: &[TrackName],
    label: &str,
    locale: &LocaleManager,
) -> RenderedLine {
    let display_name = group.display_name();
    let weight = group.weight();

    let formatted = if tracks.is_empty() {
        locale.format(Message::GroupsListEntry, &[&display_name, &weight])
    } else {
        locale.format(
            Message::GroupsListEntryWithTracks,
            &[&display_name, &weight, &comma_join(tracks)],
        )
    };

    let component = parse_legacy(&formatted, COLOR_CHAR)
        .with_interaction(&info_click(label, group), &info_hover(group));

    RenderedLine {
        group: group.name.clone(),
        component,
    }
}

/// The command that shows more information about `group`.
pub fn info_command(label: &str, group: &Group) -> String {
    let label = label.trim_start_matches('/');
    format!("/{label} group {} info", group.name)
}

fn info_click(label: &str, group: &Group) -> ClickEvent {
    ClickEvent::RunCommand(info_command(label, group))
}

fn info_hover(group: &Group) -> HoverEvent {
    HoverEvent::ShowText(Box::new(
        Component::text(format!("Click to view more info about {}.", group.name))
            .color(Color::Gray),
    ))
}

/// Joins track names as `&3a&7, &3b`, or `&bNone` when there are none.
pub fn comma_join(names: &[TrackName]) -> String {
    if names.is_empty() {
        return "&bNone".to_string();
    }
    names
        .iter()
        .map(|name| format!("&3{name}"))
        .collect::<Vec<_>>()
        .join("&7, ")
}
