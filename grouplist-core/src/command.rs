//! The `list groups` command.

use std::fmt::Display;

use grouplist_state::gs;

use crate::{
    catalog::Catalog,
    listing::list_groups,
    locale::{LocaleManager, Message},
    sink::Sink,
    text::{COLOR_CHAR, parse_legacy},
};

/// The outcome of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Success,
    LoadingError,
}
impl CommandResult {
    /// The process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            CommandResult::Success => 0,
            CommandResult::LoadingError => 2,
        }
    }
}

/// Lists every group with its weight and tracks.
pub struct ListGroupsCommand {
    locale: LocaleManager,
}
impl ListGroupsCommand {
    pub const NAME: &str = "ListGroups";

    pub fn new(locale: LocaleManager) -> Self {
        Self { locale }
    }

    /// Reloads the catalog and sends the listing to `sink`: a header, then one line
    /// per group. If loading fails, only the load error message is sent.
    pub async fn execute<S: gs::Storage>(
        &self,
        catalog: &Catalog<S>,
        sink: &mut impl Sink,
        label: &str,
    ) -> CommandResult {
        let lines = match list_groups(catalog, label, &self.locale).await {
            Ok(lines) => lines,
            Err(e) => {
                tracing::debug!("{}: {e}", Self::NAME);
                self.send(sink, Message::GroupsLoadError, &[]);
                return CommandResult::LoadingError;
            }
        };

        self.send(sink, Message::GroupsList, &[]);
        for line in &lines {
            sink.send_message(&line.component);
        }
        tracing::debug!("{}: listed {} groups", Self::NAME, lines.len());

        CommandResult::Success
    }

    fn send(&self, sink: &mut impl Sink, message: Message, args: &[&dyn Display]) {
        let formatted = self.locale.format_for_send(message, args);
        sink.send_message(&parse_legacy(&formatted, COLOR_CHAR));
    }
}
