//! User-facing message templates.

use std::{collections::HashMap, fmt::Display};

use crate::text::{COLOR_CHAR, is_legacy_code};

/// The character authors use for formatting codes in templates; translated to
/// [`COLOR_CHAR`] when a message is formatted.
pub const ALT_COLOR_CHAR: char = '&';

/// The default prefix put in front of messages that show one.
pub const DEFAULT_PREFIX: &str = "&7[&bgrouplist&7] ";

/// A message the listing can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    GroupsLoadError,
    GroupsList,
    GroupsListEntry,
    GroupsListEntryWithTracks,
}
impl Message {
    pub const ALL: [Message; 4] = [
        Message::GroupsLoadError,
        Message::GroupsList,
        Message::GroupsListEntry,
        Message::GroupsListEntryWithTracks,
    ];

    /// The key used for this message in locale files.
    pub fn key(&self) -> &'static str {
        match self {
            Message::GroupsLoadError => "groups-load-error",
            Message::GroupsList => "groups-list",
            Message::GroupsListEntry => "groups-list-entry",
            Message::GroupsListEntryWithTracks => "groups-list-entry-with-tracks",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// The built-in English template.
    ///
    /// `{0}`, `{1}`, ... are replaced by the positional arguments.
    pub fn default_template(&self) -> &'static str {
        match self {
            Message::GroupsLoadError => "&cAn unexpected error occurred. Unable to load all groups.",
            Message::GroupsList => "&aGroups: &7(name, weight, tracks)",
            Message::GroupsListEntry => "&f-  &3{0} &7- &b{1}",
            Message::GroupsListEntryWithTracks => "&f-  &3{0} &7- &b{1} &7- [{2}&7]",
        }
    }

    /// Whether the message is sent with the prefix in front of it. List entries are not.
    pub fn show_prefix(&self) -> bool {
        matches!(self, Message::GroupsLoadError | Message::GroupsList)
    }
}

/// Resolves message templates, applying any overrides loaded from a locale file.
#[derive(Debug, Clone)]
pub struct LocaleManager {
    prefix: String,
    overrides: HashMap<Message, String>,
}
impl Default for LocaleManager {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            overrides: HashMap::new(),
        }
    }
}
impl LocaleManager {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Loads template overrides from a TOML table of `message-key = "template"`.
    ///
    /// Unknown keys are skipped with a warning. Returns the number of overrides applied.
    pub fn load_overrides(&mut self, contents: &str) -> Result<usize, toml::de::Error> {
        let table: HashMap<String, String> = toml::from_str(contents)?;

        let mut applied = 0;
        for (key, template) in table {
            match Message::from_key(&key) {
                Some(message) => {
                    self.overrides.insert(message, template);
                    applied += 1;
                }
                None => tracing::warn!("ignoring unknown message key `{key}` in locale file"),
            }
        }
        Ok(applied)
    }

    /// The template currently in effect for `message`.
    pub fn template(&self, message: Message) -> &str {
        self.overrides
            .get(&message)
            .map(String::as_str)
            .unwrap_or_else(|| message.default_template())
    }

    /// Formats `message` with positional `args`, translating `&` formatting codes.
    ///
    /// Arguments are substituted before translation, so codes inside arguments take
    /// effect too.
    pub fn format(&self, message: Message, args: &[&dyn Display]) -> String {
        translate_alternate_color_codes(&substitute(self.template(message), args))
    }

    /// Like [`LocaleManager::format`], with the prefix in front for messages that show one.
    pub fn format_for_send(&self, message: Message, args: &[&dyn Display]) -> String {
        let body = self.format(message, args);
        if message.show_prefix() {
            format!("{}{body}", translate_alternate_color_codes(&self.prefix))
        } else {
            body
        }
    }
}

/// Replaces `{n}` placeholders with `args[n]`. Placeholders without a matching
/// argument are left as they are, and substituted text is never rescanned.
fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match arg {
            Some((arg, close)) => {
                out.push_str(&arg.to_string());
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replaces `&` followed by a known formatting code with [`COLOR_CHAR`].
pub fn translate_alternate_color_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ALT_COLOR_CHAR && chars.peek().is_some_and(|next| is_legacy_code(*next)) {
            out.push(COLOR_CHAR);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_positional_args() {
        assert_eq!(substitute("{0} - {1}", &[&"admin", &10]), "admin - 10");
        assert_eq!(substitute("{1}{0}", &[&"a", &"b"]), "ba");
    }

    #[test]
    fn test_substitute_leaves_unmatched_placeholders() {
        assert_eq!(substitute("{0} {2} {x} {", &[&"a"]), "a {2} {x} {");
    }

    #[test]
    fn test_substitute_does_not_rescan_args() {
        assert_eq!(substitute("{0} {1}", &[&"{1}", &"b"]), "{1} b");
    }

    #[test]
    fn test_translate_only_known_codes() {
        assert_eq!(
            translate_alternate_color_codes("&aGreen & &zText&"),
            "\u{a7}aGreen & &zText&"
        );
    }

    #[test]
    fn test_format_entry() {
        let locale = LocaleManager::default();
        assert_eq!(
            locale.format(Message::GroupsListEntry, &[&"admin", &10]),
            "\u{a7}f-  \u{a7}3admin \u{a7}7- \u{a7}b10"
        );
    }

    #[test]
    fn test_prefix_only_on_prefixed_messages() {
        let locale = LocaleManager::new("[p] ");
        assert_eq!(
            locale.format_for_send(Message::GroupsList, &[]),
            "[p] \u{a7}aGroups: \u{a7}7(name, weight, tracks)"
        );
        assert!(
            locale
                .format_for_send(Message::GroupsListEntry, &[&"a", &1])
                .starts_with("\u{a7}f-")
        );
    }

    #[test]
    fn test_load_overrides() {
        let mut locale = LocaleManager::default();
        let applied = locale
            .load_overrides(
                r#"
                groups-list-entry = "{0} ({1})"
                not-a-message = "ignored"
                "#,
            )
            .unwrap();
        assert_eq!(applied, 1);
        assert_eq!(
            locale.format(Message::GroupsListEntry, &[&"mod", &5]),
            "mod (5)"
        );
        assert_eq!(
            locale.template(Message::GroupsList),
            Message::GroupsList.default_template()
        );
    }

    #[test]
    fn test_message_keys_round_trip() {
        for message in Message::ALL {
            assert_eq!(Message::from_key(message.key()), Some(message));
        }
    }
}
