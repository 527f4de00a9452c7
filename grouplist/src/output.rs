//! Sinks that write the listing out.

use std::io::Write;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use grouplist_core::{
    Component, Sink,
    text::{Rgb, Style},
};

/// Writes messages with ANSI colours and attributes.
pub struct AnsiSink<W>(pub W);
impl<W: Write> Sink for AnsiSink<W> {
    fn send_message(&mut self, message: &Component) {
        let mut line = String::new();
        for (text, style) in message.segments() {
            line.push_str(&content_style(style).apply(text).to_string());
        }
        write_line(&mut self.0, &line);
    }
}

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    if let Some(color) = style.color {
        let Rgb { r, g, b } = color.rgb();
        content.foreground_color = Some(TermColor::Rgb { r, g, b });
    }
    if style.is_bold() {
        content.attributes.set(Attribute::Bold);
    }
    if style.is_italic() {
        content.attributes.set(Attribute::Italic);
    }
    if style.is_underlined() {
        content.attributes.set(Attribute::Underlined);
    }
    if style.is_strikethrough() {
        content.attributes.set(Attribute::CrossedOut);
    }
    if style.is_obfuscated() {
        content.attributes.set(Attribute::SlowBlink);
    }
    content
}

/// Writes the text of each message with no styling.
pub struct PlainSink<W>(pub W);
impl<W: Write> Sink for PlainSink<W> {
    fn send_message(&mut self, message: &Component) {
        write_line(&mut self.0, &message.to_plain());
    }
}

/// Writes each message as a JSON text component on its own line.
pub struct JsonSink<W>(pub W);
impl<W: Write> Sink for JsonSink<W> {
    fn send_message(&mut self, message: &Component) {
        match serde_json::to_string(message) {
            Ok(json) => write_line(&mut self.0, &json),
            Err(e) => tracing::error!("failed to serialize message: {e}"),
        }
    }
}

fn write_line(out: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::error!("failed to write message: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouplist_core::{
        Catalog, ListGroupsCommand, LocaleManager, gs,
        text::{ClickEvent, Color, HoverEvent, parse_legacy},
    };

    fn entry() -> Component {
        parse_legacy("&3admin &7- &b10", '&').with_interaction(
            &ClickEvent::RunCommand("/lp group admin info".to_string()),
            &HoverEvent::ShowText(Box::new(Component::text("hover"))),
        )
    }

    #[test]
    fn test_plain_sink_writes_one_line_per_message() {
        let mut sink = PlainSink(Vec::new());
        sink.send_message(&entry());
        sink.send_message(&Component::text("second"));
        assert_eq!(String::from_utf8(sink.0).unwrap(), "admin - 10\nsecond\n");
    }

    #[test]
    fn test_json_sink_writes_components_with_actions() {
        let mut sink = JsonSink(Vec::new());
        sink.send_message(&entry());
        sink.send_message(&Component::text("second"));

        let output = String::from_utf8(sink.0).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        let first_run = &lines[0]["extra"][0];
        assert_eq!(first_run["text"], "admin ");
        assert_eq!(first_run["color"], "dark_aqua");
        assert_eq!(first_run["clickEvent"]["value"], "/lp group admin info");
        assert_eq!(first_run["hoverEvent"]["action"], "show_text");
        assert_eq!(lines[1], serde_json::json!({ "text": "second" }));
    }

    #[test]
    fn test_ansi_sink_writes_one_line_per_message() {
        let mut sink = AnsiSink(Vec::new());
        sink.send_message(&entry());

        let output = String::from_utf8(sink.0).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.ends_with('\n'));
        assert!(output.contains("admin "));
    }

    #[tokio::test]
    async fn test_listing_through_plain_sink() {
        let catalog = Catalog::new(gs::MemoryStorage::new(
            vec![gs::GroupRecord {
                name: "admin".to_string(),
                display_name: None,
                weight: Some(10),
            }],
            vec![],
        ));
        let command = ListGroupsCommand::new(LocaleManager::new(""));
        let mut sink = PlainSink(Vec::new());
        command.execute(&catalog, &mut sink, "lp").await;
        assert_eq!(
            String::from_utf8(sink.0).unwrap(),
            "Groups: (name, weight, tracks)\n-  admin - 10\n"
        );
    }

    #[test]
    fn test_content_style_maps_color_and_attributes() {
        let mut style = Style::with_color(Color::DarkAqua);
        style.bold = Some(true);

        let content = content_style(style);
        assert_eq!(
            content.foreground_color,
            Some(TermColor::Rgb {
                r: 0x00,
                g: 0xAA,
                b: 0xAA
            })
        );
        assert!(content.attributes.has(Attribute::Bold));
        assert!(!content.attributes.has(Attribute::Italic));
    }

    #[test]
    fn test_unstyled_segment_has_no_color() {
        let content = content_style(Style::default());
        assert_eq!(content.foreground_color, None);
    }
}
