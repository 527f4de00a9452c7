//! Styled, interactive text.
//!
//! A [`Component`] is a tree of text fragments, each carrying a [`Style`] and optional
//! click and hover actions. Trees are built by parsing legacy colour-code markup with
//! [`parse_legacy`] and decorated with [`Component::with_interaction`], which returns a
//! new tree rather than mutating nodes in place.

use serde::Serialize;

/// The character that introduces a formatting code in rendered markup.
pub const COLOR_CHAR: char = '\u{a7}';

/// RGB color representation (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

macro_rules! colors {
    ($(($variant:ident, $code:literal, $name:literal, $rgb:expr)),* $(,)?) => {
        /// One of the sixteen named text colours.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum Color {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }
        impl Color {
            /// Looks up the colour for a legacy code character (`0`-`9`, `a`-`f`).
            pub fn from_code(code: char) -> Option<Self> {
                match code.to_ascii_lowercase() {
                    $($code => Some(Color::$variant),)*
                    _ => None,
                }
            }

            /// The colour's canonical RGB value.
            pub fn rgb(self) -> Rgb {
                match self {
                    $(Color::$variant => $rgb,)*
                }
            }
        }
    };
}

colors![
    (Black, '0', "black", Rgb::new(0x00, 0x00, 0x00)),
    (DarkBlue, '1', "dark_blue", Rgb::new(0x00, 0x00, 0xAA)),
    (DarkGreen, '2', "dark_green", Rgb::new(0x00, 0xAA, 0x00)),
    (DarkAqua, '3', "dark_aqua", Rgb::new(0x00, 0xAA, 0xAA)),
    (DarkRed, '4', "dark_red", Rgb::new(0xAA, 0x00, 0x00)),
    (DarkPurple, '5', "dark_purple", Rgb::new(0xAA, 0x00, 0xAA)),
    (Gold, '6', "gold", Rgb::new(0xFF, 0xAA, 0x00)),
    (Gray, '7', "gray", Rgb::new(0xAA, 0xAA, 0xAA)),
    (DarkGray, '8', "dark_gray", Rgb::new(0x55, 0x55, 0x55)),
    (Blue, '9', "blue", Rgb::new(0x55, 0x55, 0xFF)),
    (Green, 'a', "green", Rgb::new(0x55, 0xFF, 0x55)),
    (Aqua, 'b', "aqua", Rgb::new(0x55, 0xFF, 0xFF)),
    (Red, 'c', "red", Rgb::new(0xFF, 0x55, 0x55)),
    (LightPurple, 'd', "light_purple", Rgb::new(0xFF, 0x55, 0xFF)),
    (Yellow, 'e', "yellow", Rgb::new(0xFF, 0xFF, 0x55)),
    (White, 'f', "white", Rgb::new(0xFF, 0xFF, 0xFF)),
];

/// A text decoration toggled by a legacy code (`k`-`o`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}
impl Decoration {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(Decoration::Obfuscated),
            'l' => Some(Decoration::Bold),
            'm' => Some(Decoration::Strikethrough),
            'n' => Some(Decoration::Underlined),
            'o' => Some(Decoration::Italic),
            _ => None,
        }
    }
}

/// Whether `code` is a recognised legacy formatting code.
pub fn is_legacy_code(code: char) -> bool {
    Color::from_code(code).is_some()
        || Decoration::from_code(code).is_some()
        || code.eq_ignore_ascii_case(&'r')
}

/// The visual style of a single component.
///
/// Unset fields inherit from the parent component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
}
impl Style {
    pub fn with_color(color: Color) -> Self {
        Style {
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn decorate(&mut self, decoration: Decoration) {
        let flag = match decoration {
            Decoration::Obfuscated => &mut self.obfuscated,
            Decoration::Bold => &mut self.bold,
            Decoration::Strikethrough => &mut self.strikethrough,
            Decoration::Underlined => &mut self.underlined,
            Decoration::Italic => &mut self.italic,
        };
        *flag = Some(true);
    }

    /// Fills unset fields of `self` from `parent`.
    pub fn inherit(self, parent: Style) -> Style {
        Style {
            color: self.color.or(parent.color),
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underlined: self.underlined.or(parent.underlined),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            obfuscated: self.obfuscated.or(parent.obfuscated),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    pub fn is_underlined(&self) -> bool {
        self.underlined.unwrap_or(false)
    }

    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough.unwrap_or(false)
    }

    pub fn is_obfuscated(&self) -> bool {
        self.obfuscated.unwrap_or(false)
    }
}

/// What happens when a component is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    /// Runs the given command as the viewer.
    RunCommand(String),
}

/// What is shown when a component is hovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HoverEvent {
    /// Shows a tooltip.
    ShowText(Box<Component>),
}

/// A node of styled text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Component {
    pub text: String,
    #[serde(flatten)]
    pub style: Style,
    #[serde(rename = "clickEvent", skip_serializing_if = "Option::is_none")]
    pub click: Option<ClickEvent>,
    #[serde(rename = "hoverEvent", skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverEvent>,
    #[serde(rename = "extra", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}
impl Component {
    pub fn text(text: impl Into<String>) -> Self {
        Component {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn color(self, color: Color) -> Self {
        Component {
            style: Style {
                color: Some(color),
                ..self.style
            },
            ..self
        }
    }

    /// Returns a copy of this tree where every node, recursively, carries the given
    /// click and hover actions.
    pub fn with_interaction(self, click: &ClickEvent, hover: &HoverEvent) -> Component {
        Component {
            click: Some(click.clone()),
            hover: Some(hover.clone()),
            children: self
                .children
                .into_iter()
                .map(|child| child.with_interaction(click, hover))
                .collect(),
            ..self
        }
    }

    /// Visits every node in the tree, depth first, parents before children.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Component)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// The concatenated text of the tree, without any styling.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |c| out.push_str(&c.text));
        out
    }

    /// The text runs of the tree in display order, each with its fully inherited style.
    pub fn segments(&self) -> Vec<(&str, Style)> {
        fn walk<'a>(c: &'a Component, parent: Style, out: &mut Vec<(&'a str, Style)>) {
            let style = c.style.inherit(parent);
            if !c.text.is_empty() {
                out.push((&c.text, style));
            }
            for child in &c.children {
                walk(child, style, out);
            }
        }

        let mut out = vec![];
        walk(self, Style::default(), &mut out);
        out
    }
}

/// Parses text containing legacy formatting codes (`code_char` followed by a code)
/// into a component tree.
///
/// The result is an unstyled root whose children are the styled runs. A colour code
/// clears any active decorations, `r` resets everything, and a code character not
/// followed by a known code is kept as literal text.
pub fn parse_legacy(input: &str, code_char: char) -> Component {
    let mut children = vec![];
    let mut style = Style::default();
    let mut current = String::new();

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != code_char {
            current.push(c);
            continue;
        }
        let Some(&code) = chars.peek().filter(|code| is_legacy_code(**code)) else {
            current.push(c);
            continue;
        };
        chars.next();

        if !current.is_empty() {
            children.push(Component {
                text: std::mem::take(&mut current),
                style,
                ..Default::default()
            });
        }

        if let Some(color) = Color::from_code(code) {
            style = Style::with_color(color);
        } else if let Some(decoration) = Decoration::from_code(code) {
            style.decorate(decoration);
        } else {
            style = Style::default();
        }
    }
    if !current.is_empty() {
        children.push(Component {
            text: current,
            style,
            ..Default::default()
        });
    }

    Component {
        children,
        ..Default::default()
    }
}
