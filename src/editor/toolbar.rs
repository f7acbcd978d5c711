use super::command::{BlockFormat, EditorCommand};
use super::template::{default_template_values, Template, TEMPLATES};
use leptos::logging::warn;
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::{Display, EnumString};

pub(crate) const DEFAULT_TOOLBAR: &str = "removeformat,undo,redo,|,formatselect,|,bold,italic,underline,strikethrough,blockquote,link,unlink,|,bullist,numlist,|,image,template";
pub(crate) const DEFAULT_BLOCK_FORMATS: &str = "p,h1,h2,h3";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ToolbarItem {
    #[strum(serialize = "|")]
    Separator,
    RemoveFormat,
    Undo,
    Redo,
    FormatSelect,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Blockquote,
    Link,
    Unlink,
    BulList,
    NumList,
    Image,
    Template,
}

impl ToolbarItem {
    /// Command issued directly on click. Items that need user input first
    /// (link, image, pickers) return `None`.
    pub fn command(&self) -> Option<EditorCommand> {
        Some(match self {
            Self::RemoveFormat => EditorCommand::RemoveFormat,
            Self::Undo => EditorCommand::Undo,
            Self::Redo => EditorCommand::Redo,
            Self::Bold => EditorCommand::Bold,
            Self::Italic => EditorCommand::Italic,
            Self::Underline => EditorCommand::Underline,
            Self::Strikethrough => EditorCommand::Strikethrough,
            Self::Blockquote => EditorCommand::FormatBlock(BlockFormat::Blockquote),
            Self::Unlink => EditorCommand::Unlink,
            Self::BulList => EditorCommand::InsertUnorderedList,
            Self::NumList => EditorCommand::InsertOrderedList,
            Self::Separator | Self::FormatSelect | Self::Link | Self::Image | Self::Template => {
                return None
            }
        })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Separator => "",
            Self::RemoveFormat => "Remove formatting",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::FormatSelect => "Format",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Blockquote => "Blockquote",
            Self::Link => "Insert link",
            Self::Unlink => "Remove link",
            Self::BulList => "Bulleted list",
            Self::NumList => "Numbered list",
            Self::Image => "Insert image",
            Self::Template => "Insert template",
        }
    }
}

/// Parse a comma-separated toolbar layout, skipping names we don't know.
pub fn parse_toolbar(layout: &str) -> Vec<ToolbarItem> {
    parse_list(layout, "toolbar item")
}

pub fn parse_block_formats(formats: &str) -> Vec<BlockFormat> {
    parse_list(formats, "block format")
}

fn parse_list<T: FromStr>(list: &str, what: &str) -> Vec<T> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match T::from_str(name) {
            Ok(item) => Some(item),
            Err(_) => {
                warn!("unknown {what} `{name}`");
                None
            }
        })
        .collect()
}

/// Static editor configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorSettings {
    pub toolbar: Vec<ToolbarItem>,
    pub block_formats: Vec<BlockFormat>,
    /// Paste as plain text.
    pub paste_remove_styles: bool,
    pub templates: Vec<Template>,
    /// Substituted into `{$key}` placeholders when a template is inserted.
    pub template_values: BTreeMap<String, String>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            toolbar: parse_toolbar(DEFAULT_TOOLBAR),
            block_formats: parse_block_formats(DEFAULT_BLOCK_FORMATS),
            paste_remove_styles: true,
            templates: TEMPLATES.to_vec(),
            template_values: default_template_values(),
        }
    }
}
