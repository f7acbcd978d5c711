use leptos::logging::warn;
use strum::{AsRefStr, Display, EnumString};
use wasm_bindgen::JsCast;

/// Block-level format offered by the format picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BlockFormat {
    P,
    H1,
    H2,
    H3,
    Blockquote,
}

impl BlockFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::P => "Paragraph",
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::Blockquote => "Quote",
        }
    }
}

/// Named command sent to an editing surface.
///
/// `Display` yields the command name ("Indent", "Outdent", ...).
#[derive(Clone, Debug, PartialEq, Eq, Display, AsRefStr)]
pub enum EditorCommand {
    Indent,
    Outdent,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    RemoveFormat,
    Undo,
    Redo,
    Unlink,
    InsertUnorderedList,
    InsertOrderedList,
    FormatBlock(BlockFormat),
    CreateLink(String),
    InsertImage(String),
    InsertText(String),
    InsertHtml(String),
}

impl EditorCommand {
    /// `execCommand` identifier and optional value argument.
    pub(crate) fn exec_args(&self) -> (&'static str, Option<String>) {
        match self {
            Self::Indent => ("indent", None),
            Self::Outdent => ("outdent", None),
            Self::Bold => ("bold", None),
            Self::Italic => ("italic", None),
            Self::Underline => ("underline", None),
            Self::Strikethrough => ("strikeThrough", None),
            Self::RemoveFormat => ("removeFormat", None),
            Self::Undo => ("undo", None),
            Self::Redo => ("redo", None),
            Self::Unlink => ("unlink", None),
            Self::InsertUnorderedList => ("insertUnorderedList", None),
            Self::InsertOrderedList => ("insertOrderedList", None),
            Self::FormatBlock(f) => ("formatBlock", Some(format!("<{}>", f.as_ref()))),
            Self::CreateLink(url) => ("createLink", Some(url.clone())),
            Self::InsertImage(url) => ("insertImage", Some(url.clone())),
            Self::InsertText(text) => ("insertText", Some(text.clone())),
            Self::InsertHtml(html) => ("insertHTML", Some(html.clone())),
        }
    }
}

/// Anything that can run an [`EditorCommand`] against its current selection.
pub trait CommandTarget {
    fn exec_command(&self, command: EditorCommand);
}

#[derive(Clone, Debug)]
pub struct EditorError {
    pub command: String,
    pub message: String,
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.command, self.message)
    }
}

/// Command target backed by the browser's `document.execCommand`.
///
/// Commands apply to whichever editable region holds the selection, so the
/// caller keeps focus inside the editing surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCommands;

impl DocumentCommands {
    pub fn try_exec(&self, command: &EditorCommand) -> Result<(), EditorError> {
        let err = |message: String| EditorError {
            command: command.to_string(),
            message,
        };

        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| err("no document".to_string()))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| err("not an HTML document".to_string()))?;

        let (id, value) = command.exec_args();
        let applied = match value {
            Some(v) => doc.exec_command_with_show_ui_and_value(id, false, &v),
            None => doc.exec_command(id),
        }
        .map_err(|e| err(format!("{e:?}")))?;

        if applied {
            Ok(())
        } else {
            Err(err("command not supported here".to_string()))
        }
    }
}

impl CommandTarget for DocumentCommands {
    fn exec_command(&self, command: EditorCommand) {
        if let Err(e) = self.try_exec(&command) {
            warn!("editor: {e}");
        }
    }
}
