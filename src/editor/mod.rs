mod command;
pub mod template;
mod toolbar;

pub use command::{BlockFormat, CommandTarget, DocumentCommands, EditorCommand, EditorError};
pub use template::{expand_template, Template};
pub use toolbar::{parse_block_formats, parse_toolbar, EditorSettings, ToolbarItem};

use crate::components::ui::ToolbarButton;
use crate::keys::intercept_tab_event;
use icons::{
    Bold, FileText, Image, Italic, Link, List, ListOrdered, Quote, Redo, RemoveFormatting,
    Strikethrough, Underline, Undo, Unlink,
};
use leptos::html;
use leptos::prelude::*;
use std::str::FromStr;

fn toolbar_icon(item: ToolbarItem) -> AnyView {
    match item {
        ToolbarItem::RemoveFormat => view! { <RemoveFormatting class="size-4" /> }.into_any(),
        ToolbarItem::Undo => view! { <Undo class="size-4" /> }.into_any(),
        ToolbarItem::Redo => view! { <Redo class="size-4" /> }.into_any(),
        ToolbarItem::Bold => view! { <Bold class="size-4" /> }.into_any(),
        ToolbarItem::Italic => view! { <Italic class="size-4" /> }.into_any(),
        ToolbarItem::Underline => view! { <Underline class="size-4" /> }.into_any(),
        ToolbarItem::Strikethrough => view! { <Strikethrough class="size-4" /> }.into_any(),
        ToolbarItem::Blockquote => view! { <Quote class="size-4" /> }.into_any(),
        ToolbarItem::Link => view! { <Link class="size-4" /> }.into_any(),
        ToolbarItem::Unlink => view! { <Unlink class="size-4" /> }.into_any(),
        ToolbarItem::BulList => view! { <List class="size-4" /> }.into_any(),
        ToolbarItem::NumList => view! { <ListOrdered class="size-4" /> }.into_any(),
        ToolbarItem::Image => view! { <Image class="size-4" /> }.into_any(),
        ToolbarItem::Template => view! { <FileText class="size-4" /> }.into_any(),
        ToolbarItem::Separator | ToolbarItem::FormatSelect => ().into_any(),
    }
}

fn prompt_url(message: &str) -> Option<String> {
    let url = web_sys::window()?.prompt_with_message(message).ok().flatten()?;
    let url = url.trim().to_string();
    (!url.is_empty()).then_some(url)
}

fn current_range() -> Option<web_sys::Range> {
    let selection = web_sys::window()?.get_selection().ok().flatten()?;
    if selection.range_count() == 0 {
        return None;
    }
    selection.get_range_at(0).ok()
}

fn restore_range(range: &web_sys::Range) {
    if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(range);
    }
}

fn has_focus(el: &web_sys::HtmlElement) -> bool {
    el.owner_document()
        .and_then(|doc| doc.active_element())
        .is_some_and(|active| {
            let active: &web_sys::Node = &active;
            el.is_same_node(Some(active))
        })
}

/// Bring focus back to the editing surface before a command runs.
///
/// `saved` is only put back when focus had left the surface; while the
/// surface is focused the live selection is the one to act on.
pub(crate) fn refocus_surface(surface: &web_sys::HtmlElement, saved: Option<&web_sys::Range>) {
    if has_focus(surface) {
        return;
    }
    let _ = surface.focus();
    if let Some(range) = saved {
        restore_range(range);
    }
}

/// Rich-text editing surface backed by the browser's `contenteditable`.
///
/// Tab / Shift+Tab indent and outdent instead of moving focus; Alt+Tab and
/// Ctrl+Tab keep their platform meaning.
#[component]
pub fn RichTextEditor(
    #[prop(into)] id: String,
    #[prop(optional)] settings: EditorSettings,
    #[prop(into, optional)] initial_html: String,
) -> impl IntoView {
    let target = DocumentCommands;
    let surface_ref: NodeRef<html::Div> = NodeRef::new();
    // Pickers take focus away from the surface; remember where the caret was.
    let saved_range: StoredValue<Option<web_sys::Range>, LocalStorage> =
        StoredValue::new_local(None);

    let paste_plain = settings.paste_remove_styles;
    let toolbar_items = settings.toolbar.clone();
    let block_formats = settings.block_formats.clone();
    let templates = settings.templates.clone();
    let template_values = StoredValue::new(settings.template_values.clone());
    let template_html = StoredValue::new(templates.iter().map(|t| t.html).collect::<Vec<_>>());

    let run = move |command: EditorCommand| {
        if let Some(el) = surface_ref.get_untracked() {
            saved_range.with_value(|r| refocus_surface(&el, r.as_ref()));
        }
        target.exec_command(command);
    };

    let on_toolbar = move |item: ToolbarItem| {
        let command = match item {
            ToolbarItem::Link => prompt_url("Link URL").map(EditorCommand::CreateLink),
            ToolbarItem::Image => prompt_url("Image URL").map(EditorCommand::InsertImage),
            other => other.command(),
        };
        if let Some(command) = command {
            run(command);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        intercept_tab_event(&target, &ev);
    };

    let on_paste = move |ev: web_sys::ClipboardEvent| {
        if !paste_plain {
            return;
        }
        let Some(text) = ev
            .clipboard_data()
            .and_then(|data| data.get_data("text/plain").ok())
        else {
            return;
        };
        ev.prevent_default();
        target.exec_command(EditorCommand::InsertText(text));
    };

    let on_format = move |ev: web_sys::Event| {
        if let Ok(format) = BlockFormat::from_str(&event_target_value(&ev)) {
            run(EditorCommand::FormatBlock(format));
        }
    };

    let on_template = move |ev: web_sys::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        let picked = select
            .value()
            .parse::<usize>()
            .ok()
            .and_then(|i| template_html.with_value(|all| all.get(i).copied()));
        select.set_value("");

        if let Some(html) = picked {
            let html = template_values.with_value(|values| expand_template(html, values));
            run(EditorCommand::InsertHtml(html));
        }
    };

    let toolbar_view = toolbar_items
        .into_iter()
        .map(|item| match item {
            ToolbarItem::Separator => {
                view! { <span class="mx-1 h-5 w-px bg-border" aria-hidden="true"></span> }.into_any()
            }
            ToolbarItem::FormatSelect => {
                let options = block_formats
                    .iter()
                    .map(|f| view! { <option value=f.as_ref().to_string()>{f.label()}</option> })
                    .collect_view();
                view! {
                    <select
                        class="h-8 rounded-md border border-input bg-background px-2 text-sm"
                        title=item.title()
                        on:change=on_format
                    >
                        {options}
                    </select>
                }
                .into_any()
            }
            ToolbarItem::Template => {
                let options = templates
                    .iter()
                    .enumerate()
                    .map(|(i, t)| view! { <option value=i.to_string()>{t.title}</option> })
                    .collect_view();
                view! {
                    <label class="inline-flex items-center gap-1 text-muted-foreground" title=item.title()>
                        {toolbar_icon(item)}
                        <select
                            class="h-8 rounded-md border border-input bg-background px-2 text-sm"
                            on:change=on_template
                        >
                            <option value="">"Template…"</option>
                            {options}
                        </select>
                    </label>
                }
                .into_any()
            }
            _ => view! {
                <ToolbarButton
                    attr:title=item.title()
                    attr:aria-label=item.title()
                    on:mousedown=move |ev: web_sys::MouseEvent| {
                        // Keep the caret in the surface.
                        ev.prevent_default();
                        on_toolbar(item);
                    }
                >
                    {toolbar_icon(item)}
                </ToolbarButton>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div data-name="RichTextEditor" class="overflow-hidden rounded-md border border-input bg-background">
            <div class="flex flex-wrap items-center gap-0.5 border-b border-input bg-muted/40 px-2 py-1" role="toolbar">
                {toolbar_view}
            </div>
            <div
                id=id
                node_ref=surface_ref
                contenteditable="true"
                role="textbox"
                aria-multiline="true"
                class="min-h-48 px-4 py-3 text-sm outline-none [&_ul]:list-disc [&_ol]:list-decimal [&_ul]:pl-6 [&_ol]:pl-6 [&_blockquote]:border-l-2 [&_blockquote]:pl-3"
                inner_html=initial_html
                on:keydown=on_keydown
                on:paste=on_paste
                on:blur=move |_| saved_range.set_value(current_range())
            ></div>
        </div>
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("document should exist")
    }

    fn attach(tag: &str) -> web_sys::HtmlElement {
        let el = document()
            .create_element(tag)
            .expect("should create element")
            .dyn_into::<web_sys::HtmlElement>()
            .expect("should be an HtmlElement");
        document()
            .body()
            .expect("body should exist")
            .append_child(&el)
            .expect("should attach element");
        el
    }

    fn caret_at(node: &web_sys::Node, offset: u32) -> web_sys::Range {
        let range = document().create_range().expect("should create range");
        range.set_start(node, offset).expect("should set range start");
        range.collapse_with_to_start(true);
        range
    }

    fn caret_offset() -> u32 {
        web_sys::window()
            .and_then(|w| w.get_selection().ok().flatten())
            .expect("selection should exist")
            .anchor_offset()
    }

    fn surface_with_text() -> (web_sys::HtmlElement, web_sys::Node) {
        let surface = attach("div");
        surface
            .set_attribute("contenteditable", "true")
            .expect("should set contenteditable");
        surface.set_text_content(Some("alpha beta gamma"));
        let text = surface.first_child().expect("surface should hold a text node");
        (surface, text)
    }

    #[wasm_bindgen_test]
    fn test_focused_surface_keeps_live_selection() {
        let (surface, text) = surface_with_text();
        surface.focus().expect("should focus surface");
        restore_range(&caret_at(&text, 10));

        let stale = caret_at(&text, 2);
        refocus_surface(&surface, Some(&stale));

        assert!(has_focus(&surface));
        assert_eq!(caret_offset(), 10);
        surface.remove();
    }

    #[wasm_bindgen_test]
    fn test_saved_caret_returns_after_focus_left() {
        let (surface, text) = surface_with_text();
        let other = attach("input");
        surface.focus().expect("should focus surface");
        other.focus().expect("should focus other input");
        assert!(!has_focus(&surface));

        let saved = caret_at(&text, 2);
        refocus_surface(&surface, Some(&saved));

        assert!(has_focus(&surface));
        assert_eq!(caret_offset(), 2);
        surface.remove();
        other.remove();
    }
}
