use crate::editor::{CommandTarget, EditorCommand};

pub(crate) const TAB_KEY_CODE: u32 = 9;

/// A key-down event reduced to what the editor's key handling looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyStroke {
    pub key_code: u32,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl KeyStroke {
    /// Normalize a DOM keyboard event.
    ///
    /// Some engines only fill `which`, others only `keyCode`; both read as 0
    /// when absent, and 0 never matches a key we act on.
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key_code: normalize_key_code(ev.key_code(), ev.which()),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
        }
    }

    #[cfg(test)]
    pub(crate) fn tab() -> Self {
        Self {
            key_code: TAB_KEY_CODE,
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

pub(crate) fn normalize_key_code(key_code: u32, which: u32) -> u32 {
    if key_code != 0 {
        key_code
    } else {
        which
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The stroke was consumed; the caller must suppress the browser default
    /// and stop propagation.
    Handled,
    PassThrough,
}

impl KeyDisposition {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Tab indents, Shift+Tab outdents. Alt or Ctrl keeps the platform's own Tab
/// behavior (focus traversal, tab switching).
pub fn indent_command(stroke: KeyStroke) -> Option<EditorCommand> {
    if stroke.key_code != TAB_KEY_CODE || stroke.alt || stroke.ctrl {
        return None;
    }

    Some(if stroke.shift {
        EditorCommand::Outdent
    } else {
        EditorCommand::Indent
    })
}

/// Turn Tab / Shift+Tab into indent / outdent on `target`.
pub fn intercept_tab(target: &impl CommandTarget, stroke: KeyStroke) -> KeyDisposition {
    match indent_command(stroke) {
        Some(command) => {
            target.exec_command(command);
            KeyDisposition::Handled
        }
        None => KeyDisposition::PassThrough,
    }
}

/// Key-down listener body for an editing surface. A handled stroke never
/// reaches the browser default or outer listeners.
pub fn intercept_tab_event(
    target: &impl CommandTarget,
    ev: &web_sys::KeyboardEvent,
) -> KeyDisposition {
    let disposition = intercept_tab(target, KeyStroke::from_event(ev));
    if disposition.is_handled() {
        ev.prevent_default();
        ev.stop_propagation();
    }
    disposition
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        issued: RefCell<Vec<EditorCommand>>,
    }

    impl CommandTarget for Recorder {
        fn exec_command(&self, command: EditorCommand) {
            self.issued.borrow_mut().push(command);
        }
    }

    #[test]
    fn test_tab_indents_once() {
        let editor = Recorder::default();
        let d = intercept_tab(&editor, KeyStroke::tab());
        assert_eq!(d, KeyDisposition::Handled);
        assert_eq!(*editor.issued.borrow(), vec![EditorCommand::Indent]);
    }

    #[test]
    fn test_shift_tab_outdents_once() {
        let editor = Recorder::default();
        let d = intercept_tab(&editor, KeyStroke::tab().with_shift());
        assert!(d.is_handled());
        assert_eq!(*editor.issued.borrow(), vec![EditorCommand::Outdent]);
    }

    #[test]
    fn test_alt_or_ctrl_passes_through() {
        let strokes = [
            KeyStroke::tab().with_alt(),
            KeyStroke::tab().with_ctrl(),
            KeyStroke::tab().with_alt().with_shift(),
            KeyStroke::tab().with_ctrl().with_shift(),
            KeyStroke::tab().with_ctrl().with_alt(),
        ];

        for stroke in strokes {
            let editor = Recorder::default();
            assert_eq!(intercept_tab(&editor, stroke), KeyDisposition::PassThrough);
            assert!(editor.issued.borrow().is_empty(), "{stroke:?}");
        }
    }

    #[test]
    fn test_other_keys_pass_through() {
        for key_code in [0, 8, 10, 13, 32, 65] {
            let editor = Recorder::default();
            let stroke = KeyStroke {
                key_code,
                ..Default::default()
            };
            assert_eq!(intercept_tab(&editor, stroke), KeyDisposition::PassThrough);
            assert_eq!(intercept_tab(&editor, stroke.with_shift()), KeyDisposition::PassThrough);
            assert!(editor.issued.borrow().is_empty());
        }
    }

    #[test]
    fn test_normalize_prefers_key_code_then_which() {
        assert_eq!(normalize_key_code(9, 0), 9);
        assert_eq!(normalize_key_code(0, 9), 9);
        assert_eq!(normalize_key_code(13, 9), 13);
        assert_eq!(normalize_key_code(0, 0), 0);
    }

    #[test]
    fn test_missing_key_code_is_inert() {
        assert_eq!(indent_command(KeyStroke::default()), None);
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn keydown(init: &web_sys::KeyboardEventInit) -> web_sys::KeyboardEvent {
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", init)
            .expect("keyboard event should construct")
    }

    #[wasm_bindgen_test]
    fn test_stroke_from_event_reads_key_code_and_modifiers() {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key("Tab");
        init.set_key_code(9);
        init.set_shift_key(true);

        let stroke = KeyStroke::from_event(&keydown(&init));
        assert_eq!(stroke, KeyStroke::tab().with_shift());
    }

    #[wasm_bindgen_test]
    fn test_stroke_without_code_is_zero() {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key("Tab");

        let stroke = KeyStroke::from_event(&keydown(&init));
        assert_eq!(stroke.key_code, 0);
        assert_eq!(indent_command(stroke), None);
    }

    #[derive(Default)]
    struct Recorder {
        issued: RefCell<Vec<EditorCommand>>,
    }

    impl CommandTarget for Recorder {
        fn exec_command(&self, command: EditorCommand) {
            self.issued.borrow_mut().push(command);
        }
    }

    fn tab_event(key: &str, key_code: u32, shift: bool, alt: bool, ctrl: bool) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_key_code(key_code);
        init.set_shift_key(shift);
        init.set_alt_key(alt);
        init.set_ctrl_key(ctrl);
        init.set_bubbles(true);
        init.set_cancelable(true);
        keydown(&init)
    }

    /// Dispatch `ev` on a surface nested in an outer element; returns the
    /// commands issued and how many times the event reached the outer element.
    fn dispatch_on_surface(ev: &web_sys::KeyboardEvent) -> (Vec<EditorCommand>, u32) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document should exist");
        let outer = document.create_element("div").expect("should create outer");
        let surface = document.create_element("div").expect("should create surface");
        outer.append_child(&surface).expect("should nest surface");
        document
            .body()
            .expect("body should exist")
            .append_child(&outer)
            .expect("should attach outer");

        let recorder = Rc::new(Recorder::default());
        let bubbled = Rc::new(Cell::new(0u32));

        let r = recorder.clone();
        let on_surface = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                intercept_tab_event(&*r, &ev);
            },
        );
        let b = bubbled.clone();
        let on_outer = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            b.set(b.get() + 1);
        });
        surface
            .add_event_listener_with_callback("keydown", on_surface.as_ref().unchecked_ref())
            .expect("should listen on surface");
        outer
            .add_event_listener_with_callback("keydown", on_outer.as_ref().unchecked_ref())
            .expect("should listen on outer");

        surface.dispatch_event(ev).expect("should dispatch");
        outer.remove();

        let issued = recorder.issued.borrow().clone();
        (issued, bubbled.get())
    }

    #[wasm_bindgen_test]
    fn test_tab_is_consumed_and_indents_once() {
        let ev = tab_event("Tab", 9, false, false, false);
        let (issued, bubbled) = dispatch_on_surface(&ev);
        assert!(ev.default_prevented());
        assert_eq!(issued, vec![EditorCommand::Indent]);
        assert_eq!(bubbled, 0);
    }

    #[wasm_bindgen_test]
    fn test_shift_tab_is_consumed_and_outdents_once() {
        let ev = tab_event("Tab", 9, true, false, false);
        let (issued, bubbled) = dispatch_on_surface(&ev);
        assert!(ev.default_prevented());
        assert_eq!(issued, vec![EditorCommand::Outdent]);
        assert_eq!(bubbled, 0);
    }

    #[wasm_bindgen_test]
    fn test_modified_tab_and_other_keys_keep_default() {
        let events = [
            tab_event("Tab", 9, false, false, true),
            tab_event("Tab", 9, true, true, false),
            tab_event("Enter", 13, false, false, false),
        ];

        for ev in events {
            let (issued, bubbled) = dispatch_on_surface(&ev);
            assert!(!ev.default_prevented(), "{}", ev.key());
            assert!(issued.is_empty(), "{}", ev.key());
            assert_eq!(bubbled, 1);
        }
    }
}
