mod menu;

pub use menu::{filter_candidates, Candidate, FocusChange, Menu, MenuOptions, Phase, Step};

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{SuggestionItem, SuggestionList};
use leptos::prelude::*;
use std::sync::Arc;
use tw_merge::tw_merge;

/// What the widget does after a `select` hook ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAction {
    /// Write the candidate's `value` into the input.
    Default,
    /// The hook already updated whatever it needed.
    Handled,
}

/// Per-instance overrides for focus, selection and item rendering.
pub trait MenuHooks<T: Candidate>: Send + Sync + 'static {
    /// Called when keyboard navigation lands on a candidate. Returning
    /// `false` keeps the input untouched.
    fn focus(&self, _candidate: &T) -> bool {
        true
    }

    fn select(&self, _candidate: &T) -> SelectAction {
        SelectAction::Default
    }

    /// Content placed inside the candidate's list item.
    fn render(&self, candidate: &T) -> AnyView {
        let label = candidate.label().to_string();
        view! { <a class="block truncate">{label}</a> }.into_any()
    }
}

/// Stock widget behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl<T: Candidate> MenuHooks<T> for DefaultHooks {}

/// Text the widget writes into the input when `candidate` gains keyboard focus.
pub(crate) fn focus_write<T, H>(hooks: &H, candidate: &T) -> Option<String>
where
    T: Candidate,
    H: MenuHooks<T> + ?Sized,
{
    hooks
        .focus(candidate)
        .then(|| candidate.value().to_string())
}

/// Runs the `select` hook; returns the text the widget still has to write.
pub(crate) fn select_write<T, H>(hooks: &H, candidate: &T) -> Option<String>
where
    T: Candidate,
    H: MenuHooks<T> + ?Sized,
{
    match hooks.select(candidate) {
        SelectAction::Default => Some(candidate.value().to_string()),
        SelectAction::Handled => None,
    }
}

/// Result of routing one key press through the menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KeyOutcome {
    /// The key belonged to the menu; the browser default must not run.
    pub consumed: bool,
    /// New text for the input, if any.
    pub write: Option<String>,
}

/// Keyboard routing for the widget. `input` is the current text of the
/// field, used to reopen the menu on ArrowDown / ArrowUp.
pub(crate) fn route_key<T, H>(
    menu: &mut Menu<T>,
    source: &[T],
    options: MenuOptions,
    input: &str,
    hooks: &H,
    key: &str,
) -> KeyOutcome
where
    T: Candidate,
    H: MenuHooks<T> + ?Sized,
{
    match key {
        "ArrowDown" | "ArrowUp" => {
            if !menu.is_open() {
                menu.search(source, input, options);
                return KeyOutcome {
                    consumed: true,
                    write: None,
                };
            }

            let step = if key == "ArrowDown" { Step::Next } else { Step::Prev };
            let write = match menu.move_focus(step) {
                Some(FocusChange::Candidate(c)) => focus_write(hooks, &c),
                Some(FocusChange::Restored(term)) => Some(term),
                None => None,
            };
            KeyOutcome {
                consumed: true,
                write,
            }
        }
        "Enter" => match menu.confirm() {
            Some(c) => KeyOutcome {
                consumed: true,
                write: select_write(hooks, &c),
            },
            None => KeyOutcome::default(),
        },
        "Escape" if menu.is_open() => {
            menu.close();
            KeyOutcome {
                consumed: true,
                write: None,
            }
        }
        _ => KeyOutcome::default(),
    }
}

#[component]
pub fn Autocomplete<T>(
    /// Id of the text input.
    #[prop(into)]
    id: String,
    /// Id of the element the suggestion list renders into.
    #[prop(into)]
    container_id: String,
    source: Vec<T>,
    bind_value: RwSignal<String>,
    #[prop(optional)] hooks: Option<Arc<dyn MenuHooks<T>>>,
    #[prop(optional)] options: MenuOptions,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView
where
    T: Candidate,
{
    let hooks: StoredValue<Arc<dyn MenuHooks<T>>> =
        StoredValue::new(hooks.unwrap_or_else(|| Arc::new(DefaultHooks)));
    let source = StoredValue::new(source);
    let menu: RwSignal<Menu<T>> = RwSignal::new(Menu::default());
    let list_id = use_random_id_for("listbox");

    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs outline-none md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let search = move |term: &str| {
        source.with_value(|src| menu.update(|m| m.search(src, term, options)));
    };

    let apply_select = move |candidate: T| {
        if let Some(text) = hooks.with_value(|h| select_write(&**h, &candidate)) {
            bind_value.set(text);
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        bind_value.set(value.clone());
        search(&value);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let input = bind_value.get_untracked();
        let outcome = source.with_value(|src| {
            hooks.with_value(|h| {
                menu.try_update(|m| route_key(m, src, options, &input, &**h, &key))
            })
        });
        let Some(outcome) = outcome else {
            return;
        };

        if outcome.consumed {
            ev.prevent_default();
        }
        if let Some(text) = outcome.write {
            bind_value.set(text);
        }
    };

    let list_id_for_input = list_id.clone();

    view! {
        <input
            data-name="Autocomplete"
            type="text"
            id=id
            class=merged_class
            placeholder=placeholder
            autocomplete="off"
            role="combobox"
            aria-autocomplete="list"
            aria-controls=list_id_for_input
            aria-expanded=move || menu.with(|m| m.is_open()).to_string()
            prop:value=move || bind_value.get()
            on:input=on_input
            on:keydown=on_keydown
            on:blur=move |_| menu.update(|m| m.close())
        />

        <div id=container_id class="relative">
            <Show when=move || menu.with(|m| m.is_open()) fallback=|| ().into_view()>
                <SuggestionList attr:id=list_id.clone() attr:role="listbox">
                    {move || {
                        let (items, active) = menu.with(|m| (m.items().to_vec(), m.active()));
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(i, candidate)| {
                                let content = hooks.with_value(|h| h.render(&candidate));
                                let selected = Signal::derive(move || active == Some(i));
                                view! {
                                    <SuggestionItem
                                        selected=selected
                                        on_pick=Callback::new(move |ev: web_sys::MouseEvent| {
                                            // Keep focus in the input.
                                            ev.prevent_default();
                                            if let Some(c) = menu.try_update(|m| m.pick(i)).flatten() {
                                                apply_select(c);
                                            }
                                        })
                                        on_hover=Callback::new(move |_: ()| {
                                            if menu.with_untracked(|m| m.active()) == Some(i) {
                                                return;
                                            }
                                            menu.update(|m| {
                                                m.set_active(i);
                                            });
                                        })
                                    >
                                        {content}
                                    </SuggestionItem>
                                }
                            })
                            .collect_view()
                    }}
                </SuggestionList>
            </Show>
        </div>
    }
}
