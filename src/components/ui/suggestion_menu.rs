use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {SuggestionList, ul, "absolute left-0 top-1 z-50 w-full max-h-64 overflow-y-auto rounded-md border border-border bg-background p-1 text-sm text-foreground shadow-lg"}
}

#[allow(unused_imports)]
pub use components::*;

#[component]
pub fn SuggestionItem(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = false.into(), into)] selected: Signal<bool>,
    /// Fired on mouse-down so the input keeps focus.
    #[prop(optional)]
    on_pick: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional)] on_hover: Option<Callback<()>>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative flex cursor-default select-none items-center rounded-sm px-2 py-1.5 outline-none hover:cursor-pointer",
        "aria-selected:bg-muted aria-selected:text-foreground",
        class
    );

    view! {
        <li
            data-name="SuggestionItem"
            class=merged_class
            role="option"
            aria-selected=move || selected.get().to_string()
            on:mousedown=move |ev| {
                if let Some(cb) = on_pick {
                    cb.run(ev);
                }
            }
            on:mousemove=move |_| {
                if let Some(cb) = on_hover {
                    cb.run(());
                }
            }
        >
            {children()}
        </li>
    }
}
