use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    /// Secondary text shown after the label.
    #[prop(optional, into)]
    hint: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!(
        "flex items-baseline gap-2 text-sm leading-none font-medium select-none",
        class
    );
    let has_hint = !hint.is_empty();

    view! {
        <label class=class r#for=html_for>
            {children()}
            <Show when=move || has_hint fallback=|| ().into_view()>
                <span class="text-xs font-normal text-muted-foreground">{hint.clone()}</span>
            </Show>
        </label>
    }
}
