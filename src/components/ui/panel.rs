use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Panel, section, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-5 shadow-sm"}
    clx! {PanelHeader, div, "flex flex-col gap-1 px-5"}
    clx! {PanelTitle, h2, "leading-none font-semibold"}
    clx! {PanelDescription, p, "text-muted-foreground text-sm"}
    clx! {PanelBody, div, "flex flex-col gap-3 px-5"}
    clx! {Field, div, "flex flex-col gap-2"}
}

#[allow(unused_imports)]
pub use components::*;
