use crate::autocomplete::{Autocomplete, MenuHooks};
use crate::components::ui::{
    Field, Label, Panel, PanelBody, PanelDescription, PanelHeader, PanelTitle,
};
use crate::config::PageConfig;
use crate::editor::{EditorSettings, RichTextEditor};
use crate::suggestions::{plain_names, ProfileHooks, Suggestion};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn DemoPage() -> impl IntoView {
    let config = PageConfig::new();
    let editor_settings = EditorSettings {
        template_values: config.template_values,
        ..Default::default()
    };

    view! {
        <main class="mx-auto flex max-w-3xl flex-col gap-6 px-4 py-8">
            <Panel>
                <PanelHeader>
                    <PanelTitle>"Editor"</PanelTitle>
                    <PanelDescription>"Tab indents, Shift+Tab outdents."</PanelDescription>
                </PanelHeader>
                <PanelBody>
                    <RichTextEditor
                        id="editor"
                        settings=editor_settings
                        initial_html="<p>Start typing here.</p>"
                    />
                </PanelBody>
            </Panel>

            <NamePicker />

            <ProfilePicker thumbnail_url=config.thumbnail_url profiles=config.profiles />
        </main>
    }
}

#[component]
fn NamePicker() -> impl IntoView {
    let name = RwSignal::new(String::new());

    view! {
        <Panel>
            <PanelHeader>
                <PanelTitle>"Names"</PanelTitle>
            </PanelHeader>
            <PanelBody>
                <Field>
                    <Label html_for="autocomplete1">"Name"</Label>
                    <Autocomplete
                        id="autocomplete1"
                        container_id="autocomplete1-container"
                        source=plain_names()
                        bind_value=name
                        placeholder="Start typing a name"
                    />
                </Field>
            </PanelBody>
        </Panel>
    }
}

#[component]
fn ProfilePicker(thumbnail_url: String, profiles: Vec<Suggestion>) -> impl IntoView {
    let display = RwSignal::new(String::new());
    let identifier = RwSignal::new(String::new());
    let hooks: Arc<dyn MenuHooks<Suggestion>> = Arc::new(ProfileHooks {
        display,
        identifier,
        thumbnail_url,
    });

    view! {
        <Panel>
            <PanelHeader>
                <PanelTitle>"Profiles"</PanelTitle>
            </PanelHeader>
            <PanelBody>
                <Field>
                    <Label html_for="autocomplete2" hint="label shown, id submitted">
                        "Profile"
                    </Label>
                    <Autocomplete
                        id="autocomplete2"
                        container_id="autocomplete2-container"
                        source=profiles
                        bind_value=display
                        hooks=hooks
                        placeholder="Start typing a profile"
                    />
                    <input type="hidden" id="autocomplete2-id" name="autocomplete2-id" prop:value=move || identifier.get() />
                    <Show when=move || !identifier.with(String::is_empty)>
                        <p class="text-xs text-muted-foreground">"Selected id: " {move || identifier.get()}</p>
                    </Show>
                </Field>
            </PanelBody>
        </Panel>
    }
}
