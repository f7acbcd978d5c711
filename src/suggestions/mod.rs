use crate::autocomplete::{Candidate, MenuHooks, SelectAction};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Names offered by the plain autocomplete.
pub const PLAIN_NAMES: [&str; 22] = [
    "Anna Conda",
    "Ben Dover",
    "Craven Moorehead",
    "Dick Burns",
    "Earl Lee Riser",
    "Gene Poole",
    "Harry Baals",
    "Ileane Wright",
    "Jack Knoff",
    "Kerry Oki",
    "Lance Boyle",
    "M. Balmer",
    "Norma Leigh Lucid",
    "Ophelia Payne",
    "Pat Hiscock",
    "Polly Ester",
    "Raynor Schein",
    "Sal A. Mander",
    "Tanya Hyde",
    "Viola Solo",
    "Walter Melon",
    "X. Benedict",
];

pub fn plain_names() -> Vec<String> {
    PLAIN_NAMES.iter().map(|s| s.to_string()).collect()
}

/// A structured candidate: stable `value`, display `label`, secondary text.
///
/// Absent fields deserialize to the empty string.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestion {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "desc", alias = "description")]
    pub description: String,
}

impl Suggestion {
    pub fn new(value: &str, label: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

impl Candidate for Suggestion {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> &str {
        &self.value
    }
}

pub fn profiles() -> Vec<Suggestion> {
    vec![
        Suggestion::new("catstevens", "Cat Stevens", "a formidable description of Cat Stevens O.o"),
        Suggestion::new("felinegood", "Feline Good", "are you feline good too?"),
        Suggestion::new("tickletank", "Tickle Tank", "getz yo tickle awn"),
        Suggestion::new("atticuskitch", "Atticus Kitch", "swings in gardens and such things"),
        Suggestion::new("seriousbulbous", "Serious Bulbous", "what is this doing here, fo'real?!"),
        Suggestion::new("zeitgeistkitteh", "Zeitgeist Kitteh", "had to get a 'z' in somehow"),
    ]
}

/// Binding for the structured picker.
///
/// Keyboard focus leaves the input alone; confirming writes the label into
/// the visible field and the value into its hidden companion.
#[derive(Clone)]
pub struct ProfileHooks {
    pub display: RwSignal<String>,
    pub identifier: RwSignal<String>,
    pub thumbnail_url: String,
}

impl MenuHooks<Suggestion> for ProfileHooks {
    fn focus(&self, _candidate: &Suggestion) -> bool {
        false
    }

    fn select(&self, candidate: &Suggestion) -> SelectAction {
        self.display.set(candidate.label.clone());
        self.identifier.set(candidate.value.clone());
        SelectAction::Handled
    }

    fn render(&self, candidate: &Suggestion) -> AnyView {
        view! {
            <ProfileRow
                thumbnail_url=self.thumbnail_url.clone()
                label=candidate.label.clone()
                description=candidate.description.clone()
            />
        }
        .into_any()
    }
}

#[component]
pub fn ProfileRow(
    #[prop(into)] thumbnail_url: String,
    #[prop(into)] label: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <a class="flex w-full items-center gap-2">
            <img class="size-5 shrink-0 rounded-sm" src=thumbnail_url alt="" />
            <div class="min-w-0 leading-tight">
                <span class="block truncate">{label}</span>
                <small class="block truncate text-xs text-muted-foreground">{description}</small>
            </div>
        </a>
    }
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rendered_row_contains_label_and_description() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document should exist");
        let host = document
            .create_element("ul")
            .expect("should create host")
            .dyn_into::<web_sys::HtmlElement>()
            .expect("host should be an HtmlElement");
        document
            .body()
            .expect("body should exist")
            .append_child(&host)
            .expect("should attach host");

        let h = ProfileHooks {
            display: RwSignal::new(String::new()),
            identifier: RwSignal::new(String::new()),
            thumbnail_url: "http://placekitten.com/20/20".to_string(),
        };
        let feline = profiles()[1].clone();

        let handle = leptos::mount::mount_to(host.clone(), move || h.render(&feline));

        let text = host.text_content().unwrap_or_default();
        assert!(text.contains("Feline Good"));
        assert!(text.contains("are you feline good too?"));
        assert!(host.query_selector("img").ok().flatten().is_some());

        drop(handle);
    }
}
