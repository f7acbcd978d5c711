use crate::editor::template::default_template_values;
use crate::suggestions::{profiles, Suggestion};
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_THUMBNAIL_URL: &str = "http://placekitten.com/20/20";

/// Page-level settings.
///
/// Host pages may override any of these through `window.ENV`:
/// `THUMBNAIL_URL` (string), `TEMPLATE_VALUES` (object of strings, merged
/// over the defaults) and `PROFILES` (array of `{value, label, desc}`).
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub thumbnail_url: String,
    pub template_values: BTreeMap<String, String>,
    pub profiles: Vec<Suggestion>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
            template_values: default_template_values(),
            profiles: profiles(),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return config;
        };
        let env: JsValue = env.into();

        if let Some(url) = env_field(&env, "THUMBNAIL_URL").and_then(|v| v.as_string()) {
            config.thumbnail_url = url;
        }

        if let Some(values) = env_json::<BTreeMap<String, String>>(&env, "TEMPLATE_VALUES") {
            config.template_values.extend(values);
        }

        if let Some(list) = env_json::<Vec<Suggestion>>(&env, "PROFILES") {
            config.profiles = list;
        }

        config
    }
}

fn env_field(env: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(env, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read `window.ENV[key]` through JSON so serde defaults apply.
fn env_json<T: DeserializeOwned>(env: &JsValue, key: &str) -> Option<T> {
    let raw = env_field(env, key)?;
    let json = js_sys::JSON::stringify(&raw).ok()?.as_string()?;
    parse_env_json(key, &json)
}

pub(crate) fn parse_env_json<T: DeserializeOwned>(key: &str, json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring window.ENV.{key}: {e}");
            None
        }
    }
}
