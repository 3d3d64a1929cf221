//! Keyed, language-selectable message templates
//!
//! Every line of chat the plugin sends comes out of a [`Messages`] catalog.
//! Templates may contain `{%field}` tokens which are substituted at lookup
//! time; tokens with no matching substitution are left verbatim.

use std::collections::HashMap;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Version of the catalog this build ships. Files carrying an older version
/// are rewritten from [`Messages::default_catalog`] when loaded.
pub const MESSAGE_VERSION: u32 = 1;

/// A message catalog: `key -> language -> template`.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    version: u32,
    #[serde(rename = "default-language")]
    default_language: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl Messages {
    /// Creates a catalog from already-parsed parts.
    pub fn new(
        version: u32,
        default_language: impl Into<String>,
        messages: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        Self {
            version,
            default_language: default_language.into(),
            messages,
        }
    }

    /// The catalog version embedded in the file this was loaded from.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Language used when a key has no variant for the requested one.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Looks up `key` and renders it with the given substitutions.
    ///
    /// `language = None` requests the default language. A key present but
    /// lacking both the requested and the default language - or a key absent
    /// altogether - yields `None`, which callers treat as "do not send".
    pub fn get(&self, key: &str, substitutions: &[(&str, String)], language: Option<&str>) -> Option<String> {
        let entry = self.messages.get(key)?;

        let language = language.unwrap_or(&self.default_language);
        let template = entry.get(language).or_else(|| entry.get(&self.default_language))?;

        Some(apply_substitutions(template, substitutions))
    }

    /// The catalog every data folder starts out with.
    pub fn default_catalog() -> Self {
        let mut messages = HashMap::new();
        for (key, english) in DEFAULT_MESSAGES_EN {
            messages.insert(
                (*key).to_owned(),
                HashMap::from([("en".to_owned(), (*english).to_owned())]),
            );
        }

        Self {
            version: MESSAGE_VERSION,
            default_language: "en".to_owned(),
            messages,
        }
    }
}

fn apply_substitutions(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut rendered = template.to_owned();
    for (name, value) in substitutions {
        rendered = rendered.replace(&format!("{{%{name}}}"), value);
    }
    rendered
}

const DEFAULT_MESSAGES_EN: &[(&str, &str)] = &[
    ("prefix", "[Cameraman] "),
    ("message-added-waypoint", "Added waypoint #{%index}!"),
    ("message-reset-waypoint", "Replaced waypoint #{%index} of {%total} with where you stand."),
    ("message-removed-waypoint", "Removed waypoint #{%index}! ({%total} left)"),
    ("message-all-waypoint-removed", "Removed all of your waypoints!"),
    ("message-teleported", "Teleported you to waypoint #{%index}!"),
    ("message-waypoint-info", "#{%index}: {%x}, {%y}, {%z} @ {%world}"),
    ("message-travelling-will-start", "The travel will start soon. Enjoy the ride!"),
    ("message-travelling-finished", "The travel has finished!"),
    ("message-travelling-interrupted", "The travel was interrupted."),
    ("message-interrupting-current-travel", "Interrupting your current travel..."),
    ("help-header", "=== Cameraman v{%version} ==="),
    ("about", "Cameraman v{%version} - fly a camera along your recorded waypoints."),
    ("error-only-in-game", "This command can only be used in-game."),
    ("error-unknown-command", "Unknown command. Try \"/cameraman help\"."),
    ("error-too-few-waypoints", "You need at least two waypoints to start a travel."),
    ("error-negative-slowness", "The slowness must be positive! (got {%slowness})"),
    ("error-index-out-of-bounds", "The index must be between 1 and {%total}!"),
    ("error-travels-already-interrupted", "There is no travel to interrupt."),
    ("error-no-waypoints-to-show", "You have no waypoints to show."),
    ("error-no-waypoints-to-teleport", "You have no waypoints to teleport to."),
    ("error-no-waypoints-to-remove", "You have no waypoints to remove."),
];

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{MESSAGE_VERSION, Messages};

    fn catalog() -> Messages {
        let mut messages = HashMap::new();
        messages.insert(
            "greeting".to_owned(),
            HashMap::from([
                ("en".to_owned(), "Hello, {%name}!".to_owned()),
                ("ko".to_owned(), "{%name}, 안녕하세요!".to_owned()),
            ]),
        );
        messages.insert(
            "english-only".to_owned(),
            HashMap::from([("en".to_owned(), "No translation".to_owned())]),
        );
        messages.insert(
            "korean-only".to_owned(),
            HashMap::from([("ko".to_owned(), "번역 없음".to_owned())]),
        );

        Messages::new(MESSAGE_VERSION, "en", messages)
    }

    #[test]
    fn substitutes_fields() {
        let rendered = catalog().get("greeting", &[("name", "Steve".to_owned())], None);

        assert_eq!(rendered.as_deref(), Some("Hello, Steve!"));
    }

    #[test]
    fn selects_the_requested_language() {
        let rendered = catalog().get("greeting", &[("name", "Steve".to_owned())], Some("ko"));

        assert_eq!(rendered.as_deref(), Some("Steve, 안녕하세요!"));
    }

    #[test]
    fn falls_back_to_the_default_language() {
        let rendered = catalog().get("english-only", &[], Some("ko"));

        assert_eq!(rendered.as_deref(), Some("No translation"));
    }

    #[test]
    fn absent_keys_yield_none() {
        assert_eq!(catalog().get("nope", &[], None), None);
    }

    #[test]
    fn a_key_with_no_usable_language_yields_none() {
        assert_eq!(catalog().get("korean-only", &[], None), None);
    }

    #[test]
    fn unmatched_tokens_stay_verbatim() {
        let rendered = catalog().get("greeting", &[], None);

        assert_eq!(rendered.as_deref(), Some("Hello, {%name}!"));
    }

    #[test]
    fn the_default_catalog_covers_the_prefix() {
        let messages = Messages::default_catalog();

        assert_eq!(messages.version(), MESSAGE_VERSION);
        assert!(messages.get("prefix", &[], None).is_some());
    }
}
