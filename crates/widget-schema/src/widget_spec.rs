//! The `widget` tag grammar
//!
//! ```text
//! spec    := name ("," token)*
//! token   := key "=" value | flag
//! ```
//!
//! The first token is always the widget name, even when it contains `=` or is
//! empty. Later tokens are trimmed and empty ones skipped; spaces around `=`
//! are allowed. Recognized keys are
//! `URLPrefix`, `vocabulary`, `storage` and `cols` (an integer); the only
//! recognized flag is `images`. Anything else is dropped, it does not end up
//! in `options`.

use crate::error::TagError;
use crate::schema::WidgetSettings;

const URL_PREFIX: &str = "URLPrefix";
const VOCABULARY: &str = "vocabulary";
const STORAGE: &str = "storage";
const COLS: &str = "cols";
const IMAGES: &str = "images";

impl WidgetSettings {
    /// Parses a widget spec, dropping tokens that do not apply.
    pub fn parse(spec: &str) -> Self {
        let (settings, dropped) = Self::parse_with_diagnostics(spec);
        for err in dropped {
            tracing::debug!(%err, spec, "dropping widget token");
        }
        settings
    }

    /// Parses a widget spec and also returns every token that was dropped.
    pub fn parse_with_diagnostics(spec: &str) -> (Self, Vec<TagError>) {
        let mut settings = Self::default();
        let mut dropped = Vec::new();

        let mut tokens = spec.split(',').map(str::trim);
        if let Some(name) = tokens.next() {
            settings.name = name.to_string();
        }
        for token in tokens.filter(|t| !t.is_empty()) {
            if let Err(err) = settings.apply_token(token) {
                dropped.push(err);
            }
        }

        (settings, dropped)
    }

    fn apply_token(&mut self, token: &str) -> Result<(), TagError> {
        match token.split_once('=') {
            Some((_, value)) if value.contains('=') => {
                Err(TagError::MalformedWidgetToken(token.to_string()))
            }
            Some((key, value)) => self.apply_setting(key.trim(), value.trim()),
            None => self.apply_flag(token),
        }
    }

    fn apply_setting(&mut self, key: &str, value: &str) -> Result<(), TagError> {
        match key {
            URL_PREFIX => self.url_prefix = value.to_string(),
            VOCABULARY => self.vocabulary = value.to_string(),
            STORAGE => self.storage = value.to_string(),
            COLS => {
                self.cols = value.parse().map_err(|source| TagError::InvalidCols {
                    value: value.to_string(),
                    source,
                })?;
            }
            _ => return Err(TagError::UnknownWidgetKey(key.to_string())),
        }
        Ok(())
    }

    fn apply_flag(&mut self, flag: &str) -> Result<(), TagError> {
        match flag {
            IMAGES => self.images = true,
            _ => return Err(TagError::UnknownWidgetFlag(flag.to_string())),
        }
        Ok(())
    }
}
