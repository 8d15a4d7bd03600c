// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The configuration message protocol.
//!
//! Messages are JSON objects tagged by `type`:
//!
//! ```text
//! host → ui   {"type":"load","settings":{...}}
//! ui → host   {"type":"save","settings":{...}}
//! ui → host   {"type":"cancel"}
//! ```
//!
//! Saved settings arrive as raw JSON and are resolved through
//! [`validate`](crate::settings::validate), so a partially filled form still yields a
//! complete [`Settings`] value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::settings::{Settings, SettingsStore, save_settings, validate};

/// A message from the configuration UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiMessage {
    /// Persist these (unvalidated) settings.
    Save {
        /// Raw settings as entered.
        settings: Value,
    },
    /// Close without saving.
    Cancel,
}

/// A message to the configuration UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostMessage {
    /// Populate the form with the current settings.
    Load {
        /// Current resolved settings.
        settings: Settings,
    },
}

/// How a configuration exchange ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigOutcome {
    /// New settings are in effect, whether or not they were persisted.
    Saved(Settings),
    /// The user closed the form.
    Cancelled,
}

/// One open configuration form.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSession {
    settings: Settings,
}

impl ConfigSession {
    /// Open a form showing `settings`, returning the session and the message that fills it.
    pub fn open(settings: Settings) -> (Self, HostMessage) {
        let session = Self { settings };
        let load = session.load_message();
        (session, load)
    }

    /// The `load` message for the current settings.
    pub fn load_message(&self) -> HostMessage {
        HostMessage::Load {
            settings: self.settings,
        }
    }

    /// Settings currently in effect for this session.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle a message from the form.
    ///
    /// A `save` validates, persists, and applies the settings. A store failure is logged and the
    /// validated value still takes effect for the rest of the run.
    pub fn handle<S>(&mut self, store: &mut S, message: UiMessage) -> ConfigOutcome
    where
        S: SettingsStore + ?Sized,
    {
        match message {
            UiMessage::Save { settings } => {
                let settings = validate(&settings);
                if save_settings(store, &settings).is_err() {
                    debug!("keeping unsaved settings for this run");
                }
                self.settings = settings;
                info!(?settings, "settings updated");
                ConfigOutcome::Saved(settings)
            }
            UiMessage::Cancel => ConfigOutcome::Cancelled,
        }
    }

    /// Parse `text` as a [`UiMessage`] and handle it.
    pub fn handle_json<S>(&mut self, store: &mut S, text: &str) -> Result<ConfigOutcome>
    where
        S: SettingsStore + ?Sized,
    {
        let message: UiMessage = serde_json::from_str(text)?;
        Ok(self.handle(store, message))
    }
}
