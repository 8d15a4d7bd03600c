// Copyright 2025 the Matboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command selection and dispatch.

use tracing::debug;

use crate::batch::{BatchReport, CancelToken};
use crate::document::DocumentEdit;
use crate::flow::{MasterLayout, MasterReport, Notifier, apply_borders, master_layout};
use crate::message::{ConfigSession, HostMessage};
use crate::settings::{SettingsStore, load_settings};

/// A user-invoked command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Border every selected node.
    Apply,
    /// Normalize, border, and pack the selection onto pages.
    Master,
    /// Open the settings form.
    Configure,
}

impl Command {
    /// Map a command identifier; anything unrecognized opens the settings form.
    pub fn from_id(id: &str) -> Self {
        match id {
            "apply" => Self::Apply,
            "master" => Self::Master,
            _ => Self::Configure,
        }
    }
}

/// What a dispatched command produced.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// Result of [`Command::Apply`].
    Applied(BatchReport),
    /// Result of [`Command::Master`].
    Laidout(MasterReport),
    /// Result of [`Command::Configure`]: an open session and the message that fills the form.
    Configure {
        /// The open form.
        session: ConfigSession,
        /// Message to send to the form.
        load: HostMessage,
    },
}

/// Load settings from `store` and run `command` on `selection`.
pub async fn run_command<D, S, N>(
    command: Command,
    doc: &mut D,
    selection: &[D::Id],
    store: &S,
    cancel: &CancelToken,
    notifier: &mut N,
) -> CommandOutcome
where
    D: DocumentEdit + ?Sized,
    S: SettingsStore + ?Sized,
    N: Notifier + ?Sized,
{
    let settings = load_settings(store);
    debug!(?command, selected = selection.len(), "running command");
    match command {
        Command::Apply => CommandOutcome::Applied(
            apply_borders(doc, selection, &settings, cancel, notifier).await,
        ),
        Command::Master => CommandOutcome::Laidout(
            master_layout(
                doc,
                selection,
                &settings,
                &MasterLayout::default(),
                cancel,
                notifier,
            )
            .await,
        ),
        Command::Configure => {
            let (session, load) = ConfigSession::open(settings);
            CommandOutcome::Configure { session, load }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_configure() {
        assert_eq!(Command::from_id("apply"), Command::Apply);
        assert_eq!(Command::from_id("master"), Command::Master);
        assert_eq!(Command::from_id(""), Command::Configure);
        assert_eq!(Command::from_id("APPLY"), Command::Configure);
    }
}
