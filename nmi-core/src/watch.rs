use crate::manifest::MANIFEST_FILE;
use crate::path::INSTALL_ROOT;
use crate::{InspectError, Result};
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ManifestWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::UnboundedReceiver<PathBuf>,
    debounce: Duration,
}

impl ManifestWatcher {
    pub fn start(roots: &[PathBuf], debounce: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel::<PathBuf>();

        let mut watcher = RecommendedWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if !should_process_event(&event.kind) {
                        return;
                    }
                    for path in event.paths {
                        if is_manifest_change(&path) && tx.send(path).is_err() {
                            debug!("watch receiver dropped");
                            return;
                        }
                    }
                }
                Err(err) => warn!(error = %err, "watch error"),
            },
            Config::default(),
        )
        .map_err(|err| InspectError::Watch {
            reason: err.to_string(),
        })?;

        for root in roots {
            if !root.is_dir() {
                return Err(InspectError::Watch {
                    reason: format!("{} is not a directory", root.display()),
                });
            }

            watcher
                .watch(root, RecursiveMode::Recursive)
                .map_err(|err| InspectError::Watch {
                    reason: format!("{}: {}", root.display(), err),
                })?;
            info!(root = %root.display(), "watching directory");
        }

        Ok(Self {
            _watcher: watcher,
            rx,
            debounce,
        })
    }

    pub async fn next_change(&mut self) -> Option<Vec<PathBuf>> {
        coalesce(&mut self.rx, self.debounce).await
    }
}

async fn coalesce(
    rx: &mut mpsc::UnboundedReceiver<PathBuf>,
    window: Duration,
) -> Option<Vec<PathBuf>> {
    let first = rx.recv().await?;
    let mut pending = BTreeSet::from([first]);

    loop {
        match tokio::time::timeout(window, rx.recv()).await {
            Ok(Some(path)) => {
                pending.insert(path);
            }
            Ok(None) | Err(_) => break,
        }
    }

    debug!(count = pending.len(), "coalesced manifest changes");
    Some(pending.into_iter().collect())
}

pub fn is_manifest_change(path: &Path) -> bool {
    let is_manifest = path
        .file_name()
        .map(|name| name == MANIFEST_FILE)
        .unwrap_or(false);

    is_manifest
        && path
            .components()
            .any(|component| matches!(component, Component::Normal(name) if name == INSTALL_ROOT))
}

fn should_process_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(CreateKind::File | CreateKind::Any)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
            | EventKind::Remove(RemoveKind::File | RemoveKind::Any)
    )
}
