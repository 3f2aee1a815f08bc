use crate::events::AppEvent;
use async_channel::{Receiver, Sender};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
pub use pie_progress::config::*;
use std::path::Path;
use std::time::Duration;

/// Editors tend to save in several steps; changes this close together reload once.
const SETTLE_TIME: Duration = Duration::from_millis(150);

fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

fn watch_dir(
    config_dir: &Path,
) -> Result<(RecommendedWatcher, Receiver<notify::Result<Event>>), notify::Error> {
    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;
    Ok((watcher, bridge_rx))
}

// false once the watcher is gone
async fn next_change(events: &Receiver<notify::Result<Event>>, config_path: &Path) -> bool {
    loop {
        match events.recv().await {
            Ok(Ok(event)) if touches_config(&event, config_path) => break,
            Ok(Ok(_)) => {}
            Ok(Err(e)) => log::error!("Watch error: {}", e),
            Err(_) => return false,
        }
    }

    while let Ok(Ok(_)) = tokio::time::timeout(SETTLE_TIME, events.recv()).await {}
    true
}

/// Sends `ConfigReload` whenever the config file is written, created or removed.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent() else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    // the watcher stops when dropped
    let (_watcher, events) = match watch_dir(config_dir) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to watch config directory: {}", e);
            return;
        }
    };
    log::debug!("Watching {}", config_path.display());

    while next_change(&events, &config_path).await {
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::path::PathBuf;

    #[test]
    fn test_touches_config() {
        let path = PathBuf::from("/home/u/.config/pie-view/config.toml");
        let other = PathBuf::from("/home/u/.config/pie-view/config.toml~");

        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        assert!(touches_config(&modify, &path));

        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        assert!(touches_config(&create, &path));

        let backup = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other);
        assert!(!touches_config(&backup, &path));

        let read = Event::new(EventKind::Access(AccessKind::Any)).add_path(path.clone());
        assert!(!touches_config(&read, &path));
    }

    #[tokio::test]
    async fn test_burst_of_changes_is_one_reload() {
        let path = PathBuf::from("/tmp/pie-view-test/config.toml");
        let (tx, rx) = async_channel::unbounded();
        for _ in 0..3 {
            let event = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
            tx.send(Ok(event)).await.unwrap();
        }

        assert!(next_change(&rx, &path).await);
        assert!(rx.is_empty());

        drop(tx);
        assert!(!next_change(&rx, &path).await);
    }
}
