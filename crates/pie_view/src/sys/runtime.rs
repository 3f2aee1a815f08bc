use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::future::Future;
use std::io;
use std::thread;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

fn build_runtime() -> io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pie-view-worker")
        .enable_all()
        .build()
}

fn spawn_service<F>(name: &'static str, service: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        log::debug!("Starting {}", name);
        service.await;
        log::warn!("{} stopped", name);
    })
}

/// Runs the control socket and the config watcher on a thread of their own.
/// The thread ends once both have stopped.
pub fn start_background_services(tx: Sender<AppEvent>) -> io::Result<()> {
    let rt = build_runtime()?;

    thread::Builder::new()
        .name("pie-view-services".to_string())
        .spawn(move || {
            rt.block_on(async {
                let socket = spawn_service("control socket", server::run_server(tx.clone()));
                let watcher = spawn_service("config watcher", config::run_async_watcher(tx));
                let (socket, watcher) = tokio::join!(socket, watcher);
                for result in [socket, watcher] {
                    if let Err(e) = result {
                        log::error!("Background service failed: {}", e);
                    }
                }
            })
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_run_to_completion() {
        let rt = build_runtime().unwrap();
        let (tx, rx) = async_channel::unbounded();

        rt.block_on(async {
            let handle = spawn_service("test service", async move {
                tx.send(AppEvent::Quit).await.unwrap();
            });
            handle.await.unwrap();
        });

        assert_eq!(rx.try_recv().unwrap(), AppEvent::Quit);
        assert!(rx.try_recv().is_err());
    }
}
