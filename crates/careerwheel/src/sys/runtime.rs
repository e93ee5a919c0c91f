use crate::config;
use crate::events::AppEvent;
use crate::sys::{control, server};
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;

/// Where the background services listen and what they watch.
#[derive(Debug, Clone)]
pub struct ServicePaths {
    pub socket: PathBuf,
    /// `None` disables the config watcher.
    pub config: Option<PathBuf>,
}

impl ServicePaths {
    pub fn resolve() -> Self {
        let config = config::get_config_path()
            .inspect_err(|e| log::error!("Config watcher disabled: {}", e))
            .ok();
        Self {
            socket: control::socket_path(),
            config,
        }
    }
}

/// Runs the control socket and the config watcher on a current-thread Tokio
/// runtime in a dedicated thread. Both feed `tx`; one stopping does not stop
/// the other.
pub fn start_background_services(
    paths: ServicePaths,
    tx: Sender<AppEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let ServicePaths {
        socket,
        config: config_path,
    } = paths;

    thread::Builder::new()
        .name("careerwheel-services".to_string())
        .spawn(move || {
            rt.block_on(async move {
                let control = server::run_server(&socket, tx.clone());
                let watcher = async move {
                    if let Some(path) = config_path {
                        config::run_async_watcher(path, tx).await;
                    }
                };
                tokio::join!(control, watcher);
            });
            log::warn!("Background services stopped");
        })
}
