//! `logs` subcommands

use crate::cli::LogsCommand;
use anyhow::{Context, Result};
use dashboard_api::pods::{
    download_all_step_logs, download_full_pod_log, fetch_logs, pod_containers, LogDownload, LogUpdate,
    LogViewState, PodLogClientTrait, LOG_REFRESH_INTERVAL, LOG_TAIL_LINES,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Interactive command read while tailing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailCommand {
    TogglePause,
    Resume,
    Refresh,
    SelectContainer(String),
    Download,
    DownloadAll,
    Quit,
}

pub fn parse_command(line: &str) -> Option<TailCommand> {
    let line = line.trim();
    let (command, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match (command, arg.trim()) {
        ("p", "") => Some(TailCommand::TogglePause),
        ("r", "") => Some(TailCommand::Resume),
        ("f", "") => Some(TailCommand::Refresh),
        ("c", name) if !name.is_empty() => Some(TailCommand::SelectContainer(name.to_string())),
        ("d", "") => Some(TailCommand::Download),
        ("D", "") => Some(TailCommand::DownloadAll),
        ("q", "") => Some(TailCommand::Quit),
        _ => None,
    }
}

pub async fn run<C: PodLogClientTrait>(client: &C, command: LogsCommand, namespace: &str) -> Result<()> {
    let mut out = std::io::stdout();
    match command {
        LogsCommand::Tail { pod, container, output_dir } => {
            let stdin = BufReader::new(tokio::io::stdin());
            tail(client, namespace, &pod, container.as_deref(), &output_dir, stdin, &mut out).await
        }
        LogsCommand::Download { pod, container, all, output_dir } => {
            let download = if all {
                let containers = load_containers(client, namespace, &pod).await?;
                download_all_step_logs(client, &containers, namespace, &pod).await?
            } else {
                let container = match container {
                    Some(container) => container,
                    None => {
                        let containers = load_containers(client, namespace, &pod).await?;
                        dashboard_api::pods::default_container(&containers)
                            .map(str::to_string)
                            .with_context(|| format!("Pod {} has no containers", pod))?
                    }
                };
                download_full_pod_log(client, namespace, &pod, &container).await?
            };
            let path = save_download(&download, &output_dir).await?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
    }
}

async fn load_containers<C: PodLogClientTrait>(client: &C, namespace: &str, pod: &str) -> Result<Vec<String>> {
    let pod = client.get_pod(namespace, pod).await?;
    Ok(pod_containers(&pod))
}

/// Write a download into `dir`, returning the file path
pub async fn save_download(download: &LogDownload, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&download.file_name);
    tokio::fs::write(&path, &download.content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved {} ({} bytes)", path.display(), download.content.len());
    Ok(path)
}

/// Tail the selected container until `q` or an unrecoverable pod error.
///
/// Refreshes every [`LOG_REFRESH_INTERVAL`] while not paused. Once `input`
/// is exhausted the tail keeps running without commands.
pub async fn tail<C, R>(
    client: &C,
    namespace: &str,
    pod: &str,
    container: Option<&str>,
    output_dir: &Path,
    input: R,
    out: &mut dyn Write,
) -> Result<()>
where
    C: PodLogClientTrait,
    R: AsyncBufRead + Unpin,
{
    let mut state = LogViewState::new(pod);
    match client.get_pod(namespace, pod).await {
        Ok(found) => state.set_pod_containers(pod_containers(&found)),
        Err(e) => {
            state.set_pod_error(&e);
            return Err(e).with_context(|| format!("Failed to load pod {}/{}", namespace, pod));
        }
    }
    if let Some(container) = container {
        if !state.select_container(container) {
            anyhow::bail!("Pod {} has no container {} (containers: {})", pod, container, state.containers().join(", "));
        }
    }
    eprintln!(
        "Tailing {} [{}]: p pause/resume, r resume, f refresh, c <name> container, d download, D download all, q quit",
        pod,
        state.selected_container().unwrap_or("-")
    );

    let mut interval = tokio::time::interval(LOG_REFRESH_INTERVAL);
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if state.should_poll() {
                    refresh(client, namespace, &mut state, false, out).await?;
                }
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    debug!("Command input closed");
                    input_open = false;
                    continue;
                };
                let Some(command) = parse_command(&line) else {
                    eprintln!("Unknown command: {}", line.trim());
                    continue;
                };
                match command {
                    TailCommand::Quit => break,
                    TailCommand::TogglePause => {
                        if !state.toggle_pause() {
                            eprintln!("Pause is unavailable while logs fail to load");
                        }
                    }
                    TailCommand::Resume => {
                        if !state.set_paused(false) {
                            eprintln!("Resume is unavailable while logs fail to load");
                        }
                    }
                    TailCommand::Refresh => {
                        if state.can_refresh() {
                            refresh(client, namespace, &mut state, true, out).await?;
                        }
                    }
                    TailCommand::SelectContainer(name) => {
                        if !state.select_container(&name) {
                            eprintln!("Unknown container {} (containers: {})", name, state.containers().join(", "));
                        }
                    }
                    TailCommand::Download => download(client, namespace, &mut state, false, output_dir, out).await?,
                    TailCommand::DownloadAll => download(client, namespace, &mut state, true, output_dir, out).await?,
                }
                eprintln!("[{}] {}", state.selected_container().unwrap_or("-"), state.status_label(false));
            }
        }
    }
    Ok(())
}

/// Fetch the tail of the selected container and print what is new.
///
/// Poll results are dropped while paused; a `manual` refresh always applies.
async fn refresh<C: PodLogClientTrait>(
    client: &C,
    namespace: &str,
    state: &mut LogViewState,
    manual: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(container) = state.selected_container().map(str::to_string) else {
        return Ok(());
    };
    let result = fetch_logs(client, namespace, state.pod_name(), &container, Some(LOG_TAIL_LINES)).await;
    let update = if manual {
        state.apply_refresh(result)
    } else {
        state.apply_logs(result)
    };
    match update {
        Some(LogUpdate::Appended(text)) | Some(LogUpdate::Replaced(text)) => {
            write!(out, "{}", text)?;
            out.flush()?;
        }
        Some(LogUpdate::Unchanged) => {}
        None => {
            if let Some(error) = state.error() {
                warn!("Error loading logs of {}: {}", container, error);
            }
        }
    }
    Ok(())
}

async fn download<C: PodLogClientTrait>(
    client: &C,
    namespace: &str,
    state: &mut LogViewState,
    all: bool,
    output_dir: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let allowed = if all { state.can_download_all() } else { state.can_download() };
    if !allowed || !state.begin_download() {
        eprintln!("Download not available");
        return Ok(());
    }

    let pod = state.pod_name().to_string();
    let result = if all {
        let containers = state.containers().to_vec();
        download_all_step_logs(client, &containers, namespace, &pod).await
    } else {
        let container = state.selected_container().unwrap_or_default().to_string();
        download_full_pod_log(client, namespace, &pod, &container).await
    };
    let saved = match result {
        Ok(download) => save_download(&download, output_dir).await,
        Err(e) => Err(e.into()),
    };
    state.finish_download(&saved);

    match saved {
        Ok(path) => writeln!(out, "Saved {}", path.display())?,
        Err(e) => eprintln!("Download failed: {:#}", e),
    }
    Ok(())
}
