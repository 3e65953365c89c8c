//! State of a polling pod log viewer

use tracing::debug;

/// What changed after applying a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogUpdate {
    /// Same content as before
    Unchanged,

    /// New lines at the end of the previous content
    Appended(String),

    /// Content that does not continue the previous one
    Replaced(String),
}

/// Log viewer state for one pod.
///
/// Errors are kept per source (pod lookup, log fetch, download) and the
/// first one present wins for display.
#[derive(Debug, Clone, Default)]
pub struct LogViewState {
    pod_name: String,
    containers: Vec<String>,
    selected_container: Option<String>,
    paused: bool,
    logs: String,
    logs_loaded: bool,
    pod_loaded: bool,
    pod_error: Option<String>,
    logs_error: Option<String>,
    download_error: Option<String>,
    downloading: bool,
}

impl LogViewState {
    pub fn new(pod_name: impl Into<String>) -> Self {
        Self {
            pod_name: pod_name.into(),
            ..Default::default()
        }
    }

    pub fn pod_name(&self) -> &str {
        &self.pod_name
    }

    pub fn containers(&self) -> &[String] {
        &self.containers
    }

    pub fn selected_container(&self) -> Option<&str> {
        self.selected_container.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_downloading(&self) -> bool {
        self.downloading
    }

    pub fn logs(&self) -> &str {
        &self.logs
    }

    /// Record the pod's containers and select the default one
    pub fn set_pod_containers(&mut self, containers: Vec<String>) {
        self.selected_container = super::default_container(&containers).map(str::to_string);
        self.containers = containers;
        self.pod_loaded = true;
        self.pod_error = None;
    }

    pub fn set_pod_error(&mut self, error: impl ToString) {
        self.pod_loaded = true;
        self.pod_error = Some(error.to_string());
    }

    /// Switch to another container. Unknown names are ignored.
    pub fn select_container(&mut self, name: &str) -> bool {
        if !self.containers.iter().any(|c| c == name) {
            return false;
        }
        if self.selected_container.as_deref() != Some(name) {
            debug!("Selecting container {} of {}", name, self.pod_name);
            self.selected_container = Some(name.to_string());
            self.logs.clear();
            self.logs_loaded = false;
            self.logs_error = None;
        }
        true
    }

    /// Whether the next refresh should fetch logs
    pub fn should_poll(&self) -> bool {
        !self.paused && self.pod_error.is_none() && self.selected_container.is_some()
    }

    /// Whether a user-triggered refresh can run
    pub fn can_refresh(&self) -> bool {
        self.pod_error.is_none() && self.selected_container.is_some()
    }

    /// Apply a poll result. Ignored while paused.
    pub fn apply_logs<E: ToString>(&mut self, result: Result<String, E>) -> Option<LogUpdate> {
        if self.paused {
            return None;
        }
        self.store_logs(result)
    }

    /// Apply the result of a user-triggered refresh, paused or not
    pub fn apply_refresh<E: ToString>(&mut self, result: Result<String, E>) -> Option<LogUpdate> {
        self.store_logs(result)
    }

    fn store_logs<E: ToString>(&mut self, result: Result<String, E>) -> Option<LogUpdate> {
        match result {
            Ok(logs) => {
                self.logs_error = None;
                let update = diff_logs(&self.logs, &logs);
                self.logs = logs;
                self.logs_loaded = true;
                Some(update)
            }
            Err(e) => {
                self.logs_error = Some(e.to_string());
                self.logs_loaded = true;
                None
            }
        }
    }

    /// Flip the pause flag. The control is disabled while an error is shown.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused)
    }

    /// Returns false, leaving the flag alone, while an error is shown
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.error().is_some() {
            return false;
        }
        self.paused = paused;
        true
    }

    /// Scrolling away from the bottom pauses, scrolling back resumes.
    /// Programmatic scrolls leave the state alone.
    pub fn on_scroll(&mut self, offset_to_bottom: u64, update_was_requested: bool) {
        if !update_was_requested {
            self.paused = offset_to_bottom > 0;
        }
    }

    pub fn on_search_focus(&mut self) {
        self.paused = true;
    }

    pub fn can_download(&self) -> bool {
        self.selected_container.is_some() && !self.pod_name.is_empty() && !self.downloading
    }

    pub fn can_download_all(&self) -> bool {
        !self.containers.is_empty() && !self.pod_name.is_empty() && !self.downloading
    }

    /// Mark a download as started, clearing the previous download error.
    /// Returns false if one is already running.
    pub fn begin_download(&mut self) -> bool {
        if self.downloading {
            return false;
        }
        self.download_error = None;
        self.downloading = true;
        true
    }

    pub fn finish_download<T, E: ToString>(&mut self, result: &Result<T, E>) {
        self.downloading = false;
        if let Err(e) = result {
            self.download_error = Some(e.to_string());
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.pod_error
            .as_deref()
            .or(self.logs_error.as_deref())
            .or(self.download_error.as_deref())
    }

    pub fn loaded(&self) -> bool {
        self.pod_loaded && self.logs_loaded
    }

    /// Text shown in the log pane
    pub fn display_data(&self) -> &str {
        if self.error().is_some() {
            ""
        } else if !self.logs_loaded {
            "Loading..."
        } else if !self.logs.is_empty() {
            &self.logs
        } else {
            "No content"
        }
    }

    /// Label of the pause control
    pub fn status_label(&self, compact: bool) -> &'static str {
        if self.error().is_some() {
            "Error loading logs"
        } else if !self.logs_loaded {
            if compact { "Loading" } else { "Loading log" }
        } else if self.paused {
            if compact { "Resume" } else { "Resume refreshing" }
        } else if compact {
            "Pause"
        } else {
            "Pause refreshing"
        }
    }
}

/// Compare two tail windows line by line.
///
/// The new window continues the old one when a suffix of the old lines is a
/// prefix of the new lines.
fn diff_logs(old: &str, new: &str) -> LogUpdate {
    if old == new {
        return LogUpdate::Unchanged;
    }
    if old.is_empty() {
        return LogUpdate::Replaced(new.to_string());
    }
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    for overlap in (1..=old_lines.len().min(new_lines.len())).rev() {
        if old_lines[old_lines.len() - overlap..] == new_lines[..overlap] {
            let mut appended = new_lines[overlap..].join("\n");
            if appended.is_empty() {
                return LogUpdate::Unchanged;
            }
            appended.push('\n');
            return LogUpdate::Appended(appended);
        }
    }
    LogUpdate::Replaced(new.to_string())
}
