//! Shell-backed terminals for hosts without an integrated terminal

use crate::{
    dispatch::{Terminal, TerminalOptions, TerminalProvider},
    error::{Error, Result},
    types::WorkspaceFolder,
};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| Error::TerminalError(format!("{what} lock poisoned")))
}

/// A terminal that runs each executed line through the platform shell
///
/// Lines are spawned without waiting; the host decides whether to block on
/// them through [`ShellTerminal::wait`]. Processes that already exited are
/// reaped on every executed line, keeping only their exit status.
#[derive(Debug)]
pub struct ShellTerminal {
    name: String,
    cwd: PathBuf,
    env: Mutex<BTreeMap<String, String>>,
    pending: Mutex<String>,
    children: Mutex<Vec<Child>>,
    exited: Mutex<Vec<ExitStatus>>,
    visible: AtomicBool,
}

impl ShellTerminal {
    pub fn new(scope: &WorkspaceFolder, env: BTreeMap<String, String>) -> Self {
        Self {
            name: scope.name.clone(),
            cwd: scope.path.clone(),
            env: Mutex::new(env),
            pending: Mutex::new(String::new()),
            children: Mutex::new(Vec::new()),
            exited: Mutex::new(Vec::new()),
            visible: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn set_env(&self, env: BTreeMap<String, String>) -> Result<()> {
        *lock(&self.env, "terminal env")? = env;
        Ok(())
    }

    /// Number of spawned processes not yet reaped
    pub fn running(&self) -> Result<usize> {
        Ok(lock(&self.children, "terminal processes")?.len())
    }

    /// Drop handles of processes that have exited, keeping their status
    pub fn reap(&self) -> Result<()> {
        let mut children = lock(&self.children, "terminal processes")?;
        let mut exited = lock(&self.exited, "terminal exit statuses")?;

        let mut still_running = Vec::with_capacity(children.len());
        for mut child in children.drain(..) {
            match child.try_wait()? {
                Some(status) => {
                    debug!("Reaped pid {} in terminal {}: {}", child.id(), self.name, status);
                    exited.push(status);
                }
                None => still_running.push(child),
            }
        }
        *children = still_running;
        Ok(())
    }

    /// Wait for every spawned line, returning the first failing status
    /// or, when all succeeded, the last one
    pub fn wait(&self) -> Result<Option<ExitStatus>> {
        let mut children = lock(&self.children, "terminal processes")?;
        let mut statuses = std::mem::take(&mut *lock(&self.exited, "terminal exit statuses")?);

        for mut child in children.drain(..) {
            let status = child.wait()?;
            debug!("Terminal {} process exited with {}", self.name, status);
            statuses.push(status);
        }

        let mut result: Option<ExitStatus> = None;
        for status in statuses {
            if result.is_none_or(|previous| previous.success()) {
                result = Some(status);
            }
        }

        Ok(result)
    }
}

impl Terminal for ShellTerminal {
    fn send_text(&self, text: &str, execute: bool) -> Result<()> {
        let mut pending = lock(&self.pending, "terminal input")?;
        pending.push_str(text);
        if !execute {
            return Ok(());
        }

        let line = std::mem::take(&mut *pending);
        self.reap()?;
        let env = lock(&self.env, "terminal env")?.clone();

        let mut command = shell_command(&line);
        command.current_dir(&self.cwd);
        for (key, value) in &env {
            debug!("Setting env: {}={}", key, value);
            command.env(key, value);
        }

        let child = command.spawn().map_err(|e| {
            Error::TerminalError(format!("Failed to spawn shell for `{line}`: {e}"))
        })?;
        debug!("Spawned pid {} in terminal {}", child.id(), self.name);
        lock(&self.children, "terminal processes")?.push(child);
        Ok(())
    }

    fn show(&self, preserve_focus: bool) {
        self.visible.store(true, Ordering::SeqCst);
        info!(
            "Showing terminal {} (preserve_focus={})",
            self.name, preserve_focus
        );
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

/// Keeps one [`ShellTerminal`] per workspace directory
#[derive(Debug, Default)]
pub struct ShellTerminalProvider {
    terminals: Mutex<HashMap<PathBuf, Arc<ShellTerminal>>>,
}

impl ShellTerminalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait on every terminal handed out so far
    ///
    /// Returns the first failing exit status, or the last successful one.
    pub fn wait_all(&self) -> Result<Option<ExitStatus>> {
        let terminals: Vec<Arc<ShellTerminal>> =
            lock(&self.terminals, "terminal registry")?.values().cloned().collect();

        let mut result: Option<ExitStatus> = None;
        for terminal in terminals {
            if let Some(status) = terminal.wait()? {
                if result.is_none_or(|previous| previous.success()) {
                    result = Some(status);
                }
            }
        }
        Ok(result)
    }
}

impl TerminalProvider for ShellTerminalProvider {
    fn get(&self, options: &TerminalOptions, scope: &WorkspaceFolder) -> Result<Arc<dyn Terminal>> {
        let mut terminals = lock(&self.terminals, "terminal registry")?;

        if let Some(existing) = terminals.get(&scope.path) {
            debug!("Reusing terminal for {:?}", scope.path);
            existing.set_env(options.env.clone())?;
            return Ok(existing.clone());
        }

        debug!("Creating terminal for {:?}", scope.path);
        let terminal = Arc::new(ShellTerminal::new(scope, options.env.clone()));
        terminals.insert(scope.path.clone(), terminal.clone());
        Ok(terminal)
    }
}
