use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

use serde_json::{Value, json};

use super::CommandError;

/// Command asking the host application to show its settings surface.
pub(crate) const OPEN_SETTINGS: &str = "open_settings";
/// Command asking the host application to open an explorer window.
pub(crate) const OPEN_EXPLORER_WINDOW: &str = "open_explorer_window";

/// Host command-invocation API. Fire-and-forget: success means the
/// request was handed over, not that the host acted on it.
pub(crate) trait CommandHost: Send + Sync {
    fn invoke(&self, command: &str, payload: Value)
    -> Result<(), CommandError>;
}

/// Payload for [`OPEN_EXPLORER_WINDOW`].
pub(crate) fn explorer_payload(path: &Path) -> Value {
    json!({ "path": path.to_string_lossy() })
}

/// Command host that forwards each invocation to a launcher process as
/// `<launcher> <command> <payload-json>`.
#[derive(Debug, Clone)]
pub(crate) struct ProcessCommandHost {
    launcher: Option<String>,
}

impl ProcessCommandHost {
    pub(crate) fn new(launcher: Option<String>) -> Self {
        let launcher = launcher.filter(|value| !value.trim().is_empty());
        Self { launcher }
    }
}

impl CommandHost for ProcessCommandHost {
    fn invoke(
        &self,
        command: &str,
        payload: Value,
    ) -> Result<(), CommandError> {
        let Some(launcher) = self.launcher.as_deref() else {
            return Err(CommandError::NotConfigured {
                command: command.to_string(),
            });
        };

        let payload = serde_json::to_string(&payload)?;
        let child = Command::new(launcher)
            .arg(command)
            .arg(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()?;

        log::debug!(
            "host command {command} handed to {launcher} (pid {})",
            child.id()
        );

        let command = command.to_string();
        thread::Builder::new()
            .name(String::from("otty-chrome-reaper"))
            .spawn(move || reap(child, &command))?;
        Ok(())
    }
}

/// Wait for a launcher process so it does not linger as a zombie.
fn reap(mut child: Child, command: &str) -> Option<ExitStatus> {
    let pid = child.id();
    match child.wait() {
        Ok(status) => {
            if !status.success() {
                log::warn!(
                    "host command {command} launcher (pid {pid}) exited with {status}"
                );
            }
            Some(status)
        },
        Err(err) => {
            log::warn!(
                "host command {command} launcher (pid {pid}) wait failed: {err}"
            );
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process::Command;
    use std::time::{Duration, Instant};

    use serde_json::json;

    use super::{
        CommandHost, OPEN_SETTINGS, ProcessCommandHost, explorer_payload, reap,
    };
    use crate::host::CommandError;

    #[test]
    fn given_no_launcher_when_invoked_then_reports_not_configured() {
        let host = ProcessCommandHost::new(None);

        let result = host.invoke(OPEN_SETTINGS, json!({}));

        assert!(matches!(
            result,
            Err(CommandError::NotConfigured { command }) if command == OPEN_SETTINGS
        ));
    }

    #[test]
    fn given_blank_launcher_when_created_then_treated_as_missing() {
        let host = ProcessCommandHost::new(Some(String::from("   ")));

        let result = host.invoke(OPEN_SETTINGS, json!({}));

        assert!(matches!(result, Err(CommandError::NotConfigured { .. })));
    }

    #[test]
    fn given_missing_launcher_binary_when_invoked_then_reports_spawn_error() {
        let host = ProcessCommandHost::new(Some(String::from(
            "otty-chrome-launcher-that-does-not-exist",
        )));

        let result = host.invoke(OPEN_SETTINGS, json!({}));

        assert!(matches!(result, Err(CommandError::Spawn(_))));
    }

    #[test]
    fn given_path_when_building_explorer_payload_then_path_is_embedded() {
        let payload = explorer_payload(&PathBuf::from("/tmp/projects"));

        assert_eq!(payload, json!({ "path": "/tmp/projects" }));
    }

    #[test]
    fn given_failing_launcher_when_reaped_then_exit_status_is_reported() {
        let child = Command::new("false").spawn().expect("spawn false");

        let status = reap(child, OPEN_SETTINGS).expect("wait for child");

        assert!(!status.success());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn given_repeated_invokes_when_launcher_exits_then_no_zombies_remain() {
        let host = ProcessCommandHost::new(Some(String::from("true")));
        for _ in 0..5 {
            host.invoke(OPEN_SETTINGS, json!({})).expect("invoke launcher");
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut zombies = zombie_children();
        while zombies > 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
            zombies = zombie_children();
        }

        assert_eq!(zombies, 0);
    }

    /// Count zombie processes whose parent is this test process.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let parent = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                std::fs::read_to_string(entry.path().join("stat")).ok()
            })
            .filter(|stat| {
                // Fields after the parenthesised command name: state, ppid.
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                let state = fields.next();
                let ppid = fields.next();
                state == Some("Z") && ppid == Some(parent.as_str())
            })
            .count()
    }
}
