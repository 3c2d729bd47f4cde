use std::process::Command;

use anyhow::Result;

/// A live schroot session: an instantiated copy-on-write view of a
/// provisioned chroot that stays up across multiple commands.
///
/// Sessions run with a sanitized environment, so anything a command needs
/// must be passed explicitly via `run_with_env`.
pub struct Session {
    id: String,
}

impl Session {
    /// Begin a session against a configured chroot, capturing the session
    /// id schroot prints on stdout.
    pub fn begin(chroot_name: &str) -> Result<Self> {
        log::info!("Beginning schroot session for {}", chroot_name);
        let out = Command::new("schroot")
            .args(&["-b", "-c", chroot_name])
            .output()?;
        if !out.status.success() {
            return Err(anyhow::anyhow!(
                "failed to begin session for {}: {}",
                chroot_name,
                String::from_utf8_lossy(&out.stderr).trim()
            ));
        }
        let id = String::from_utf8(out.stdout)?.trim().to_owned();
        if id.is_empty() {
            return Err(anyhow::anyhow!("no session id returned for {}", chroot_name));
        }
        Ok(Self { id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn run(&self, command: &[&str]) -> Result<()> {
        self.run_with_env(command, &[])
    }

    /// Run a command as root in the session, with an explicit environment
    /// spliced in through env(1).
    pub fn run_with_env(&self, command: &[&str], env: &[(&str, &str)]) -> Result<()> {
        log::debug!("[{}] {}", self.id, command.join(" "));
        let status = Command::new("schroot")
            .args(run_args(&self.id, env, command))
            .status()?;
        if !status.success() {
            return Err(anyhow::anyhow!(
                "{} failed in session {} ({})",
                command.join(" "),
                self.id,
                status
            ));
        }
        Ok(())
    }

    /// Run a command as root in the session and capture its stdout.
    pub fn output(&self, command: &[&str]) -> Result<String> {
        log::debug!("[{}] {}", self.id, command.join(" "));
        let out = Command::new("schroot")
            .args(run_args(&self.id, &[], command))
            .output()?;
        if !out.status.success() {
            return Err(anyhow::anyhow!(
                "{} failed in session {}: {}",
                command.join(" "),
                self.id,
                String::from_utf8_lossy(&out.stderr).trim()
            ));
        }
        Ok(String::from_utf8(out.stdout)?)
    }

    /// End the session, discarding its copy-on-write layer.
    pub fn end(self) -> Result<()> {
        log::info!("Ending schroot session {}", self.id);
        let status = Command::new("schroot")
            .args(&["-e", "-c", &self.id])
            .status()?;
        if !status.success() {
            return Err(anyhow::anyhow!("failed to end session {} ({})", self.id, status));
        }
        Ok(())
    }
}

fn run_args(id: &str, env: &[(&str, &str)], command: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = ["-r", "-c", id, "-u", "root", "--"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if !env.is_empty() {
        args.push("env".to_owned());
        for (key, value) in env {
            args.push(format!("{}={}", key, value));
        }
    }
    args.extend(command.iter().map(|s| s.to_string()));
    args
}

#[cfg(test)]
mod tests {
    use super::run_args;

    #[test]
    fn run_argv_shape() {
        assert_eq!(
            run_args("dirtbike-session-1", &[], &["apt-get", "update"]),
            ["-r", "-c", "dirtbike-session-1", "-u", "root", "--", "apt-get", "update"]
        );
    }

    #[test]
    fn env_is_spliced_in_before_the_command() {
        assert_eq!(
            run_args(
                "dirtbike-session-1",
                &[("LC_ALL", "en_US.UTF-8")],
                &["gdebi", "-n", "stupid.deb"]
            ),
            [
                "-r",
                "-c",
                "dirtbike-session-1",
                "-u",
                "root",
                "--",
                "env",
                "LC_ALL=en_US.UTF-8",
                "gdebi",
                "-n",
                "stupid.deb"
            ]
        );
    }
}
