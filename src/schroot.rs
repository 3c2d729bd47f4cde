use std::process::Command;

use anyhow::Result;

use crate::chrootinfo::ChrootInfo;

/// Repository component enabled in the fresh chroot before the first
/// index refresh. Policy for the Ubuntu ecosystem, kept as data.
pub const EXTRA_COMPONENT: &str = "universe";

/// Runs a command as root inside a chroot context.
pub trait ChrootExec {
    fn run_as_root(&self, context: &str, command: &[&str]) -> Result<()>;
}

/// The real schroot binary.
pub struct SchrootTool;

impl ChrootExec for SchrootTool {
    fn run_as_root(&self, context: &str, command: &[&str]) -> Result<()> {
        log::info!(">schroot -u root -c {} -- {}", context, command.join(" "));
        let status = Command::new("schroot")
            .args(&["-u", "root", "-c", context, "--"])
            .args(command)
            .status()?;
        if !status.success() {
            return Err(anyhow::anyhow!(
                "{} failed in {} ({})",
                command.join(" "),
                context,
                status
            ));
        }
        Ok(())
    }
}

/// Post-setup: add the extra component to the package sources of the
/// source view.
pub fn enable_extra_component(exec: &impl ChrootExec, info: &ChrootInfo) -> Result<()> {
    exec.run_as_root(
        &info.source_context(),
        &["add-apt-repository", EXTRA_COMPONENT],
    )
}

/// Post-setup: refresh the package index inside the source view.
pub fn update_package_index(exec: &impl ChrootExec, info: &ChrootInfo) -> Result<()> {
    exec.run_as_root(&info.source_context(), &["apt-get", "update"])
}
