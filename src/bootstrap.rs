use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::chrootinfo::ChrootInfo;

/// Packages debootstrap preinstalls on top of the minimal base: the I/O
/// shim that speeds up package installs, the .deb installer, the
/// repository-management helper the post-setup step needs, and the
/// interpreter the built packages target.
pub const EXTRA_PACKAGES: [&str; 4] = [
    "eatmydata",
    "gdebi-core",
    "software-properties-common",
    "python3.5",
];

/// The comma-joined include set, exactly as handed to debootstrap.
pub fn include_list() -> String {
    EXTRA_PACKAGES.join(",")
}

/// Create the base directory. Idempotent: an already-existing directory
/// (or parents) is fine.
pub fn create_target_dir(info: &ChrootInfo) -> Result<()> {
    fs::create_dir_all(info.directory())?;
    Ok(())
}

/// Populates a directory with a minimal base system for a suite.
pub trait Bootstrap {
    fn bootstrap(&self, suite: &str, target: &Path, include: &str) -> Result<()>;
}

/// The real debootstrap binary. Long-running and network-bound; a failure
/// leaves a partially populated target behind for the caller to clean up.
pub struct Debootstrap;

impl Bootstrap for Debootstrap {
    fn bootstrap(&self, suite: &str, target: &Path, include: &str) -> Result<()> {
        log::info!("Bootstrapping {} into {:?}", suite, target);
        let target = target.display();
        cmd_lib::run_cmd!(debootstrap --include="$include" "$suite" "$target")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{create_target_dir, include_list};
    use crate::chrootinfo::{ChrootInfo, SchrootLayout};

    #[test]
    fn include_set_is_fixed_and_unmodified() {
        assert_eq!(
            include_list(),
            "eatmydata,gdebi-core,software-properties-common,python3.5"
        );
    }

    #[test]
    fn target_dir_creation_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = SchrootLayout {
            config_root: tmp.path().to_owned(),
            chroots_root: tmp.path().join("chroots"),
        };
        let info = ChrootInfo::compute(&layout, "focal", "amd64");
        create_target_dir(&info).unwrap();
        create_target_dir(&info).unwrap();
        assert!(info.directory().is_dir());
    }
}
