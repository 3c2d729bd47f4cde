use std::path::{Path, PathBuf};

pub const CHROOT_PREFIX: &str = "dirtbike";

/// Filesystem roots the schroot machinery works under. Injectable so the
/// identifier and config logic can run against a scratch directory.
pub struct SchrootLayout {
    pub config_root: PathBuf,
    pub chroots_root: PathBuf,
}

impl Default for SchrootLayout {
    fn default() -> Self {
        Self {
            config_root: PathBuf::from("/etc/schroot/chroot.d"),
            chroots_root: PathBuf::from("/var/lib/schroot/chroots"),
        }
    }
}

/// Identity of one chroot: its schroot name and where it lives on disk.
pub struct ChrootInfo {
    name: String,
    directory: PathBuf,
    config_path: PathBuf,
}

impl ChrootInfo {
    /// Derive the chroot identity for a (codename, architecture) pair.
    /// Pure computation, one identity per pair.
    pub fn compute(layout: &SchrootLayout, codename: &str, arch: &str) -> Self {
        let name = format!("{}-{}-{}", CHROOT_PREFIX, codename, arch);
        Self {
            directory: layout.chroots_root.join(&name),
            config_path: layout.config_root.join(&name),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base filesystem directory, the one debootstrap populates.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Context selector for the unmerged source view of this chroot.
    pub fn source_context(&self) -> String {
        format!("source:{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChrootInfo, SchrootLayout};
    use std::path::Path;

    #[test]
    fn identity_for_focal_amd64() {
        let info = ChrootInfo::compute(&SchrootLayout::default(), "focal", "amd64");
        assert_eq!(info.name(), "dirtbike-focal-amd64");
        assert_eq!(
            info.directory(),
            Path::new("/var/lib/schroot/chroots/dirtbike-focal-amd64")
        );
        assert_eq!(
            info.config_path(),
            Path::new("/etc/schroot/chroot.d/dirtbike-focal-amd64")
        );
    }

    #[test]
    fn source_context_selector() {
        let info = ChrootInfo::compute(&SchrootLayout::default(), "focal", "amd64");
        assert_eq!(info.source_context(), "source:dirtbike-focal-amd64");
    }
}
