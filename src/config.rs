use std::fs;

use anyhow::Result;

use crate::chrootinfo::ChrootInfo;

/// Render the schroot configuration block for one chroot. The directory
/// line must name the same path the bootstrap step populates.
pub fn make_config_file(info: &ChrootInfo) -> String {
    format!(
        r#"[{name}]
description={name}
groups=sbuild,root
root-groups=sbuild,root
type=directory
profile=default
union-type=overlayfs
directory={directory}
source-root-users=root,sbuild,admin
source-root-groups=root,sbuild,admin
preserve-environment=false
"#,
        name = info.name(),
        directory = info.directory().display(),
    )
}

/// Create-or-truncate the per-chroot config file. A pre-existing entry for
/// the same identifier is replaced.
pub fn write_config(info: &ChrootInfo) -> Result<()> {
    log::info!("Writing schroot config {:?}", info.config_path());
    fs::write(info.config_path(), make_config_file(info))?;
    Ok(())
}
