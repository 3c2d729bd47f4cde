use anyhow::Result;

use crate::bootstrap::{self, Bootstrap};
use crate::chrootinfo::{ChrootInfo, SchrootLayout};
use crate::config;
use crate::schroot::{self, ChrootExec};
use crate::sysinfo::SystemInfo;

/// Run the whole provisioning pass: query the host, compute the chroot
/// identity, write its config, create and bootstrap the base directory,
/// then enable the extra component and refresh the index inside the
/// source view. Stops at the first failing step; nothing created before
/// the failure is rolled back.
pub fn provision(
    layout: &SchrootLayout,
    sys: &impl SystemInfo,
    strap: &impl Bootstrap,
    exec: &impl ChrootExec,
) -> Result<ChrootInfo> {
    let arch = sys.architecture()?;
    let codename = sys.codename()?;
    let info = ChrootInfo::compute(layout, &codename, &arch);
    log::info!("Provisioning schroot {}", info.name());

    config::write_config(&info)?;
    bootstrap::create_target_dir(&info)?;
    strap.bootstrap(&codename, info.directory(), &bootstrap::include_list())?;

    schroot::enable_extra_component(exec, &info)?;
    schroot::update_package_index(exec, &info)?;
    Ok(info)
}
