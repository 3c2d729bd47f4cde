use structopt::StructOpt;

use mkschroot::bootstrap::Debootstrap;
use mkschroot::chrootinfo::SchrootLayout;
use mkschroot::provision::provision;
use mkschroot::schroot::SchrootTool;
use mkschroot::sysinfo::HostInfo;

/// Create the dirtbike package-build schroot for the host system.
///
/// The chroot identity is derived from the host's dpkg architecture and
/// release codename; the command takes no operands. Runs for the same
/// identity must not overlap.
#[derive(StructOpt, Debug)]
#[structopt(name = "mkschroot")]
struct Opt {}

fn main() {
    simple_logger::SimpleLogger::default()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();
    Opt::from_args();

    let layout = SchrootLayout::default();
    match provision(&layout, &HostInfo, &Debootstrap, &SchrootTool) {
        Ok(info) => log::info!("schroot {} is ready at {:?}", info.name(), info.directory()),
        Err(err) => {
            log::error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
