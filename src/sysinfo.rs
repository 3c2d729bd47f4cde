use anyhow::Result;

/// Source of the host facts the chroot identity is derived from.
///
/// The production implementation shells out to the system query tools;
/// tests substitute fixed strings.
pub trait SystemInfo {
    fn architecture(&self) -> Result<String>;
    fn codename(&self) -> Result<String>;
}

/// Queries the running system via dpkg and lsb_release.
pub struct HostInfo;

impl SystemInfo for HostInfo {
    fn architecture(&self) -> Result<String> {
        single_line(cmd_lib::run_fun!(dpkg --print-architecture)?, "architecture")
    }

    fn codename(&self) -> Result<String> {
        single_line(cmd_lib::run_fun!(lsb_release -cs)?, "release codename")
    }
}

fn single_line(raw: String, what: &str) -> Result<String> {
    let line = raw.trim_end_matches('\n').to_owned();
    if line.is_empty() || line.contains('\n') {
        return Err(anyhow::anyhow!("expected one line of {}, got {:?}", what, raw));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::single_line;

    #[test]
    fn trims_trailing_newline() {
        assert_eq!(single_line("amd64\n".to_owned(), "architecture").unwrap(), "amd64");
    }

    #[test]
    fn passes_through_bare_value() {
        assert_eq!(single_line("focal".to_owned(), "codename").unwrap(), "focal");
    }

    #[test]
    fn rejects_empty_output() {
        assert!(single_line("\n".to_owned(), "architecture").is_err());
        assert!(single_line(String::new(), "architecture").is_err());
    }

    #[test]
    fn rejects_multiline_output() {
        assert!(single_line("focal\njammy".to_owned(), "codename").is_err());
    }
}
