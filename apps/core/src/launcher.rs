use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    EmptyPath,
    MissingPath(PathBuf),
    OsRefused(String),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "empty path"),
            Self::MissingPath(path) => write!(f, "path does not exist: {}", path.display()),
            Self::OsRefused(detail) => write!(f, "os refused to open target: {detail}"),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Hands the path to the OS default-open action. Shortcuts, executables and
/// URL files all resolve through the same verb. No retry on failure.
pub fn launch_path(path: &str) -> Result<(), LaunchError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(LaunchError::EmptyPath);
    }

    #[cfg(target_os = "windows")]
    {
        shell_open(trimmed)
    }

    #[cfg(not(target_os = "windows"))]
    {
        // Off Windows the shim only validates the target so the contract
        // stays testable; there is no shell-open integration.
        let candidate = std::path::Path::new(trimmed);
        if !candidate.exists() {
            return Err(LaunchError::MissingPath(candidate.to_path_buf()));
        }
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn shell_open(target: &str) -> Result<(), LaunchError> {
    use windows_sys::Win32::UI::Shell::ShellExecuteW;
    use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

    let file = to_wide(target);
    let verb = to_wide("open");

    let instance = unsafe {
        ShellExecuteW(
            std::ptr::null_mut(),
            verb.as_ptr(),
            file.as_ptr(),
            std::ptr::null(),
            std::ptr::null(),
            SW_SHOWNORMAL,
        )
    };

    // Per the ShellExecute contract, values <= 32 are error codes.
    let code = instance as usize;
    if code <= 32 {
        return Err(LaunchError::OsRefused(format!(
            "ShellExecuteW returned {code} for {target}"
        )));
    }

    Ok(())
}

#[cfg(target_os = "windows")]
fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}
