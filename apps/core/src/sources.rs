use std::path::PathBuf;

/// One root location fed to the crawler, with its depth limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSource {
    pub label: &'static str,
    pub root: PathBuf,
    pub depth: usize,
}

impl IndexSource {
    pub fn new(label: &'static str, root: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            label,
            root: root.into(),
            depth,
        }
    }
}

const PATH_ENTRY_DEPTH: usize = 1;
#[cfg(target_os = "windows")]
const START_MENU_DEPTH: usize = 3;
#[cfg(target_os = "windows")]
const PROGRAM_FILES_DEPTH: usize = 4;
#[cfg(target_os = "windows")]
const LOCAL_PROGRAMS_DEPTH: usize = 3;
#[cfg(target_os = "windows")]
const ROAMING_APP_DATA_DEPTH: usize = 2;
#[cfg(target_os = "windows")]
const GAME_ROOT_DEPTH: usize = 3;
#[cfg(target_os = "windows")]
const STEAM_START_MENU_DEPTH: usize = 2;

/// Depth used for roots the user adds through the config file.
pub const EXTRA_ROOT_DEPTH: usize = 3;

#[cfg(target_os = "windows")]
const STEAM_LIBRARY_ROOTS: [&str; 4] = [
    "C:\\Program Files (x86)\\Steam\\steamapps\\common",
    "C:\\Program Files\\Steam\\steamapps\\common",
    "D:\\SteamLibrary\\steamapps\\common",
    "E:\\SteamLibrary\\steamapps\\common",
];

#[cfg(target_os = "windows")]
const LAUNCHER_ROOTS: [&str; 6] = [
    "C:\\Program Files\\Epic Games",
    "C:\\Program Files (x86)\\GOG Galaxy\\Games",
    "C:\\GOG Games",
    "C:\\Program Files (x86)\\Origin Games",
    "C:\\Program Files (x86)\\Ubisoft\\Ubisoft Game Launcher\\games",
    "C:\\Program Files (x86)\\Battle.net",
];

/// The fixed, ordered enumerator list: start menus, PATH entries, program
/// directories, then well-known game-launcher roots. A special folder whose
/// environment variable is unset contributes nothing.
pub fn default_sources() -> Vec<IndexSource> {
    let mut sources = Vec::new();
    start_menu_sources(&mut sources);
    path_sources(&mut sources);
    program_dir_sources(&mut sources);
    game_dir_sources(&mut sources);
    sources
}

#[cfg_attr(not(target_os = "windows"), allow(unused_variables))]
fn start_menu_sources(out: &mut Vec<IndexSource>) {
    #[cfg(target_os = "windows")]
    {
        if let Some(common) = env_dir("ProgramData") {
            out.push(IndexSource::new(
                "start-menu-common",
                common.join("Microsoft\\Windows\\Start Menu\\Programs"),
                START_MENU_DEPTH,
            ));
        }
        if let Some(roaming) = env_dir("APPDATA") {
            out.push(IndexSource::new(
                "start-menu-user",
                roaming.join("Microsoft\\Windows\\Start Menu\\Programs"),
                START_MENU_DEPTH,
            ));
        }
    }
}

fn path_sources(out: &mut Vec<IndexSource>) {
    let Some(path_var) = std::env::var_os("PATH") else {
        return;
    };

    for dir in std::env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        out.push(IndexSource::new("path", dir, PATH_ENTRY_DEPTH));
    }
}

#[cfg_attr(not(target_os = "windows"), allow(unused_variables))]
fn program_dir_sources(out: &mut Vec<IndexSource>) {
    #[cfg(target_os = "windows")]
    {
        if let Some(program_files) = env_dir("ProgramFiles") {
            out.push(IndexSource::new(
                "program-files",
                program_files,
                PROGRAM_FILES_DEPTH,
            ));
        }
        if let Some(program_files_x86) = env_dir("ProgramFiles(x86)") {
            out.push(IndexSource::new(
                "program-files-x86",
                program_files_x86,
                PROGRAM_FILES_DEPTH,
            ));
        }
        if let Some(local) = env_dir("LOCALAPPDATA") {
            out.push(IndexSource::new(
                "local-programs",
                local.join("Programs"),
                LOCAL_PROGRAMS_DEPTH,
            ));
        }
        if let Some(roaming) = env_dir("APPDATA") {
            out.push(IndexSource::new(
                "roaming-app-data",
                roaming,
                ROAMING_APP_DATA_DEPTH,
            ));
        }
    }
}

#[cfg_attr(not(target_os = "windows"), allow(unused_variables))]
fn game_dir_sources(out: &mut Vec<IndexSource>) {
    #[cfg(target_os = "windows")]
    {
        for root in STEAM_LIBRARY_ROOTS {
            out.push(IndexSource::new("steam-library", root, GAME_ROOT_DEPTH));
        }
        if let Some(roaming) = env_dir("APPDATA") {
            out.push(IndexSource::new(
                "steam-start-menu",
                roaming.join("Microsoft\\Windows\\Start Menu\\Programs\\Steam"),
                STEAM_START_MENU_DEPTH,
            ));
        }
        for root in LAUNCHER_ROOTS {
            out.push(IndexSource::new("game-launcher", root, GAME_ROOT_DEPTH));
        }
        if let Some(program_files) = env_dir("ProgramFiles") {
            out.push(IndexSource::new(
                "windows-apps",
                program_files.join("WindowsApps"),
                GAME_ROOT_DEPTH,
            ));
        }
        out.push(IndexSource::new(
            "riot-games",
            "C:\\Riot Games",
            GAME_ROOT_DEPTH,
        ));
    }
}

#[cfg(target_os = "windows")]
fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
