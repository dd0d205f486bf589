use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{self, Config, ConfigError};
use crate::index::IndexService;
use crate::logging;
use crate::sources::{self, IndexSource};
use crate::transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Read JSON requests line-by-line on stdin, answer on stdout. The
    /// presentation shell is the only expected client.
    Serve,
    /// Build the index synchronously and print matches for one query.
    Query(String),
    /// Build the index, report the entry count, exit.
    RebuildOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: RunMode,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Io(std::io::Error),
    IndexBuild(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::IndexBuild(error) => write!(f, "index build error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub fn parse_cli_args(args: &[String]) -> Result<RunOptions, String> {
    let mut mode = RunMode::Serve;
    let mut config_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--serve" => mode = RunMode::Serve,
            "--rebuild-only" => mode = RunMode::RebuildOnly,
            "--query" => {
                let text = iter
                    .next()
                    .ok_or_else(|| "--query requires a value".to_string())?;
                mode = RunMode::Query(text.clone());
            }
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(RunOptions { mode, config_path })
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[quickbar-core] logging unavailable: {error}");
    }

    let config = config::load(options.config_path.clone())?;
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[quickbar-core] wrote default config to {}",
            config.config_path.display()
        );
    }

    println!(
        "[quickbar-core] startup mode={} hotkey={} config_path={}",
        mode_label(&options.mode),
        config.hotkey,
        config.config_path.display(),
    );

    let service = Arc::new(IndexService::new(runtime_sources(&config)));
    let build = service.spawn_rebuild();

    match &options.mode {
        RunMode::RebuildOnly => {
            join_build(build)?;
            println!(
                "[quickbar-core] index ready entries={}",
                service.entry_count()
            );
        }
        RunMode::Query(query) => {
            join_build(build)?;
            for entry in service.search(query, config.max_results) {
                println!("{}\t{}", entry.name, entry.path);
            }
        }
        RunMode::Serve => {
            serve_stdin(&service, &config)?;
            join_build(build)?;
        }
    }

    Ok(())
}

fn runtime_sources(config: &Config) -> Vec<IndexSource> {
    let mut list = sources::default_sources();
    for root in &config.extra_roots {
        list.push(IndexSource::new(
            "extra",
            root.clone(),
            sources::EXTRA_ROOT_DEPTH,
        ));
    }
    list
}

fn join_build(build: std::thread::JoinHandle<()>) -> Result<(), RuntimeError> {
    build
        .join()
        .map_err(|_| RuntimeError::IndexBuild("index build thread panicked".to_string()))
}

/// Answers one JSON request per input line until stdin closes. Queries that
/// arrive before the background build completes get empty result sets.
fn serve_stdin(service: &IndexService, config: &Config) -> Result<(), RuntimeError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = transport::handle_json(service, config, &line);
        writeln!(out, "{response}")?;
        out.flush()?;
    }

    Ok(())
}

fn mode_label(mode: &RunMode) -> &'static str {
    match mode {
        RunMode::Serve => "serve",
        RunMode::Query(_) => "query",
        RunMode::RebuildOnly => "rebuild-only",
    }
}
