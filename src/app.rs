//! Command-line front end.
//!
//! Each subcommand is one operation against a workspace or project file.
//! Failures are logged and turned into a non-zero exit code.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::BufReader;

use crate::compose::DocumentTemplate;
use crate::config::{Command, Config};
use crate::core::{BufferStore, Playground};
use crate::error::PlaygroundError;
use crate::preview::{HostPageSink, PreviewSink, RawFileSink, WriterSink};
use crate::project::{self, Outcome, PresetGateway, PromptGateway};
use crate::watch::{self, SourceWatcher};
use crate::workspace::Workspace;

/// Build the configuration, set up logging and run the requested command
pub async fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    if let Some(path) = &config.config_path {
        log::debug!("Using settings from {}", path.display());
    }
    execute(&config).await
}

/// Initialise `env_logger` with a default filter; `RUST_LOG` still wins
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Run a parsed command
pub async fn execute(config: &Config) -> Result<ExitCode> {
    let template = DocumentTemplate::new(config.runtime_url.clone());

    match &config.command {
        Command::Init { dir } => {
            let created = Workspace::new(dir)
                .init()
                .await
                .with_context(|| format!("Failed to initialise {}", dir.display()))?;
            if created.is_empty() {
                log::info!("{} already has all source files", dir.display());
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Render {
            source,
            output,
            raw,
            stdout,
        } => {
            let store = match read_source(source).await {
                Ok(store) => store,
                Err(e) => return Ok(report(e)),
            };

            let sink: Box<dyn PreviewSink> = if *stdout {
                Box::new(WriterSink::new(std::io::stdout()))
            } else {
                let path = output.as_deref().unwrap_or(config.preview_file.as_path());
                log::info!("Rendering preview to {}", path.display());
                file_sink(path, *raw || !config.isolate)
            };

            Playground::with_store(store, template, sink).refresh();
            Ok(ExitCode::SUCCESS)
        }

        Command::Show { source, tab } => {
            let mut store = match read_source(source).await {
                Ok(store) => store,
                Err(e) => return Ok(report(e)),
            };
            store.set_active(*tab);
            println!("{}", store.active_text());
            Ok(ExitCode::SUCCESS)
        }

        Command::Save { dir, to } => {
            let workspace = Workspace::new(dir);
            let mut store = BufferStore::new();
            if let Err(e) = workspace.read_into(&mut store).await {
                return Ok(report(e));
            }

            let outcome = match to {
                Some(path) => project::save_project(&store, &mut PresetGateway::saving_to(path)).await,
                None => project::save_project(&store, &mut stdio_gateway()).await,
            };
            Ok(exit_code(&outcome))
        }

        Command::Load { dir, from } => {
            let sink = file_sink(&config.preview_file, !config.isolate);
            let mut playground = Playground::new(template, sink);

            let outcome = match from {
                Some(path) => {
                    project::load_project(&mut playground, &mut PresetGateway::opening(path)).await
                }
                None => project::load_project(&mut playground, &mut stdio_gateway()).await,
            };

            if outcome.is_completed() {
                let workspace = Workspace::new(dir);
                if let Err(e) = workspace.write_from(playground.store()).await {
                    return Ok(report(e));
                }
                log::info!("Workspace {} updated", dir.display());
            }
            Ok(exit_code(&outcome))
        }

        Command::Watch { dir, output, raw } => {
            let workspace = Workspace::new(dir);
            let mut store = BufferStore::new();
            if let Err(e) = workspace.read_into(&mut store).await {
                log::error!("Run `twp init {}` to create the source files", dir.display());
                return Ok(report(e));
            }

            let path = output.as_deref().unwrap_or(config.preview_file.as_path());
            let sink = file_sink(path, *raw || !config.isolate);
            let mut playground = Playground::with_store(store, template, sink);
            playground.refresh();
            log::info!("Preview at {}, press Ctrl-C to stop", path.display());

            let mut watcher = SourceWatcher::start(&workspace)?;
            watch::run(&mut playground, &workspace, watcher.events(), async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("Failed to listen for Ctrl-C: {}", e);
                }
            })
            .await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load buffers from a workspace directory or a project file
pub async fn read_source(source: &Path) -> std::result::Result<BufferStore, PlaygroundError> {
    let mut store = BufferStore::new();

    if source.is_dir() {
        Workspace::new(source).read_into(&mut store).await?;
    } else {
        let text = tokio::fs::read_to_string(source)
            .await
            .map_err(|e| PlaygroundError::io(source, e))?;
        let (markup, stylesheet, framework_config) = project::decode(&text)?.into_parts();
        store.replace_all(markup, stylesheet, framework_config);
    }

    Ok(store)
}

fn file_sink(path: &Path, raw: bool) -> Box<dyn PreviewSink> {
    if raw {
        Box::new(RawFileSink::new(path))
    } else {
        Box::new(HostPageSink::new(path))
    }
}

fn stdio_gateway() -> PromptGateway<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    PromptGateway::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

fn report(error: PlaygroundError) -> ExitCode {
    log::error!("{}", error);
    ExitCode::FAILURE
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Completed(_) | Outcome::Cancelled => ExitCode::SUCCESS,
        Outcome::Failed(_) => ExitCode::FAILURE,
    }
}
