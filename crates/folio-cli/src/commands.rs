//! Command execution.
//!
//! [`CliContext`] resolves configuration, settings, and the content root
//! once; each command then runs against it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_core::{Error as CoreError, Language};
use folio_loader::{
    validate_content, ContentLoader, FsSource, ProjectQuery, SiteContent, ValidationReport,
};
use serde::Serialize;

use crate::cli::{Cli, Command, SettingsAction};
use crate::config::FolioConfig;
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Everything a command needs, resolved from flags, config, and settings.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Explicit config path from the command line, if any
    pub config_path: Option<PathBuf>,
    /// Loaded configuration
    pub config: FolioConfig,
    /// Where settings are read from and saved to
    pub settings_path: Option<PathBuf>,
    /// Loaded settings
    pub settings: Settings,
    /// Content root directory
    pub content_dir: PathBuf,
    /// Language for data commands
    pub language: Language,
}

impl CliContext {
    /// Resolve the context for a parsed command line.
    ///
    /// Language precedence: `--lang`, then saved settings, then the
    /// configured default.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone();
        let config = FolioConfig::load(config_path.as_deref())?;

        let settings_path = FolioConfig::resolve_config_path(config_path.as_deref())
            .map(|path| FolioConfig::settings_path(&path));
        let settings = match &settings_path {
            Some(path) => Settings::load(path, config.default_language)?,
            None => Settings::detect(config.default_language),
        };

        let content_dir = config.content_dir(cli.content_dir.as_deref());
        let language = cli.lang.unwrap_or(settings.language);
        log::debug!(
            "Content root {} (language '{language}')",
            content_dir.display()
        );

        Ok(Self {
            config_path,
            config,
            settings_path,
            settings,
            content_dir,
            language,
        })
    }

    /// Open a loader over the content root.
    pub async fn loader(&self) -> Result<ContentLoader> {
        let source = Arc::new(FsSource::new(&self.content_dir));
        Ok(ContentLoader::open(source, self.config.registry()).await?)
    }
}

/// Run a parsed command line, writing output to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::resolve(&cli)?;
    let mut out = std::io::stdout().lock();
    execute(&ctx, cli.command, &mut out).await
}

/// Run one command against a resolved context.
pub async fn execute<W: Write>(ctx: &CliContext, command: Command, out: &mut W) -> Result<()> {
    let lang = ctx.language;
    match command {
        Command::Profile => print_json(out, &ctx.loader().await?.load_profile(lang).await?),
        Command::Experience => print_json(out, &ctx.loader().await?.load_experience(lang).await?),
        Command::Skills => print_json(out, &ctx.loader().await?.load_skills(lang).await?),
        Command::Education => print_json(out, &ctx.loader().await?.load_education(lang).await?),
        Command::Certifications => {
            print_json(out, &ctx.loader().await?.load_certifications(lang).await?)
        }
        Command::Interests => print_json(out, &ctx.loader().await?.load_interests(lang).await?),
        Command::Projects {
            featured,
            category,
            limit,
        } => {
            let query = ProjectQuery {
                language: lang,
                featured_only: featured,
                category,
                limit,
            };
            print_json(out, &ctx.loader().await?.load_projects(&query).await?)
        }
        Command::Project { slug } => cmd_project(ctx, &slug, out).await,
        Command::Site => {
            let loader = ctx.loader().await?;
            print_json(out, &SiteContent::load(&loader, lang).await?)
        }
        Command::Validate => cmd_validate(ctx, out).await,
        Command::Config { action } => {
            Ok(handle_config_command(ctx.config_path.as_deref(), action)?)
        }
        Command::Settings { action } => cmd_settings(ctx, action, out),
    }
}

async fn cmd_project<W: Write>(ctx: &CliContext, slug: &str, out: &mut W) -> Result<()> {
    let loader = ctx.loader().await?;
    match loader.load_project_by_slug(slug, ctx.language).await {
        Ok(project) => print_json(out, &project),
        Err(e) => {
            if e.is_not_found() {
                let suggestions = loader.suggest_slugs(slug, ctx.language);
                if !suggestions.is_empty() {
                    eprintln!("Did you mean: {}?", suggestions.join(", "));
                }
            }
            Err(e.into())
        }
    }
}

async fn cmd_validate<W: Write>(ctx: &CliContext, out: &mut W) -> Result<()> {
    let source = FsSource::new(&ctx.content_dir);
    let report = validate_content(&source, &ctx.config.registry()).await?;
    write_report(out, &report)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            invalid: report.invalid(),
            total: report.total(),
        })
    }
}

/// Write a validation report as PASS/FAIL/WARN lines and a summary.
pub fn write_report<W: Write>(out: &mut W, report: &ValidationReport) -> Result<()> {
    let io = |e| CoreError::io_with_path(e, "<stdout>");

    writeln!(out, "Validating JSON files:").map_err(io)?;
    for check in &report.json {
        writeln!(out, "  {check}").map_err(io)?;
    }

    writeln!(out, "\nValidating project Markdown files:").map_err(io)?;
    for check in &report.projects {
        writeln!(out, "  {check}").map_err(io)?;
    }
    for warning in &report.warnings {
        writeln!(out, "  [WARN] {warning}").map_err(io)?;
    }

    writeln!(out, "\n{}", "=".repeat(50)).map_err(io)?;
    writeln!(out, "Total files checked: {}", report.total()).map_err(io)?;
    writeln!(out, "Valid: {}", report.valid()).map_err(io)?;
    writeln!(out, "Invalid: {}", report.invalid()).map_err(io)?;
    Ok(())
}

fn cmd_settings<W: Write>(ctx: &CliContext, action: SettingsAction, out: &mut W) -> Result<()> {
    let mut settings = ctx.settings;
    match action {
        SettingsAction::Show => return print_json(out, &settings),
        SettingsAction::SetLanguage { language } => settings.language = language,
        SettingsAction::SetTheme { theme } => settings.theme = theme,
    }

    let path = ctx
        .settings_path
        .as_deref()
        .ok_or_else(|| CoreError::config("Could not determine settings location"))?;
    settings.save(path)?;
    print_json(out, &settings)
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(|e| CoreError::io_with_path(e, Path::new("<stdout>")))?;
    Ok(())
}
