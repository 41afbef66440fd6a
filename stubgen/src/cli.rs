//! Command-line interface.
//!
//! Two subcommands share one convention: options are named flags, and any
//! positional argument the tool does not understand is reported with a
//! warning and otherwise ignored.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stubgen_codegen::{Generator, GeneratorConfig, TemplateSet, WireVariant};
use stubgen_corpus::{Binding, Registry};

/// Environment variable consulted when `--output-dir` is omitted.
pub const OUTPUT_DIR_ENV: &str = "STUBGEN_OUTPUT_DIR";

/// Binding generator for IDL libraries.
#[derive(Debug, Parser)]
#[command(name = "stubgen", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render C++ artifacts for an IR library
    Generate(GenerateArgs),
    /// Write the benchmark fixture corpus for one binding
    Corpus(CorpusArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// IR JSON file describing the library
    #[arg(long, value_name = "FILE")]
    pub json: PathBuf,

    /// Directory the artifacts are written to
    #[arg(long, value_name = "DIR", env = OUTPUT_DIR_ENV)]
    pub output_dir: PathBuf,

    /// Header to include instead of the library's primary header
    #[arg(long, value_name = "PATH")]
    pub primary_header: Option<String>,

    /// Completer calling convention
    #[arg(long, value_enum, default_value_t = CompleterArg::Sync)]
    pub completer: CompleterArg,

    /// Restrict output to these templates
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<TemplateArg>,

    /// Ignored positional arguments
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CorpusArgs {
    /// Target binding (hlcpp, llcpp, cpp, go, rust, dart)
    #[arg(long)]
    pub binding: Binding,

    /// Directory the fixtures are written to
    #[arg(long, value_name = "DIR", env = OUTPUT_DIR_ENV)]
    pub output_dir: PathBuf,

    /// Ignored positional arguments
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompleterArg {
    Sync,
    Async,
}

impl From<CompleterArg> for WireVariant {
    fn from(arg: CompleterArg) -> Self {
        match arg {
            CompleterArg::Sync => WireVariant::Sync,
            CompleterArg::Async => WireVariant::Async,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// `<stem>_test_base.h`
    TestBase,
    /// `<stem>_decls.h`
    Decls,
}

impl TemplateArg {
    /// Name of the template in the built-in set.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::TestBase => "TestBase",
            Self::Decls => "Declarations",
        }
    }
}

impl GenerateArgs {
    /// Generator options selected by these arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            primary_header: self.primary_header.clone(),
            wire: self.completer.into(),
            templates: self
                .only
                .iter()
                .map(|t| t.template_name().to_string())
                .collect(),
        }
    }
}

fn warn_extra(extra: &[String]) {
    for arg in extra {
        tracing::warn!("Ignoring unrecognized argument '{}'", arg);
    }
}

/// Runs a parsed command line.
///
/// # Returns
/// Paths of every file written.
///
/// # Errors
/// Returns the first loading, validation, rendering, or IO failure.
pub fn run(cli: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Corpus(args) => corpus(args),
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<PathBuf>> {
    warn_extra(&args.extra);

    let library = stubgen_schema::load_library(&args.json)
        .with_context(|| format!("failed to load {}", args.json.display()))?;
    stubgen_schema::validate_library(&library)
        .with_context(|| format!("invalid library '{}'", library.name))?;

    let templates = TemplateSet::builtin();
    let generator = Generator::new(&library, &templates, args.generator_config());
    tracing::info!(
        "Generating '{}' ({} declarations) into {}",
        library.name,
        library.declarations.len(),
        args.output_dir.display()
    );
    let written = generator.write_all(&args.output_dir)?;
    Ok(written)
}

fn corpus(args: &CorpusArgs) -> anyhow::Result<Vec<PathBuf>> {
    warn_extra(&args.extra);

    let registry = Registry::builtin();
    tracing::info!(
        "Generating {} corpus into {}",
        args.binding,
        args.output_dir.display()
    );
    let written = registry.write(args.binding, Path::new(&args.output_dir))?;
    Ok(written)
}
