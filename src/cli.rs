//! Minimal CLI: descriptor documents → schema documents
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rayon::prelude::*;

use crate::desc::TypeDesc;
use crate::error::SchemaError;
use crate::ir::SchemaNode;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build JSON schemas from type descriptor documents
#[derive(Parser, Debug)]
#[command(name = "struct-schema", version)]
pub struct CommandLineInterface {
    /// more logging (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// build and print the schema of each descriptor
    Schema(SchemaOut),
    /// build every descriptor and report which ones fail
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer selecting the descriptor inside each document (e.g. /definitions/User)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    input_settings: InputSettings,
}

struct Loaded {
    path: PathBuf,
    desc: TypeDesc,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Loaded>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        tracing::debug!(count = source_paths.len(), "resolved inputs");

        source_paths
            .into_iter()
            .map(|path| {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let desc = crate::document::descriptor_from_str(&source, self.json_pointer.as_deref())
                    .with_context(|| format!("failed to load descriptor from {}", path.display()))?;
                Ok(Loaded { path, desc })
            })
            .collect()
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => target.run(),
            Command::Check(target) => target.run(),
        }
    }
}

impl SchemaOut {
    fn run(&self) -> Result<()> {
        let inputs = self.input_settings.load()?;

        // builds share nothing → fan out
        let built = inputs
            .par_iter()
            .map(|x| build_one(x).with_context(|| format!("failed to build schema for {}", x.path.display())))
            .collect::<Result<Vec<SchemaNode>>>()?;

        let doc = if let [only] = built.as_slice() {
            serde_json::to_value(only)?
        } else {
            let keyed = inputs
                .iter()
                .map(|x| x.path.to_string_lossy().into_owned())
                .zip(built)
                .collect::<IndexMap<String, SchemaNode>>();
            serde_json::to_value(keyed)?
        };

        let schema_src = if self.compact {
            serde_json::to_string(&doc)?
        } else {
            serde_json::to_string_pretty(&doc)?
        };

        match self.out.as_ref() {
            Some(out) => {
                write_output(out, &schema_src)?;
                tracing::info!(path = %out.display(), "wrote schema");
            }
            None => println!("{schema_src}"),
        }
        Ok(())
    }
}

impl CheckArgs {
    fn run(&self) -> Result<()> {
        let inputs = self.input_settings.load()?;
        let results = inputs.par_iter().map(build_one).collect::<Vec<_>>();

        let mut failed = 0usize;
        for (x, result) in inputs.iter().zip(&results) {
            match result {
                Ok(node) => println!("{} {} ({})", "ok".green().bold(), x.path.display(), root_summary(node)),
                Err(error) => {
                    failed += 1;
                    println!("{} {}: {error}", "error".red().bold(), x.path.display());
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} descriptors failed to build", inputs.len());
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn build_one(input: &Loaded) -> Result<SchemaNode, SchemaError> {
    tracing::info!(path = %input.path.display(), kind = input.desc.category(), "building schema");
    crate::builder::build(&input.desc)
}

/// One-line shape of a built schema, e.g. `array of integer`.
fn root_summary(node: &SchemaNode) -> String {
    let Some(kind) = node.kind else {
        return "untyped".to_owned();
    };
    if node.is_leaf() {
        return kind.as_str().to_owned();
    }
    match &node.items {
        Some(items) => format!("{kind} of {}", root_summary(items)),
        None => format!("{kind}, {} properties", node.properties.len()),
    }
}

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }

        let before = out.len();
        for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
            let path = entry?;
            if path.is_file() {
                out.push(path);
            }
        }
        if out.len() == before {
            bail!("glob pattern matched no files: {pattern}");
        }
    }

    Ok(out)
}
