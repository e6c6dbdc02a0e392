//! Minimal CLI: metadata files → combined definitions document
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::convert;
use crate::metadata::MetadataDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert entity metadata documents into one combined definitions document
///
/// Each input is converted on its own; the per-document definition sets are
/// merged in argument order, later entities overwriting earlier ones with
/// the same name.
#[derive(Parser, Debug)]
#[command(name = "md2swagger")]
pub struct CommandLineInterface {
    /// One or more metadata files. May be literal paths or quoted glob patterns
    #[arg(value_name = "METADATA", num_args = 1.., required = true)]
    input: Vec<String>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// emit pretty JSON instead of YAML
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)?;

        let mut documents = Vec::with_capacity(source_paths.len());
        for source_path in source_paths {
            let source = std::fs::read_to_string(&source_path).with_context(|| {
                format!("failed to read metadata file {}", source_path.display())
            })?;
            let document = MetadataDocument::from_json_str(&source).with_context(|| {
                format!("failed to parse metadata file {}", source_path.display())
            })?;
            documents.push(document);
        }

        let combined = convert::merge_definitions(&documents);
        let output_document = convert::definitions_root(combined);
        let rendered = if self.json {
            serde_json::to_string_pretty(&output_document)?
        } else {
            serde_yaml::to_string(&output_document)?
        };

        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                std::fs::write(out, &rendered)
                    .with_context(|| format!("failed to write output file {}", out.display()))?;
            }
            None => {
                println!("{rendered}");
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            // Treat as a glob pattern
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
