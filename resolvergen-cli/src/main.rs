//! Command-line entry point.
//!
//! Reads a GraphQL schema file, generates the Go resolver-interface file,
//! and runs `gofmt` over the result.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Generate Go resolver interfaces from a GraphQL schema.
#[derive(Parser, Debug)]
#[command(name = "resolvergen", version)]
struct Cli {
    /// Path to the GraphQL schema file.
    #[arg(long)]
    schema: PathBuf,

    /// Output path for the generated resolver file.
    #[arg(short, long)]
    out: PathBuf,

    /// Go package name; derived from the output directory when omitted.
    #[arg(long)]
    package: Option<String>,

    /// Skip the gofmt pass on the generated file.
    #[arg(long)]
    no_fmt: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let package = match &cli.package {
        Some(package) => package.clone(),
        None => package_name(&cli.out)?,
    };

    let source_name = cli.schema.display().to_string();
    let sdl = fs::read_to_string(&cli.schema)
        .with_context(|| format!("can't open schema '{}'", cli.schema.display()))?;

    let generated = resolvergen::codegen::generate_from_sdl(&sdl, &source_name, &package)
        .context("generation failed")?;

    fs::write(&cli.out, generated)
        .with_context(|| format!("can't write to file '{}'", cli.out.display()))?;
    tracing::info!("generated {} (package {})", cli.out.display(), package);

    if !cli.no_fmt {
        gofmt(&cli.out)?;
    }
    Ok(())
}

/// Derives the Go package name from the output file's directory.
fn package_name(out: &Path) -> Result<String> {
    let dir = out
        .canonicalize()
        .unwrap_or_else(|_| out.to_path_buf())
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned());

    match dir {
        Some(name) if !name.is_empty() => Ok(name),
        _ => bail!(
            "can't derive a package name from '{}'; pass --package",
            out.display()
        ),
    }
}

/// Rewrites the generated file in place with gofmt. A failing format pass
/// fails the whole command.
fn gofmt(path: &Path) -> Result<()> {
    let output = Command::new("gofmt")
        .arg("-w")
        .arg(path)
        .output()
        .context("can't invoke gofmt")?;

    if !output.status.success() {
        bail!(
            "gofmt failed on '{}': {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_package_name_from_parent_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("app").join("schema.gql.go");
        fs::create_dir_all(out.parent().unwrap()).unwrap();

        assert_eq!(package_name(&out).unwrap(), "app");
    }

    #[test]
    fn test_run_writes_generated_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let schema_path = dir.path().join("schema.gql");
        let mut schema_file = fs::File::create(&schema_path).unwrap();
        schema_file
            .write_all(b"type Query {\n    name: String!\n}\n")
            .unwrap();

        let out = dir.path().join("schema.gql.go");
        let cli = Cli {
            schema: schema_path,
            out: out.clone(),
            package: Some("app".to_string()),
            no_fmt: true,
        };
        run(&cli).expect("run failed");

        let generated = fs::read_to_string(&out).unwrap();
        assert!(generated.starts_with("// Code generated by resolvergen. DO NOT EDIT.\n"));
        assert!(generated.contains("package app\n"));
        assert!(generated.contains("\tName() string\n"));
    }

    #[test]
    fn test_run_fails_on_missing_schema() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cli = Cli {
            schema: dir.path().join("missing.gql"),
            out: dir.path().join("out.go"),
            package: Some("app".to_string()),
            no_fmt: true,
        };
        assert!(run(&cli).is_err());
    }
}
