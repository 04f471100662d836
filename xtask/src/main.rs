//! Development automation for the helpdesk workspace.
//!
//! Run with: `cargo xtask <task> [args]`
//!
//! Output goes to stdout/stderr directly; this is a developer CLI, not a
//! service.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{bail, Context, Result};

mod bundle;
mod features;

/// Default output directory for generated TypeScript bindings
const BINDINGS_DIR: &str = "bindings";

/// Crate whose types are exported to TypeScript
const BINDINGS_CRATE: &str = "helpdesk-domain";

enum Task {
    Ci,
    Fmt,
    Clippy,
    Test,
    Codegen { out: Option<PathBuf> },
    Bundle { dir: Option<PathBuf> },
    Features,
    Help,
}

impl Task {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let task = match args.next().as_deref() {
            Some("ci") => Self::Ci,
            Some("fmt") => Self::Fmt,
            Some("clippy") => Self::Clippy,
            Some("test") => Self::Test,
            Some("codegen") => Self::Codegen { out: args.next().map(PathBuf::from) },
            Some("bundle-check") => Self::Bundle { dir: args.next().map(PathBuf::from) },
            Some("test-features") => Self::Features,
            Some("help") | None => Self::Help,
            Some(unknown) => bail!("unknown task '{unknown}' (see `cargo xtask help`)"),
        };
        Ok(task)
    }

    fn run(self, root: &Path) -> Result<()> {
        match self {
            Self::Ci => ci(root),
            Self::Fmt => cargo(root, &["fmt", "--all", "--", "--check"])
                .context("formatting differs; run `cargo fmt --all`"),
            Self::Clippy => cargo(
                root,
                &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
            ),
            Self::Test => cargo(root, &["test", "--workspace", "--all-features"]),
            Self::Codegen { out } => codegen(root, &out.unwrap_or_else(|| root.join(BINDINGS_DIR))),
            Self::Bundle { dir } => bundle::check(&dir.unwrap_or_else(|| root.join("dist"))),
            Self::Features => features::check_matrix(root),
            Self::Help => {
                print_help();
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    let outcome = workspace_root().and_then(|root| Task::parse(env::args().skip(1))?.run(&root));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xtask: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("cargo xtask <TASK>");
    println!();
    println!("  ci                  fmt, clippy and the workspace tests");
    println!("  fmt                 check formatting");
    println!("  clippy              lint every target with warnings denied");
    println!("  test                run the workspace tests");
    println!("  codegen [OUT]       export TypeScript bindings (default: ./{BINDINGS_DIR})");
    println!("  bundle-check [DIR]  verify a built SPA bundle before serving it (default: ./dist)");
    println!("  test-features       compile each feature combination");
    println!("  help                this message");
}

/// The workspace root is the parent of this crate's manifest directory.
fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}

/// Run `cargo` with `args` from the workspace root.
pub(crate) fn cargo(root: &Path, args: &[&str]) -> Result<()> {
    cargo_with_env(root, args, &[])
}

fn cargo_with_env(root: &Path, args: &[&str], vars: &[(&str, &Path)]) -> Result<()> {
    println!("$ cargo {}", args.join(" "));
    let mut command = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".into()));
    command.current_dir(root).args(args);
    for (key, value) in vars {
        command.env(key, value);
    }
    let status = command.status().context("failed to spawn cargo")?;
    if !status.success() {
        bail!("`cargo {}` exited with {status}", args.join(" "));
    }
    Ok(())
}

fn ci(root: &Path) -> Result<()> {
    for task in [Task::Fmt, Task::Clippy, Task::Test] {
        task.run(root)?;
    }
    println!("ci passed");
    Ok(())
}

/// Export the domain types through ts-rs and write an `index.ts` barrel.
fn codegen(root: &Path, out: &Path) -> Result<()> {
    let out = if out.is_absolute() { out.to_path_buf() } else { root.join(out) };
    fs::create_dir_all(&out).with_context(|| format!("cannot create {}", out.display()))?;

    cargo_with_env(
        root,
        &["test", "-p", BINDINGS_CRATE, "--features", "ts-gen", "--lib"],
        &[("TS_RS_EXPORT_DIR", out.as_path())],
    )?;

    let modules = ts_modules(&out)?;
    if modules.is_empty() {
        bail!("no bindings were exported to {}", out.display());
    }

    let mut index = String::from("// Generated by `cargo xtask codegen`. Do not edit.\n\n");
    for module in &modules {
        index.push_str(&format!("export type {{ {module} }} from './{module}';\n"));
    }
    fs::write(out.join("index.ts"), index).context("cannot write index.ts")?;

    println!("{} bindings written to {}", modules.len(), out.display());
    Ok(())
}

/// Sorted module names of the `.ts` files in `dir`, excluding the barrel.
fn ts_modules(dir: &Path) -> Result<Vec<String>> {
    let mut modules = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("cannot read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "ts") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if stem != "index" {
                    modules.push(stem.to_string());
                }
            }
        }
    }
    modules.sort();
    Ok(modules)
}
