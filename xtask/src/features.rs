//! Feature matrix
//!
//! `ts-gen` is off by default and only pulled in by codegen, so it is easy
//! to break without noticing. Each crate that exposes it is checked both
//! ways.

use std::path::Path;

use anyhow::Result;

use crate::cargo;

/// (package, features) pairs to compile
const MATRIX: &[(&str, Option<&str>)] = &[
    ("helpdesk-domain", None),
    ("helpdesk-domain", Some("ts-gen")),
    ("helpdesk-api", None),
    ("helpdesk-api", Some("ts-gen")),
];

pub fn check_matrix(root: &Path) -> Result<()> {
    for &(package, features) in MATRIX {
        let mut args = vec!["check", "-p", package, "--all-targets"];
        if let Some(features) = features {
            args.extend(["--features", features]);
        }
        cargo(root, &args)?;
    }
    println!("{} feature combinations compile", MATRIX.len());
    Ok(())
}
