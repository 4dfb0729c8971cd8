// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `artifex loaders` command implementation.

use std::io::{self, Write};

use artifex_core::{ArtifactType, LoaderKind};
use artifex_plugin::DescriptorLoaderRepository;

/// Print registered loaders grouped by capability, one id per line with the
/// artifact types it accepts.
pub fn render(repository: &DescriptorLoaderRepository, out: &mut impl Write) -> io::Result<()> {
    let mut groups: Vec<(LoaderKind, String, Vec<ArtifactType>)> = Vec::new();
    for entry in repository.entries() {
        match groups.last_mut() {
            Some((kind, id, types)) if *kind == entry.kind && *id == entry.id => {
                types.push(entry.artifact_type);
            }
            _ => groups.push((entry.kind, entry.id, vec![entry.artifact_type])),
        }
    }

    let mut current = None;
    for (kind, id, types) in groups {
        if current != Some(kind) {
            writeln!(out, "{kind}s:")?;
            current = Some(kind);
        }
        let types: Vec<String> = types.iter().map(ToString::to_string).collect();
        writeln!(out, "  {id} ({})", types.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_plugin::builtin_repository;

    #[test]
    fn lists_builtin_loaders_by_capability() {
        let mut out = Vec::new();
        render(&builtin_repository().unwrap(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "bundle descriptor loaders:\n  mule (app, domain, plugin, policy, service)\n\
             class loader model loaders:\n  mule (app, domain, plugin, policy)\n"
        );
    }

    #[test]
    fn empty_repository_prints_nothing() {
        let mut out = Vec::new();
        render(&DescriptorLoaderRepository::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
