// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `artifex describe` command implementation.
//!
//! Every path is handed to a blocking task sharing one factory; results are
//! reported in the order the paths were given.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use artifex_core::{ArtifactDescriptorFactory, ArtifactPluginDescriptor, DescriptorError};
use artifex_plugin::ArtifactPluginDescriptorFactory;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

/// Result of describing a single artifact.
#[derive(Debug)]
pub struct DescribeOutcome {
    pub path: PathBuf,
    pub result: Result<ArtifactPluginDescriptor, DescriptorError>,
}

/// Describe all `paths` concurrently, returning outcomes in input order.
pub async fn describe_all(
    factory: Arc<ArtifactPluginDescriptorFactory>,
    paths: Vec<PathBuf>,
) -> Result<Vec<DescribeOutcome>, JoinError> {
    let mut tasks = JoinSet::new();
    for (index, path) in paths.into_iter().enumerate() {
        let factory = Arc::clone(&factory);
        tasks.spawn_blocking(move || {
            let result = factory.create(&path);
            (index, DescribeOutcome { path, result })
        });
    }

    let mut indexed = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        indexed.push(joined?);
    }
    indexed.sort_by_key(|(index, _)| *index);
    debug!(count = indexed.len(), "described artifacts");

    Ok(indexed.into_iter().map(|(_, outcome)| outcome).collect())
}

/// Write descriptors as JSON lines to `out` and failures to `err`.
///
/// Returns the number of failed artifacts.
pub fn render(
    outcomes: &[DescribeOutcome],
    pretty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<usize> {
    let mut failures = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(descriptor) => {
                if pretty {
                    serde_json::to_writer_pretty(&mut *out, descriptor)?;
                } else {
                    serde_json::to_writer(&mut *out, descriptor)?;
                }
                writeln!(out)?;
            }
            Err(e) => {
                failures += 1;
                warn!(
                    artifact = %outcome.path.display(),
                    error = %e,
                    "failed to describe artifact"
                );
                writeln!(err, "error: {}: {e}", outcome.path.display())?;
            }
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_plugin::builtin_repository;
    use std::path::Path;

    fn write_plugin(root: &Path, name: &str, artifact_id: &str) -> PathBuf {
        let plugin = root.join(name);
        let folder = plugin.join("META-INF").join("mule-artifact");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(
            folder.join("mule-plugin.json"),
            format!(
                r#"{{"name":"{name}","bundleDescriptorLoader":{{"id":"mule","attributes":{{"groupId":"org.mule","artifactId":"{artifact_id}","version":"1.0"}}}}}}"#
            ),
        )
        .unwrap();
        plugin
    }

    fn factory() -> Arc<ArtifactPluginDescriptorFactory> {
        Arc::new(ArtifactPluginDescriptorFactory::new(Arc::new(
            builtin_repository().unwrap(),
        )))
    }

    #[tokio::test]
    async fn outcomes_follow_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| write_plugin(dir.path(), &format!("plugin-{i}"), &format!("artifact-{i}")))
            .collect();

        let outcomes = describe_all(factory(), paths.clone()).await.unwrap();

        assert_eq!(outcomes.len(), 8);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.path, paths[i]);
            let descriptor = outcome.result.as_ref().unwrap();
            assert_eq!(descriptor.name(), format!("plugin-{i}"));
        }
    }

    #[tokio::test]
    async fn failures_are_reported_per_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_plugin(dir.path(), "good", "good");
        let bad = dir.path().join("notes.txt");
        std::fs::write(&bad, "not a plugin").unwrap();

        let outcomes = describe_all(factory(), vec![bad.clone(), good]).await.unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = render(&outcomes, false, &mut out, &mut err).unwrap();

        assert_eq!(failures, 1);
        let stdout = String::from_utf8(out).unwrap();
        let stderr = String::from_utf8(err).unwrap();
        assert_eq!(stdout.lines().count(), 1);
        assert!(stdout.contains(r#""artifactId":"good""#), "got: {stdout}");
        assert!(stderr.starts_with(&format!("error: {}:", bad.display())), "got: {stderr}");
    }

    #[test]
    fn pretty_output_spans_multiple_lines() {
        let outcome = DescribeOutcome {
            path: PathBuf::from("/plugins/http"),
            result: Ok(ArtifactPluginDescriptor::new(
                "http",
                artifex_core::BundleDescriptor::new("org.mule", "http", "1.0"),
            )),
        };
        let mut out = Vec::new();
        let failures = render(&[outcome], true, &mut out, &mut io::sink()).unwrap();
        assert_eq!(failures, 0);
        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.lines().count() > 1);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["name"], "http");
    }
}
