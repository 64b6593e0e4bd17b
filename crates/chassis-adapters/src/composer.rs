//! Tree composition over walkdir.
//!
//! One [`WalkdirComposer::compose`] call layers a source tree into a
//! destination tree: `.tpl` files render through the template port on
//! every run, plain assets copy only when the destination is missing or
//! older than the source. Later compose calls onto the same destination
//! therefore overlay earlier ones without churning untouched files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::{TemplateRenderer, TreeComposer};
use chassis_core::domain::{MergeReport, MergeSpec, TEMPLATE_EXTENSION, TemplateContext};
use chassis_core::error::{ChassisError, ChassisResult, Context};

use crate::filesystem::map_io_error;

/// Production composer.
///
/// Skip filters prune subtrees during the walk. Match filters gate which
/// directories contribute files without stopping descent, and files
/// directly under the source root bypass both.
pub struct WalkdirComposer {
    renderer: Box<dyn TemplateRenderer>,
}

impl WalkdirComposer {
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }
}

impl TreeComposer for WalkdirComposer {
    #[instrument(skip_all, fields(source = %spec.source.display()))]
    fn compose(&self, spec: &MergeSpec, context: &TemplateContext) -> ChassisResult<MergeReport> {
        let mut report = MergeReport::default();
        if !spec.source.is_dir() {
            debug!("source tree absent, nothing to merge");
            return Ok(report);
        }

        let walker = WalkDir::new(&spec.source)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !(entry.file_type().is_dir() && hits_skip_filter(spec, entry.path()))
            });

        for entry in walker {
            let entry = entry.map_err(map_walk_error)?;
            let path = entry.path();
            let rel = path
                .strip_prefix(&spec.source)
                .context("walk entry escaped the source tree")?;

            if entry.file_type().is_dir() {
                if contributes(spec, path) {
                    let target_dir = spec.dest.join(rel);
                    fs::create_dir_all(&target_dir).map_err(|e| map_io_error(&target_dir, e))?;
                }
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let dir = path.parent().unwrap_or(&spec.source);
            if !contributes(spec, dir) {
                continue;
            }

            let dest_path = spec.dest.join(rel);
            if rel.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
                let target = dest_path.with_extension("");
                let source_text =
                    fs::read_to_string(path).map_err(|e| map_io_error(path, e))?;
                let rendered = self
                    .renderer
                    .render(&source_text, context)
                    .map_err(|e| annotate_template(e, rel))?;
                fs::write(&target, rendered).map_err(|e| map_io_error(&target, e))?;
                report.rendered += 1;
                trace!(file = %rel.display(), "rendered");
            } else if needs_copy(path, &dest_path)? {
                fs::copy(path, &dest_path).map_err(|e| map_io_error(path, e))?;
                report.copied += 1;
                trace!(file = %rel.display(), "copied");
            } else {
                report.up_to_date += 1;
            }
        }

        debug!(
            rendered = report.rendered,
            copied = report.copied,
            up_to_date = report.up_to_date,
            "merge complete"
        );
        Ok(report)
    }
}

fn hits_skip_filter(spec: &MergeSpec, dir: &Path) -> bool {
    spec.skip_filters.iter().any(|f| f.hits(dir))
}

/// Whether files in `dir` land in the destination. The source root itself
/// always contributes; elsewhere at least one match filter must hit, when
/// any are set. Skip filters never reach here, pruning handled them.
fn contributes(spec: &MergeSpec, dir: &Path) -> bool {
    if dir == spec.source {
        return true;
    }
    spec.match_filters.is_empty() || spec.match_filters.iter().any(|f| f.hits(dir))
}

/// Copy when the destination is missing or strictly older than the source.
fn needs_copy(source: &Path, dest: &Path) -> ChassisResult<bool> {
    let dest_meta = match fs::metadata(dest) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(err) => return Err(map_io_error(dest, err)),
    };
    let source_time = fs::metadata(source)
        .and_then(|meta| meta.modified())
        .map_err(|e| map_io_error(source, e))?;
    let dest_time = dest_meta.modified().map_err(|e| map_io_error(dest, e))?;
    Ok(source_time > dest_time)
}

fn annotate_template(err: ChassisError, template: &Path) -> ChassisError {
    match err {
        ChassisError::Application(ApplicationError::RenderFailed { reason }) => {
            ApplicationError::RenderFailed {
                reason: format!("{}: {}", template.display(), reason),
            }
            .into()
        }
        other => other,
    }
}

fn map_walk_error(err: walkdir::Error) -> ChassisError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    ApplicationError::FilesystemError {
        path,
        reason: err.to_string(),
    }
    .into()
}
