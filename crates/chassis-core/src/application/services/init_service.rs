//! Init Service - provisions a fresh project directory.
//!
//! Validates the target location, creates it when absent, and materializes
//! the framework's scaffold tree into it through the same composition
//! engine the build pipeline uses, with an empty render context.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, TreeComposer},
    domain::{DomainError, FrameworkLayout, MergeReport, MergeSpec, TemplateContext},
    error::ChassisResult,
};

/// Project provisioning service.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    composer: Box<dyn TreeComposer>,
    framework: FrameworkLayout,
}

impl InitService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        composer: Box<dyn TreeComposer>,
        framework: FrameworkLayout,
    ) -> Self {
        Self {
            filesystem,
            composer,
            framework,
        }
    }

    /// Create a project skeleton at `target`.
    ///
    /// The target must be a nonexistent path (it gets created) or an
    /// empty directory; anything else is a recoverable error before a
    /// single file is written.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn init(&self, target: &Path) -> ChassisResult<MergeReport> {
        if self.filesystem.exists(target) {
            if !self.filesystem.is_dir(target) {
                return Err(DomainError::TargetNotFolder {
                    path: target.to_path_buf(),
                }
                .into());
            }
            if !self.filesystem.is_empty_dir(target)? {
                return Err(DomainError::TargetNotEmpty {
                    path: target.to_path_buf(),
                }
                .into());
            }
        } else {
            self.filesystem.create_dir_all(target)?;
        }

        let report = self.composer.compose(
            &MergeSpec::new(self.framework.scaffold_dir(), target),
            &TemplateContext::empty(),
        )?;
        info!(
            files = report.written(),
            "Project skeleton created"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use mockall::mock;

    use crate::error::ChassisError;

    mock! {
        Composer {}

        impl TreeComposer for Composer {
            fn compose(
                &self,
                spec: &MergeSpec,
                context: &TemplateContext,
            ) -> ChassisResult<MergeReport>;
        }
    }

    /// Minimal filesystem fake: knows one existing path and whether it is
    /// an empty directory, and records directory creations.
    struct FakeFs {
        existing: Option<PathBuf>,
        dir: bool,
        empty: bool,
        created: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl FakeFs {
        fn missing() -> Self {
            FakeFs {
                existing: None,
                dir: false,
                empty: false,
                created: Arc::default(),
            }
        }

        fn existing(dir: bool, empty: bool) -> Self {
            FakeFs {
                existing: Some(PathBuf::from("/work/demo")),
                dir,
                empty,
                created: Arc::default(),
            }
        }
    }

    impl Filesystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.existing.as_deref() == Some(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.exists(path) && self.dir
        }

        fn create_dir_all(&self, path: &Path) -> ChassisResult<()> {
            self.created.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn subdirs(&self, _path: &Path) -> ChassisResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn is_empty_dir(&self, _path: &Path) -> ChassisResult<bool> {
            Ok(self.empty)
        }
    }

    fn scaffold_composer() -> MockComposer {
        let mut composer = MockComposer::new();
        composer
            .expect_compose()
            .withf(|spec, context| {
                spec.source == Path::new("/fw/scaffold")
                    && spec.dest == Path::new("/work/demo")
                    && spec.skip_filters.is_empty()
                    && spec.match_filters.is_empty()
                    && context.app.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Ok(MergeReport {
                    rendered: 0,
                    copied: 4,
                    up_to_date: 0,
                })
            });
        composer
    }

    fn service(fs: FakeFs, composer: MockComposer) -> InitService {
        InitService::new(
            Box::new(fs),
            Box::new(composer),
            FrameworkLayout::new("/fw"),
        )
    }

    #[test]
    fn missing_target_is_created_then_scaffolded() {
        let fs = FakeFs::missing();
        let created = fs.created.clone();
        let report = service(fs, scaffold_composer())
            .init(Path::new("/work/demo"))
            .unwrap();
        assert_eq!(report.copied, 4);
        assert_eq!(
            created.lock().unwrap().as_slice(),
            &[PathBuf::from("/work/demo")]
        );
    }

    #[test]
    fn empty_directory_is_scaffolded_in_place() {
        let fs = FakeFs::existing(true, true);
        let created = fs.created.clone();
        service(fs, scaffold_composer())
            .init(Path::new("/work/demo"))
            .unwrap();
        assert!(created.lock().unwrap().is_empty());
    }

    #[test]
    fn file_target_is_rejected() {
        let mut composer = MockComposer::new();
        composer.expect_compose().times(0);
        let err = service(FakeFs::existing(false, false), composer)
            .init(Path::new("/work/demo"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Path is not a folder");
        assert!(err.is_recoverable());
    }

    #[test]
    fn populated_directory_is_rejected() {
        let mut composer = MockComposer::new();
        composer.expect_compose().times(0);
        let err = service(FakeFs::existing(true, false), composer)
            .init(Path::new("/work/demo"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Folder is not empty");
    }
}
