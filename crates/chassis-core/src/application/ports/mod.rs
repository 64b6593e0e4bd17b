//! Interfaces the pipeline needs from the outside world.
//!
//! The services in this crate see nothing but these traits;
//! `chassis-adapters` supplies the real filesystem, environment, composer,
//! renderer, config reader, and process runner, and the tests substitute
//! mocks or in-memory fakes. All six are driven ports: the application
//! calls out through them, never the reverse.

pub mod output;

pub use output::{
    CommandRunner, ConfigSource, Environment, Filesystem, TemplateRenderer, TreeComposer,
};
