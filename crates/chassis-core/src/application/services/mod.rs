//! The two use-case services: per-platform build-tree assembly
//! ([`BuildOrchestrator`]) and starter-project provisioning
//! ([`InitService`]).

pub mod init_service;
pub mod orchestrator;

pub use init_service::InitService;
pub use orchestrator::{BuildOrchestrator, SetupOutcome};
