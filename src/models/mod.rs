pub mod candidate;
pub mod failure;
pub mod loaders;
pub mod manifest;
pub mod profile;

pub use candidate::{declaration_path, typed_output_path, CandidateFile, SourceKind};
pub use failure::{FailureRecord, FailureReport};
pub use loaders::{load_package_manifest, load_run_profile};
pub use manifest::PackageManifest;
pub use profile::RunProfile;
