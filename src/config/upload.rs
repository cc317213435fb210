use std::env;
use std::path::PathBuf;

/// Upload storage configuration.
///
/// Category subdirectories (`photos`, `certificates`) are created under
/// `base_dir` on demand.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub base_dir: PathBuf,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            base_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
        }
    }
}
