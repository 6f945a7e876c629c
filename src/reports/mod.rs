pub mod demographics;
pub mod employment;
pub mod income;
pub mod population;
pub mod real_estate;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::render::Artifact;

/// Runs every report into `out_dir` and returns the chart artifacts in
/// generation order.
pub fn generate_all(out_dir: &Path) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();
    artifacts.extend(demographics::generate(out_dir)?);
    artifacts.extend(population::generate(out_dir)?);
    artifacts.extend(income::generate(out_dir)?);
    artifacts.extend(employment::generate(out_dir)?);
    artifacts.extend(real_estate::generate(out_dir)?);
    Ok(artifacts)
}

/// Creates the output directory if it does not exist yet.
pub fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_all() {
        let dir = tempdir().unwrap();
        let artifacts = generate_all(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 9);
        for artifact in &artifacts {
            let meta = std::fs::metadata(&artifact.path).unwrap();
            assert!(meta.len() > 0, "{} is empty", artifact.path.display());
        }
    }

    #[test]
    fn test_prepare_out_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        prepare_out_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
