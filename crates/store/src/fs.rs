use std::path::Path;

use tempfile::NamedTempFile;

/// Write-then-rename so readers never observe a partially written file.
/// Parent directories are created on demand.
pub async fn atomic_write(target: &Path, content: &str) -> std::io::Result<()> {
    let parent = target.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "target has no parent")
    })?;
    tokio::fs::create_dir_all(parent).await?;

    let temp = NamedTempFile::new_in(parent)?;
    tokio::fs::write(temp.path(), content).await?;
    temp.persist(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_file_and_parents() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("facts.json");

        atomic_write(&target, "[]").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "[]");
    }

    #[tokio::test]
    async fn overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("facts.json");
        std::fs::write(&target, "old").unwrap();

        atomic_write(&target, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }
}
