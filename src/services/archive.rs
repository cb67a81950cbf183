use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Errors from SCS archive packaging.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Source directory not found: {0}")]
    SourceMissing(Utf8PathBuf),

    #[error("Archive file name is not set")]
    FileNameNotSet,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Packs a finished package directory into an .scs archive.
///
/// An SCS archive is a standard zip container. The package directory's
/// contents become the archive's root entries; the directory itself is not
/// included as an enclosing folder.
#[derive(Debug, Clone, Default)]
pub struct ScsArchiver;

impl ScsArchiver {
    pub fn new() -> Self {
        Self
    }

    /// Pack `source_dir` into `{output_dir}/{file_name}` and return the
    /// archive path. A pre-existing archive at the target path is replaced.
    pub fn pack_directory(
        &self,
        source_dir: &Utf8Path,
        output_dir: &Utf8Path,
        file_name: &str,
    ) -> Result<Utf8PathBuf, ArchiveError> {
        if !source_dir.is_dir() {
            return Err(ArchiveError::SourceMissing(source_dir.to_path_buf()));
        }
        if file_name.trim().is_empty() {
            return Err(ArchiveError::FileNameNotSet);
        }

        let file_name = if file_name.to_ascii_lowercase().ends_with(".scs") {
            file_name.to_string()
        } else {
            format!("{file_name}.scs")
        };

        fs::create_dir_all(output_dir)?;
        let archive_path = output_dir.join(file_name);
        if archive_path.exists() {
            fs::remove_file(&archive_path)?;
        }

        let mut entries = Vec::new();
        collect_files(source_dir, source_dir, &mut entries)?;
        entries.sort();

        let file = fs::File::create(&archive_path)?;
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for relative in &entries {
            // Zip entry names always use forward slashes.
            let entry_name = relative.as_str().replace('\\', "/");
            writer.start_file(entry_name, options)?;
            let mut source = fs::File::open(source_dir.join(relative))?;
            io::copy(&mut source, &mut writer)?;
        }
        writer.finish()?;

        tracing::info!("Packed {} entries into '{}'", entries.len(), archive_path);
        Ok(archive_path)
    }
}

fn collect_files(
    dir: &Utf8Path,
    base: &Utf8Path,
    entries: &mut Vec<Utf8PathBuf>,
) -> Result<(), ArchiveError> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(path, base, entries)?;
        } else {
            let relative = path
                .strip_prefix(base)
                .expect("walked path is under base")
                .to_path_buf();
            entries.push(relative);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    fn populate_package(root: &Utf8Path) {
        fs::create_dir_all(root.join("def/vehicle/truck")).unwrap();
        fs::create_dir_all(root.join("material/ui/accessory")).unwrap();
        fs::write(root.join("manifest.sii"), "SiiNunit\n").unwrap();
        fs::write(root.join("def/vehicle/truck/a.sii"), "x").unwrap();
        fs::write(root.join("material/ui/accessory/a.mat"), "y").unwrap();
    }

    #[test]
    fn test_pack_places_contents_at_archive_root() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        let package = base.join("my_pack");
        populate_package(&package);

        let archiver = ScsArchiver::new();
        let archive = archiver.pack_directory(&package, &base, "my_pack.scs").unwrap();
        assert!(archive.exists());

        let file = fs::File::open(archive.as_std_path()).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"manifest.sii".to_string()));
        assert!(names.contains(&"def/vehicle/truck/a.sii".to_string()));
        // No enclosing root folder
        assert!(names.iter().all(|n| !n.starts_with("my_pack")));
    }

    #[test]
    fn test_pack_appends_scs_extension() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        let package = base.join("pack");
        populate_package(&package);

        let archiver = ScsArchiver::new();
        let archive = archiver.pack_directory(&package, &base, "pack").unwrap();
        assert_eq!(archive.file_name(), Some("pack.scs"));
    }

    #[test]
    fn test_pack_replaces_existing_archive() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        let package = base.join("pack");
        populate_package(&package);
        fs::write(base.join("pack.scs"), b"stale bytes").unwrap();

        let archiver = ScsArchiver::new();
        let archive = archiver.pack_directory(&package, &base, "pack.scs").unwrap();
        let file = fs::File::open(archive.as_std_path()).unwrap();
        assert!(zip::ZipArchive::new(file).is_ok());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        let archiver = ScsArchiver::new();
        let result = archiver.pack_directory(&base.join("absent"), &base, "x.scs");
        assert!(matches!(result, Err(ArchiveError::SourceMissing(_))));
    }
}
