//! Chunked writer for the downloaded artifact.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Truncating, buffered writer for the artifact file. The buffer is one chunk,
/// so the file is written in chunk-sized blocks regardless of how the network
/// delivers bytes.
pub struct ArtifactWriter {
    out: BufWriter<File>,
    written: u64,
}

impl ArtifactWriter {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path, chunk_size: usize) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::with_capacity(chunk_size.max(1), file),
            written: 0,
        })
    }

    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.out.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Flush buffered bytes and close the file. Returns the total bytes written.
    pub fn finish(mut self) -> io::Result<u64> {
        self.out.flush()?;
        self.out.get_ref().sync_all()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        let mut w = ArtifactWriter::create(&path, 8).unwrap();
        w.write_chunk(b"new").unwrap();
        assert_eq!(w.finish().unwrap(), 3);
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn writes_many_chunks_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        let body: Vec<u8> = (0u8..=255).cycle().take(20_000).collect();

        let mut w = ArtifactWriter::create(&path, 8192).unwrap();
        for chunk in body.chunks(3000) {
            w.write_chunk(chunk).unwrap();
        }
        assert_eq!(w.finish().unwrap(), body.len() as u64);
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[test]
    fn create_fails_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("sheet.csv");
        assert!(ArtifactWriter::create(&path, 8192).is_err());
    }
}
