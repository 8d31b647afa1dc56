//! Raw access to the parts of an `.xlsx` package (a zip archive of XML files).

use crate::shared::error::PipelineError;
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

struct Part {
    name: String,
    compression: CompressionMethod,
    data: Vec<u8>,
}

/// Every part of a workbook package, in archive order
///
/// Parts that are never touched are written back byte for byte, which keeps
/// pivot caches, drawings, styles and anything else the template carries.
pub struct XlsxPackage {
    parts: Vec<Part>,
}

impl XlsxPackage {
    pub fn open(path: &Path) -> Result<Self> {
        let read_error = |details: String| PipelineError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        let file = File::open(path).map_err(|e| read_error(e.to_string()))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| read_error(e.to_string()))?;

        let mut parts = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| read_error(e.to_string()))?;
            if entry.is_dir() {
                continue;
            }

            let mut data = Vec::new();
            entry
                .read_to_end(&mut data)
                .map_err(|e| read_error(format!("{}: {}", entry.name(), e)))?;

            let compression = match entry.compression() {
                CompressionMethod::Stored => CompressionMethod::Stored,
                _ => CompressionMethod::Deflated,
            };
            parts.push(Part {
                name: entry.name().to_string(),
                compression,
                data,
            });
        }

        Ok(Self { parts })
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// Part content as UTF-8 text, `None` if the part is absent
    pub fn text(&self, name: &str) -> Result<Option<String>> {
        match self.parts.iter().find(|p| p.name == name) {
            Some(part) => {
                let text = String::from_utf8(part.data.clone())
                    .with_context(|| format!("Package part '{}' is not UTF-8", name))?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }

    /// Replaces a part's content, adding the part if it does not exist
    pub fn set(&mut self, name: &str, data: Vec<u8>) {
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(part) => part.data = data,
            None => self.parts.push(Part {
                name: name.to_string(),
                compression: CompressionMethod::Deflated,
                data,
            }),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.parts.retain(|p| p.name != name);
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        for part in &self.parts {
            let options = SimpleFileOptions::default().compression_method(part.compression);
            zip.start_file(part.name.as_str(), options)
                .with_context(|| format!("Failed to add package part '{}'", part.name))?;
            zip.write_all(&part.data)?;
        }
        zip.finish().context("Failed to finish the workbook archive")?;
        Ok(())
    }

    pub fn write_to_file(&self, file: &mut File) -> Result<()> {
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
