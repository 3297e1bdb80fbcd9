//! ODF package (ZIP archive) handling functionality.
//!
//! This module provides utilities for working with ODF files as ZIP archives:
//! reading entries, checking existence and locating the content part.

use super::xml::XmlElement;
use crate::common::{Error, Result};
use crate::odf::constants::{ODF_CONTENT, ODF_MIMETYPE};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// An ODF package (ZIP file containing XML documents)
pub struct Package<R> {
    archive: RefCell<zip::ZipArchive<R>>,
    mimetype: Option<String>,
}

impl Package<BufReader<File>> {
    /// Open an ODF package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Open an ODF package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)
            .map_err(|e| Error::InvalidFormat(format!("Invalid ZIP archive: {}", e)))?;
        Self::from_zip_archive(archive)
    }

    /// Create an ODF package from an already-parsed ZIP archive.
    pub fn from_zip_archive(mut archive: zip::ZipArchive<R>) -> Result<Self> {
        let mimetype = Self::read_mimetype(&mut archive)?;
        Ok(Self {
            archive: RefCell::new(archive),
            mimetype,
        })
    }

    /// Read MIME type from the mimetype entry, if the package has one
    fn read_mimetype(archive: &mut zip::ZipArchive<R>) -> Result<Option<String>> {
        let mut mimetype_file = match archive.by_name(ODF_MIMETYPE) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut content = String::new();
        mimetype_file.read_to_string(&mut content)?;
        Ok(Some(content.trim().to_string()))
    }

    /// Get the MIME type from the mimetype entry
    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    /// Get a file from the package by path
    pub fn get_file(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|e| entry_error(path, e))?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Check if a file exists in the package
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.borrow_mut().by_name(path).is_ok()
    }

    /// List all files in the package
    pub fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut archive = self.archive.borrow_mut();
        for i in 0..archive.len() {
            let file = archive.by_index(i)?;
            files.push(file.name().to_string());
        }
        Ok(files)
    }

    /// Locate `content.xml` and parse it into an XML tree
    pub fn content(&self) -> Result<XmlElement> {
        let bytes = self.get_file(ODF_CONTENT)?;
        XmlElement::parse(&bytes)
    }
}

/// Missing entries become `ComponentNotFound`; other lookup failures stay ZIP errors.
fn entry_error(path: &str, err: zip::result::ZipError) -> Error {
    match err {
        zip::result::ZipError::FileNotFound => Error::ComponentNotFound(path.to_string()),
        other => other.into(),
    }
}
