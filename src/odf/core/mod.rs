//! Core ODF parsing functionality.
//!
//! This module provides the two collaborators the text walker sits on:
//! the ZIP package reader and the XML tree built from a package part.
//!
//! # References
//! - ODF Specification: §2 (Documents), Part 3 (Packages)
//! - ZIP format: PKZIP Application Note

/// ODF package handling
#[cfg(feature = "package")]
mod package;
/// ODF XML tree
mod xml;

#[cfg(feature = "package")]
pub use package::Package;
pub use xml::{NodeKind, XmlElement, XmlNode};
