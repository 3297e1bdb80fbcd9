/// ODF constants: MIME types and part paths
pub mod constants;
/// Core ODF functionality: package and XML tree
pub mod core;
/// ODF XML element classification
pub mod elements;
/// ODF text document (.odt) support
pub mod odt;

/// Re-export the main APIs
pub use odt::Document;
