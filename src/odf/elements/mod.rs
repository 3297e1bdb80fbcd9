//! ODF XML element classification.

pub mod tag_matcher;
