pub mod paths;

pub use paths::PatternbookPaths;
