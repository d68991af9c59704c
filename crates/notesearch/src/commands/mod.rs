pub mod keywords;
pub mod load;
pub mod notes;
pub mod search;
pub mod shell;
pub mod summarize;
pub mod version;
