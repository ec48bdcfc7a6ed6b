pub mod git;
pub mod github_api;
pub mod mirror;
pub mod publish;
pub mod radicle;
pub mod runner;
pub mod scanner;
pub mod url;
