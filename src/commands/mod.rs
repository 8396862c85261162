pub mod help;
pub mod result;
pub mod status;
pub mod urls;

#[allow(unused_imports)]
pub use result::CommandResult;
