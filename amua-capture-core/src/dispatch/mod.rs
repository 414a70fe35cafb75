pub mod command;
pub mod dispatcher;
pub mod input;

pub use dispatcher::run;
