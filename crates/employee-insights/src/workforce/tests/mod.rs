pub(crate) mod common;

mod ranking;
mod reports;
