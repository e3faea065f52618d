//! Full-screen terminal countdown from 100 to "Done".

pub mod cli;
pub mod config;
pub mod countdown;
pub mod logging;
pub mod shutdown;
pub mod ui;
