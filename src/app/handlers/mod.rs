//! Message handlers organized by domain
//!
//! - [`generate`]: GENERATE / RESET / COPY on the active tab
//! - [`ui_state`]: tab, theme and category selection (persisted to config)

pub mod generate;
pub mod ui_state;


pub(crate) use generate::*;
pub(crate) use ui_state::*;
