//! The allocation table of a month and everything needed to build and edit it.

mod day_record;
mod error;
mod hours;
mod pensum;
mod weekly;
mod work_month;

pub use day_record::*;
pub use error::*;
pub use hours::*;
pub use pensum::*;
pub use weekly::*;
pub use work_month::*;
