mod about;
mod global;
mod month;

pub use about::*;
pub use global::*;
pub use month::*;
