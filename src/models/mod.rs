mod enums;
mod record;
mod selection;

pub use enums::*;
pub use record::*;
pub use selection::*;
