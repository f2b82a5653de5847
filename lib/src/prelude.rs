pub use super::util;
pub use util::error::{self as huerror, HueResult};
pub use util::logger;
pub use util::traits::{MessageExt, ResultExt};

pub use super::data;
