//! Thin logging facade over `tracing`, so call sites can log preformatted
//! strings and the `*_fmt!` macros stay usable from every module.

#[macro_export]
macro_rules! debug_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::debug(&format!($($tt)*))
  };
}

#[macro_export]
macro_rules! info_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::info(&format!($($tt)*))
  };
}

#[macro_export]
macro_rules! warning_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::warning(&format!($($tt)*))
  };
}

#[macro_export]
macro_rules! error_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::error(&format!($($tt)*))
  };
}

#[allow(unused_imports)]
pub(crate) use debug_fmt;
#[allow(unused_imports)]
pub(crate) use error_fmt;
#[allow(unused_imports)]
pub(crate) use info_fmt;
#[allow(unused_imports)]
pub(crate) use warning_fmt;

pub fn debug(text: &str) {
	tracing::debug!(target: "huebot", "{}", text);
}

pub fn info(text: &str) {
	tracing::info!(target: "huebot", "{}", text);
}

pub fn warning(text: &str) {
	tracing::warn!(target: "huebot", "{}", text);
}

pub fn error(text: &str) {
	tracing::error!(target: "huebot", "{}", text);
}
