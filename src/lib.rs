//! Build-presence stub: prints one fixed line, pauses for ten
//! milliseconds, and exits 0. It occupies a toolchain slot in a
//! multi-language build and is not used by the service it ships with.

pub mod stub;

pub use stub::{write_banner, BANNER, STARTUP_DELAY};
