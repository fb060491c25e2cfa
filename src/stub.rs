use std::io::Write;
use std::time::Duration;

/// The single line the stub prints, without the trailing newline.
pub const BANNER: &str = "pingstub ok";

/// How long the stub pauses before exiting.
pub const STARTUP_DELAY: Duration = Duration::from_millis(10);

/// Writes the banner line (banner plus newline) to `out`.
pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)
}
