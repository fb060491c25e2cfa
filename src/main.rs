use std::io::Write;

use anyhow::Context;
use pingstub::{write_banner, STARTUP_DELAY};

// Occupies a build slot so the multi-language build can claim this
// toolchain is wired in. Not called by the service it ships with.
fn main() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_banner(&mut out).context("failed to write banner to stdout")?;
    out.flush().context("failed to flush stdout")?;

    std::thread::sleep(STARTUP_DELAY);

    Ok(())
}
