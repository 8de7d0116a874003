//! Battery charge reporter.
//!
//! Example caller of the formatting library: gathers numbers from sysfs
//! and prints `P.FF%` through a stack-buffered stdout stream. Charging
//! state shows as a `+` prefix column that shrinks as the percentage
//! gains digits, so the output width stays constant.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

/// Print the battery charge and status.
#[derive(Debug, Parser)]
#[command(name = "battery")]
#[command(about = "Print the battery charge and status")]
struct Cli {
    /// Power-supply sysfs directory.
    #[arg(long, default_value = "/sys/class/power_supply/BAT1")]
    supply: PathBuf,
}

fn read_number(path: &Path) -> std::io::Result<i64> {
    let text = fs::read_to_string(path)?;
    text.trim().parse::<i64>().map_err(std::io::Error::other)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match report(&cli.supply) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("battery: {err}");
            ExitCode::FAILURE
        }
    }
}

fn report(supply: &Path) -> std::io::Result<()> {
    let full = read_number(&supply.join("charge_full"))?;
    if full <= 0 {
        return Err(std::io::Error::other("charge_full is zero"));
    }
    let now = 100 * read_number(&supply.join("charge_now"))?;
    let status = fs::read_to_string(supply.join("status"))?;
    let discharging = status.trim() == "Discharging";

    let percent = (now / full) as u32;
    let frac = ((100 * (now % full)) / full) as u32;

    let pad = if discharging { b' ' } else { b'+' };
    let pad_count = if percent == 100 {
        1
    } else if percent >= 10 {
        2
    } else {
        3
    };

    let mut storage = [0u8; 80];
    let mut out = sigfmt_fd::stdout_buf(&mut storage);
    for _ in 0..pad_count {
        out.putc(pad);
    }
    out.printf("u", percent);
    out.putc(b'.');
    out.printf("0.2u", frac);
    out.puts("%\n");
    if out.flush() != 0 {
        return Err(std::io::Error::other("stdout write failed"));
    }
    Ok(())
}
