//! Build script for detent-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time and emits it as constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Validated board settings
struct BoardSettings {
    address: u8,
    threshold: u16,
    settle_ms: u32,
    adc_max: u16,
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let settings = validate_config();
    write_constants(&out_dir, &settings);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml and extract the settings
fn validate_config() -> BoardSettings {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the detent-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let address = read_int(&config, "bus", "address", 0x08, 0x77, &mut errors);
    let adc_max = read_int(&config, "adc", "max", 1, u16::MAX as i64, &mut errors);
    let threshold = read_int(&config, "hopper", "threshold", 0, u16::MAX as i64, &mut errors);
    let settle_ms = read_int(&config, "hopper", "settle_ms", 1, 1000, &mut errors);

    if let (Some(threshold), Some(adc_max)) = (threshold, adc_max) {
        if threshold >= adc_max {
            errors.push(format!(
                "[hopper] threshold ({}) must be below [adc] max ({})",
                threshold, adc_max
            ));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    // All present and in range once no errors were collected
    BoardSettings {
        address: address.unwrap_or_default() as u8,
        threshold: threshold.unwrap_or_default() as u16,
        settle_ms: settle_ms.unwrap_or_default() as u32,
        adc_max: adc_max.unwrap_or_default() as u16,
    }
}

/// Read an integer `[section] key`, checking it lies in `min..=max`
fn read_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return None;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return None;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(value)) if (min..=max).contains(value) => Some(*value),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = truncate(line, 64);
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `line` to at most `width` characters, marking the cut with "..."
fn truncate(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let cut = line
        .char_indices()
        .nth(width - 3)
        .map_or(line.len(), |(i, _)| i);
    format!("{}...", &line[..cut])
}

/// Emit the settings as Rust constants for `src/config.rs`
fn write_constants(out_dir: &Path, settings: &BoardSettings) {
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();
    writeln!(f, "/// Bus address from board.toml").unwrap();
    writeln!(f, "pub const BUS_ADDRESS: u8 = {:#04x};", settings.address).unwrap();
    writeln!(f, "/// Hopper threshold from board.toml").unwrap();
    writeln!(f, "pub const HOPPER_THRESHOLD: u16 = {};", settings.threshold).unwrap();
    writeln!(f, "/// LED settle time from board.toml").unwrap();
    writeln!(f, "pub const SETTLE_MS: u32 = {};", settings.settle_ms).unwrap();
    writeln!(f, "/// ADC full scale from board.toml").unwrap();
    writeln!(f, "pub const ADC_MAX: u16 = {};", settings.adc_max).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_line_untouched() {
        assert_eq!(truncate("expected `=`", 64), "expected `=`");
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        // Every char is 2 bytes, so a byte-based cut would split one
        let line = "é".repeat(70);
        let cut = truncate(&line, 64);
        assert_eq!(cut.chars().count(), 64);
        assert!(cut.ends_with("..."));
    }
}
