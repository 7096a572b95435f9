use std::process::Command;

use color_eyre::{eyre::ensure, Report};

const EXPECTED: &str = "\
Assuming: x = 5, y = 7 and z = 3.

Constants:
5 = 5
4 = 4

Variables:
x = 5
y = 7
z = 3

Simple examples:
1 + 2 = 3
x * 5 = 25
7 / z = 2
y - z = 4

More complex examples:
(1 + 2) * (x + 3) - 7 = 17
((z + 7) * (y + 3)) / (5 * x - 4) = 4
";

#[test]
fn demo_output() -> Result<(), Report> {
    let output = Command::new(env!("CARGO_BIN_EXE_expression-visitor"))
        .env_remove("RUST_LOG")
        .output()?;
    ensure!(output.status.success(), "demo exited with {}", output.status);
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, EXPECTED);
    Ok(())
}

#[test]
fn logging_stays_off_stdout() -> Result<(), Report> {
    let output = Command::new(env!("CARGO_BIN_EXE_expression-visitor"))
        .env("RUST_LOG", "trace")
        .output()?;
    ensure!(output.status.success(), "demo exited with {}", output.status);
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    assert!(!output.stderr.is_empty());
    Ok(())
}
