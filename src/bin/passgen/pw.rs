use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::ProgError;
use passgen::length::{clamp_length, parse_length};
use passgen::{CharClass, CharClassSet, PasswordGenerator, Settings};

/// One-shot generation for `passgen generate`.
pub(crate) fn generate(
    settings: &Settings,
    length: Option<&str>,
    classes: &[CharClass],
    count: usize,
    copy: bool,
) -> Result<(), ProgError> {
    let passwords = build_passwords(settings, length, classes, count)?;

    if copy {
        // Drop the trailing newline when there's only the one password.
        let data = if count == 1 {
            passwords.trim_end_matches('\n')
        } else {
            &passwords
        };
        send_to_clipboard(data.as_bytes())?;
        eprintln!("Copied to the clipboard.");
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(passwords.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write passwords to stdout")?;
    }
    Ok(())
}

/// Generate `count` passwords, one per line.
///
/// An empty selection or a zero count is an error before anything is generated.
fn build_passwords(
    settings: &Settings,
    length: Option<&str>,
    classes: &[CharClass],
    count: usize,
) -> Result<String, ProgError> {
    if count == 0 {
        return Err(ProgError::NoPasswordsRequested);
    }
    let length = match length {
        Some(input) => parse_length(input)?,
        None => clamp_length(settings.length),
    };
    let classes = if classes.is_empty() {
        settings.class_set()
    } else {
        classes.iter().copied().collect::<CharClassSet>()
    };
    let generator = PasswordGenerator::new(length, classes);
    generator.ensure_can_generate()?;

    let mut passwords = String::new();
    for _ in 0..count {
        passwords.push_str(generator.generate()?.as_str());
        passwords.push('\n');
    }
    Ok(passwords)
}

pub(crate) fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut cmd = clipboard_cmd();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start {:?}", cmd.get_program()))?;
    child
        .stdin
        .take()
        .context("clipboard command has no stdin")?
        .write_all(data)
        .context("failed to write to the clipboard command")?;
    let status = child
        .wait()
        .context("failed to wait for the clipboard command")?;
    if !status.success() {
        anyhow::bail!("clipboard command exited with {}", status);
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
