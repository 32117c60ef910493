//! Interactive prompts.
//!
//! On a terminal the prompts go through dialoguer. When stdin is piped, each
//! prompt is printed as `<prompt>: ` and answered by the next input line.

use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::Path,
};

use cbgen_codegen::validate_short_name;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};

/// The only answer that confirms an overwrite.
pub const OVERWRITE_YES: &str = "Y";

const NAME_PROMPT: &str = "Enter the name of the new structure (Do not include CB)";
const AUTHOR_PROMPT: &str = "Enter your first and last name";
const DESCRIPTION_PROMPT: &str = "Enter a description for the structure";
const OVERWRITE_PROMPT: &str = "This name conflicts with a previous name. Overwrite? (Y/N)";

pub fn structure_name() -> Result<String> {
    if !is_interactive() {
        return read_piped(NAME_PROMPT);
    }

    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(NAME_PROMPT)
        .validate_with(|name: &String| validate_short_name(name).map_err(|p| p.to_string()))
        .interact_text()
        .wrap_err("Failed to read the structure name")
}

pub fn author() -> Result<String> {
    free_text(AUTHOR_PROMPT)
}

pub fn description() -> Result<String> {
    free_text(DESCRIPTION_PROMPT)
}

/// Ask before writing into an existing directory. Anything but `Y` declines.
pub fn confirm_overwrite(dir: &Path) -> Result<bool> {
    let answer = if is_interactive() {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} [{}]", OVERWRITE_PROMPT, dir.display()))
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read the overwrite confirmation")?
    } else {
        read_piped(OVERWRITE_PROMPT)?
    };

    Ok(is_overwrite_confirmed(&answer))
}

pub fn is_overwrite_confirmed(answer: &str) -> bool {
    answer == OVERWRITE_YES
}

/// dialoguer draws on stderr and reads keys from the terminal, so both
/// must be attached.
fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

fn free_text(prompt: &str) -> Result<String> {
    if !is_interactive() {
        return read_piped(prompt);
    }

    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| format!("Failed to read input for '{}'", prompt))
}

fn read_piped(prompt: &str) -> Result<String> {
    read_answer(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// Print `prompt` and read one line. End of input reads as an empty answer.
fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}: ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err_with(|| format!("Failed to read input for '{}'", prompt))?;

    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
