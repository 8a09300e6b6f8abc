//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm a destructive action
///
/// Callers pass `args.yes || cli.batch` as `skip_prompt`: batch runs have
/// nobody to answer.
pub fn confirm_action(
    prompt: &str,
    skip_prompt: bool,
) -> std::result::Result<bool, Box<dyn std::error::Error>> {
    if skip_prompt {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
