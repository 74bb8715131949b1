use inquire::validator::Validation;
use inquire::{Confirm, Password, Text};

pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required to remove records in non-interactive mode");
    } else {
        Ok(Confirm::new(message).with_default(false).prompt()?)
    }
}

/// Returns the flag value, or prompts for a non-empty line when interactive.
pub fn text_or_prompt(
    value: Option<String>,
    flag: &str,
    label: &str,
    non_interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if non_interactive {
        anyhow::bail!("--{flag} is required in non-interactive mode");
    }

    let empty = format!("{} cannot be empty", label.trim_end_matches(':'));
    Ok(Text::new(label)
        .with_validator(move |input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid(empty.clone().into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?)
}

pub fn password_or_prompt(
    value: Option<String>,
    confirm: bool,
    non_interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if non_interactive {
        anyhow::bail!("--password is required in non-interactive mode");
    }

    let prompt = Password::new("Password:");
    let prompt = if confirm {
        prompt
    } else {
        prompt.without_confirmation()
    };
    Ok(prompt.prompt()?)
}
