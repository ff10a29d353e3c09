use crate::config::{normalize_text_option, ProfilesConfig};
use crate::error::CliError;

pub fn run_init(
    profile_flag: Option<&str>,
    api_url: Option<String>,
    api_key: Option<String>,
    no_activate: bool,
) -> Result<(), CliError> {
    let mut config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);

    let profile = config.profile_mut_or_default(&profile_name);
    if let Some(url) = normalize_text_option(api_url) {
        profile.api_url = Some(url);
    }
    if let Some(key) = normalize_text_option(api_key) {
        profile.api_key = Some(key);
    }

    if !no_activate {
        config.active_profile = Some(profile_name);
    }

    let path = config.save().map_err(CliError::Config)?;
    println!("{}", path.display());
    Ok(())
}

pub fn run_show(profile_flag: Option<&str>) -> Result<(), CliError> {
    let config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);

    println!("profile: {profile_name}");
    match config.profile(&profile_name) {
        Some(profile) => {
            println!(
                "api_url: {}",
                profile.api_url().unwrap_or_else(|| "(unset)".to_string())
            );
            // Never print the key itself
            println!(
                "api_key: {}",
                if profile.api_key().is_some() {
                    "(set)"
                } else {
                    "(unset)"
                }
            );
        }
        None => {
            println!("api_url: (unset)");
            println!("api_key: (unset)");
        }
    }

    Ok(())
}
