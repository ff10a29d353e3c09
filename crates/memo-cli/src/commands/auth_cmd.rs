use crate::auth::{SessionStore, StoredSession};
use crate::config::{normalize_text_option, ProfilesConfig};
use crate::error::CliError;

pub fn run_login(
    profile_flag: Option<&str>,
    user_id: &str,
    token: &str,
    email: Option<String>,
) -> Result<(), CliError> {
    let config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);

    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(CliError::Session("user id must not be empty".to_string()));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(CliError::Session(
            "access token must not be empty".to_string(),
        ));
    }

    let session = StoredSession {
        user_id: user_id.to_string(),
        access_token: token.to_string(),
        email: normalize_text_option(email),
    };
    SessionStore::for_profile(&profile_name).save(&session)?;

    println!("Signed in as {} (profile '{}')", session.user_id, profile_name);
    Ok(())
}

pub fn run_status(profile_flag: Option<&str>) -> Result<(), CliError> {
    let config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);

    match SessionStore::for_profile(&profile_name).load()? {
        Some(session) => match session.email {
            Some(email) => println!("Signed in as {} <{}>", session.user_id, email),
            None => println!("Signed in as {}", session.user_id),
        },
        None => println!("Not signed in"),
    }

    Ok(())
}

pub fn run_logout(profile_flag: Option<&str>) -> Result<(), CliError> {
    let config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);

    SessionStore::for_profile(&profile_name).clear()?;
    println!("Signed out");
    Ok(())
}
