use crate::error::{OmniError, Result};

// Asked on every run, the password is never written anywhere
pub fn get_password(login: &str) -> Result<String> {
    rpassword::prompt_password(format!("Password for '{}': ", login))
        .map_err(|err| OmniError::io("cannot read password", err))
}
