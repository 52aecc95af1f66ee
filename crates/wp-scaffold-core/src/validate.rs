//! Acceptance predicates for collected answers
//!
//! Each check returns the message shown to the user when the input is
//! rejected, so prompts can re-ask inline.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static PROJECT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[^\s^\x00-\x1f\\?*:";<>|/.][^\x00-\x1f\\?*:";<>|/]*[^\s^\x00-\x1f\\?*:";<>|/.]+$"#,
    )
    .expect("project name pattern is valid")
});

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,2}$").expect("version pattern is valid")
});

static AUTHOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+(([',. -][a-zA-Z ])?[a-zA-Z]*)*$").expect("author pattern is valid")
});

// ASCII word characters only; `\w` would also accept non-ASCII letters
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .expect("email pattern is valid")
});

/// Project names double as directory names
pub fn project_name(value: &str) -> Result<(), String> {
    if value.chars().count() < 2 {
        return Err(
            "The project name is required and must contain at least 2 characters.".to_string(),
        );
    }
    if !PROJECT_NAME.is_match(value) {
        return Err("Invalid name. The project name must also be a valid folder name.".to_string());
    }
    Ok(())
}

pub fn version(value: &str) -> Result<(), String> {
    if VERSION.is_match(value) {
        Ok(())
    } else {
        Err("Invalid version format, must be three numbers of one or two digits separated by periods (e.g. 1.0.0).".to_string())
    }
}

pub fn author_name(value: &str) -> Result<(), String> {
    if AUTHOR_NAME.is_match(value) {
        Ok(())
    } else {
        Err("You have entered an invalid author name!".to_string())
    }
}

/// Empty means skipped
pub fn optional_email(value: &str) -> Result<(), String> {
    if value.is_empty() || EMAIL.is_match(value) {
        Ok(())
    } else {
        Err("You have entered an invalid email address!".to_string())
    }
}

/// Empty means skipped
pub fn optional_url(value: &str) -> Result<(), String> {
    if value.is_empty() || is_web_url(value) {
        Ok(())
    } else {
        Err("You have entered an invalid URL!".to_string())
    }
}

/// An absolute http(s) URL with a host
pub fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
