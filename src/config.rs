use chrono::{FixedOffset, Local, Offset};
use clap::Args;
use secrecy::SecretString;
use url::Url;

#[derive(Args, Debug)]
pub struct ApiConfig {
    /// Base URL of the LMS API.
    #[clap(long, env = "LMS_API_URL", value_parser, value_name = "URL")]
    pub api_url: Url,

    #[clap(
        long,
        env = "LMS_API_TOKEN",
        value_parser = parse_secret,
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub api_token: SecretString,
}

fn parse_secret(value: &str) -> Result<SecretString, String> {
    if value.is_empty() {
        return Err("API token is empty".to_owned());
    }

    Ok(SecretString::new(value.to_owned()))
}

/// Parses `+HH:MM`, `-HH:MM` or `Z`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, String> {
    let invalid = || format!("invalid UTC offset `{value}`, expected +HH:MM");

    if value.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match value.strip_prefix('+') {
        Some(rest) => (1, rest),
        None => (-1, value.strip_prefix('-').ok_or_else(invalid)?),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours = hours.parse::<i32>().map_err(|_| invalid())?;
    let minutes = minutes.parse::<i32>().map_err(|_| invalid())?;

    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

pub fn local_utc_offset() -> FixedOffset {
    Local::now().offset().fix()
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn api_token_is_redacted_in_debug_output() {
        let config = ApiConfig {
            api_url: "https://lms.test/api/".parse().unwrap(),
            api_token: parse_secret("s3cret-token").unwrap(),
        };

        assert_eq!(config.api_token.expose_secret(), "s3cret-token");
        assert!(!format!("{config:?}").contains("s3cret-token"));
        assert!(parse_secret("").is_err());
    }

    #[test]
    fn parses_signed_offsets() {
        assert_eq!(
            parse_utc_offset("+08:00").unwrap(),
            FixedOffset::east_opt(8 * 3600).unwrap()
        );
        assert_eq!(
            parse_utc_offset("-05:30").unwrap(),
            FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
        );
        assert_eq!(parse_utc_offset("Z").unwrap(), FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn rejects_malformed_offsets() {
        assert!(parse_utc_offset("08:00").is_err());
        assert!(parse_utc_offset("+8").is_err());
        assert!(parse_utc_offset("+08:75").is_err());
        assert!(parse_utc_offset("+25:00").is_err());
    }
}
