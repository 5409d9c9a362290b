use crate::constants::SOURCE_PROFILE;
use crate::runner::{argv, run_checked, CommandRunner};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Temporary credential triple returned by the session-token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TemporaryCredentials {
    #[serde(rename = "AccessKeyId")]
    pub access_key_id: String,
    #[serde(rename = "SecretAccessKey")]
    pub secret_access_key: String,
    #[serde(rename = "SessionToken")]
    pub session_token: String,
    #[serde(rename = "Expiration")]
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SessionTokenResponse {
    #[serde(rename = "Credentials")]
    credentials: Option<TemporaryCredentials>,
}

/// Exchanges the MFA device ARN and one-time code for temporary credentials
/// via `aws sts get-session-token` on the default profile. A failed exchange
/// (bad or expired code, clock skew, network failure) is fatal; no retry.
pub fn get_session_token(
    runner: &dyn CommandRunner,
    mfa_arn: &str,
    mfa_code: &str,
) -> Result<TemporaryCredentials> {
    let stdout = run_checked(
        runner,
        &argv(&[
            "sts",
            "get-session-token",
            "--serial-number",
            mfa_arn,
            "--token-code",
            mfa_code,
            "--profile",
            SOURCE_PROFILE,
            "--output",
            "json",
        ]),
    )?;

    let response: SessionTokenResponse = serde_json::from_str(&stdout)
        .context("Unexpected response from sts get-session-token")?;

    response
        .credentials
        .ok_or_else(|| anyhow!("Failed to retrieve temporary credentials."))
}
