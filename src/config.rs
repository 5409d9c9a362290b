use crate::constants::{MFA_ARN_CONFIG_KEY, REGION};
use crate::runner::{argv, run_checked, CommandRunner};
use crate::sts::TemporaryCredentials;
use anyhow::Result;

/// Reads the MFA device ARN from the AWS CLI configuration. A non-zero exit
/// means the key is not set, which is not an error here.
pub fn get_mfa_arn(runner: &dyn CommandRunner) -> Result<Option<String>> {
    let output = runner.run(&argv(&["configure", "get", MFA_ARN_CONFIG_KEY]))?;
    if !output.success {
        return Ok(None);
    }
    let arn = output.stdout.trim().to_string();
    Ok((!arn.is_empty()).then_some(arn))
}

pub fn store_mfa_arn(runner: &dyn CommandRunner, arn: &str) -> Result<()> {
    run_checked(runner, &argv(&["configure", "set", MFA_ARN_CONFIG_KEY, arn]))?;
    Ok(())
}

/// Writes the temporary credential triple and the fixed region into the named
/// profile. The four writes are sequential; the first failure aborts and
/// earlier writes are not rolled back (the CLI config store has no
/// transaction concept).
pub fn set_profile_credentials(
    runner: &dyn CommandRunner,
    profile: &str,
    credentials: &TemporaryCredentials,
) -> Result<()> {
    let fields = [
        ("aws_access_key_id", credentials.access_key_id.as_str()),
        ("aws_secret_access_key", credentials.secret_access_key.as_str()),
        ("aws_session_token", credentials.session_token.as_str()),
        ("region", REGION),
    ];

    for (key, value) in fields {
        run_checked(
            runner,
            &argv(&["configure", "set", key, value, "--profile", profile]),
        )?;
    }

    Ok(())
}
