/// AWS CLI config key holding the user's MFA device ARN.
pub const MFA_ARN_CONFIG_KEY: &str = "mfa_device_arn";

/// Profile used for the session-token exchange itself.
pub const SOURCE_PROFILE: &str = "default";

/// Profile the temporary credentials are written to.
pub const MFA_PROFILE: &str = "mfa";

/// Region written alongside the temporary credentials and used for sessions.
pub const REGION: &str = "us-east-2";

/// Remote port forwarded on the target instance (RDP).
pub const REMOTE_RDP_PORT: u16 = 3389;
