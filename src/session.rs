use crate::constants::{MFA_PROFILE, REGION, REMOTE_RDP_PORT};
use crate::ui;
use anyhow::{Context, Result};
use std::process::Command;

/// Spawns an SSM port-forwarding session to the instance in a new terminal
/// window, then returns. The child is not tracked; closing the spawned
/// terminal is the only way to end the session.
pub fn launch_forwarding_session(instance_id: &str, local_port: u16) -> Result<()> {
    let command = build_forwarding_command(instance_id, local_port);
    spawn_in_terminal(&command)?;

    ui::print_success(&format!("SSM session started for instance {instance_id}."));
    ui::print_info("Use the following details to connect via RDP:");
    ui::print_info("  Host: 127.0.0.1");
    ui::print_info(&format!("  Local Port: {local_port}"));
    ui::print_info(&format!("  Remote Port: {REMOTE_RDP_PORT}"));
    ui::print_info(&format!(
        "In your RDP client, connect to localhost:{local_port}"
    ));

    Ok(())
}

fn build_forwarding_command(instance_id: &str, local_port: u16) -> String {
    format!(
        "aws ssm start-session --target {instance_id} \
         --document-name AWS-StartPortForwardingSession \
         --parameters \"localPortNumber={local_port},portNumber={REMOTE_RDP_PORT}\" \
         --region {REGION} --profile {MFA_PROFILE}"
    )
}

#[cfg(target_os = "windows")]
fn spawn_in_terminal(command: &str) -> Result<()> {
    Command::new("cmd")
        .args(["/C", "start", "cmd", "/K", command])
        .spawn()
        .context("Failed to open a new console window for the forwarding session")?;
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn spawn_in_terminal(command: &str) -> Result<()> {
    let shell_command = format!("{command}; exec bash");
    Command::new("gnome-terminal")
        .args(["--", "bash", "-c", shell_command.as_str()])
        .spawn()
        .context("Failed to open a new terminal for the forwarding session")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_forwarding_command_with_fixed_remote_port() {
        assert_eq!(
            build_forwarding_command("i-abc123", 5000),
            "aws ssm start-session --target i-abc123 \
             --document-name AWS-StartPortForwardingSession \
             --parameters \"localPortNumber=5000,portNumber=3389\" \
             --region us-east-2 --profile mfa"
        );
    }
}
