mod config;
mod constants;
mod ec2;
mod port;
mod runner;
mod session;
mod sts;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use constants::MFA_PROFILE;
use runner::{AwsCliRunner, CommandRunner};

#[derive(Parser)]
#[command(name = "aws-mfa-session")]
#[command(
    about = "Obtain MFA-backed temporary AWS credentials and open an SSM port-forwarding session to an EC2 instance"
)]
#[command(version)]
struct Cli {}

/// Everything the flow needs to ask the user, so the orchestration can run
/// against scripted answers in tests.
trait Interact {
    fn prompt(&mut self, message: &str) -> Result<String>;
    fn choose_port(&mut self) -> Result<u16>;
}

/// Production interaction: dialoguer prompts and the live port probe loop.
struct Console;

impl Interact for Console {
    fn prompt(&mut self, message: &str) -> Result<String> {
        ui::prompt(message)
    }

    fn choose_port(&mut self) -> Result<u16> {
        port::choose_available_port()
    }
}

/// Outcome of a completed flow: which instance to forward to, on which port.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ForwardingRequest {
    instance_id: String,
    local_port: u16,
}

fn main() {
    let _cli = Cli::parse();
    if let Err(error) = run() {
        ui::print_error(&format!("{error:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let runner = AwsCliRunner;
    let mut console = Console;

    match establish_forwarding(&runner, &mut console)? {
        Some(request) => {
            session::launch_forwarding_session(&request.instance_id, request.local_port)
        }
        None => Ok(()),
    }
}

/// The linear flow: read-or-prompt the MFA ARN, exchange a one-time code for
/// temporary credentials, write them to the `mfa` profile, list instances,
/// and let the user pick an instance and a free local port. Returns `None`
/// when no instances are visible.
fn establish_forwarding(
    runner: &dyn CommandRunner,
    io: &mut dyn Interact,
) -> Result<Option<ForwardingRequest>> {
    let mfa_arn = match config::get_mfa_arn(runner)? {
        Some(arn) => arn,
        None => {
            ui::print_warning("MFA device ARN not found in the AWS configuration.");
            let arn = io.prompt("Enter your MFA device ARN")?;
            config::store_mfa_arn(runner, &arn)?;
            ui::print_success("MFA device ARN stored successfully in the AWS configuration.");
            arn
        }
    };

    let mfa_code = io.prompt("Enter your MFA code")?;
    let credentials = sts::get_session_token(runner, &mfa_arn, &mfa_code)?;

    // The profile must be fully written before any call that runs under it.
    config::set_profile_credentials(runner, MFA_PROFILE, &credentials)?;
    ui::print_success(&format!(
        "Temporary credentials have been set for the '{MFA_PROFILE}' profile."
    ));
    ui::print_info(&format!(
        "Credentials will expire on: {}",
        credentials.expiration
    ));

    let instances = ec2::list_instances(runner, MFA_PROFILE)?;
    if instances.is_empty() {
        ui::print_warning("No instances available for this user.");
        return Ok(None);
    }

    ec2::display_instances(&instances);

    let choice: usize = io
        .prompt(&format!(
            "Enter the number of the instance you want to start an SSM session for (1-{})",
            instances.len()
        ))?
        .trim()
        .parse()
        .context("Instance selection must be a number")?;

    let selected = choice
        .checked_sub(1)
        .and_then(|index| instances.get(index))
        .ok_or_else(|| anyhow!("Instance selection {choice} is out of range"))?;

    let local_port = io.choose_port()?;

    Ok(Some(ForwardingRequest {
        instance_id: selected.instance_id.clone(),
        local_port,
    }))
}
