use crate::ui;
use anyhow::Result;
use dialoguer::Input;
use std::net::{Ipv4Addr, TcpStream};

const MIN_PORT: u16 = 1024;

const INVALID_PORT_MESSAGE: &str =
    "Invalid input. Please enter a valid port number between 1024 and 65535.";

/// Validates a raw port entry: all digits and within [1024, 65535]. The raw
/// string is checked as entered; surrounding whitespace is rejected.
pub fn validate_port(input: &str) -> Result<u16, String> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(INVALID_PORT_MESSAGE.to_string());
    }
    match input.parse::<u32>() {
        Ok(port) if port >= u32::from(MIN_PORT) && port <= u32::from(u16::MAX) => {
            Ok(port as u16)
        }
        _ => Err(INVALID_PORT_MESSAGE.to_string()),
    }
}

/// Connect-probes 127.0.0.1:port with a plain blocking connect. A refused
/// connection means nothing is listening there, so the port is treated as
/// free. This is a heuristic: another process can still claim the port
/// between the probe and the forwarding session binding it.
pub fn is_port_available(port: u16) -> bool {
    TcpStream::connect((Ipv4Addr::LOCALHOST, port)).is_err()
}

/// Prompts until the user supplies a well-formed port that nothing on
/// localhost is currently listening on. Loops indefinitely on bad input.
pub fn choose_available_port() -> Result<u16> {
    loop {
        let input: String = Input::new()
            .with_prompt(
                "Enter the local port number you want to use for the RDP session (1024-65535)",
            )
            .interact_text()?;

        let port = match validate_port(&input) {
            Ok(port) => port,
            Err(reason) => {
                ui::print_warning(&reason);
                continue;
            }
        };

        if !is_port_available(port) {
            ui::print_warning(&format!(
                "Port {port} is already in use. Please choose a different port."
            ));
            continue;
        }

        return Ok(port);
    }
}
