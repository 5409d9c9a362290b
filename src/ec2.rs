use crate::runner::{argv, run_checked, CommandRunner};
use crate::ui;
use anyhow::{Context, Result};

const DESCRIBE_QUERY: &str =
    "Reservations[*].Instances[*].[InstanceId,Tags[?Key=='Name'].Value|[0]]";

/// One discovered instance. `name` is the Name tag value when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub instance_id: String,
    pub name: Option<String>,
}

impl InstanceRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

/// Lists the instances visible under the given profile, in the order the
/// describe call returns them.
pub fn list_instances(
    runner: &dyn CommandRunner,
    profile: &str,
) -> Result<Vec<InstanceRecord>> {
    let stdout = run_checked(
        runner,
        &argv(&[
            "ec2",
            "describe-instances",
            "--query",
            DESCRIBE_QUERY,
            "--output",
            "json",
            "--profile",
            profile,
        ]),
    )?;

    parse_instances(&stdout)
}

/// Decodes the projected describe-instances output: an array of reservation
/// entries, each wrapping its instances as `[instanceId, nameTag|null]`
/// pairs. Only the first instance of each reservation is taken. A null name
/// is tolerated; a missing instance id should not occur in well-formed output
/// and is downgraded to a warning rather than a failure.
pub fn parse_instances(raw: &str) -> Result<Vec<InstanceRecord>> {
    let reservations: Vec<Vec<Vec<Option<String>>>> = serde_json::from_str(raw)
        .context("Unexpected response shape from ec2 describe-instances")?;

    let mut records = Vec::with_capacity(reservations.len());
    for reservation in reservations {
        let fields = reservation.into_iter().next().unwrap_or_default();
        let instance_id = match fields.first().cloned().flatten() {
            Some(id) => id,
            None => {
                ui::print_warning("Instance entry is missing an instance id.");
                "Unknown".to_string()
            }
        };
        let name = fields.get(1).cloned().flatten();
        records.push(InstanceRecord { instance_id, name });
    }

    Ok(records)
}

pub fn display_instances(records: &[InstanceRecord]) {
    for (index, record) in records.iter().enumerate() {
        println!("{}", format_line(index + 1, record));
    }
}

fn format_line(position: usize, record: &InstanceRecord) -> String {
    format!(
        "{}. Instance ID: {}, Name: {}",
        position,
        record.instance_id,
        record.display_name()
    )
}
