//! Loading seed members from the nested JSON layout the directory was first
//! published in.

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

use crate::domain::{MemberForm, NewMember};

#[derive(Debug, Deserialize)]
struct SeedName {
    first: String,
    last: String,
    furikana: String,
    nickname: String,
}

#[derive(Debug, Deserialize)]
struct SeedImage {
    #[serde(default)]
    full: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedMember {
    name: SeedName,
    #[serde(default)]
    image: Option<SeedImage>,
    role: String,
    #[serde(rename = "part-time-job", default)]
    part_time_job: Option<String>,
    description: String,
    age: i32,
    #[serde(rename = "join-reason")]
    join_reason: String,
    goal: String,
    message: String,
}

impl TryFrom<SeedMember> for NewMember {
    type Error = color_eyre::eyre::Report;

    /// Seed entries pass the same checks as a registration form.
    fn try_from(seed: SeedMember) -> Result<Self> {
        let label = format!("{} {}", seed.name.first, seed.name.last);

        let form = MemberForm {
            first_name: seed.name.first,
            last_name: seed.name.last,
            furigana: seed.name.furikana,
            nickname: seed.name.nickname,
            role: seed.role,
            part_time_job: seed.part_time_job.unwrap_or_default(),
            description: seed.description,
            age: seed.age.to_string(),
            join_reason: seed.join_reason,
            goal: seed.goal,
            message: seed.message,
            image: seed.image.map(|image| image.full).unwrap_or_default(),
            avatar: None,
        };
        let submission = form.parse().wrap_err_with(|| {
            format!("Invalid seed member '{}'", label.trim())
        })?;

        Ok(NewMember::new(
            submission.profile,
            submission.image.unwrap_or_default(),
        ))
    }
}

pub fn parse_seed_members(json: &str) -> Result<Vec<NewMember>> {
    let seeds: Vec<SeedMember> =
        serde_json::from_str(json).wrap_err("Malformed seed file")?;
    seeds.into_iter().map(NewMember::try_from).collect()
}

pub fn load_seed_members(path: &Path) -> Result<Vec<NewMember>> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    parse_seed_members(&json)
}
