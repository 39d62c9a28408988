use clap::Args;
use serde::Serialize;

use armature::config::{self, AppConfig};
use armature::license;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub command: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub license: String,
    pub copyright: String,
    pub known_licenses: Vec<&'static str>,
}

pub fn run_json(_args: ConfigArgs) -> CmdResult<ConfigOutput> {
    let path = config::config_path()?.to_string_lossy().to_string();
    let config = AppConfig::load()?;

    Ok((
        ConfigOutput {
            command: "config",
            path,
            author: config.author.clone(),
            license: config.license_id().to_string(),
            copyright: config.copyright_line(),
            known_licenses: license::known_ids(),
        },
        0,
    ))
}
