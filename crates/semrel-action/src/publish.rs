use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use semrel_ci::CiPlatform;
use semrel_core::clean_value;
use semrel_engine::ReleaseResult;

use crate::error::Result;

/// Release information derived from the engine result, shaped for export.
///
/// Absent optional fields are carried as empty strings; they export as empty
/// values and disappear from the raw JSON view after sanitization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReleaseSummary {
    pub published: bool,
    pub last: LastInfo,
    pub new: NewInfo,
    pub commits: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastInfo {
    pub version: String,
    pub git_head: String,
    pub git_tag: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInfo {
    pub version: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub channel: String,
    pub git_head: String,
    pub git_tag: String,
    pub name: String,
    pub notes: String,
}

impl ReleaseSummary {
    /// Sanitized JSON view used for the run summary's raw-data section.
    #[must_use]
    pub fn to_raw_value(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        clean_value(&mut value);
        value
    }
}

/// Fixed mapping from exported variable names to summary fields. Step output
/// names are the lower-hyphen form of the same names.
fn export_pairs(summary: &ReleaseSummary) -> [(&'static str, String); 9] {
    [
        ("RELEASE_PUBLISHED", summary.published.to_string()),
        ("RELEASE_VERSION", summary.new.version.clone()),
        ("RELEASE_MAJOR", summary.new.major.clone()),
        ("RELEASE_MINOR", summary.new.minor.clone()),
        ("RELEASE_PATCH", summary.new.patch.clone()),
        ("RELEASE_TYPE", summary.new.release_type.clone()),
        ("RELEASE_GIT_HEAD", summary.new.git_head.clone()),
        ("RELEASE_GIT_TAG", summary.new.git_tag.clone()),
        ("RELEASE_NAME", summary.new.name.clone()),
    ]
}

/// Derives the exportable release summary from the engine result.
#[must_use]
pub fn derive_summary(result: &ReleaseResult) -> ReleaseSummary {
    let last = &result.last_release;
    let next = &result.next_release;

    if let Some(version) = &last.version {
        info!("the last release was \"{version}\"");
    }
    info!(
        "new release: {} of type {}",
        next.version,
        next.release_type.as_deref().unwrap_or("unknown")
    );
    info!("number of commits on new release: {}", result.commits.len());

    let (major, minor, patch) = version_parts(&next.version);

    ReleaseSummary {
        published: true,
        last: LastInfo {
            version: last.version.clone().unwrap_or_default(),
            git_head: last.git_head.clone().unwrap_or_default(),
            git_tag: last.git_tag.clone().unwrap_or_default(),
            name: last.name.clone().unwrap_or_default(),
        },
        new: NewInfo {
            version: next.version.clone(),
            major,
            minor,
            patch,
            release_type: next.release_type.clone().unwrap_or_default(),
            channel: next.channel.clone().unwrap_or_default(),
            git_head: next.git_head.clone().unwrap_or_default(),
            git_tag: next.git_tag.clone().unwrap_or_default(),
            name: next.name.clone().unwrap_or_default(),
            notes: next.notes.clone().unwrap_or_default(),
        },
        commits: result.commits.clone(),
    }
}

fn version_parts(version: &str) -> (String, String, String) {
    if let Ok(parsed) = semver::Version::parse(version) {
        return (
            parsed.major.to_string(),
            parsed.minor.to_string(),
            parsed.patch.to_string(),
        );
    }

    // Not semver: fall back to a plain split so downstream steps still get
    // whatever structure the version string has.
    let mut parts = version.splitn(3, '.');
    let mut next = || parts.next().unwrap_or_default().to_string();
    (next(), next(), next())
}

/// Exports the summary as `RELEASE_*` variables and `release-*` outputs.
pub fn publish_release(
    platform: &dyn CiPlatform,
    result: &ReleaseResult,
) -> Result<ReleaseSummary> {
    let summary = derive_summary(result);

    for (env_key, value) in export_pairs(&summary) {
        let output_key = env_key.to_ascii_lowercase().replace('_', "-");
        platform.export_variable(env_key, &value)?;
        platform.set_output(&output_key, &value)?;
    }

    Ok(summary)
}

/// Signals "no release was warranted" on both export surfaces.
pub fn publish_no_release(platform: &dyn CiPlatform) -> Result<()> {
    debug!("no release published");
    platform.export_variable("RELEASE_PUBLISHED", "false")?;
    platform.set_output("release-published", "false")?;
    Ok(())
}
