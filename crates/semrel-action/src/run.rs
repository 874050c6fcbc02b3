use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use semrel_ci::CiPlatform;
use semrel_ci::inputs::{self, get_boolean_input, get_input};
use semrel_config::{ConfigLoader, get_options};
use semrel_core::ReleaseOptions;
use semrel_engine::ReleaseEngine;

use crate::error::Result;
use crate::publish::{self, ReleaseSummary};
use crate::summary;

/// GitHub's unexpanded expression placeholder, seen when a workflow passes
/// the raw template string through instead of an expanded path.
const WORKSPACE_PLACEHOLDER: &str = "${{ github.workspace }}";

/// Drives one release run: resolve configuration, assemble options, invoke
/// the engine, publish the result, then apply the gated side effects.
pub fn run(
    platform: &dyn CiPlatform,
    loader: &ConfigLoader,
    engine: &dyn ReleaseEngine,
    path_override: Option<PathBuf>,
) -> Result<()> {
    let work_dir = path_override.unwrap_or_else(|| resolve_work_dir(platform));
    info!("working directory: {}", work_dir.display());

    let config = loader.load(platform, &work_dir);
    match &config {
        Some(config) => info!(
            "config: {}",
            serde_json::to_string_pretty(config).unwrap_or_default()
        ),
        None => info!("config: none"),
    }

    let options = get_options(platform, config.as_ref());

    let Some(result) = engine.run(&options, &work_dir)? else {
        return publish::publish_no_release(platform);
    };

    let release = publish::publish_release(platform, &result)?;

    if options.is_dry_run() {
        debug!("dry run: skipping floating tags and summary");
        return Ok(());
    }

    if get_boolean_input(platform, &inputs::FLOATING_TAGS) {
        set_floating_tags(&release, &work_dir, &options);
    }

    if get_boolean_input(platform, &inputs::ADD_SUMMARY) {
        platform.add_summary(&summary::render(&release))?;
    }

    Ok(())
}

fn resolve_work_dir(platform: &dyn CiPlatform) -> PathBuf {
    let input = get_input(platform, &inputs::WORKING_PATH);
    if input == inputs::WORKING_PATH.default || input == WORKSPACE_PLACEHOLDER {
        PathBuf::from(".")
    } else {
        PathBuf::from(input)
    }
}

/// Best-effort floating tags: a failure here never fails the run.
fn set_floating_tags(release: &ReleaseSummary, work_dir: &Path, options: &ReleaseOptions) {
    let new = &release.new;
    if new.major.is_empty() || new.minor.is_empty() || new.git_head.is_empty() {
        debug!("floating tags cannot be set");
        return;
    }

    let credentials = options.git_credentials.clone().unwrap_or_default();
    match semrel_git::set_floating_tags(
        work_dir,
        &new.major,
        &new.minor,
        &new.git_head,
        &credentials.committer_name,
        &credentials.committer_email,
    ) {
        Ok(tags) => info!("floating tags set: {}, {}", tags.major_tag, tags.minor_tag),
        Err(err) => error!("unable to set floating tags: {err}"),
    }
}
