use std::fmt::Write;

use crate::publish::ReleaseSummary;

/// Renders the human-readable run summary published to the workflow page.
#[must_use]
pub fn render(summary: &ReleaseSummary) -> String {
    let mut out = String::from("# Release Information\n\n");

    if summary.published {
        out.push_str("🎉 A new release has been published!\n");
    } else {
        out.push_str("⚠️ No new release has been published.\n");
    }

    out.push_str("\n## New Release\n\n");
    if summary.published {
        let new = &summary.new;
        out.push_str("| Version | Type | Tag | Git Head |\n");
        out.push_str("| ------- | ---- | --- | -------- |\n");
        let _ = writeln!(
            out,
            "| {} | `{}` | {} | `{}` |",
            new.version, new.release_type, new.git_tag, new.git_head
        );

        if !new.notes.is_empty() {
            let _ = write!(
                out,
                "\n<details><summary>Notes</summary>\n\n{}\n\n</details>\n",
                new.notes
            );
        }
    } else {
        out.push_str("No new release published.\n");
    }

    out.push_str("\n## Previous Release\n\n");
    if summary.last.version.is_empty() {
        out.push_str("No previous release found.\n");
    } else {
        let last = &summary.last;
        out.push_str("| Version | Tag | Git Head |\n");
        out.push_str("| ------- | --- | -------- |\n");
        let _ = writeln!(
            out,
            "| {} | {} | `{}` |",
            last.version, last.git_tag, last.git_head
        );
    }

    out.push_str("\n## Raw Data\n\n```json\n");
    out.push_str(
        &serde_json::to_string_pretty(&summary.to_raw_value()).unwrap_or_default(),
    );
    out.push_str("\n```\n");

    out
}
