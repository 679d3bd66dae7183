use crate::cli::analyze::summary::AnalysisSummary;

pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("✔ {} lines parsed\n", summary.lines_parsed));
    out.push_str(&format!("✔ {} clients\n", summary.clients));

    if summary.empty_sessions > 0 {
        out.push_str(&format!(
            "✔ {} sessions ({} without intervals)\n",
            summary.sessions, summary.empty_sessions
        ));
    } else {
        out.push_str(&format!("✔ {} sessions\n", summary.sessions));
    }

    for file in &summary.files {
        out.push_str(&format!("✔ wrote {}\n", file.display()));
    }

    out
}
