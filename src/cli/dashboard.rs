//! Dashboard command implementation

use std::path::PathBuf;

use anyhow::Result;

use studybuddy::config::Config;
use studybuddy::dashboard::DashboardView;

use super::open_app;

const PROGRESS_BAR_WIDTH: usize = 30;

/// Print the progress dashboard as text or JSON
pub fn dashboard_command(config: &Config, data_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let app = open_app(config, data_dir)?;
    let view = DashboardView::build(app.snapshot());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&view));
    }

    Ok(())
}

/// Plain-text dashboard
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    let level = &view.level;
    let stats = &view.stats;

    out.push_str(&format!("Welcome back, {}!\n\n", view.user_name));
    out.push_str(&format!("Level {} - {}\n", level.level, level.title));
    out.push_str(&format!(
        "{} {}/{} XP\n\n",
        progress_bar(level.percent),
        level.xp,
        level.next_level_xp
    ));

    out.push_str(&format!("  Total XP:       {}\n", stats.total_xp));
    out.push_str(&format!("  Today:          {} XP, {} cards\n", stats.daily_xp, stats.daily_cards));
    out.push_str(&format!("  Streak:         {} days\n", stats.current_streak));
    out.push_str(&format!("  Cards mastered: {}\n", stats.cards_mastered));
    out.push_str(&format!("  Accuracy:       {}%\n", stats.accuracy_rate));

    out.push_str("\nBadges:\n");
    for badge in &view.badges {
        let mark = if badge.earned { badge.icon } else { "  " };
        out.push_str(&format!("  {} {}\n", mark, badge.name));
    }

    if !view.heatmap.is_empty() {
        out.push_str("\nSubjects:\n");
        for cell in &view.heatmap {
            out.push_str(&format!(
                "  {:<12} {:>3}%  {}\n",
                cell.subject,
                cell.accuracy,
                cell.class.as_str()
            ));
        }
    }

    out.push_str("\nLeaderboard:\n");
    for row in &view.leaderboard {
        let marker = if row.is_current_user { " <- you" } else { "" };
        out.push_str(&format!("  #{} {:<10} {:>6} XP{}\n", row.rank, row.name, row.xp, marker));
    }

    if !view.recommendations.is_empty() {
        out.push_str("\nRecommended practice:\n");
        for rec in &view.recommendations {
            out.push_str(&format!(
                "  {} ({}%): {} cards\n",
                rec.subject, rec.accuracy, rec.recommended_cards
            ));
        }
    }

    out
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
