use crate::structs::history_item::HistoryItem;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub struct AnalysisReportLogger {}

impl AnalysisReportLogger {
    // Above 70 is a strong match, above 40 is workable, the rest needs work.
    fn score_color(score: f64) -> &'static str {
        if score > 70.0 {
            GREEN
        } else if score > 40.0 {
            YELLOW
        } else {
            RED
        }
    }

    pub fn print_analysis_report(item: &HistoryItem) {
        let analysis = &item.result.analysis;

        println!("\n📊 RESUME ANALYSIS REPORT");
        println!("{}", "=".repeat(60));
        println!("📄 File: {}", item.file_name);
        if let Some(job_title) = &analysis.job_title {
            println!("🎯 Role: {}", job_title);
        }
        println!("🕐 Date: {}", item.result.date);

        println!();
        println!(
            "  Job match:      {}{:.0}/100{}",
            Self::score_color(analysis.job_match_score),
            analysis.job_match_score,
            RESET
        );
        println!(
            "  Resume quality: {}{:.0}/100{}",
            Self::score_color(analysis.resume_quality_score),
            analysis.resume_quality_score,
            RESET
        );

        if !analysis.matched_skills.is_empty() {
            println!("\n✅ Matched skills:");
            for skill in &analysis.matched_skills {
                println!("  • {}", skill);
            }
        }

        if !analysis.missing_skills.is_empty() {
            println!("\n❌ Missing skills:");
            for skill in &analysis.missing_skills {
                println!("  • {}", skill);
            }
        }

        if !analysis.suggestions.is_empty() {
            println!("\n💡 Suggestions:");
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                println!("  {}. {}", i + 1, suggestion);
            }
        }

        if !analysis.alternative_roles.is_empty() {
            println!("\n🔀 Alternative roles:");
            for role in &analysis.alternative_roles {
                println!("  • {}", role);
            }
        }

        println!("\n📝 {}", analysis.summary);
        println!("{}", "=".repeat(60));
    }

    pub fn print_history(items: &[HistoryItem], detailed: bool) {
        if items.is_empty() {
            println!("📭 No history found");
            println!("💡 Analyze a resume to see it here.");
            return;
        }

        println!("\n📜 ANALYSIS HISTORY ({} total):", items.len());
        println!("{}", "=".repeat(60));

        for (i, item) in items.iter().enumerate() {
            let analysis = &item.result.analysis;
            let role = analysis.job_title.as_deref().unwrap_or("Unknown role");

            println!(
                "{}. [{}{:.0}%{}] {} - {} ({})",
                i + 1,
                Self::score_color(analysis.job_match_score),
                analysis.job_match_score,
                RESET,
                item.file_name,
                role,
                item.result.date
            );

            if detailed {
                println!("    ✅ Matched: {}", analysis.matched_skills.join(", "));
                println!("    ❌ Missing: {}", analysis.missing_skills.join(", "));
                for suggestion in analysis.suggestions.iter().take(3) {
                    println!("    💡 {}", suggestion);
                }
                println!("    📝 {}", analysis.summary);
                println!();
            }
        }
    }
}
