//! # Render Report Use Case
//!
//! 月次活動レポートのMarkdown組み立て
//!
//! レジストリ文書と期間から文字列を構築するだけの純粋な処理。
//! リンクは構築するのみで、ネットワークアクセスは行わない。

use chrono::NaiveDate;

use crate::domain::entities::repository_descriptor::RegistryDocument;
use crate::domain::services::estimates::EstimateService;
use crate::domain::services::period::PeriodCalculator;
use crate::error::Result;

const NONE_CONFIGURED: &str = "_No repositories configured._";

/// レポート生成ユースケース
pub struct RenderReportUseCase;

impl RenderReportUseCase {
    /// 月次レポートをMarkdownとして組み立てる
    ///
    /// # Arguments
    ///
    /// * `document` - レジストリ文書
    /// * `month_key` - 対象月 ("YYYY-MM")
    /// * `previous_month_key` - 前月の明示指定（省略時は計算）
    /// * `generated_on` - フッターに記す生成日（情報提供のみ）
    ///
    /// # Errors
    ///
    /// 月キーが解釈できない場合に `InvalidPeriod` を返す
    pub fn render(
        document: &RegistryDocument,
        month_key: &str,
        previous_month_key: Option<&str>,
        generated_on: Option<NaiveDate>,
    ) -> Result<String> {
        let period = PeriodCalculator::resolve(month_key, previous_month_key)?;
        let summary = EstimateService::summarize(document);

        let mut report = String::new();

        report.push_str(&format!("# Monthly Report for {}\n\n", period.month_name));

        report.push_str("## 🎯 Executive Summary\n");
        report.push_str(&format!(
            "This report provides a comprehensive overview of development activities across our key repositories for {}.\n\n",
            period.month_name
        ));
        report.push_str("---\n\n");

        report.push_str("## 🔗 Repository Activity Links\n\n");
        if document.is_empty() {
            report.push_str(NONE_CONFIGURED);
            report.push_str("\n\n");
        } else {
            for repo in &document.repositories {
                report.push_str(&format!("### {}\n", repo.name));
                report.push_str(&format!(
                    "- **Repository**: [{}]({})\n",
                    repo.slug(),
                    repo.html_url()
                ));
                report.push_str(&format!(
                    "- **Commit History**: [View {} commits]({})\n",
                    period.month_name,
                    repo.commits_url(&period.start_date, &period.end_date)
                ));
                report.push_str(&format!(
                    "- **Pull Requests**: [View {} PRs]({})\n\n",
                    period.month_name,
                    repo.pulls_url(&period.start_date, &period.end_date)
                ));
            }
        }
        report.push_str("---\n\n");

        report.push_str("## 📈 Quick Stats\n");
        report.push_str(&format!(
            "- **Reporting Period**: {}\n",
            period.range_label()
        ));
        report.push_str(&format!(
            "- **Previous Month**: {}\n",
            period.previous_month_name
        ));
        report.push_str(&format!("- **Repositories Tracked**: {}\n\n", document.len()));
        report.push_str("---\n\n");

        report.push_str("## 🛠️ Development Metrics\n\n");
        report.push_str("### Repository Comparison\n");
        report.push_str("| Repository | Commits | PRs | Issues | Stars |\n");
        report.push_str("|------------|---------|-----|--------|-------|\n");
        if document.is_empty() {
            report.push_str("| _None configured_ | - | - | - | - |\n");
        } else {
            for repo in &document.repositories {
                report.push_str(&format!(
                    "| {} | [View]({}) | [View]({}) | [View]({}) | [View]({}) |\n",
                    repo.name,
                    repo.commits_url(&period.start_date, &period.end_date),
                    repo.pulls_url(&period.start_date, &period.end_date),
                    repo.issues_url(&period.start_date, &period.end_date),
                    repo.stargazers_url()
                ));
            }
        }
        report.push_str("\n---\n\n");

        report.push_str("## 💰 Estimates Summary\n");
        if summary.has_data() {
            report.push_str(&format!(
                "- **Total Estimate**: ${}\n",
                format_amount(summary.total)
            ));
            report.push_str(&format!("- **Average Estimate**: ${}\n", summary.average));
            report.push_str(&format!(
                "- **Repositories with Estimates**: {} of {}\n\n",
                summary.with_estimate,
                document.len()
            ));
        } else {
            // 見積もり導入前のレジストリでは金額を出さない
            report.push_str("No estimate data recorded for the tracked repositories.\n\n");
        }
        report.push_str("---\n\n");

        report.push_str("## 🔍 Detailed Analysis\n\n");
        if document.is_empty() {
            report.push_str(NONE_CONFIGURED);
            report.push_str("\n\n");
        } else {
            for repo in &document.repositories {
                report.push_str(&format!("### {}\n", repo.name));
                report.push_str(&format!("- **Focus**: {}\n", repo.focus));
                report.push_str(&format!(
                    "- **Key Areas**: {}\n",
                    repo.key_areas.join(", ")
                ));
                report.push_str(
                    "- **Recent Activity**: Check commit history for latest developments\n\n",
                );
            }
        }
        report.push_str("---\n\n");

        report.push_str("## 🎯 Next Steps\n");
        report.push_str("1. Review commit activity across all repositories\n");
        report.push_str("2. Analyze pull request trends and code review processes\n");
        report.push_str("3. Monitor issue resolution and bug fixes\n");
        report.push_str("4. Track community engagement and contributions\n\n");
        report.push_str("---\n\n");

        if let Some(date) = generated_on {
            report.push_str(&format!(
                "*Report generated on {}*\n",
                date.format("%Y-%m-%d")
            ));
        }
        report.push_str("*For detailed analytics, visit the individual repository links above.*\n");

        Ok(report)
    }
}

/// 金額表示（整数で収まるなら小数点以下を出さない）
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount:.2}")
    }
}
