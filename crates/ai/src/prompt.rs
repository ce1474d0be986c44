//! Prompt construction for the portfolio analysis report.

use wealthspectrum_core::positions::Position;

/// Upper bound on report length requested from the model, in characters.
pub const REPORT_MAX_CHARS: usize = 300;

/// One line per position, in input order.
pub fn build_portfolio_summary(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| {
            format!(
                "- 类型: {}, 风格: {}, 名称: {}, 金额: {}",
                p.category,
                p.style,
                p.name,
                p.amount.normalize()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full instruction sent to the model: advisor persona, the holdings and
/// the four report sections we expect back.
pub fn build_analysis_prompt(positions: &[Position]) -> String {
    format!(
        "你是一位专业的中国理财顾问。请分析以下用户的投资组合数据。\n\
\n\
数据:\n\
{summary}\n\
\n\
请提供一份简洁的Markdown格式分析报告，包含以下内容：\n\
1. **资产配置分析**: 在A股、海外市场、固收等方面的分散程度如何？\n\
2. **风险评估**: 整体风险等级（高/中/低），主要风险点在哪？\n\
3. **主要观察**: 是否存在行业集中度过高的问题（例如过度集中在医药或白酒）？\n\
4. **优化建议**: 1-2 条具体的平衡建议（例如“考虑增加债券比例以降低波动”）。\n\
\n\
保持语气专业且易懂，适合中国投资者阅读。字数控制在{max_chars}字以内。",
        summary = build_portfolio_summary(positions),
        max_chars = REPORT_MAX_CHARS
    )
}
