use rust_decimal_macros::dec;

use super::{AssetCategory, Position};

/// Demo portfolio shown before the user enters their own holdings.
pub fn sample_portfolio() -> Vec<Position> {
    let a_share = AssetCategory::AShare.label();
    vec![
        Position::new(
            "1",
            AssetCategory::Overseas.label(),
            "互联网/科技",
            "交银海外中国互联网 (164906)",
            dec!(3420.00),
        ),
        Position::new("2", a_share, "主要消费", "易方达消费行业 (110022)", dec!(2690.00)),
        Position::new("3", a_share, "医药医疗", "华宝医疗ETF联接A (162412)", dec!(324.00)),
        Position::new("4", a_share, "医药医疗", "广发医药卫生联接A (001180)", dec!(505.28)),
        Position::new("5", a_share, "科技传媒", "广发中证传媒ETF联接A (004752)", dec!(240.00)),
        Position::new("6", a_share, "主要消费", "富国消费主题混合A (519915)", dec!(319.98)),
        Position::new("7", a_share, "医药医疗", "大摩健康产业混合A (002708)", dec!(699.76)),
        Position::new(
            "8",
            AssetCategory::Bonds.label(),
            "利率债",
            "广发中债1-3年国开债A (006486)",
            dec!(100.00),
        ),
        Position::new("9", a_share, "高端制造", "中欧中证机器人指数A (020255)", dec!(1500.00)),
        Position::new("10", a_share, "周期资源", "嘉实中证稀土ETF联接A (011035)", dec!(2000.00)),
    ]
}
