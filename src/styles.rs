/// 样式常量定义
pub mod styles {
    // 布局样式
    pub const FLEX_BETWEEN: &str = "flex items-center justify-between";

    // 文本样式
    pub const TEXT_BODY: &str = "text-sm text-slate-300";
    pub const TEXT_MUTED: &str = "text-sm text-slate-400";
    pub const TEXT_FOOTNOTE: &str = "text-xs text-slate-500";
}

/// 常用样式组合
pub mod combinations {
    // 卡片样式
    pub const CARD_BASE: &str = "rounded-xl bg-gradient-to-br from-slate-800/50 to-slate-900/50 border border-slate-700/50 backdrop-blur-sm shadow-lg";
    pub const CARD_HOVER: &str =
        "hover:scale-[1.02] hover:-translate-y-1 transition-all duration-200 cursor-pointer";
    pub const CARD_SECTION: &str = "px-6 py-4";
    pub const CARD_HEADER_DIVIDER: &str = "border-b border-slate-700/50";
    pub const CARD_FOOTER_DIVIDER: &str = "border-t border-slate-700/50";
    pub const CARD_TITLE: &str = "text-lg font-semibold text-slate-100";
    pub const CARD_SUBTITLE: &str = "text-sm text-slate-400";

    // 布局样式
    pub const PAGE_CONTAINER: &str = "space-y-6";
    pub const PAGE_TITLE: &str = "text-2xl font-bold text-slate-100";
    pub const PAGE_SUBTITLE: &str = "text-sm text-slate-400";
    pub const SECTION_LABEL: &str =
        "px-1 py-2 text-xs font-semibold text-slate-400 uppercase tracking-wider";
    pub const CARD_GRID: &str = "grid grid-cols-1 lg:grid-cols-3 gap-6";
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tailwind_fuse::tw_merge;

    use super::combinations::*;

    #[test]
    fn test_card_base_covers_glass_treatment() {
        for token in [
            "rounded-xl",
            "from-slate-800/50",
            "to-slate-900/50",
            "border-slate-700/50",
            "backdrop-blur-sm",
            "shadow-lg",
        ] {
            assert!(CARD_BASE.contains(token), "CARD_BASE missing {token}");
        }
    }

    #[test]
    fn test_hover_combo_carries_motion_and_affordance() {
        for token in [
            "hover:scale-[1.02]",
            "hover:-translate-y-1",
            "duration-200",
            "cursor-pointer",
        ] {
            assert!(CARD_HOVER.contains(token), "CARD_HOVER missing {token}");
        }
        assert!(!CARD_BASE.contains("hover:"));
    }

    #[test]
    fn test_later_class_wins_on_conflict() {
        let merged = tw_merge!(CARD_SECTION, "py-2");
        assert!(merged.contains("px-6"));
        assert!(merged.contains("py-2"));
        assert!(!merged.contains("py-4"));
    }

    #[test]
    fn test_merge_keeps_input_order() {
        let merged = tw_merge!(CARD_BASE, "demo-marker");
        assert!(merged.ends_with("demo-marker"));
        assert!(merged.starts_with("rounded-xl"));
    }

    #[test]
    fn test_absent_caller_class_contributes_nothing() {
        let merged = tw_merge!(CARD_SECTION, None::<String>);
        assert_eq!(merged, CARD_SECTION);
    }
}
