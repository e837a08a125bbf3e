//! 主题与配色

use ratatui::style::Color;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    #[allow(dead_code)]
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Light" => Theme::Light,
            _ => Theme::Dark, // 默认 Dark
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 弱化文字（描述、提示等）
    pub text_dim: Color,
    /// 成功色
    pub success: Color,
    /// 错误色
    pub error: Color,
    /// 警告色
    pub warning: Color,
    /// 边框色
    pub border: Color,
}

/// 获取主题对应的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors {
            bg: Color::Rgb(24, 26, 32),
            bg_secondary: Color::Rgb(44, 48, 58),
            highlight: Color::Rgb(122, 162, 247),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(120, 126, 140),
            success: Color::Rgb(158, 206, 106),
            error: Color::Rgb(247, 118, 142),
            warning: Color::Rgb(224, 175, 104),
            border: Color::Rgb(70, 76, 90),
        },
        Theme::Light => ThemeColors {
            bg: Color::Rgb(245, 245, 245),
            bg_secondary: Color::Rgb(222, 226, 234),
            highlight: Color::Rgb(46, 89, 168),
            text: Color::Rgb(40, 44, 52),
            text_dim: Color::Rgb(130, 136, 148),
            success: Color::Rgb(62, 128, 52),
            error: Color::Rgb(186, 52, 72),
            warning: Color::Rgb(166, 120, 36),
            border: Color::Rgb(168, 174, 186),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("whatever"), Theme::Dark);
    }

    #[test]
    fn test_label_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_name(theme.label()), theme);
        }
    }
}
