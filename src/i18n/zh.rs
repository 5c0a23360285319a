//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Tubelens");

    // Header
    m.insert(Key::HeaderTitle, "YouTube 播放列表分析");
    m.insert(Key::HeaderSubtitle, "洞察你喜爱的播放列表");

    // Input Form
    m.insert(Key::UrlPlaceholder, "输入 YouTube 播放列表链接");
    m.insert(
        Key::UrlInvalidHint,
        "请输入以 http:// 或 https:// 开头的有效链接",
    );
    m.insert(Key::AnalyzeButton, "分析播放列表");
    m.insert(Key::AnalyzingButton, "分析中...");

    // Loading
    m.insert(Key::LoadingMessage, "正在获取播放列表数据...");

    // Video List
    m.insert(Key::VideoListTitle, "视频列表");
    m.insert(Key::ViewsSuffix, "次观看");

    // Chart
    m.insert(Key::ViewCountGraphTitle, "观看次数图表");
    m.insert(Key::ChartLegendViews, "观看次数");
    m.insert(Key::ChartNoData, "该播放列表没有图表数据");

    // Empty State
    m.insert(Key::EmptyTitle, "暂无播放列表数据");
    m.insert(
        Key::EmptyDescription,
        "在上方输入 YouTube 播放列表链接并点击“分析播放列表”，即可查看视频数据。",
    );
    m.insert(Key::GoToInput, "前往输入框");

    // Errors
    m.insert(Key::ErrorFetchFailed, "获取播放列表数据失败");
    m.insert(Key::ErrorMalformedResponse, "分析服务返回了无法识别的数据");
    m.insert(Key::ErrorClientUnavailable, "分析服务配置有误");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
