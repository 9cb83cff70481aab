//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Zenscape");

    // Selection page
    m.insert(Key::SelectionHeading, "选择你的声景");
    m.insert(Key::SelectionSubheading, "选一个主题，或描述你想放松的地方。");
    m.insert(Key::CustomThemePlaceholder, "雾气笼罩的山间湖泊...");
    m.insert(Key::Generate, "生成");
    m.insert(Key::Loading, "正在创建会话...");

    // Theme presets
    m.insert(Key::ThemeOcean, "海洋");
    m.insert(Key::ThemeForest, "森林");
    m.insert(Key::ThemeRain, "雨天");
    m.insert(Key::ThemeFireplace, "壁炉");
    m.insert(Key::ThemeNight, "夜晚");

    // Player page
    m.insert(Key::PlayAll, "全部播放");
    m.insert(Key::PauseAll, "全部暂停");
    m.insert(Key::Back, "返回");
    m.insert(Key::Layers, "声音图层");
    m.insert(Key::NoLayers, "此会话没有声音图层。");
    m.insert(Key::LayerLoading, "加载中");
    m.insert(Key::LayerUnavailable, "不可用");
    m.insert(Key::SilentOutputNotice, "未找到音频输出设备，播放将无声。");

    // Dialogs
    m.insert(Key::AlertUnavailableTitle, "服务不可用");
    m.insert(Key::AlertUnavailableMessage, "与 Zen 服务的连接中断，请稍后再试。");
    m.insert(Key::ErrorMalformedTitle, "响应异常");
    m.insert(Key::ErrorMalformedMessage, "会话服务返回了无法解析的数据。");
    m.insert(Key::ErrorConfigTitle, "配置问题");
    m.insert(Key::ErrorConfigMessage, "设置中的会话服务器地址无效。");
    m.insert(Key::Dismiss, "确定");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
