//! ESL 教学门户前端
//!
//! 页面在三种形态之间切换，入口 `start` 在每次文档加载时选择其一：
//! - 面板文档（服务端渲染的 HTML）：挂接导航、主题、抽屉与课程列表
//! - 落地页且本地有 token：运行启动序列，用面板替换整个文档
//! - 其他情况：渲染匿名落地页（登录、注册）
//!
//! 业务状态全部在 `esl-portal` 中，这里只负责 DOM 绑定。

mod components {
    pub mod dashboard;
    pub mod landing;
    pub mod lessons;
}

// 原生 Web API 封装模块
pub(crate) mod web;

use crate::components::dashboard;
use crate::components::landing::LandingPage;
use crate::web::{BrowserDocument, ConsoleLogger, FetchHttpClient, LocalStorage};
use esl_portal::config::{VAR_API_BASE, VAR_LANDING_PATH, VAR_LOG_LEVEL, VAR_SIDEBAR_BREAKPOINT};
use esl_portal::{AuthGateway, BootstrapSequencer, ClientConfig, DocumentHost, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub(crate) type Gateway = AuthGateway<FetchHttpClient, LocalStorage>;

/// 构建时注入的配置，未提供时使用默认值
pub fn runtime_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        let value = match key {
            VAR_API_BASE => option_env!("ESL_API_BASE"),
            VAR_LANDING_PATH => option_env!("ESL_LANDING_PATH"),
            VAR_SIDEBAR_BREAKPOINT => option_env!("ESL_SIDEBAR_BREAKPOINT"),
            VAR_LOG_LEVEL => option_env!("ESL_LOG_LEVEL"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

pub(crate) fn gateway(config: &ClientConfig) -> Gateway {
    AuthGateway::new(
        FetchHttpClient,
        SessionStore::new(LocalStorage),
        config.clone(),
    )
}

pub fn start() {
    let config = runtime_config();
    ConsoleLogger::install(config.log_level);

    if dashboard::is_dashboard_document() {
        log::info!("[App] Dashboard document detected.");
        dashboard::attach(config);
        return;
    }

    let gateway = gateway(&config);
    let on_landing = BrowserDocument.current_path() == config.landing_path;
    if on_landing && gateway.session().token().is_some() {
        let sequencer = BootstrapSequencer::new(gateway, BrowserDocument);
        spawn_local(async move {
            let outcome = sequencer.run().await;
            log::info!("[App] Bootstrap finished: {:?}", outcome);
        });
        return;
    }

    mount_to_body(move || view! { <LandingPage config=config.clone() /> });
}
