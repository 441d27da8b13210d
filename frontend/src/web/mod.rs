//! 原生 Web API 封装模块
//!
//! 此模块提供核心 crate 中各个 trait 的 `web_sys` 实现，
//! 不引入 gloo-* 系列 crate，以减小 WASM 二进制体积。

mod dom;
mod http;
mod logger;
mod storage;

pub use dom::{
    BodySurface, BrowserDocument, DomSections, DomThemeSwitch, NAV_ITEM_SELECTOR, SECTION_SELECTOR,
    alert, by_id, document, inner_width, listen, open_in_new_tab, query_all, set_display, window,
};
pub use http::FetchHttpClient;
pub use logger::ConsoleLogger;
pub use storage::LocalStorage;
