//! DOM 宿主实现
//!
//! 核心 crate 通过 trait 描述页面副作用，这里用 `web_sys` 落地。
//! 事件监听器在页面生命周期内常驻，闭包通过 `forget` 交给 JS 持有。

use esl_portal::preference::DARK_THEME_CLASS;
use esl_portal::{DocumentHost, SectionHost, SectionId, ThemeControl, ThemeSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.alert_with_message(message) {
            log::warn!("[Dom] alert failed: {:?}", e);
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.open_with_url_and_target(url, "_blank") {
            log::warn!("[Dom] window.open failed: {:?}", e);
        }
    }
}

pub fn set_display(el: &HtmlElement, display: &str) {
    if let Err(e) = el.style().set_property("display", display) {
        log::warn!("[Dom] set display failed: {:?}", e);
    }
}

/// 注册一个常驻事件监听器
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[Dom] addEventListener('{}') failed: {:?}", event, e);
    }
    closure.forget();
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("[Dom] classList.toggle('{}') failed: {:?}", class, e);
    }
}

// =========================================================
// DocumentHost
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl BrowserDocument {
    fn set_body(html: &str) {
        if let Some(body) = document().and_then(|d| d.body()) {
            body.set_inner_html(html);
        }
    }
}

impl DocumentHost for BrowserDocument {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn show_loading(&self, markup: &str) {
        Self::set_body(markup);
    }

    fn replace_document(&self, html: &str) {
        let Some(doc) = document().and_then(|d| d.dyn_into::<HtmlDocument>().ok()) else {
            log::error!("[Dom] Document is not an HtmlDocument, cannot replace.");
            return;
        };
        // 新文档中的脚本会重新加载本程序并进入面板分支
        let result = doc
            .open()
            .and_then(|_| doc.write_1(html))
            .and_then(|_| doc.close());
        if let Err(e) = result {
            log::error!("[Dom] Document replacement failed: {:?}", e);
        }
    }

    fn show_failure(&self, message: &str) {
        Self::set_body(&format!("<h2>{}</h2>", message));
    }

    fn reload(&self) {
        if let Some(Err(e)) = window().map(|w| w.location().reload()) {
            log::error!("[Dom] reload failed: {:?}", e);
        }
    }

    fn navigate(&self, path: &str) {
        if let Some(Err(e)) = window().map(|w| w.location().set_href(path)) {
            log::error!("[Dom] navigate failed: {:?}", e);
        }
    }
}

// =========================================================
// SectionHost
// =========================================================

/// `.content-section` 区块与 `.nav-item` 导航项
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSections;

pub const SECTION_SELECTOR: &str = ".content-section";
pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
const ACTIVE_CLASS: &str = "active";

impl DomSections {
    /// 页面中声明的区块 id 与标记为激活的那一个
    pub fn discover() -> (Vec<SectionId>, Option<SectionId>) {
        let mut ids = Vec::new();
        let mut initial = None;
        for el in query_all(SECTION_SELECTOR) {
            let id = el.id();
            if id.is_empty() {
                continue;
            }
            let id = SectionId::new(id);
            if initial.is_none() && el.class_list().contains(ACTIVE_CLASS) {
                initial = Some(id.clone());
            }
            ids.push(id);
        }
        (ids, initial)
    }
}

impl SectionHost for DomSections {
    fn set_section_active(&self, id: &SectionId, active: bool) {
        if let Some(el) = by_id::<Element>(id.as_str()) {
            toggle_class(&el, ACTIVE_CLASS, active);
        }
    }

    fn set_control_active(&self, id: &SectionId, active: bool) {
        let selector = format!("{}[href=\"#{}\"]", NAV_ITEM_SELECTOR, id);
        for el in query_all(&selector) {
            toggle_class(&el, ACTIVE_CLASS, active);
        }
    }
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// =========================================================
// Theme
// =========================================================

/// 一个复选框开关及其旁边的图标
pub struct DomThemeSwitch {
    input: HtmlInputElement,
    label: Option<HtmlElement>,
}

impl DomThemeSwitch {
    pub fn find(input_id: &str, label_id: &str) -> Option<Self> {
        Some(Self {
            input: by_id(input_id)?,
            label: by_id(label_id),
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl ThemeControl for DomThemeSwitch {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }

    fn set_label(&self, label: &str) {
        if let Some(el) = &self.label {
            el.set_text_content(Some(label));
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BodySurface;

impl ThemeSurface for BodySurface {
    fn set_dark(&self, dark: bool) {
        if let Some(body) = document().and_then(|d| d.body()) {
            toggle_class(&body, DARK_THEME_CLASS, dark);
        }
    }
}
