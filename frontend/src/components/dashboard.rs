//! 面板文档挂接
//!
//! 面板 HTML 由服务端渲染并整页写入，这里只给已有元素绑定行为。
//! 所有监听器常驻到下一次整页替换为止。

use crate::components::lessons;
use crate::web::{
    BodySurface, BrowserDocument, DomSections, DomThemeSwitch, LocalStorage, NAV_ITEM_SELECTOR,
    alert, by_id, document, inner_width, listen, open_in_new_tab, query_all, set_display, window,
};
use crate::{Gateway, gateway};
use esl_portal::loaders::ClassroomActions;
use esl_portal::shared::UserProfile;
use esl_portal::shared::uuid::Uuid;
use esl_portal::{
    AuthService, ClientConfig, PreferenceSynchronizer, SectionNavigator, SidebarDrawer,
    ViewportPolicy,
};
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

const NEW_SESSION_PATH: &str = "/api/classroom/new-session";

const THEME_SWITCHES: [(&str, &str); 2] = [
    ("themeToggle", "themeLabel"),
    ("themeToggleSidebar", "themeLabelSidebar"),
];

/// 面板文档总是带有侧栏
pub fn is_dashboard_document() -> bool {
    by_id::<Element>("sidebar").is_some() || !query_all(".content-section").is_empty()
}

pub fn attach(config: ClientConfig) {
    let gateway = gateway(&config);
    let user = gateway.session().get().user;

    if let Some(user) = &user {
        fill_profile(user);
    }

    let drawer = Rc::new(SidebarDrawer::new(ViewportPolicy::new(
        config.sidebar_breakpoint_px,
    )));
    attach_layout(&drawer, ViewportPolicy::new(config.sidebar_breakpoint_px));
    let on_switch = lessons::attach(&gateway, user, gateway.config().url(NEW_SESSION_PATH));
    attach_navigation(&drawer, on_switch);
    attach_theme();
    attach_profile_menu();
    attach_globals(&gateway);
}

fn fill_profile(user: &UserProfile) {
    let set_text = |id: &str, text: &str| {
        if let Some(el) = by_id::<HtmlElement>(id) {
            el.set_text_content(Some(text));
        }
    };
    // 学生面板用 userName，教师面板用 teacherName
    let name_id = if by_id::<Element>("userName").is_some() {
        "userName"
    } else {
        "teacherName"
    };
    set_text(name_id, &user.first_name);
    set_text("profileName", &user.display_name());
    set_text("profileAvatar", &user.initials());
}

// =========================================================
// Navigation & Layout
// =========================================================

fn attach_navigation(drawer: &Rc<SidebarDrawer>, on_switch: Option<lessons::OnSwitch>) {
    let (sections, initial) = DomSections::discover();
    let Some(nav) = SectionNavigator::new(sections, initial.as_ref(), DomSections) else {
        log::warn!("[Dashboard] No content sections found.");
        return;
    };
    let nav = Rc::new(nav);
    log::debug!("[Dashboard] Navigator ready on '{}'.", nav.active());

    for item in query_all(NAV_ITEM_SELECTOR) {
        let nav = Rc::clone(&nav);
        let drawer = Rc::clone(drawer);
        let on_switch = on_switch.clone();
        let href = item.get_attribute("href").unwrap_or_default();
        listen(&item, "click", move |ev| {
            ev.prevent_default();
            let transition = nav.handle_click(&href);
            if let Some(on_switch) = &on_switch {
                on_switch(&transition);
            }
            drawer.on_nav_click(inner_width());
            render_drawer(&drawer);
        });
    }
}

fn render_drawer(drawer: &SidebarDrawer) {
    let open = drawer.is_open();
    for (id, class) in [("sidebar", "open"), ("sidebarBackdrop", "active")] {
        if let Some(el) = by_id::<Element>(id) {
            if let Err(e) = el.class_list().toggle_with_force(class, open) {
                log::warn!("[Dashboard] toggle {} failed: {:?}", id, e);
            }
        }
    }
}

fn attach_layout(drawer: &Rc<SidebarDrawer>, policy: ViewportPolicy) {
    let update = {
        let drawer = Rc::clone(drawer);
        move || {
            let width = inner_width();
            let flex_or_none = |visible: bool| if visible { "flex" } else { "none" };
            if let Some(el) = by_id::<HtmlElement>("sidebarThemeSwitcher") {
                set_display(&el, flex_or_none(policy.sidebar_theme_switch_visible(width)));
            }
            if let Some(el) = by_id::<HtmlElement>("sidebarToggleBtn") {
                set_display(&el, flex_or_none(policy.drawer_toggle_visible(width)));
            }
            drawer.on_resize(width);
            render_drawer(&drawer);
        }
    };
    update();
    if let Some(w) = window() {
        listen(&w, "resize", move |_| update());
    }

    if let Some(btn) = by_id::<Element>("sidebarToggleBtn") {
        let drawer = Rc::clone(drawer);
        listen(&btn, "click", move |_| {
            drawer.open();
            render_drawer(&drawer);
        });
    }
    if let Some(backdrop) = by_id::<Element>("sidebarBackdrop") {
        let drawer = Rc::clone(drawer);
        listen(&backdrop, "click", move |_| {
            drawer.close();
            render_drawer(&drawer);
        });
    }
}

fn attach_theme() {
    let sync = Rc::new(PreferenceSynchronizer::new(LocalStorage, BodySurface));
    let mut inputs = Vec::new();
    for (input_id, label_id) in THEME_SWITCHES {
        if let Some(switch) = DomThemeSwitch::find(input_id, label_id) {
            let input = switch.input().clone();
            inputs.push((sync.register(Box::new(switch)), input));
        }
    }
    let theme = sync.init();
    log::debug!("[Dashboard] Theme {} with {} switches.", theme.as_str(), sync.control_count());

    for (index, input) in inputs {
        let sync = Rc::clone(&sync);
        listen(&input, "change", move |_| {
            sync.on_toggle(index);
        });
    }
}

fn attach_profile_menu() {
    let Some(menu) = by_id::<Element>("profileMenu") else {
        return;
    };
    let target = menu.clone();
    listen(&target, "click", {
        let menu = menu.clone();
        move |ev| {
            ev.stop_propagation();
            if let Err(e) = menu.class_list().toggle("open") {
                log::warn!("[Dashboard] profile menu toggle failed: {:?}", e);
            }
        }
    });
    // 点击菜单以外的区域时收起
    if let Some(doc) = document() {
        listen(&doc, "click", move |_| {
            if let Err(e) = menu.class_list().remove_1("open") {
                log::warn!("[Dashboard] profile menu close failed: {:?}", e);
            }
        });
    }
}

// =========================================================
// Inline Handlers
// =========================================================

/// 把函数挂到 window 上，供面板标记中的 onclick 调用
pub(crate) fn expose<F>(name: &str, handler: F)
where
    F: FnMut(JsValue) + 'static,
{
    let Some(w) = window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    if let Err(e) = js_sys::Reflect::set(&w, &JsValue::from_str(name), closure.as_ref()) {
        log::warn!("[Dashboard] Could not expose {}: {:?}", name, e);
    }
    closure.forget();
}

fn classroom_arg(value: &JsValue) -> Option<Uuid> {
    value.as_string().and_then(|s| Uuid::parse_str(s.trim()).ok())
}

fn attach_globals(gw: &Gateway) {
    {
        let auth = Rc::new(AuthService::new(gw.clone()));
        expose("logout", move |_| auth.logout(&BrowserDocument));
    }
    {
        let url = gw.config().url(NEW_SESSION_PATH);
        expose("startClass", move |_| open_in_new_tab(&url));
    }

    let actions = Rc::new(ClassroomActions::new(gw.clone()));
    {
        let actions = Rc::clone(&actions);
        expose("requestZoomMeeting", move |arg| {
            let Some(id) = classroom_arg(&arg) else {
                log::warn!("[Dashboard] requestZoomMeeting called without a classroom id.");
                return;
            };
            let actions = Rc::clone(&actions);
            spawn_local(async move {
                match actions.request_meeting(id).await {
                    Ok(msg) => alert(msg),
                    Err(e) => alert(&e.to_string()),
                }
            });
        });
    }
    expose("joinLiveClass", move |arg| {
        let Some(id) = classroom_arg(&arg) else {
            log::warn!("[Dashboard] joinLiveClass called without a classroom id.");
            return;
        };
        let actions = Rc::clone(&actions);
        spawn_local(async move {
            match actions.zoom_join_url(id).await {
                Ok(url) => open_in_new_tab(&url),
                Err(e) => alert(&e.to_string()),
            }
        });
    });
}
