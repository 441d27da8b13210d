//! 教师面板的课程列表、排课视图与新建课程对话框
//!
//! 两个列表共用一个 `ListState` 信号，一次抓取同时刷新两者。

use crate::Gateway;
use crate::components::dashboard::expose;
use crate::web::{SECTION_SELECTOR, alert, by_id, document, listen, open_in_new_tab, set_display};
use crate::web::{FetchHttpClient, LocalStorage};
use esl_portal::loaders::{
    ClassroomLoader, ClassroomOption, LessonCard, LessonForm, LessonLoader, ListState, ListView,
    SectionRefresh, SubmitOutcome, classroom_options, lesson_list_view, schedule_view,
    submit_lesson,
};
use esl_portal::{SectionId, SystemClock, Transition};
use esl_portal::shared::{Lesson, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const LESSON_LIST_ID: &str = "teacherLessonList";
const SCHEDULE_LIST_ID: &str = "teacherScheduleList";
const MODAL_ID: &str = "createLessonModal";
const FORM_ID: &str = "createLessonForm";
const CLASSROOM_SELECT_ID: &str = "lessonClassroom";
const MSG_SIGN_IN_AGAIN: &str = "Please sign in again to schedule lessons.";

type Loader = LessonLoader<FetchHttpClient, LocalStorage>;

/// 导航切换后的回调，由面板的导航监听器调用
pub type OnSwitch = Rc<dyn Fn(&Transition)>;

// =========================================================
// Form State
// =========================================================

/// 对话框中的输入框，提交时按 id 读取当前值
struct FormFields;

impl FormFields {
    fn value(id: &str) -> String {
        let Some(el) = by_id::<Element>(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn read() -> LessonForm {
        LessonForm {
            title: Self::value("lessonTitle"),
            description: Self::value("lessonDescription"),
            classroom_id: Self::value(CLASSROOM_SELECT_ID),
            scheduled_at: Self::value("lessonDateTime"),
        }
    }
}

fn show_modal(visible: bool) {
    if let Some(modal) = by_id::<HtmlElement>(MODAL_ID) {
        set_display(&modal, if visible { "block" } else { "none" });
    }
}

fn fill_classroom_select(options: &[ClassroomOption]) {
    let (Some(select), Some(doc)) = (by_id::<HtmlSelectElement>(CLASSROOM_SELECT_ID), document())
    else {
        return;
    };
    select.set_inner_html("");
    for option in options {
        let Ok(el) = doc.create_element("option") else {
            continue;
        };
        if let Err(e) = el.set_attribute("value", &option.value) {
            log::warn!("[Lessons] option value failed: {:?}", e);
        }
        el.set_text_content(Some(&option.label));
        if let Err(e) = select.append_child(&el) {
            log::warn!("[Lessons] append option failed: {:?}", e);
        }
    }
}

// =========================================================
// Attach
// =========================================================

/// 挂接课程列表；返回的回调在切换进列表所在区块时重新抓取
pub fn attach(
    gateway: &Gateway,
    teacher: Option<UserProfile>,
    start_url: String,
) -> Option<OnSwitch> {
    let lesson_list = by_id::<HtmlElement>(LESSON_LIST_ID);
    let schedule_list = by_id::<HtmlElement>(SCHEDULE_LIST_ID);
    if lesson_list.is_none() && schedule_list.is_none() {
        return None;
    }
    let sections: Vec<SectionId> = [&lesson_list, &schedule_list]
        .into_iter()
        .flatten()
        .filter_map(enclosing_section)
        .collect();

    let state = RwSignal::new(ListState::<Lesson>::NotLoaded);
    if let Some(el) = lesson_list {
        el.set_inner_html("");
        leptos::mount::mount_to(el, move || {
            view! { <LessonList state=state start_url=start_url /> }
        })
        .forget();
    }
    if let Some(el) = schedule_list {
        el.set_inner_html("");
        leptos::mount::mount_to(el, move || view! { <ScheduleList state=state /> }).forget();
    }

    let loader = Rc::new(LessonLoader::new(gateway.clone()));
    {
        let loader = Rc::clone(&loader);
        spawn_local(async move { state.set(loader.load().await) });
    }

    attach_dialog(gateway, Rc::clone(&loader), state, teacher);

    let refresh = Rc::new(SectionRefresh::new(sections, loader));
    let on_switch: OnSwitch = Rc::new(move |transition: &Transition| {
        let refresh = Rc::clone(&refresh);
        let transition = transition.clone();
        spawn_local(async move {
            if let Some(next) = refresh.on_transition(&transition).await {
                state.set(next);
            }
        });
    });
    Some(on_switch)
}

fn enclosing_section(el: &HtmlElement) -> Option<SectionId> {
    let section = el.closest(SECTION_SELECTOR).ok().flatten()?;
    let id = section.id();
    (!id.is_empty()).then(|| SectionId::new(id))
}

fn attach_dialog(
    gateway: &Gateway,
    loader: Rc<Loader>,
    state: RwSignal<ListState<Lesson>>,
    teacher: Option<UserProfile>,
) {
    let classrooms = Rc::new(ClassroomLoader::new(gateway.clone()));
    expose("openCreateLessonModal", move |_| {
        // 先只放占位项，加载失败时保持这样
        fill_classroom_select(&classroom_options(&ListState::NotLoaded));
        show_modal(true);
        let classrooms = Rc::clone(&classrooms);
        spawn_local(async move {
            fill_classroom_select(&classroom_options(&classrooms.load().await));
        });
    });
    expose("closeCreateLessonModal", |_| show_modal(false));

    let Some(form) = by_id::<Element>(FORM_ID) else {
        return;
    };
    let Some(teacher) = teacher else {
        log::warn!("[Lessons] No signed-in teacher, lesson form disabled.");
        // 表单永远不走原生提交
        listen(&form, "submit", |ev| {
            ev.prevent_default();
            alert(MSG_SIGN_IN_AGAIN);
        });
        return;
    };
    let teacher = Rc::new(teacher);
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let fields = FormFields::read();
        let loader = Rc::clone(&loader);
        let teacher = Rc::clone(&teacher);
        spawn_local(async move {
            match submit_lesson(&*loader, &fields, &*teacher, &SystemClock).await {
                SubmitOutcome::Created { refreshed, .. } => {
                    show_modal(false);
                    state.set(refreshed);
                }
                SubmitOutcome::Invalid(msg) | SubmitOutcome::Rejected(msg) => alert(&msg),
            }
        });
    });
}

// =========================================================
// Views
// =========================================================

fn status_line(msg: &'static str, error: bool) -> AnyView {
    let color = if error { "color:#ef4444;" } else { "color:#64748b;" };
    view! { <div style=color>{msg}</div> }.into_any()
}

#[component]
fn LessonList(state: RwSignal<ListState<Lesson>>, start_url: String) -> impl IntoView {
    let start_url = StoredValue::new(start_url);
    move || match state.with(lesson_list_view) {
        ListView::Pending => status_line("Loading...", false),
        ListView::Empty(msg) => status_line(msg, false),
        ListView::Error(msg) => status_line(msg, true),
        ListView::Items(cards) => cards
            .into_iter()
            .map(|card| view! { <LessonCardView card=card start_url=start_url.get_value() /> })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn LessonCardView(card: LessonCard, start_url: String) -> impl IntoView {
    let classroom = card.classroom_id.to_string();
    view! {
        <div class="lesson-card">
            <h4>{card.title}</h4>
            <p>{card.description}</p>
            <p><b>"Classroom: "</b>{classroom}</p>
            <p><b>"Scheduled: "</b>{card.when}</p>
            <div class="lesson-actions">
                <button
                    class="btn btn-outline"
                    on:click=move |_| open_in_new_tab(&start_url)
                >
                    "Start"
                </button>
            </div>
        </div>
    }
}

/// 即将开始的课程，每次重新渲染时按当前时间筛选
#[component]
fn ScheduleList(state: RwSignal<ListState<Lesson>>) -> impl IntoView {
    move || match state.with(|s| schedule_view(s, &SystemClock)) {
        ListView::Pending => status_line("Loading...", false),
        ListView::Empty(msg) => status_line(msg, false),
        ListView::Error(msg) => status_line(msg, true),
        ListView::Items(cards) => cards
            .into_iter()
            .map(|card| {
                view! {
                    <div class="schedule-card">
                        <h4>{card.title}</h4>
                        <p>{card.description}</p>
                        <p><b>"When: "</b>{card.when}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    }
}
