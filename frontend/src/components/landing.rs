use crate::gateway;
use crate::web::BrowserDocument;
use esl_portal::{AuthService, ClientConfig};
use esl_portal_shared::{RegisterRequest, UserType};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    Closed,
    Login,
    Register,
}

/// 匿名落地页
///
/// 登录或注册成功后跳转回落地页，由启动序列接管。
#[component]
pub fn LandingPage(config: ClientConfig) -> impl IntoView {
    let config = StoredValue::new(config);
    let (modal, set_modal) = signal(Modal::Closed);
    let (user_type, set_user_type) = signal(UserType::Student);

    let open_register = move |kind: UserType| {
        set_user_type.set(kind);
        set_modal.set(Modal::Register);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center flex-col">
                <h1 class="text-4xl font-bold">"Learn English with live teachers"</h1>
                <p class="text-base-content/70">
                    "Join a classroom, schedule lessons and meet online."
                </p>
                <div class="flex gap-2">
                    <button class="btn btn-outline" on:click=move |_| set_modal.set(Modal::Login)>
                        "Login"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| open_register(UserType::Student)>
                        "I'm a student"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| open_register(UserType::Teacher)>
                        "I'm a teacher"
                    </button>
                </div>
            </div>
        </div>

        <Show when=move || modal.get() == Modal::Login>
            <LoginForm config=config.get_value() on_close=move || set_modal.set(Modal::Closed) />
        </Show>
        <Show when=move || modal.get() == Modal::Register>
            <RegisterForm
                config=config.get_value()
                user_type=user_type.get_untracked()
                on_close=move || set_modal.set(Modal::Closed)
            />
        </Show>
    }
}

#[component]
fn ErrorAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
fn LoginForm(config: ClientConfig, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let config = StoredValue::new(config);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let auth = AuthService::new(gateway(&config.get_value()));
        let (email, password) = (email.get(), password.get());
        spawn_local(async move {
            if let Err(e) = auth.login(&email, &password, &BrowserDocument).await {
                set_error_msg.set(Some(e.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="modal modal-open" on:click=move |_| on_close()>
            <div class="modal-box" on:click=|ev| ev.stop_propagation()>
                <h3 class="font-bold text-lg">"Welcome back"</h3>
                <form class="space-y-4" on:submit=on_submit>
                    <ErrorAlert message=error_msg />
                    <input
                        id="loginEmail"
                        type="email"
                        placeholder="Email"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        required
                    />
                    <input
                        id="loginPassword"
                        type="password"
                        placeholder="Password"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        required
                    />
                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn RegisterForm(
    config: ClientConfig,
    user_type: UserType,
    on_close: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let config = StoredValue::new(config);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let kind = RwSignal::new(user_type);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let form = RegisterRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
            user_type: kind.get(),
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
        };
        let auth = AuthService::new(gateway(&config.get_value()));
        spawn_local(async move {
            if let Err(e) = auth.register(form, &BrowserDocument).await {
                set_error_msg.set(Some(e.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    let text_input = move |id: &'static str, placeholder: &'static str, field: RwSignal<String>| {
        view! {
            <input
                id=id
                type="text"
                placeholder=placeholder
                class="input input-bordered w-full"
                on:input=move |ev| field.set(event_target_value(&ev))
                prop:value=move || field.get()
                required
            />
        }
    };

    view! {
        <div class="modal modal-open" on:click=move |_| on_close()>
            <div class="modal-box" on:click=|ev| ev.stop_propagation()>
                <h3 class="font-bold text-lg">"Create your account"</h3>
                <form class="space-y-4" on:submit=on_submit>
                    <ErrorAlert message=error_msg />
                    <div class="grid grid-cols-2 gap-4">
                        {text_input("firstName", "First name", first_name)}
                        {text_input("lastName", "Last name", last_name)}
                    </div>
                    <input
                        id="registerEmail"
                        type="email"
                        placeholder="Email"
                        class="input input-bordered w-full"
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:value=move || email.get()
                        required
                    />
                    <input
                        id="registerPassword"
                        type="password"
                        placeholder="Password (min. 8 characters)"
                        class="input input-bordered w-full"
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                        required
                    />
                    <select
                        id="userType"
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            kind.set(if value == "teacher" { UserType::Teacher } else { UserType::Student });
                        }
                        prop:value=move || kind.get().to_string()
                    >
                        <option value="student">"Student"</option>
                        <option value="teacher">"Teacher"</option>
                    </select>
                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
