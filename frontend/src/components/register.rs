use crate::auth::{AuthError, REGISTER_SUCCESS, follow_up_after_register, register, use_session};
use crate::config::NOTICE_DISMISS_MS;
use crate::forms::{Field, FieldErrors, RegisterForm};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_ctx = use_session();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    // 消息内容, 是否出错
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    // 延迟跳转的定时器，离开页面时取消
    let pending_redirect = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        // 丢弃 Timeout 即取消
        let _ = pending_redirect.try_update_value(Option::take);
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = RegisterForm::new(username.get_untracked(), password.get_untracked());
        set_notice.set(None);
        set_is_submitting.set(true);

        spawn_local(async move {
            let api = session_ctx.api();
            match register(&api, &form).await {
                Ok(next) => {
                    set_field_errors.set(FieldErrors::default());
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_notice.set(Some((REGISTER_SUCCESS.to_string(), false)));
                    // 给用户一点时间看到确认信息再跳转
                    let timer = Timeout::new(NOTICE_DISMISS_MS / 2, move || {
                        let current = router.current_route().get_untracked();
                        if let Some(route) = follow_up_after_register(current, next) {
                            router.navigate_to(route);
                        }
                    });
                    pending_redirect.set_value(Some(timer));
                }
                Err(AuthError::Invalid(errors)) => set_field_errors.set(errors),
                Err(AuthError::Failed(message)) => {
                    set_field_errors.set(FieldErrors::default());
                    set_notice.set(Some((message, true)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field_error = move |field: Field| field_errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Crear Nueva Cuenta"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        {move || notice.get().map(|(msg, is_err)| view! {
                            <div
                                role="alert"
                                class=if is_err { "alert alert-error text-sm py-2" } else { "alert alert-success text-sm py-2" }
                            >
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Nombre de Usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered w-full"
                            />
                            {move || field_error(Field::Username).map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered w-full"
                            />
                            {move || field_error(Field::Password).map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Registrando..." } else { "Registrarme" }}
                            </button>
                        </div>

                        <p class="text-center text-sm mt-2 text-base-content/70">
                            "¿Ya tienes una cuenta? "
                            <Link to=AppRoute::Login class="link link-primary">"Inicia Sesión"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
