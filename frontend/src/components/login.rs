use crate::auth::{AuthError, login, use_session};
use crate::forms::{Field, FieldErrors, LoginForm};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_ctx = use_session();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (login_error, set_login_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = LoginForm::new(username.get_untracked(), password.get_untracked());
        set_login_error.set(None);
        set_is_submitting.set(true);

        spawn_local(async move {
            let api = session_ctx.api();
            let session = session_ctx.session();
            match login(&api, &session, &form).await {
                Ok(next) => {
                    set_field_errors.set(FieldErrors::default());
                    router.navigate_to(next);
                }
                Err(AuthError::Invalid(errors)) => set_field_errors.set(errors),
                Err(AuthError::Failed(message)) => {
                    set_field_errors.set(FieldErrors::default());
                    set_login_error.set(Some(message));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field_error = move |field: Field| field_errors.with(|e| e.get(field).map(str::to_string));
    let input_class = move |field: Field| {
        if field_error(field).is_some() {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">"Iniciar Sesión"</h1>
                    <p class="text-base-content/70">"Accede a tu cuenta de Kodigo"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <Show when=move || login_error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || login_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Nombre de usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                maxlength="50"
                                autocomplete="username"
                                placeholder="Ingresa tu nombre de usuario"
                                disabled=move || is_submitting.get()
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_login_error.set(None);
                                }
                                prop:value=username
                                class=move || input_class(Field::Username)
                            />
                            {move || field_error(Field::Username).map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    placeholder="Ingresa tu contraseña"
                                    disabled=move || is_submitting.get()
                                    on:input=move |ev| {
                                        set_password.set(event_target_value(&ev));
                                        set_login_error.set(None);
                                    }
                                    prop:value=password
                                    class=move || format!("{} join-item", input_class(Field::Password))
                                />
                                <button
                                    type="button"
                                    tabindex="-1"
                                    class="btn join-item"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Ocultar" } else { "Ver" }}
                                </button>
                            </div>
                            {move || field_error(Field::Password).map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Iniciando sesión..." }.into_any()
                                } else {
                                    "Iniciar Sesión".into_any()
                                }}
                            </button>
                        </div>

                        <div class="text-center text-sm mt-2">
                            <p class="text-base-content/70">
                                "¿No tienes una cuenta? "
                                <Link to=AppRoute::Register class="link link-primary">"Regístrate aquí"</Link>
                            </p>
                            <Link to=AppRoute::Landing class="link text-base-content/60">"Volver al inicio"</Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
