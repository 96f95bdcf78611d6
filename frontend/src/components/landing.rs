use crate::auth::use_session;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let is_authenticated = use_session().is_authenticated_signal();

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">"Bienvenido a Kodigo App"</h1>
                    <p class="py-6 text-base-content/70">
                        "Descubre nuestros bootcamps y aprende a programar de manera eficiente."
                    </p>
                    <Show
                        when=move || is_authenticated.get()
                        fallback=|| view! {
                            <div class="flex justify-center gap-2">
                                <Link to=AppRoute::Register class="btn btn-primary">"Comenzar"</Link>
                                <Link to=AppRoute::Login class="btn btn-ghost">"Iniciar Sesión"</Link>
                            </div>
                        }
                    >
                        <Link to=AppRoute::Dashboard class="btn btn-primary">"Ir al Dashboard"</Link>
                    </Show>
                </div>
            </div>
        </div>
        <footer class="footer footer-center p-4 text-base-content/60">
            <p>"© 2025 Kodigo App. Todos los derechos reservados."</p>
        </footer>
    }
}
