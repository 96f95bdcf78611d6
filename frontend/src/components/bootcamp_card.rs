use kodigo_shared::Bootcamp;
use leptos::prelude::*;

/// 单条 Bootcamp 记录
#[component]
pub fn BootcampCard(
    record: Bootcamp,
    #[prop(into)] on_edit: Callback<Bootcamp>,
    #[prop(into)] on_deactivate: Callback<Bootcamp>,
) -> impl IntoView {
    let active = record.active;
    let technologies = record.technologies.join(", ");
    let for_edit = record.clone();
    let for_deactivate = record.clone();

    view! {
        <div class="card bg-base-100 shadow-sm mb-3">
            <div class="card-body flex-row justify-between items-start">
                <div>
                    <h4 class="card-title">
                        {record.name}
                        {(!active).then(|| view! { <span class="badge badge-neutral">"Desactivado"</span> })}
                    </h4>
                    <p>{record.description}</p>
                    {(!technologies.is_empty()).then(|| view! {
                        <p class="text-sm text-base-content/60">"Tecnologías: " {technologies.clone()}</p>
                    })}
                </div>
                <div class="flex flex-col gap-2">
                    <button
                        class="btn btn-outline btn-primary btn-sm"
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        "Editar"
                    </button>
                    <button
                        class="btn btn-outline btn-error btn-sm"
                        disabled=!active
                        on:click=move |_| on_deactivate.run(for_deactivate.clone())
                    >
                        {if active { "Desactivar" } else { "Desactivado" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
