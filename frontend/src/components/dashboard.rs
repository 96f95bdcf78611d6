use crate::auth::use_session;
use crate::bootcamps::{EditState, Snapshot, deactivate_prompt, mutate_then_refresh, refresh};
use crate::components::bootcamp_card::BootcampCard;
use crate::components::bootcamp_form::{BootcampFormCard, FormState};
use kodigo_shared::{Bootcamp, BootcampPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_ctx = use_session();

    let (bootcamps, set_bootcamps) = signal(Vec::<Bootcamp>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (editing, set_editing) = signal(EditState::default());

    let create_form = FormState::new();
    let edit_form = FormState::new();

    let apply = move |snapshot: Snapshot| {
        set_bootcamps.set(snapshot.bootcamps);
        set_error.set(snapshot.error);
        set_loading.set(false);
    };

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let api = session_ctx.api();
            apply(refresh(&api).await);
        });
    };

    // 初始加载
    load();

    let handle_create = move |payload: BootcampPayload| {
        create_form.submitting.set(true);
        spawn_local(async move {
            let api = session_ctx.api();
            let outcome = mutate_then_refresh(&api, api.create_bootcamp(payload)).await;
            if outcome.saved.is_ok() {
                create_form.reset();
            }
            apply(outcome.snapshot);
            create_form.submitting.set(false);
        });
    };

    let handle_update = move |payload: BootcampPayload| {
        let Some(target) = editing.with_untracked(|e| e.target().cloned()) else {
            return;
        };
        edit_form.submitting.set(true);
        spawn_local(async move {
            let api = session_ctx.api();
            let outcome =
                mutate_then_refresh(&api, api.update_bootcamp(&target.id, payload)).await;
            set_editing.update(|e| e.finish(&outcome.saved));
            apply(outcome.snapshot);
            edit_form.submitting.set(false);
        });
    };

    let handle_edit = move |record: Bootcamp| {
        edit_form.fill(&record);
        set_editing.update(|e| e.select(record));
    };

    let handle_deactivate = move |record: Bootcamp| {
        let confirmed = window()
            .confirm_with_message(&deactivate_prompt(&record))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = session_ctx.api();
            let outcome = mutate_then_refresh(&api, api.deactivate_bootcamp(&record.id)).await;
            apply(outcome.snapshot);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">"Dashboard de Bootcamps (Privado)"</h2>
                    <button class="btn btn-ghost btn-sm" disabled=move || loading.get() on:click=move |_| load()>
                        "Recargar"
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div>
                        <BootcampFormCard
                            state=create_form
                            title="Agregar Bootcamp"
                            submit_label="Crear"
                            on_submit=handle_create
                            with_placeholders=true
                        />
                        <Show when=move || editing.with(EditState::is_editing)>
                            <BootcampFormCard
                                state=edit_form
                                title="Editar Bootcamp"
                                submit_label="Guardar cambios"
                                on_submit=handle_update
                                on_cancel=Callback::new(move |_| set_editing.update(EditState::cancel))
                            />
                        </Show>
                    </div>

                    <div class="lg:col-span-2">
                        <Show when=move || loading.get()>
                            <div class="alert alert-info">"Cargando..."</div>
                        </Show>
                        <Show when=move || !loading.get() && bootcamps.with(Vec::is_empty)>
                            <p class="text-base-content/60">"No hay bootcamps para mostrar."</p>
                        </Show>
                        // 列表是快照，每次拉取后整体重建
                        {move || {
                            bootcamps
                                .get()
                                .into_iter()
                                .map(|record| view! {
                                    <BootcampCard
                                        record=record
                                        on_edit=handle_edit
                                        on_deactivate=handle_deactivate
                                    />
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
