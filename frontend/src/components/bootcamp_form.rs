//! Bootcamp 表单组件
//!
//! 创建和编辑共用同一个表单：提交前本地校验，校验通过后把请求体交给父组件。
//! 是否清空由父组件在请求结束后决定。

mod form_state;

pub use form_state::FormState;

use kodigo_shared::BootcampPayload;
use leptos::prelude::*;

use crate::forms::Field;

#[component]
pub fn BootcampFormCard(
    state: FormState,
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<BootcampPayload>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    /// 输入框占位提示
    #[prop(optional)]
    with_placeholders: bool,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.submitting.get_untracked() {
            return;
        }
        match state.to_form().validate() {
            Ok(payload) => {
                state.errors.set(Default::default());
                on_submit.run(payload);
            }
            Err(errors) => state.errors.set(errors),
        }
    };

    let field_error = move |field: Field| state.errors.with(|e| e.get(field).map(str::to_string));
    let placeholder = move |text: &'static str| if with_placeholders { text } else { "" };

    view! {
        <form on:submit=handle_submit class="card bg-base-100 shadow-md p-4 mb-4 space-y-3" novalidate>
            <h3 class="font-bold text-lg">{title}</h3>

            <div class="form-control">
                <label class="label"><span class="label-text">"Nombre"</span></label>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder=placeholder("Full Stack Junior")
                    on:input=move |ev| state.name.set(event_target_value(&ev))
                    prop:value=move || state.name.get()
                />
                {move || field_error(Field::Name).map(|msg| view! {
                    <span class="label-text-alt text-error mt-1">{msg}</span>
                })}
            </div>

            <div class="form-control">
                <label class="label"><span class="label-text">"Descripción"</span></label>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder=placeholder("Programa intensivo...")
                    on:input=move |ev| state.description.set(event_target_value(&ev))
                    prop:value=move || state.description.get()
                />
                {move || field_error(Field::Description).map(|msg| view! {
                    <span class="label-text-alt text-error mt-1">{msg}</span>
                })}
            </div>

            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Tecnologías (separadas por coma)"</span>
                </label>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder=placeholder("HTML, CSS, JS, React, Node")
                    on:input=move |ev| state.technologies.set(event_target_value(&ev))
                    prop:value=move || state.technologies.get()
                />
            </div>

            <div class="flex gap-2">
                <button type="submit" class="btn btn-primary" disabled=move || state.submitting.get()>
                    {move || if state.submitting.get() { "Guardando...".to_string() } else { submit_label.clone() }}
                </button>
                {on_cancel.map(|cancel| view! {
                    <button type="button" class="btn btn-ghost" on:click=move |_| cancel.run(())>
                        "Cancelar"
                    </button>
                })}
            </div>
        </form>
    }
}
