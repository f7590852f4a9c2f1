//! Item Modal Component
//!
//! The single create/edit form. Title, submit styling and the id field all
//! follow the session mode; inputs are reset from the session whenever the
//! dispatcher publishes a new one.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::modal::FormFields;
use crate::store::{use_inventory_store, InventoryStateStoreFields};

#[component]
pub fn ItemModal() -> impl IntoView {
    let store = use_inventory_store();
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());

    // Populate inputs from the session (cleared on create, item values on edit,
    // submitted values after a rejection)
    Effect::new(move |_| {
        let session = store.session().get();
        let form = session.form();
        set_name.set(form.name.clone());
        set_description.set(form.description.clone());
        set_quantity.set(form.quantity.clone());
    });

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_ctx.submit(FormFields {
            name: name.get_untracked(),
            description: description.get_untracked(),
            quantity: quantity.get_untracked(),
        });
    };

    let close_ctx = ctx.clone();
    let close = move |_: web_sys::MouseEvent| close_ctx.close();
    let close_footer = move |_: web_sys::MouseEvent| ctx.close();

    view! {
        <Show when=move || store.session().read().is_open()>
            <div class="modal-backdrop"></div>
            <div class="modal d-block" id="modal" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <form class="modal-content" id="modalForm" on:submit=on_submit.clone()>
                        <div class="modal-header">
                            <h5 class="modal-title" id="modalTitle">
                                {move || store.session().read().title()}
                            </h5>
                            <button
                                type="button"
                                class="btn-close modalCloseButton"
                                title="Close"
                                on:click=close.clone()
                            ></button>
                        </div>
                        <div class="modal-body">
                            <Show when=move || store.session().read().alert().is_some()>
                                <div class="alert alert-danger" id="modalAlert" role="alert">
                                    {move || {
                                        store.session().read().alert().unwrap_or_default().to_string()
                                    }}
                                </div>
                            </Show>
                            <label for="modalInputID">"ID"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="modalInputID"
                                readonly=true
                                placeholder=move || store.session().read().id_placeholder()
                                prop:value=move || store.session().read().id_value()
                            />
                            <label for="modalInputName">"Name"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="modalInputName"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <label for="modalInputDescription">"Description"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="modalInputDescription"
                                placeholder="Description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            />
                            <label for="modalInputQuantity">"Quantity"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-control"
                                id="modalInputQuantity"
                                placeholder="Quantity"
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary modalCloseButton"
                                on:click=close_footer.clone()
                            >
                                "Close"
                            </button>
                            <button
                                type="submit"
                                class=move || store.session().read().submit_class()
                            >
                                {move || store.session().read().submit_label()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
