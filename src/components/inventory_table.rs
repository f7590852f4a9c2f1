//! Inventory Table Component
//!
//! One row per item. Edit and delete buttons carry their row's id directly.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_inventory_store, InventoryStateStoreFields};

#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = use_inventory_store();
    let ctx = use_app_context();

    view! {
        <table class="table inventory-table">
            <thead>
                <tr>
                    <th scope="col">"ID"</th>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Description"</th>
                    <th scope="col">"Quantity"</th>
                    <th scope="col">"Actions"</th>
                </tr>
            </thead>
            <tbody id="inventory-table-data">
                <For
                    each=move || store.rows().get()
                    key=|row| row.render_key()
                    children=move |row| {
                        let edit_id = row.id.clone();
                        let delete_id = row.id.clone();
                        let edit_ctx = ctx.clone();
                        let delete_ctx = ctx.clone();

                        view! {
                            <tr data-id=row.id.clone()>
                                <th scope="row">{row.id.clone()}</th>
                                <td>{row.name.clone()}</td>
                                <td>{row.description.clone()}</td>
                                <td>{row.quantity.clone()}</td>
                                <td>
                                    <button
                                        type="button"
                                        class="btn btn-primary buttonEdit"
                                        title="Edit Item"
                                        on:click=move |_| edit_ctx.edit(edit_id.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-danger buttonDelete"
                                        title="Delete Item"
                                        on:click=move |_| delete_ctx.delete(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <p class="item-count">{move || format!("{} items", store.rows().read().len())}</p>
    }
}
