use leptos::prelude::*;

use crate::store::{use_inventory_store, InventoryStateStoreFields};

/// Failures from refresh, export, delete and edit-open
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_inventory_store();

    view! {
        <Show when=move || store.status().read().is_some()>
            <div class="alert alert-warning status-banner" role="alert">
                {move || store.status().get().unwrap_or_default()}
            </div>
        </Show>
    }
}
