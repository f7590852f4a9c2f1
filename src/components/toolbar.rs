//! Toolbar Component
//!
//! Create / Refresh / Export buttons above the table.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let (create_ctx, refresh_ctx, export_ctx) = (ctx.clone(), ctx.clone(), ctx);

    view! {
        <div class="toolbar">
            <button
                type="button"
                id="buttonCreate"
                class="btn btn-success"
                on:click=move |_| create_ctx.create()
            >
                "Create"
            </button>
            <button
                type="button"
                id="buttonRefresh"
                class="btn btn-secondary"
                on:click=move |_| refresh_ctx.refresh()
            >
                "Refresh"
            </button>
            <button
                type="button"
                id="buttonExport"
                class="btn btn-info"
                on:click=move |_| export_ctx.export()
            >
                "Export CSV"
            </button>
        </div>
    }
}
