//! Inventory App
//!
//! Root component: builds the store, starts the gesture loop and lays out
//! toolbar, table and modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpItemRepository;
use crate::components::{InventoryTable, ItemModal, StatusBanner, Toolbar};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::dispatcher::{gesture_channel, Dispatcher, Gesture};
use crate::store::{InventoryState, StoreView};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(InventoryState::default());
    provide_context(store);

    let (gestures, queue) = gesture_channel();
    provide_context(AppContext::new(gestures.clone()));

    let config = ClientConfig::from_window();
    log::info!("Using inventory service at {}", config.api_base);
    let export_filename = config.export_filename.clone();
    let dispatcher = Dispatcher::new(
        HttpItemRepository::new(config),
        StoreView::new(store),
        export_filename,
    );

    // Single consumer: gestures are handled strictly one after another
    spawn_local(async move {
        let _ = dispatcher.run(queue).await;
    });

    gestures.send(Gesture::RefreshClick);

    view! {
        <div class="container inventory-app">
            <h1>"Inventory"</h1>
            <StatusBanner />
            <Toolbar />
            <InventoryTable />
            <ItemModal />
        </div>
    }
}
