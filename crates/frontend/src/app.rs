use crate::domain::a001_catalog_product::ui::list::CatalogProductList;
use crate::shared::config::AppConfig;
use crate::shared::media_info::MediaInfoProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the application config to the whole tree via context.
    provide_context(AppConfig::default());

    view! {
        <div class="App">
            <MediaInfoProvider>
                <CatalogProductList />
            </MediaInfoProvider>
        </div>
    }
}
