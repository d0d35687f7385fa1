use crate::dashboards::{FranchiseOverviewDashboard, ProductCatalogDashboard};
use crate::shared::icons::icon;
use leptos::prelude::*;
// Plain signal-driven navigation, no Router components

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    FranchiseOverview,
    ProductCatalog,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let current_page = RwSignal::new(Page::FranchiseOverview);

    let nav_class = move |page: Page| {
        if current_page.get() == page {
            "app-nav__item app-nav__item--active"
        } else {
            "app-nav__item"
        }
    };

    view! {
        <div class="app-shell">
            <nav class="app-nav">
                <span class="app-nav__brand">"Dashboards"</span>
                <button
                    class=move || nav_class(Page::FranchiseOverview)
                    on:click=move |_| current_page.set(Page::FranchiseOverview)
                >
                    {icon("bar-chart")}
                    " Franchise Overview"
                </button>
                <button
                    class=move || nav_class(Page::ProductCatalog)
                    on:click=move |_| current_page.set(Page::ProductCatalog)
                >
                    {icon("products")}
                    " Product Catalog"
                </button>
            </nav>

            <main class="app-content">
                <Show
                    when=move || current_page.get() == Page::FranchiseOverview
                    fallback=|| view! { <ProductCatalogDashboard /> }
                >
                    <FranchiseOverviewDashboard />
                </Show>
            </main>
        </div>
    }
}
