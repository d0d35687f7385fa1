use crate::dashboards::d101_product_catalog::api;
use crate::shared::chart_js::BarChart;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::components::table::number_format::format_number_with_decimals;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d101_product_catalog::{
    category_averages, category_averages_chart, distinct_categories, filter_catalog, parse_bound,
    summarize_catalog, CatalogFilter, CatalogSummary, CategorySelector, Product,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const APPLY_DELAY_MS: u32 = 500;

/// Product catalog: summary cards, category-average chart and a
/// filterable product table.
#[component]
pub fn ProductCatalogDashboard() -> impl IntoView {
    // Full catalog, loaded once and immutable afterwards
    let (catalog, set_catalog) = signal(None::<Vec<Product>>);
    // Current derived view
    let (filtered, set_filtered) = signal(Vec::<Product>::new());
    let (summary, set_summary) = signal(None::<CatalogSummary>);
    let (applying, set_applying) = signal(false);

    // Filter controls (bounds stay raw strings, parsed on apply)
    let category = RwSignal::new("All".to_string());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let min_rating = RwSignal::new(String::new());

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let chart = StoredValue::new_local(None::<BarChart>);

    let recompute = move || {
        let Some(products) = catalog.get_untracked() else {
            return;
        };

        let filter = CatalogFilter {
            category: CategorySelector::parse(&category.get_untracked()),
            min_price: parse_bound(&min_price.get_untracked()),
            max_price: parse_bound(&max_price.get_untracked()),
            min_rating: parse_bound(&min_rating.get_untracked()),
            max_rating: None,
        };

        let subset = filter_catalog(&products, &filter);
        let averages = category_averages(&subset);
        let chart_view = category_averages_chart(&averages);

        match chart.get_value() {
            Some(existing) => {
                if let Err(err) = existing.update(&chart_view) {
                    log::error!("Failed to update category chart: {:?}", err);
                }
            }
            None => {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    match BarChart::create(&canvas, &chart_view, "Category", "Average Price ($)") {
                        Ok(instance) => chart.set_value(Some(instance)),
                        Err(err) => log::error!("Failed to create category chart: {:?}", err),
                    }
                }
            }
        }

        set_summary.set(Some(summarize_catalog(&subset, &products)));
        set_filtered.set(subset);
    };

    // Initial load (once)
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_products().await {
                Ok(products) => {
                    set_catalog.set(Some(products));
                    recompute();
                }
                Err(err) => {
                    // Known gap: log only, page stays uninitialized
                    log::error!("Failed to load product catalog: {}", err);
                }
            }
        });
    });

    // Same single in-flight guard as the franchise dashboard
    let apply = move || {
        if applying.get_untracked() {
            return;
        }
        set_applying.set(true);
        spawn_local(async move {
            TimeoutFuture::new(APPLY_DELAY_MS).await;
            recompute();
            set_applying.set(false);
        });
    };

    let category_options = Signal::derive(move || {
        let mut options = vec![("All".to_string(), "All".to_string())];
        if let Some(products) = catalog.get() {
            for cat in distinct_categories(&products) {
                options.push((cat.clone(), cat));
            }
        }
        options
    });

    let item_count = Signal::derive(move || summary.get().map(|s| s.item_count as f64));
    let mean_price = Signal::derive(move || summary.get().map(|s| s.mean_price));
    let mean_rating = Signal::derive(move || summary.get().map(|s| s.mean_rating));
    let category_count = Signal::derive(move || summary.get().map(|s| s.category_count as f64));

    view! {
        <PageFrame page_id="d101_product_catalog--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">"Product Catalog"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-card-grid">
                    <StatCard
                        label="Products".to_string()
                        icon_name="products".to_string()
                        value=item_count
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Average Price".to_string()
                        icon_name="dollar-sign".to_string()
                        value=mean_price
                        format=ValueFormat::Usd
                    />
                    <StatCard
                        label="Average Rating".to_string()
                        icon_name="star".to_string()
                        value=mean_rating
                        format=ValueFormat::Number { decimals: 2 }
                    />
                    <StatCard
                        label="Categories".to_string()
                        icon_name="grid".to_string()
                        value=category_count
                        format=ValueFormat::Integer
                    />
                </div>

                <div class="dashboard__filters">
                    <Select
                        label="Category"
                        value=category
                        on_change=Callback::new(move |v: String| category.set(v))
                        options=category_options
                    />
                    <Input
                        label="Min Price"
                        value=min_price
                        on_input=Callback::new(move |v: String| min_price.set(v))
                        placeholder="no minimum"
                    />
                    <Input
                        label="Max Price"
                        value=max_price
                        on_input=Callback::new(move |v: String| max_price.set(v))
                        placeholder="no maximum"
                    />
                    <Input
                        label="Min Rating"
                        value=min_rating
                        on_input=Callback::new(move |v: String| min_rating.set(v))
                        placeholder="no minimum"
                    />
                    <Button
                        loading=applying
                        on_click=Callback::new(move |_| apply())
                    >
                        "Apply Filter"
                    </Button>
                </div>

                <div class="dashboard__chart">
                    <canvas node_ref=canvas_ref></canvas>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th class="text-center">"Price"</th>
                            <th class="text-center">"Rating"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|product| product.id
                            children=move |product| {
                                let rating = match &product.rating {
                                    Some(r) => format!(
                                        "{} ({})",
                                        format_number_with_decimals(r.rate, 1),
                                        r.count
                                    ),
                                    None => "—".to_string(),
                                };
                                view! {
                                    <tr class="data-table__row">
                                        <td>{product.id}</td>
                                        <td>{product.title.clone()}</td>
                                        <td>{product.category.clone()}</td>
                                        <td class="text-center">
                                            {format!("${}", format_number_with_decimals(product.price, 2))}
                                        </td>
                                        <td class="text-center">{rating}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
