use crate::dashboards::d100_franchise_overview::api;
use crate::shared::chart_js::BarChart;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::components::table::number_format::{format_count, format_inr};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::{parse_input_value, to_input_value};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d100_franchise_overview::{
    aggregate, parse_date_range, FranchiseDataset, FranchiseSelector, FranchiseView,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Simulated latency before a filter action lands, so the spinner is
/// actually visible.
const APPLY_DELAY_MS: u32 = 800;

/// Franchise overview: summary cards, filterable bar chart and table.
#[component]
pub fn FranchiseOverviewDashboard() -> impl IntoView {
    // Raw dataset, loaded once and immutable afterwards
    let (dataset, set_dataset) = signal(None::<FranchiseDataset>);
    // Current derived view, replaced wholesale on every filter action
    let (view_data, set_view_data) = signal(None::<FranchiseView>);
    let (applying, set_applying) = signal(false);

    // Filter controls
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let franchise = RwSignal::new("All".to_string());

    // Chart instance is a JS handle, not Send+Sync, store locally
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let chart = StoredValue::new_local(None::<BarChart>);

    // Recompute the derived view from the current dataset + controls and
    // push it into the chart and the table.
    let recompute = move || {
        let Some(data) = dataset.get_untracked() else {
            return;
        };
        let (Some(start), Some(end)) = (
            parse_input_value(&date_from.get_untracked()),
            parse_input_value(&date_to.get_untracked()),
        ) else {
            log::warn!("Skipping recompute: date range is incomplete");
            return;
        };

        let selector = FranchiseSelector::parse(&franchise.get_untracked());
        let view = aggregate(&data, start, end, &selector);
        let chart_view = view.to_chart_view();

        match chart.get_value() {
            Some(existing) => {
                if let Err(err) = existing.update(&chart_view) {
                    log::error!("Failed to update franchise chart: {:?}", err);
                }
            }
            None => {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    match BarChart::create(&canvas, &chart_view, "Franchise Name", "Amount (₹)") {
                        Ok(instance) => chart.set_value(Some(instance)),
                        Err(err) => log::error!("Failed to create franchise chart: {:?}", err),
                    }
                }
            }
        }

        set_view_data.set(Some(view));
    };

    // Initial load (once): fetch the dataset, seed the date pickers from
    // the summary's default range, render the initial view.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_dashboard_data().await {
                Ok(data) => {
                    if let Ok((start, end)) = parse_date_range(&data.dashboard_summary.date_range)
                    {
                        date_from.set(to_input_value(start));
                        date_to.set(to_input_value(end));
                    }
                    set_dataset.set(Some(data));
                    recompute();
                }
                Err(err) => {
                    // Known gap: a failed load only logs and leaves the
                    // page uninitialized, nothing is surfaced to the user
                    log::error!("Failed to load dashboard data: {}", err);
                }
            }
        });
    });

    // Single in-flight guard: the Apply control stays disabled until the
    // delayed recompute resolves, so filter actions never overlap.
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

    let franchise_options = Signal::derive(move || {
        let mut options = vec![("All".to_string(), "All".to_string())];
        if let Some(data) = dataset.get() {
            for name in data.franchise_names() {
                options.push((name.clone(), name));
            }
        }
        options
    });

    let total_business = Signal::derive(move || {
        dataset
            .get()
            .map(|data| data.dashboard_summary.total_business)
    });
    let total_commission = Signal::derive(move || {
        dataset
            .get()
            .map(|data| data.dashboard_summary.total_commission)
    });

    view! {
        <PageFrame page_id="d100_franchise_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Franchise Overview"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-card-grid">
                    <StatCard
                        label="Total Business".to_string()
                        icon_name="briefcase".to_string()
                        value=total_business
                        format=ValueFormat::Inr
                    />
                    <StatCard
                        label="Total Commission".to_string()
                        icon_name="dollar-sign".to_string()
                        value=total_commission
                        format=ValueFormat::Inr
                    />
                </div>

                <div class="dashboard__filters">
                    <Input
                        label="From"
                        input_type="date"
                        value=date_from
                        on_input=Callback::new(move |v: String| date_from.set(v))
                    />
                    <Input
                        label="To"
                        input_type="date"
                        value=date_to
                        on_input=Callback::new(move |v: String| date_to.set(v))
                    />
                    <Select
                        label="Franchise"
                        value=franchise
                        on_change=Callback::new(move |v: String| franchise.set(v))
                        options=franchise_options
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

                {move || view_data.get().map(|view| {
                    let rows = view
                        .labels
                        .iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let name = label.clone();
                            view! {
                                <tr
                                    class="data-table__row data-table__row--clickable"
                                    on:click=move |_| {
                                        // Row click narrows the filter to
                                        // that franchise and re-applies
                                        franchise.set(name.clone());
                                        apply();
                                    }
                                >
                                    <td class="text-center">{label.clone()}</td>
                                    <td class="text-center">{format_inr(view.booking_amounts[i])}</td>
                                    <td class="text-center">{format_count(view.tests[i])}</td>
                                    <td class="text-center">{format_count(view.samples[i])}</td>
                                    <td class="text-center">{format_inr(view.commissions[i])}</td>
                                </tr>
                            }
                        })
                        .collect_view();

                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th class="text-center">"Franchise"</th>
                                    <th class="text-center">"Booking Amount"</th>
                                    <th class="text-center">"Tests"</th>
                                    <th class="text-center">"Samples"</th>
                                    <th class="text-center">"Commission"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                })}
            </div>
        </PageFrame>
    }
}
