use charming::{
    Chart as CharmingChart,
    component::Legend,
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::chart::render_chart;
use crate::models::energy::{EnergyProduction, EnergySource};
use crate::utils::debounce::{RESIZE_DEBOUNCE_MS, on_resize_settled};

const CHART_ID: &str = "production-chart";

#[derive(Properties, PartialEq)]
pub struct LiveStatsProps {
    pub production: EnergyProduction,
    pub consumption: u32,
}

/// Production split per source plus total consumption
#[function_component(LiveStats)]
pub fn live_stats(props: &LiveStatsProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.production.clone(), container_ref),
            |(production, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = build_chart(production);
                    render_chart(&container, CHART_ID, &chart);

                    on_resize_settled(
                        move || render_chart(&container, CHART_ID, &chart),
                        RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="live-stats">
            <div class="chart-container pie" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
            <p>
                <span class="stat-label">{"Total Consumption:"}</span>
                {format!(" {} kW", props.consumption)}
            </p>
        </div>
    }
}

fn build_chart(production: &EnergyProduction) -> CharmingChart {
    let colors = EnergySource::all()
        .iter()
        .map(|source| Color::from(source.color()))
        .collect();

    let slices: Vec<(f64, &str)> = production
        .iter()
        .map(|(source, kw)| (kw, source.label()))
        .collect();

    CharmingChart::new()
        .color(colors)
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0"))
        .series(
            Pie::new()
                .name("Production (kW)")
                .radius("60%")
                .center(vec!["50%", "45%"])
                .data(slices),
        )
}
