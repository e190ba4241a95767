use std::rc::Rc;
use yew::prelude::*;

use renewable_dashboard::components::{
    Card, Co2Savings, LiveStats, MaintenanceAlert, Recommendations, SettingsPanel, SurplusPanel,
    TrendChart,
};
use renewable_dashboard::hooks::use_dashboard::use_dashboard;
use renewable_dashboard::models::trend::TrendSeries;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    let state = &*dashboard.state;
    let trend = use_memo((), |_| TrendSeries::monthly_consumption());

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Renewable Energy Management Systems"}</h1>
            </header>

            <main class="app-main dashboard-grid">
                <Card title="CO\u{2082} Savings" icon="\u{1f343}" accent="accent-green">
                    <Co2Savings percent={state.co2_savings} />
                </Card>

                <MaintenanceAlert active={state.maintenance_alert} />

                <Card title="Energy Consumption Trends" icon="\u{1f4c8}" accent="accent-blue">
                    <TrendChart series={Rc::clone(&trend)} />
                </Card>

                <Card title="Live Energy Stats" accent="accent-yellow">
                    <LiveStats
                        production={state.energy_production.clone()}
                        consumption={state.energy_consumption}
                    />
                </Card>

                <Card title="Surplus Energy" icon="\u{1f343}" accent="accent-purple">
                    <SurplusPanel
                        surplus={state.surplus_energy}
                        message={state.popup_message.clone()}
                        on_sell={dashboard.sell_to_grid.clone()}
                        on_store={dashboard.store_in_batteries.clone()}
                    />
                </Card>

                <Card title="AI Recommendations" accent="accent-gray">
                    <Recommendations items={state.recommendations.clone()} />
                </Card>

                <Card title="System Settings" icon="\u{2699}\u{fe0f}" accent="accent-teal">
                    <SettingsPanel sensor_mode={state.sensor_mode} />
                </Card>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
