use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SurplusPanelProps {
    /// Available surplus in kWh
    pub surplus: f64,
    pub message: Option<String>,
    pub on_sell: Callback<()>,
    pub on_store: Callback<()>,
}

/// Surplus energy card with the sell/store actions
#[function_component(SurplusPanel)]
pub fn surplus_panel(props: &SurplusPanelProps) -> Html {
    let on_sell = {
        let on_sell = props.on_sell.clone();
        Callback::from(move |_: MouseEvent| on_sell.emit(()))
    };

    let on_store = {
        let on_store = props.on_store.clone();
        Callback::from(move |_: MouseEvent| on_store.emit(()))
    };

    html! {
        <div class="surplus-panel">
            <p>{format!("Available: {} kWh", props.surplus)}</p>
            <div class="surplus-actions">
                <button class="btn btn-sell" onclick={on_sell}>{"Sell to Grid"}</button>
                <button class="btn btn-store" onclick={on_store}>{"Store in Batteries"}</button>
            </div>
            if let Some(message) = &props.message {
                <p class="popup-message">{message}</p>
            }
        </div>
    }
}
