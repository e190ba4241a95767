use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MaintenanceAlertProps {
    pub active: bool,
}

/// Banner shown once a sensor fault has been raised
#[function_component(MaintenanceAlert)]
pub fn maintenance_alert(props: &MaintenanceAlertProps) -> Html {
    if !props.active {
        return html! {};
    }

    html! {
        <div class="alert" role="alert">
            <span class="alert-icon">{"\u{26a0}\u{fe0f}"}</span>
            <p>{"Maintenance Required: Sensor needs cleaning"}</p>
        </div>
    }
}
