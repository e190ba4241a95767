use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Co2SavingsProps {
    /// Percentage saved, 0-100
    pub percent: u8,
}

#[function_component(Co2Savings)]
pub fn co2_savings(props: &Co2SavingsProps) -> Html {
    let percent = props.percent.min(100);
    let style = format!("width: {percent}%;");

    html! {
        <div class="co2-savings">
            <div
                class="progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={percent.to_string()}
            >
                <div class="progress-fill" {style}></div>
            </div>
            <p>{format!("{percent}% saved compared to average grid usage")}</p>
            <p class="co2-praise">{"\u{2705} Great job reducing emissions!"}</p>
        </div>
    }
}
