use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub items: Vec<String>,
}

#[function_component(Recommendations)]
pub fn recommendations(props: &RecommendationsProps) -> Html {
    html! {
        <ul class="recommendations">
            { for props.items.iter().map(|item| html! { <li>{item}</li> }) }
        </ul>
    }
}
