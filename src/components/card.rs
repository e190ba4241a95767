use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    /// Accent class, e.g. `accent-green`
    #[prop_or_default]
    pub accent: Classes,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <section class={classes!("card", props.accent.clone())}>
            <h2 class="card-title">
                if let Some(icon) = &props.icon {
                    <span class="card-icon">{icon.clone()}</span>
                }
                {props.title.clone()}
            </h2>
            { props.children.clone() }
        </section>
    }
}
