use std::str::FromStr;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::dashboard::SensorMode;

/// Sections of the settings card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    Sensors,
    ConsumptionGoals,
}

impl SettingsSection {
    pub const fn all() -> [Self; 2] {
        [Self::Sensors, Self::ConsumptionGoals]
    }

    /// Value used for the `<option>` element
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Sensors => "sensors",
            Self::ConsumptionGoals => "consumption-goals",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sensors => "Sensor Settings",
            Self::ConsumptionGoals => "Power Consumption Goals",
        }
    }
}

impl FromStr for SettingsSection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or(())
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub sensor_mode: SensorMode,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let section = use_state(SettingsSection::default);

    let on_change = {
        let section = section.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = target.value().parse::<SettingsSection>() {
                section.set(selected);
            }
        })
    };

    html! {
        <div class="settings-panel">
            <select
                class="settings-selector"
                onchange={on_change}
                aria-label="Select settings section"
            >
                {
                    SettingsSection::all().iter().map(|s| {
                        let selected = *s == *section;
                        html! {
                            <option value={s.key()} {selected}>{s.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
            if *section == SettingsSection::Sensors {
                <p>{"Sensor mode: "}<strong>{props.sensor_mode.label()}</strong></p>
            }
        </div>
    }
}
