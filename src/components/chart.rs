use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::trend::TrendSeries;
use crate::utils::debounce::{RESIZE_DEBOUNCE_MS, on_resize_settled};

const CHART_ID: &str = "trend-chart";

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub series: Rc<TrendSeries>,
}

/// Line chart of monthly energy consumption
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.series.clone(), |series| series.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    draw(&container, series_data);

                    let series_data = series_data.clone();
                    on_resize_settled(move || draw(&container, &series_data), RESIZE_DEBOUNCE_MS)
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn draw(container: &HtmlElement, series_data: &Result<(Vec<String>, Vec<f64>), AppError>) {
    match series_data {
        Ok(data) => render_chart(container, CHART_ID, &build_chart(data)),
        Err(e) => web_sys::console::error_1(&format!("Series data error: {e}").into()),
    }
}

/// Renders `chart` into the element `id`, sized to `container`. Skips hidden containers.
pub(crate) fn render_chart(container: &HtmlElement, id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(id, chart) {
        let error = AppError::RenderError(format!("{e:?}"));
        web_sys::console::error_1(&error.to_string().into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .legend(Legend::new().data(vec!["energy"]).bottom("0"))
        .grid(Grid::new().left("8%").right("4%").bottom("15%").contain_label(true))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("kWh")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("energy")
                .data(y_data.clone())
                .smooth(true)
                .line_style(LineStyle::new().color("#8884d8")),
        )
}
