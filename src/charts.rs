use egui::{
    plot::{Bar, BarChart, Legend, Plot, Text, Value},
    Align2, Response, RichText, Ui, Widget,
};

use crate::report::ChartData;

const CHART_HEIGHT: f32 = 220.0;

pub struct YapsChart<'a> {
    data: &'a ChartData,
}

impl<'a> YapsChart<'a> {
    pub fn new(data: &'a ChartData) -> Self {
        YapsChart { data }
    }

    fn bar_charts(&self) -> Vec<BarChart> {
        self.data
            .series
            .iter()
            .map(|series| {
                let bars = series
                    .bars
                    .iter()
                    .map(|point| {
                        Bar::new(point.x, point.value)
                            .width(series.width)
                            .name(point.label)
                    })
                    .collect();

                BarChart::new(bars).color(series.color).name(&series.name)
            })
            .collect()
    }

    /// Each bar's value written just above it.
    fn value_labels(&self) -> Vec<Text> {
        self.data
            .series
            .iter()
            .flat_map(|series| {
                series.bars.iter().map(move |point| {
                    Text::new(Value::new(point.x, point.value), point.value_label())
                        .anchor(Align2::CENTER_BOTTOM)
                        .color(series.color)
                })
            })
            .collect()
    }
}

impl Widget for YapsChart<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.label(RichText::new(&self.data.title).strong());

        let charts = self.bar_charts();
        let labels = self.value_labels();

        Plot::new(&self.data.title)
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
                for label in labels {
                    plot_ui.text(label);
                }
            })
            .response
    }
}
