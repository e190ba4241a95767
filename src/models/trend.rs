use super::error::AppError;

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub energy: f64,
}

/// Consumption history plotted on the trends card
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSeries {
    data: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(data: Vec<TrendPoint>) -> Self {
        Self { data }
    }

    /// The fixed monthly history shown on the dashboard
    pub fn monthly_consumption() -> Self {
        let data = [("Jan", 400.0), ("Feb", 380.0), ("Mar", 360.0), ("Apr", 340.0)]
            .into_iter()
            .map(|(label, energy)| TrendPoint {
                label: label.to_string(),
                energy,
            })
            .collect();

        Self::new(data)
    }

    pub fn series_data(&self) -> Result<(Vec<String>, Vec<f64>), AppError> {
        if self.data.is_empty() {
            return Err(AppError::DataError("No trend data available".to_string()));
        }

        let x_data = self.data.iter().map(|p| p.label.clone()).collect();
        let y_data = self.data.iter().map(|p| p.energy).collect();

        Ok((x_data, y_data))
    }
}
