/// Renewable generation source shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergySource {
    Solar,
    Wind,
    Hydro,
    Biomass,
}

impl EnergySource {
    /// All sources in display order
    pub const fn all() -> [Self; 4] {
        [Self::Solar, Self::Wind, Self::Hydro, Self::Biomass]
    }

    /// Returns human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Hydro => "hydro",
            Self::Biomass => "biomass",
        }
    }

    /// Returns color for display (hex code)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Solar => "#FFD700",   // gold
            Self::Wind => "#00BFFF",    // sky blue
            Self::Hydro => "#32CD32",   // lime green
            Self::Biomass => "#8B4513", // brown
        }
    }

    /// Exclusive upper bound of simulated output in kW
    pub const fn max_output(&self) -> f64 {
        match self {
            Self::Solar => 300.0,
            Self::Wind => 200.0,
            Self::Hydro => 150.0,
            Self::Biomass => 100.0,
        }
    }
}

/// Production per source in kW. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyProduction {
    pub solar: f64,
    pub wind: f64,
    pub hydro: f64,
    pub biomass: f64,
}

impl EnergyProduction {
    pub const fn new(solar: f64, wind: f64, hydro: f64, biomass: f64) -> Self {
        Self {
            solar,
            wind,
            hydro,
            biomass,
        }
    }

    pub const fn get(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::Solar => self.solar,
            EnergySource::Wind => self.wind,
            EnergySource::Hydro => self.hydro,
            EnergySource::Biomass => self.biomass,
        }
    }

    /// Iterates `(source, kW)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (EnergySource, f64)> + '_ {
        EnergySource::all()
            .into_iter()
            .map(move |source| (source, self.get(source)))
    }

    /// Combined output of all sources
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, kw)| kw).sum()
    }
}

impl Default for EnergyProduction {
    fn default() -> Self {
        Self::new(200.0, 150.0, 100.0, 50.0)
    }
}

/// One simulated telemetry sample: production per source plus total consumption
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReading {
    pub production: EnergyProduction,
    pub consumption: u32,
}
