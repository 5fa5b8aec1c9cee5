use clap::ValueEnum;

/// Display mode selecting which icon asset variants are loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Filename suffix for this mode's asset variants
    pub fn asset_suffix(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "-dark",
        }
    }
}
