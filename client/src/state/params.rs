//! Filter tuning parameters sent with uploads.
//!
//! The server reads ten numeric form fields. Missing fields fall back to the
//! server's own defaults, which match [`FilterParameter::default_value`].

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterParameter {
    SharpenIntensity,
    EmbossStrength,
    SaturationFactor,
    EdgeThreshold1,
    EdgeThreshold2,
    HueShift,
    SepiaIntensity,
    VibranceFactor,
    VignetteIntensity,
    NoiseReductionStrength,
}

/// Slider bounds for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FilterParameter {
    pub const ALL: [Self; 10] = [
        Self::SharpenIntensity,
        Self::EmbossStrength,
        Self::SaturationFactor,
        Self::EdgeThreshold1,
        Self::EdgeThreshold2,
        Self::HueShift,
        Self::SepiaIntensity,
        Self::VibranceFactor,
        Self::VignetteIntensity,
        Self::NoiseReductionStrength,
    ];

    /// Multipart form field name; also used as the input element id.
    #[must_use]
    pub fn form_field(self) -> &'static str {
        match self {
            Self::SharpenIntensity => "sharpen_intensity",
            Self::EmbossStrength => "emboss_strength",
            Self::SaturationFactor => "saturation_factor",
            Self::EdgeThreshold1 => "edge_threshold1",
            Self::EdgeThreshold2 => "edge_threshold2",
            Self::HueShift => "hue_shift",
            Self::SepiaIntensity => "sepia_intensity",
            Self::VibranceFactor => "vibrance_factor",
            Self::VignetteIntensity => "vignette_intensity",
            Self::NoiseReductionStrength => "noise_reduction_strength",
        }
    }

    #[must_use]
    pub fn from_form_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.form_field() == field)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SharpenIntensity => "Sharpen Intensity",
            Self::EmbossStrength => "Emboss Strength",
            Self::SaturationFactor => "Saturation Factor",
            Self::EdgeThreshold1 => "Edge Threshold 1",
            Self::EdgeThreshold2 => "Edge Threshold 2",
            Self::HueShift => "Hue Shift",
            Self::SepiaIntensity => "Sepia Intensity",
            Self::VibranceFactor => "Vibrance Factor",
            Self::VignetteIntensity => "Vignette Intensity",
            Self::NoiseReductionStrength => "Noise Reduction Strength",
        }
    }

    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Self::SharpenIntensity | Self::EmbossStrength | Self::VignetteIntensity => 1.0,
            Self::SaturationFactor | Self::VibranceFactor => 1.5,
            Self::EdgeThreshold1 => 100.0,
            Self::EdgeThreshold2 => 200.0,
            Self::HueShift | Self::SepiaIntensity => 0.5,
            Self::NoiseReductionStrength => 7.0,
        }
    }

    #[must_use]
    pub fn range(self) -> ParameterRange {
        let (min, max, step) = match self {
            Self::SharpenIntensity
            | Self::EmbossStrength
            | Self::VignetteIntensity
            | Self::SaturationFactor
            | Self::VibranceFactor => (0.0, 3.0, 0.1),
            Self::EdgeThreshold1 | Self::EdgeThreshold2 => (0.0, 500.0, 1.0),
            Self::HueShift => (0.0, 1.0, 0.01),
            Self::SepiaIntensity => (0.0, 1.0, 0.05),
            Self::NoiseReductionStrength => (1.0, 21.0, 1.0),
        };
        ParameterRange { min, max, step }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One value per [`FilterParameter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParameters {
    values: [f64; 10],
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self { values: FilterParameter::ALL.map(FilterParameter::default_value) }
    }
}

impl FilterParameters {
    #[must_use]
    pub fn get(&self, param: FilterParameter) -> f64 {
        self.values[param.index()]
    }

    /// # Errors
    ///
    /// Rejects NaN and infinities; the server would fail to parse them.
    pub fn set(&mut self, param: FilterParameter, value: f64) -> Result<(), ClientError> {
        if !value.is_finite() {
            return Err(ClientError::InvalidParameter { field: param.form_field(), raw: value.to_string() });
        }
        self.values[param.index()] = value;
        Ok(())
    }

    /// Parse raw input text (as read from a slider) and store it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidParameter`] when the text is not a finite number.
    pub fn set_from_input(&mut self, param: FilterParameter, raw: &str) -> Result<f64, ClientError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ClientError::InvalidParameter { field: param.form_field(), raw: raw.to_owned() })?;
        self.set(param, value)?;
        Ok(value)
    }

    /// Text shown next to a slider.
    #[must_use]
    pub fn display(&self, param: FilterParameter) -> String {
        self.get(param).to_string()
    }

    /// `(field, value)` pairs in form order, ready for a multipart body.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        FilterParameter::ALL.into_iter().map(|p| (p.form_field(), self.get(p).to_string())).collect()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
