use bon::Builder;
use tracing::warn;

use crate::color::Color;
use crate::error::ConfigurationError;

// ============================================================================
// PADDING
// ============================================================================

/// Insets between the widget bounds and the ring's content region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for side in [self.left, self.top, self.right, self.bottom] {
            if !(side.is_finite() && side >= 0.0) {
                return Err(ConfigurationError::InvalidPadding(side));
            }
        }
        Ok(())
    }
}

// ============================================================================
// WIDGET OPTIONS
// ============================================================================

/// Style and state of a ring progress widget.
///
/// Every field has a default, so `ProgressOptions::builder().build()` yields
/// the stock look: an empty label, a green disc inside a blue ring and a white
/// progress arc.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ProgressOptions {
    #[builder(default, into)]
    pub text: String,
    #[builder(default = 100.0)]
    pub text_size: f32,
    #[builder(default = Color::WHITE)]
    pub text_color: Color,
    #[builder(default = Color::GREEN)]
    pub inner_color: Color,
    #[builder(default = Color::BLUE)]
    pub outer_color: Color,
    #[builder(default = Color::WHITE)]
    pub progress_color: Color,
    #[builder(default = 20.0)]
    pub radius: f32,
    #[builder(default = 10.0)]
    pub stroke_width: f32,
    #[builder(default = 0)]
    pub current_progress: i32,
    #[builder(default = 100)]
    pub max_progress: i32,
    #[builder(default)]
    pub padding: Padding,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProgressOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !is_positive(self.radius) {
            return Err(ConfigurationError::NonPositiveRadius(self.radius));
        }
        if !is_positive(self.stroke_width) {
            return Err(ConfigurationError::NonPositiveStrokeWidth(
                self.stroke_width,
            ));
        }
        if !is_positive(self.text_size) {
            return Err(ConfigurationError::NonPositiveTextSize(self.text_size));
        }
        if self.max_progress <= 0 {
            return Err(ConfigurationError::NonPositiveMaxProgress(
                self.max_progress,
            ));
        }
        if self.current_progress < 0 {
            return Err(ConfigurationError::NegativeProgress(self.current_progress));
        }
        self.padding.validate()
    }

    /// Builds options from `(name, value)` attribute pairs, as a declarative
    /// layout would supply them. Attributes that are not present keep their
    /// defaults, unknown names are skipped. `density` converts `dp` and `sp`
    /// dimensions to logical pixels.
    pub fn from_attributes<I, K, V>(
        attributes: I,
        density: f32,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (name, value) in attributes {
            options.apply_attribute(name.as_ref(), value.as_ref(), density)?;
        }
        options.validate()?;
        Ok(options)
    }

    fn apply_attribute(
        &mut self,
        name: &str,
        value: &str,
        density: f32,
    ) -> Result<(), ConfigurationError> {
        let invalid = || ConfigurationError::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        };
        let dimension = || parse_dimension(value, density).ok_or_else(invalid);
        let color = || Color::parse(value).ok_or_else(invalid);
        let integer = || value.trim().parse::<i32>().map_err(|_| invalid());

        match name {
            "text" => self.text = value.to_string(),
            "textSize" => self.text_size = dimension()?,
            "textColor" => self.text_color = color()?,
            "innerColor" => self.inner_color = color()?,
            "outerColor" => self.outer_color = color()?,
            "progressColor" => self.progress_color = color()?,
            "radius" => self.radius = dimension()?,
            "strokeWidth" => self.stroke_width = dimension()?,
            "currentProgress" => self.current_progress = integer()?,
            "maxProgress" => self.max_progress = integer()?,
            "padding" => self.padding = Padding::uniform(dimension()?),
            "paddingLeft" => self.padding.left = dimension()?,
            "paddingTop" => self.padding.top = dimension()?,
            "paddingRight" => self.padding.right = dimension()?,
            "paddingBottom" => self.padding.bottom = dimension()?,
            _ => warn!(attribute = name, "ignoring unknown ring progress attribute"),
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// `12`, `12px`, `12dp` or `12sp`.
fn parse_dimension(value: &str, density: f32) -> Option<f32> {
    let value = value.trim();
    let (number, scale) = if let Some(number) = value.strip_suffix("px") {
        (number, 1.0)
    } else if let Some(number) = value
        .strip_suffix("dp")
        .or_else(|| value.strip_suffix("sp"))
    {
        (number, density)
    } else {
        (value, 1.0)
    };
    let parsed = number.trim().parse::<f32>().ok()?;
    parsed.is_finite().then_some(parsed * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_widget() {
        let options = ProgressOptions::default();
        assert_eq!(options.text, "");
        assert_eq!(options.text_size, 100.0);
        assert_eq!(options.radius, 20.0);
        assert_eq!(options.stroke_width, 10.0);
        assert_eq!(options.text_color, Color::WHITE);
        assert_eq!(options.inner_color, Color::GREEN);
        assert_eq!(options.outer_color, Color::BLUE);
        assert_eq!(options.progress_color, Color::WHITE);
        assert_eq!(options.current_progress, 0);
        assert_eq!(options.max_progress, 100);
        assert_eq!(options.padding, Padding::default());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validation_rejects_out_of_domain_values() {
        let radius = ProgressOptions::builder().radius(-5.0).build();
        assert_eq!(
            radius.validate(),
            Err(ConfigurationError::NonPositiveRadius(-5.0))
        );

        let stroke = ProgressOptions::builder().stroke_width(0.0).build();
        assert_eq!(
            stroke.validate(),
            Err(ConfigurationError::NonPositiveStrokeWidth(0.0))
        );

        let text_size = ProgressOptions::builder().text_size(f32::NAN).build();
        assert!(matches!(
            text_size.validate(),
            Err(ConfigurationError::NonPositiveTextSize(_))
        ));

        let max = ProgressOptions::builder().max_progress(0).build();
        assert_eq!(
            max.validate(),
            Err(ConfigurationError::NonPositiveMaxProgress(0))
        );

        let current = ProgressOptions::builder().current_progress(-1).build();
        assert_eq!(
            current.validate(),
            Err(ConfigurationError::NegativeProgress(-1))
        );

        let padding = ProgressOptions::builder()
            .padding(Padding::new(0.0, -2.0, 0.0, 0.0))
            .build();
        assert_eq!(
            padding.validate(),
            Err(ConfigurationError::InvalidPadding(-2.0))
        );
    }

    #[test]
    fn progress_above_max_is_still_valid() {
        let options = ProgressOptions::builder()
            .current_progress(150)
            .max_progress(100)
            .build();
        assert!(options.validate().is_ok());
    }

    #[test]
    fn attributes_override_defaults() {
        let options = ProgressOptions::from_attributes(
            [
                ("text", "42%"),
                ("textSize", "14sp"),
                ("textColor", "#000"),
                ("innerColor", "#ff202020"),
                ("radius", "30px"),
                ("strokeWidth", "4dp"),
                ("currentProgress", "42"),
                ("maxProgress", "84"),
                ("padding", "2"),
                ("paddingLeft", "6"),
            ],
            2.0,
        )
        .unwrap();

        assert_eq!(options.text, "42%");
        assert_eq!(options.text_size, 28.0);
        assert_eq!(options.text_color, Color::BLACK);
        assert_eq!(options.inner_color, Color::new(0x20, 0x20, 0x20));
        assert_eq!(options.outer_color, Color::BLUE);
        assert_eq!(options.radius, 30.0);
        assert_eq!(options.stroke_width, 8.0);
        assert_eq!(options.current_progress, 42);
        assert_eq!(options.max_progress, 84);
        assert_eq!(options.padding, Padding::new(6.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let options =
            ProgressOptions::from_attributes([("layout_width", "match_parent")], 1.0).unwrap();
        assert_eq!(options, ProgressOptions::default());
    }

    #[test]
    fn malformed_attribute_values_are_rejected() {
        let err = ProgressOptions::from_attributes([("radius", "wide")], 1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidAttribute {
                name: "radius".to_string(),
                value: "wide".to_string(),
            }
        );

        let err = ProgressOptions::from_attributes([("maxProgress", "0")], 1.0).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveMaxProgress(0));
    }
}
