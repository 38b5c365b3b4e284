//! Static metadata for the generated schemes.

use lazy_static::lazy_static;

/// The harmonization rule behind a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeKind {
    /// Fixed hue and saturation, lightness swept from dark to light.
    /// Lightness steps dominate the look of the ramp, which suits
    /// ordered data and charts built around a single metric.
    Monochromatic,
    /// Hue rotated evenly around the color wheel, each stop paired
    /// with a lightened, desaturated companion.  Contrasting hues with
    /// a softer echo per stop, suited to gradients and accents.
    GradientBalance,
}

impl SchemeKind {
    /// Display name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Monochromatic => "Monochromatic",
            SchemeKind::GradientBalance => "Gradient Balance",
        }
    }
}

/// Metadata shown next to a generated scheme.
pub(crate) struct SchemeData {
    pub(crate) kind: SchemeKind,
    pub(crate) description: &'static str,
}

lazy_static! {
    /// All schemes, in display order.
    pub(crate) static ref SCHEMES: Vec<SchemeData> = vec![
        SchemeData {
            kind: SchemeKind::Monochromatic,
            description: "Ideal for charts with a single metric.",
        },
        SchemeData {
            kind: SchemeKind::GradientBalance,
            description: "Evenly spaced contrasting hues, each with a \
                          softer companion.",
        },
    ];
}
