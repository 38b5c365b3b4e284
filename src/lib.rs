//! Harmonized color schemes from a single base color.
//!
//! - [`TintRamp`]
//! - [`HueWheel`]
//!
//! [`ColorRange`]
//!
//! Parse a base color with [`RGBColor::from_hex`], then
//! [`RGBColor::harmonize`] derives the [`SchemeKind::Monochromatic`]
//! tint ramp and the [`SchemeKind::GradientBalance`] hue rotation with
//! its softened companions.

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};
use thiserror::Error;

mod schemes;
pub mod render;
use schemes::SCHEMES;
pub use schemes::SchemeKind;

/// Lightness bounds of the monochromatic tint ramp.
const TINT_FLOOR: f64 = 0.2;
const TINT_CEIL: f64 = 0.8;

/// Offsets turning a hue stop into its softened companion.
const COMPANION_LIFT: f64 = 0.15;
const COMPANION_FADE: f64 = 0.15;

/// Errors reported by hex parsing and scheme generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The string is not 6 hexadecimal digits (after an optional `#`).
    #[error("`{0}` is not a 6-digit hex color")]
    Format(String),
    /// An RGB component fell outside \[0, 255\].
    #[error("RGB component {0} is outside [0, 255]")]
    Range(f64),
    /// Variation counts below 2 cannot anchor the tint ramp.
    #[error("variation count must be at least 2, got {0}")]
    VariationCount(usize),
    /// The swatch sheet could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding a uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if n == 0 {
            Range { range: self, color: PhantomData,
                    a, b, last: 0, i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, color: PhantomData,
                    a, b, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn sample(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let t = k as f64 / self.last as f64;
            ((1. - t) * self.a + t * self.b, self.range.rgb(t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.sample(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.sample(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Parse a 6-digit hexadecimal color, case-insensitive, with or
    /// without a leading `#`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_harmony::RGBColor;
    /// let green = RGB8::from_hex("#32a852")?;
    /// # Ok::<(), color_harmony::Error>(())
    /// ```
    fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Format(hex.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16)
            .map_err(|_| Error::Format(hex.to_string()));
        let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
        Ok(Self::from_rgba(RGBA { r: r as f64, g: g as f64, b: b as f64,
                                  a: 255. }))
    }

    /// Format the color as a lowercase `#rrggbb` string.
    ///
    /// Fails with [`Error::Range`] when a component lies outside
    /// \[0, 255\], which only the floating-point encodings can produce.
    fn to_hex(&self) -> Result<String, Error> {
        let RGBA { r, g, b, .. } = self.to_rgba();
        let byte = |x: f64| {
            if (0. ..= 255.).contains(&x) { Ok(x.round() as u8) }
            else { Err(Error::Range(x)) }
        };
        Ok(format!("#{:02x}{:02x}{:02x}", byte(r)?, byte(g)?, byte(b)?))
    }

    /// Return the hue rotation around the color wheel anchored at this
    /// color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_harmony::{RGBColor, ColorRange};
    /// let base = RGB8::new(50, 168, 82);
    /// let opposite = base.hue_wheel().rgb(0.5);
    /// ```
    fn hue_wheel(&self) -> HueWheel<Self> {
        HueWheel { base: Hsl::from_rgb(self.to_rgba()), color: PhantomData }
    }

    /// Return a lightness ramp between `lo` and `hi` at this color's
    /// hue and saturation.
    fn tints(&self, lo: f64, hi: f64) -> TintRamp<Self> {
        TintRamp { base: Hsl::from_rgb(self.to_rgba()), lo, hi,
                   color: PhantomData }
    }

    /// Generate the harmonized schemes for this base color.
    ///
    /// `variations` colors for the monochromatic ramp, twice that for
    /// gradient balance.  Counts below 2 are rejected with
    /// [`Error::VariationCount`]: the ramp interpolates between its two
    /// lightness endpoints.
    fn harmonize(&self, variations: usize) -> Result<Harmony<Self>, Error> {
        if variations < 2 {
            return Err(Error::VariationCount(variations));
        }
        let monochromatic: Vec<Self> =
            self.tints(TINT_FLOOR, TINT_CEIL)
                .range(TINT_FLOOR, TINT_CEIL, variations)
                .map(|(_, c)| c)
                .collect();
        let wheel = self.hue_wheel();
        let mut gradient_balance = Vec::with_capacity(2 * variations);
        for i in 0 .. variations {
            let t = i as f64 / variations as f64;
            gradient_balance.push(wheel.rgb(t));
            gradient_balance.push(wheel.companion(t));
        }
        tracing::debug!(variations, "generated harmonized schemes");
        Ok(Harmony {
            monochromatic: Scheme { kind: SchemeKind::Monochromatic,
                                    colors: monochromatic },
            gradient_balance: Scheme { kind: SchemeKind::GradientBalance,
                                       colors: gradient_balance },
        })
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA { r, g, b, a } = self.to_rgba();
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA { r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8, g: c.g as u8, b: c.b as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64,
               a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8, g: c.g as u8, b: c.b as u8, a: c.a as u8 }
    }
}

/// The type for colors in HSL space, the cylindrical transform of RGB,
/// with an alpha component carried through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Hsl {
    /// The hue in degrees in the range 0. to 360.
    pub h: f64,
    /// The saturation in the range 0. to 1.
    pub s: f64,
    /// The lightness in the range 0. to 1.
    pub l: f64,
    /// Alpha component (in \[0, 255\]).
    pub a: f64,
}

impl Hsl {
    /// Convert from RGB components in \[0, 255\].
    pub fn from_rgb(c: RGBA<f64>) -> Hsl {
        let r = c.r / 255.;
        let g = c.g / 255.;
        let b = c.b / 255.;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        let d = max - min;
        if d == 0. {
            return Hsl { h: 0., s: 0., l, a: c.a } // achromatic
        }
        let s = d / (1. - (2. * l - 1.).abs());
        let h = { if max == r { ((g - b) / d).rem_euclid(6.) }
                  else if max == g { (b - r) / d + 2. }
                  else { (r - g) / d + 4. } };
        Hsl { h: 60. * h, s, l, a: c.a }
    }

    /// Convert to RGB components in \[0, 255\].
    pub fn to_rgb(&self) -> RGBA<f64> {
        let c = (1. - (2. * self.l - 1.).abs()) * self.s;
        let h = self.h.rem_euclid(360.) / 60.;
        let x = c * (1. - (h % 2. - 1.).abs());
        let (r, g, b) = {
            if h < 1.      { (c, x, 0.) }
            else if h < 2. { (x, c, 0.) }
            else if h < 3. { (0., c, x) }
            else if h < 4. { (0., x, c) }
            else if h < 5. { (x, 0., c) }
            else           { (c, 0., x) } };
        let m = self.l - c / 2.;
        RGBA { r: 255. * (r + m), g: 255. * (g + m), b: 255. * (b + m),
               a: self.a }
    }

    /// Hue rotated by `deg` degrees, saturation and lightness kept.
    fn rotate(&self, deg: f64) -> Hsl {
        Hsl { h: (self.h + deg).rem_euclid(360.), ..*self }
    }
}

/// Hue rotation around the color wheel, anchored at a base color.
///
/// Created by [`RGBColor::hue_wheel`].  See the [`ColorRange`] trait
/// for the sampling methods.
pub struct HueWheel<Color> {
    base: Hsl,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> HueWheel<Color> {
    /// The softened companion of the stop at `t`: same hue, lightened
    /// and desaturated relative to the base color, both offsets clamped
    /// to \[0, 1\].
    pub fn companion(&self, t: f64) -> Color {
        let stop = self.base.rotate(360. * t);
        let hsl = Hsl { s: (stop.s - COMPANION_FADE).clamp(0., 1.),
                        l: (stop.l + COMPANION_LIFT).clamp(0., 1.),
                        ..stop };
        Color::from_rgba(hsl.to_rgb())
    }
}

impl<Color> ColorRange<Color> for HueWheel<Color>
where Color: RGBColor {
    /// Returns the base color rotated by `360 t` degrees, where
    /// `t == 0.` returns the base color itself.
    fn rgb(&self, t: f64) -> Color {
        Color::from_rgba(self.base.rotate(360. * t).to_rgb())
    }
}

/// Lightness ramp at fixed hue and saturation.
///
/// Created by [`RGBColor::tints`].
pub struct TintRamp<Color> {
    base: Hsl,
    lo: f64,
    hi: f64,
    color: PhantomData<Color>,
}

impl<Color> ColorRange<Color> for TintRamp<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let l = self.lo + t * (self.hi - self.lo);
        Color::from_rgba(Hsl { l, ..self.base }.to_rgb())
    }
}

/// An ordered palette produced by one harmonization rule.
#[derive(Debug, Clone)]
pub struct Scheme<Color> {
    kind: SchemeKind,
    colors: Vec<Color>,
}

impl<Color: RGBColor> Scheme<Color> {
    /// Which harmonization rule produced this scheme.
    pub fn kind(&self) -> SchemeKind { self.kind }

    /// Returns the number of colors in the scheme.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The colors, in display order.
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// The colors as lowercase hex strings, in display order.
    pub fn hex_colors(&self) -> Result<Vec<String>, Error> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Both harmonized schemes generated from one base color.
///
/// Created by [`RGBColor::harmonize`].
#[derive(Debug, Clone)]
pub struct Harmony<Color> {
    monochromatic: Scheme<Color>,
    gradient_balance: Scheme<Color>,
}

impl<Color: RGBColor> Harmony<Color> {
    /// The monochromatic tint ramp.
    pub fn monochromatic(&self) -> &Scheme<Color> { &self.monochromatic }

    /// The hue-rotated scheme with its softened companions.
    pub fn gradient_balance(&self) -> &Scheme<Color> {
        &self.gradient_balance
    }

    /// The scheme produced by `kind`.
    pub fn scheme(&self, kind: SchemeKind) -> &Scheme<Color> {
        match kind {
            SchemeKind::Monochromatic => &self.monochromatic,
            SchemeKind::GradientBalance => &self.gradient_balance,
        }
    }

    /// The schemes in display order.
    pub fn schemes(&self) -> impl Iterator<Item = &Scheme<Color>> + '_ {
        SCHEMES.iter().map(move |d| self.scheme(d.kind))
    }

    /// Rows for a renderer: scheme name, hex colors and description
    /// text, in display order.
    pub fn rows(&self) -> Result<Vec<SchemeRow>, Error> {
        SCHEMES.iter()
            .map(|d| Ok(SchemeRow {
                name: d.kind.name(),
                description: d.description,
                colors: self.scheme(d.kind).hex_colors()?,
            }))
            .collect()
    }
}

/// One renderer row: a named scheme with its colors and blurb.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeRow {
    pub name: &'static str,
    pub description: &'static str,
    pub colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_of(c: RGB8) -> Hsl { Hsl::from_rgb(c.to_rgba()) }

    fn hue_close(a: f64, b: f64, tol: f64) -> bool {
        let d = (a - b).rem_euclid(360.);
        d <= tol || 360. - d <= tol
    }

    #[test]
    fn hex_round_trip() {
        for r in (0 ..= 255).step_by(17) {
            for g in (0 ..= 255).step_by(51) {
                for b in (0 ..= 255).step_by(85) {
                    let c = RGB8 { r: r as u8, g: g as u8, b: b as u8 };
                    let hex = c.to_hex().unwrap();
                    assert_eq!(RGB8::from_hex(&hex).unwrap(), c);
                }
            }
        }
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(RGB8 { r: 0, g: 10, b: 255 }.to_hex().unwrap(),
                   "#000aff");
    }

    #[test]
    fn hex_parses_case_and_prefix() {
        let c = RGB8 { r: 0x32, g: 0xa8, b: 0x52 };
        assert_eq!(RGB8::from_hex("#32A852").unwrap(), c);
        assert_eq!(RGB8::from_hex("32a852").unwrap(), c);
    }

    #[test]
    fn hex_rejects_malformed() {
        for hex in ["#zzzzzz", "#fff", "#32a85", "#32a8521", "", "#+1+2+3"] {
            assert!(matches!(RGB8::from_hex(hex), Err(Error::Format(_))),
                    "{hex:?} should be rejected");
        }
    }

    #[test]
    fn hex_rejects_out_of_range_components() {
        let c = RGBA { r: 300., g: 0., b: 0., a: 255. };
        assert!(matches!(c.to_hex(), Err(Error::Range(x)) if x == 300.));
    }

    #[test]
    fn hsl_round_trip() {
        for r in (0 ..= 255).step_by(51) {
            for g in (0 ..= 255).step_by(51) {
                for b in (0 ..= 255).step_by(51) {
                    let c = RGB8 { r: r as u8, g: g as u8, b: b as u8 };
                    let back = RGB8::from_rgba(hsl_of(c).to_rgb());
                    for (x, y) in [(c.r, back.r), (c.g, back.g),
                                   (c.b, back.b)] {
                        assert!((x as i32 - y as i32).abs() <= 1,
                                "{c:?} came back as {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn tint_range_sampling() {
        let base = RGB8::from_hex("#32a852").unwrap();
        let ramp = base.tints(0.2, 0.8);
        for (i, (l, _)) in ramp.range(0.2, 0.8, 7).enumerate() {
            assert!((l - (0.2 + 0.1 * i as f64)).abs() <= 1e-12,
                    "{} ≉ {}", l, 0.2 + 0.1 * i as f64);
        }
    }

    #[test]
    fn range_reverses() {
        let base = RGB8::from_hex("#32a852").unwrap();
        let range = base.tints(0.2, 0.8).range(0., 1., 5);
        assert_eq!(range.len(), 5);
        let ts: Vec<f64> = range.rev().map(|(t, _)| t).collect();
        assert_eq!(ts, vec![1., 0.75, 0.5, 0.25, 0.]);
    }

    #[test]
    fn monochromatic_sweeps_lightness() {
        let base = RGB8::from_hex("#32a852").unwrap();
        let base_hsl = hsl_of(base);
        let harmony = base.harmonize(4).unwrap();
        let mono = harmony.monochromatic();
        assert_eq!(mono.len(), 4);
        for (i, &c) in mono.colors().iter().enumerate() {
            let hsl = hsl_of(c);
            let want = 0.2 + 0.6 * i as f64 / 3.;
            assert!((hsl.l - want).abs() <= 0.01,
                    "lightness {} ≉ {}", hsl.l, want);
            assert!(hue_close(hsl.h, base_hsl.h, 4.),
                    "hue {} ≉ {}", hsl.h, base_hsl.h);
            assert!((hsl.s - base_hsl.s).abs() <= 0.04,
                    "saturation {} ≉ {}", hsl.s, base_hsl.s);
        }
    }

    #[test]
    fn gradient_balance_rotates_hues_in_pairs() {
        let base = RGB8::from_hex("#32a852").unwrap();
        let base_hsl = hsl_of(base);
        let harmony = base.harmonize(4).unwrap();
        let gb = harmony.gradient_balance();
        assert_eq!(gb.len(), 8);
        for i in 0 .. 4 {
            let want_h = (base_hsl.h + 90. * i as f64).rem_euclid(360.);
            let stop = hsl_of(gb.colors()[2 * i]);
            let companion = hsl_of(gb.colors()[2 * i + 1]);
            assert!(hue_close(stop.h, want_h, 4.),
                    "stop hue {} ≉ {}", stop.h, want_h);
            assert!((stop.s - base_hsl.s).abs() <= 0.04);
            assert!((stop.l - base_hsl.l).abs() <= 0.01);
            assert!(hue_close(companion.h, want_h, 4.),
                    "companion hue {} ≉ {}", companion.h, want_h);
            assert!((companion.s - (base_hsl.s - 0.15)).abs() <= 0.04);
            assert!((companion.l - (base_hsl.l + 0.15)).abs() <= 0.01);
        }
    }

    #[test]
    fn companion_offsets_clamp() {
        // Near-white, barely saturated base: the companion's saturation
        // bottoms out at 0 and its lightness tops out at 1.
        let base =
            RGB8::from_rgba(Hsl { h: 200., s: 0.1, l: 0.95, a: 255. }
                            .to_rgb());
        let harmony = base.harmonize(2).unwrap();
        let companion = harmony.gradient_balance().colors()[1];
        assert_eq!(companion, RGB8 { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn variation_count_must_be_at_least_two() {
        let base = RGB8::from_hex("#32a852").unwrap();
        for n in [0, 1] {
            assert!(matches!(base.harmonize(n),
                             Err(Error::VariationCount(m)) if m == n));
        }
        assert!(base.harmonize(2).is_ok());
    }

    #[test]
    fn rows_follow_display_order() {
        let base = RGB8::from_hex("#32a852").unwrap();
        let rows = base.harmonize(4).unwrap().rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Monochromatic");
        assert_eq!(rows[1].name, "Gradient Balance");
        assert_eq!(rows[0].colors.len(), 4);
        assert_eq!(rows[1].colors.len(), 8);
        assert!(rows.iter().all(|r| !r.description.is_empty()));
    }
}
