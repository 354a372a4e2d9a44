//! Centralized configuration values shared across the part generators.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Default segment count (`$fn`) for cylinders and spheres when a recipe does
/// not ask for a specific fidelity.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Smallest segment count that still forms a closed polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_SEGMENTS;
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Spaces per nesting level in rendered `.scad` output.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INDENT;
/// assert_eq!(" ".repeat(DEFAULT_INDENT).len(), 4);
/// ```
pub const DEFAULT_INDENT: usize = 4;

/// Largest indent accepted by [`RenderConfig::new`].
pub const MAX_INDENT: usize = 16;

/// Fewest decimal places a fixed-precision render may use. Six places keep
/// millimeter output well under machining tolerance.
///
/// # Examples
/// ```
/// use config::constants::MIN_DECIMAL_PLACES;
/// assert!(MIN_DECIMAL_PLACES >= 6);
/// ```
pub const MIN_DECIMAL_PLACES: usize = 6;

/// File extension of rendered geometry files, without the dot.
pub const SCAD_EXTENSION: &str = "scad";

// =============================================================================
// OUTPUT LOCATION
// =============================================================================

/// Environment variable naming the directory rendered files are written to.
///
/// # Examples
/// ```
/// use config::constants::OUTPUT_DIR_ENV;
/// assert_eq!(OUTPUT_DIR_ENV, "SCAD_DIRECTORY");
/// ```
pub const OUTPUT_DIR_ENV: &str = "SCAD_DIRECTORY";

/// Directory used when neither a caller override nor [`OUTPUT_DIR_ENV`] is set.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// =============================================================================
// LAYOUT
// =============================================================================

/// Most evenly spaced positions a layout helper produces along one axis.
///
/// A pegboard part a few meters long at 1" spacing stays far below this.
pub const MAX_LAYOUT_POSITIONS: usize = 10_000;

// =============================================================================
// UNITS
// =============================================================================

/// Millimeters per inch. Millimeters are the canonical tree unit.
///
/// # Examples
/// ```
/// use config::constants::MM_PER_INCH;
/// assert_eq!(MM_PER_INCH * 2.0, 50.8);
/// ```
pub const MM_PER_INCH: f64 = 25.4;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// N scale model railroading ratio (1:160).
pub const N_SCALE_RATIO: f64 = 160.0;

/// HO scale model railroading ratio (1:87).
pub const HO_SCALE_RATIO: f64 = 87.0;

// =============================================================================
// RENDER CONFIG
// =============================================================================

/// Immutable snapshot of the serializer settings.
///
/// # Examples
/// ```
/// use config::constants::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.indent, 4);
/// assert!(config.header.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Fixed decimal places for numbers; `None` prints the shortest
    /// representation that round-trips exactly.
    pub decimal_places: Option<usize>,
    /// Optional comment emitted at the top of the file, one `//` line per
    /// line of text.
    pub header: Option<String>,
}

impl RenderConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// indent width.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RenderConfig;
    /// let cfg = RenderConfig::new(2).expect("valid config");
    /// assert_eq!(cfg.indent, 2);
    /// assert!(RenderConfig::new(64).is_err());
    /// ```
    pub fn new(indent: usize) -> Result<Self, ConfigError> {
        if indent > MAX_INDENT {
            return Err(ConfigError::InvalidIndent(indent));
        }
        Ok(Self {
            indent,
            ..Self::default()
        })
    }

    /// Switches to fixed-precision numbers.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RenderConfig;
    /// let cfg = RenderConfig::default().with_decimal_places(8).expect("valid");
    /// assert_eq!(cfg.decimal_places, Some(8));
    /// assert!(RenderConfig::default().with_decimal_places(2).is_err());
    /// ```
    pub fn with_decimal_places(mut self, places: usize) -> Result<Self, ConfigError> {
        if places < MIN_DECIMAL_PLACES {
            return Err(ConfigError::InsufficientPrecision(places));
        }
        self.decimal_places = Some(places);
        Ok(self)
    }

    /// Attaches a header comment.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            decimal_places: None,
            header: None,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the indent is wider than [`MAX_INDENT`].
    InvalidIndent(usize),
    /// Raised when fixed precision would drop below [`MIN_DECIMAL_PLACES`].
    InsufficientPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIndent(value) => {
                write!(f, "indent must be <= {MAX_INDENT}: {value}")
            }
            ConfigError::InsufficientPrecision(value) => {
                write!(f, "decimal_places must be >= {MIN_DECIMAL_PLACES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
