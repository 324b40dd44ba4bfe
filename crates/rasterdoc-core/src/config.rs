use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical page dimensions in millimetres.
/// The engine is format-agnostic: any positive, finite pair is accepted;
/// `Default` is A4 portrait.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PageFormat {
    /// Page width in millimetres.
    pub width_mm: f64,
    /// Page height in millimetres.
    pub height_mm: f64,
}

impl PageFormat {
    /// A4 portrait, 210 x 297 mm.
    pub const A4: PageFormat = PageFormat {
        width_mm: 210.0,
        height_mm: 297.0,
    };
    /// A3 portrait, 297 x 420 mm.
    pub const A3: PageFormat = PageFormat {
        width_mm: 297.0,
        height_mm: 420.0,
    };
    /// A5 portrait, 148 x 210 mm.
    pub const A5: PageFormat = PageFormat {
        width_mm: 148.0,
        height_mm: 210.0,
    };
    /// US Letter, 215.9 x 279.4 mm.
    pub const LETTER: PageFormat = PageFormat {
        width_mm: 215.9,
        height_mm: 279.4,
    };
    /// US Legal, 215.9 x 355.6 mm.
    pub const LEGAL: PageFormat = PageFormat {
        width_mm: 215.9,
        height_mm: 355.6,
    };

    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Validates the format dimensions.
    ///
    /// Returns `InvalidFormat` if either dimension is non-positive or
    /// non-finite; pagination never runs against a degenerate page.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::RasterDocError;

        if !self.width_mm.is_finite()
            || !self.height_mm.is_finite()
            || self.width_mm <= 0.0
            || self.height_mm <= 0.0
        {
            return Err(RasterDocError::InvalidFormat {
                width_mm: self.width_mm,
                height_mm: self.height_mm,
            });
        }
        Ok(())
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

impl FromStr for PageFormat {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "a3" => Ok(Self::A3),
            "a5" => Ok(Self::A5),
            "letter" => Ok(Self::LETTER),
            "legal" => Ok(Self::LEGAL),
            _ => Err(()),
        }
    }
}
