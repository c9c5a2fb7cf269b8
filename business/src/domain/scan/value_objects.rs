use super::errors::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Scan resolution in dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dpi(u32);

impl Dpi {
    pub const DEFAULT: Dpi = Dpi(300);

    pub fn new(value: u32) -> Result<Self, ScanError> {
        if value == 0 {
            return Err(ScanError::InvalidDpi(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Dpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Dpi {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ScanError::InvalidDpi(s.to_string()))?;
        Self::new(value)
    }
}

/// ISO paper sizes known by name, in pixels at 300 dpi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedSize {
    A4,
    A5,
    A6,
}

impl NamedSize {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            NamedSize::A4 => (2480, 3508),
            NamedSize::A5 => (1748, 2480),
            NamedSize::A6 => (1240, 1748),
        }
    }
}

/// Requested scan area: a named paper size or an explicit `WxH` pixel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    Named(NamedSize),
    Custom { width: u32, height: u32 },
}

impl PaperSize {
    pub const DEFAULT: PaperSize = PaperSize::Custom {
        width: 2550,
        height: 3508,
    };

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PaperSize::Named(named) => named.dimensions(),
            PaperSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl std::str::FromStr for PaperSize {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "a4" => return Ok(PaperSize::Named(NamedSize::A4)),
            "a5" => return Ok(PaperSize::Named(NamedSize::A5)),
            "a6" => return Ok(PaperSize::Named(NamedSize::A6)),
            _ => {}
        }

        let invalid = || ScanError::InvalidSize(s.to_string());
        let (width, height) = trimmed.split_once('x').ok_or_else(invalid)?;
        let width = width.parse::<u32>().map_err(|_| invalid())?;
        let height = height.parse::<u32>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(PaperSize::Custom { width, height })
    }
}
