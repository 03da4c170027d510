/// Opaque product identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Unit price of a product.
///
/// Values that cannot be read as a finite, non-negative number stay
/// `Unknown` so bad data shows up as such instead of as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Known(f64),
    Unknown,
}

impl Price {
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Price::Known(value)
        } else {
            Price::Unknown
        }
    }

    pub fn from_text(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::from_number)
            .unwrap_or(Price::Unknown)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Known(value) => Some(*value),
            Price::Unknown => None,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Known(value) => write!(f, "{:.2}", value),
            Price::Unknown => write!(f, "N/A"),
        }
    }
}

/// Units in stock. Same unknown handling as [`Price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Known(u64),
    Unknown,
}

impl Quantity {
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
            Quantity::Known(value as u64)
        } else {
            Quantity::Unknown
        }
    }

    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Quantity::Known(value);
        }
        trimmed
            .parse::<f64>()
            .map(Self::from_number)
            .unwrap_or(Quantity::Unknown)
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            Quantity::Known(value) => Some(*value),
            Quantity::Unknown => None,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Known(value) => write!(f, "{}", value),
            Quantity::Unknown => write!(f, "N/A"),
        }
    }
}
